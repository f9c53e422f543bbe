use std::sync::{Arc};

/// Represents a name: of a variable, a constant, a field or a case.
///
/// Names are shared between threads because [`Sort`]s are.
///
/// [`Sort`]: crate::Sort
pub type Name = Arc<str>;

/// Identifies a sort, e.g. `INT` or `ARRAY<BOOL>`.
///
/// Two sorts with the same `SortName` are the same sort.
pub type SortName = Arc<str>;

// ----------------------------------------------------------------------------

mod value;
pub use value::{Value};
