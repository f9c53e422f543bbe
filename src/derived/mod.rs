//! Sorts built generically from other sorts.

use super::signature::{ConstName, Constants};

/// Returns the constant of `constants` whose display name is `op`.
///
/// Panics if there is none.
fn constant_named(constants: &Constants, op: &str) -> ConstName {
    constants.keys()
        .find(|c| c.name.as_deref() == Some(op))
        .cloned()
        .unwrap_or_else(|| panic!("No operation {}", op))
}

// ----------------------------------------------------------------------------

mod array;
pub use array::{Array};

mod optional;
pub use optional::{Optional};

mod record;
pub use record::{Record, RecordBuilder};

mod enumeration;
pub use enumeration::{Enumeration};
