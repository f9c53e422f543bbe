pub mod model;
pub use model::{Name, SortName, Value};

mod signature;
pub use signature::{ConstName, Slot, Signature, Constants, SortBuilder};

mod sort;
pub use sort::{Args, Sort, unpack, no_such_constant};

mod registry;
pub use registry::{SortRegistry};

mod language;
pub use language::{Language, SortEnv, ValueEnv};

mod term;
pub use term::{Term, Kind};

mod store;
pub use store::{Id, StoredTerm, TermStore};

pub mod computation;
pub use computation::{Computation, Results, Memo};

pub mod built_in;
pub use built_in::{BuiltIn};

pub mod derived;
pub use derived::{Array, Optional, Record, RecordBuilder, Enumeration};

pub mod error;
pub use error::{Error, Result};

// ----------------------------------------------------------------------------
