//! Recoverable errors.
//!
//! Programming errors, such as evaluating a term that has not been checked,
//! panic instead.

use thiserror::Error;

use crate::model::{Name, SortName};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("variable `{0}` is unbound")]
    Unbound(Name),

    #[error("term is ill-typed: {term}")]
    IllTyped { term: String },

    #[error("sort {0} is not registered")]
    UnknownSort(SortName),

    #[error("sort {0} has no default value")]
    NoDefault(SortName),
}
