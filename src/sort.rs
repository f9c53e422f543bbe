use std::{fmt};

use super::model::{SortName, Value};
use super::signature::{ConstName, Constants};

/// Lazily computes the native value of argument `i` of an application.
///
/// Each argument is computed at most once, and only if asked for.
pub type Args<'a> = dyn FnMut(usize) -> Value + 'a;

/// Collects `count` arguments from `args`, in order.
pub fn unpack(count: usize, args: &mut Args<'_>) -> Vec<Value> {
    (0..count).map(args).collect()
}

/// The identity and semantics of one data category.
///
/// A `Language` consults its sorts to type-check native leaves and to
/// evaluate applications.
pub trait Sort: fmt::Debug + Send + Sync {
    /// The name of this sort. Must not change.
    fn sortname(&self) -> &SortName;

    /// Every operation owned by this sort, with its [`Signature`].
    ///
    /// [`Signature`]: crate::Signature
    fn constants(&self) -> &Constants;

    /// Returns `true` if `value` inhabits this sort.
    fn is_valid(&self, value: &Value) -> bool;

    /// Apply `constant` to `count` arguments.
    ///
    /// Panics if `constant` is not owned by this sort, or if an argument
    /// has the wrong native type.
    fn eval(&self, constant: &ConstName, count: usize, args: &mut Args<'_>) -> Value;

    /// A value that inhabits this sort, if the sort has one.
    fn default_value(&self) -> Option<Value> { None }
}

/// Panics. Call this from [`Sort::eval()`] for an unknown constant.
pub fn no_such_constant(sort: &dyn Sort, constant: &ConstName, count: usize) -> ! {
    panic!(
        "Sort {} cannot evaluate call to {} ({} arguments)",
        sort.sortname(), constant, count,
    )
}
