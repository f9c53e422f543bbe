use super::{Computation, Results};
use crate::model::{Name, SortName, Value};
use crate::signature::{ConstName};

/// Counts nodes, counting a shared subterm once per occurrence.
///
/// Over a [`TermStore`] this takes time linear in the number of distinct
/// subterms, even though the result may be exponentially larger.
///
/// [`TermStore`]: crate::TermStore
pub struct Size;

impl Computation for Size {
    type Output = u64;

    fn on_var(&self, _: &Name) -> u64 { 1 }

    fn on_native(&self, _: &Value, _: &SortName) -> u64 { 1 }

    fn on_app(&self, _: &ConstName, count: usize, args: &mut Results<'_, u64>) -> u64 {
        (0..count).map(args).fold(1, u64::saturating_add)
    }
}
