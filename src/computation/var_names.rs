use std::collections::{BTreeSet};

use super::{Computation, Results};
use crate::model::{Name, SortName, Value};
use crate::signature::{ConstName};

/// Collects the names of all variables.
pub struct VarNames;

impl Computation for VarNames {
    type Output = BTreeSet<Name>;

    fn on_var(&self, name: &Name) -> Self::Output { BTreeSet::from([name.clone()]) }

    fn on_native(&self, _: &Value, _: &SortName) -> Self::Output { BTreeSet::new() }

    fn on_app(&self, _: &ConstName, count: usize, args: &mut Results<'_, Self::Output>) -> Self::Output {
        let mut names = BTreeSet::new();
        for i in 0..count { names.extend(args(i)); }
        names
    }
}
