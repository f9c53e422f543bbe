use super::{Computation, Results};
use crate::model::{Name, SortName, Value};
use crate::signature::{ConstName};
use crate::term::{Term};

/// Replaces variables by terms.
///
/// Variables for which `replace` returns `None` are left alone.
pub struct Substitution<'a> {
    pub replace: &'a dyn Fn(&Name) -> Option<Term>,
}

impl<'a> Computation for Substitution<'a> {
    type Output = Term;

    fn on_var(&self, name: &Name) -> Term {
        (self.replace)(name).unwrap_or_else(|| Term::var(name.clone()))
    }

    fn on_native(&self, value: &Value, sort: &SortName) -> Term {
        Term::native(value.clone(), sort.clone())
    }

    fn on_app(&self, constant: &ConstName, count: usize, args: &mut Results<'_, Term>) -> Term {
        let args: Vec<Term> = (0..count).map(args).collect();
        Term::app(constant.clone(), args)
    }
}
