use super::{Computation, Results};
use crate::model::{Name, SortName, Value};
use crate::signature::{ConstName};
use crate::language::{Language};

/// Computes the native value of a term.
///
/// Assumes the term has passed [`Language::check()`]. Panics on an unbound
/// variable or an unregistered sort.
pub struct Eval<'a> {
    pub language: &'a Language,
    pub env: &'a dyn Fn(&Name) -> Option<Value>,
}

impl<'a> Computation for Eval<'a> {
    type Output = Value;

    fn on_var(&self, name: &Name) -> Value {
        (self.env)(name).unwrap_or_else(|| panic!("Variable `{}` is unbound", name))
    }

    fn on_native(&self, value: &Value, _: &SortName) -> Value { value.clone() }

    fn on_app(&self, constant: &ConstName, count: usize, args: &mut Results<'_, Value>) -> Value {
        let sort = self.language.sort(&constant.sort)
            .unwrap_or_else(|| panic!("Sort {} is not registered", constant.sort));
        sort.eval(constant, count, args)
    }
}
