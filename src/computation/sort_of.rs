use super::{Computation, Results};
use crate::model::{Name, SortName, Value};
use crate::signature::{ConstName, Slot};
use crate::language::{Language};

/// Computes the sort of a term, or `None` if it is ill-typed.
///
/// Within one application, every [`Slot::Poly`] argument must have the same
/// sort, which is also the result sort if the result is `Poly`. Never
/// panics.
pub struct SortOf<'a> {
    pub language: &'a Language,
    pub env: &'a dyn Fn(&Name) -> Option<SortName>,
}

impl<'a> Computation for SortOf<'a> {
    type Output = Option<SortName>;

    fn on_var(&self, name: &Name) -> Option<SortName> { (self.env)(name) }

    fn on_native(&self, value: &Value, sort: &SortName) -> Option<SortName> {
        let s = self.language.sort(sort)?;
        if s.is_valid(value) { Some(sort.clone()) } else { None }
    }

    fn on_app(
        &self,
        constant: &ConstName,
        count: usize,
        args: &mut Results<'_, Option<SortName>>,
    ) -> Option<SortName> {
        let signature = self.language.signature(constant)?;
        if signature.arity() != count { return None; }
        let mut poly: Option<SortName> = None;
        for (i, slot) in signature.args.iter().enumerate() {
            let sort = args(i)?;
            match slot {
                Slot::Mono(expected) => if sort != *expected { return None; },
                Slot::Poly => {
                    // The first `Poly` argument fixes the binding.
                    let bound = poly.get_or_insert_with(|| sort.clone());
                    if sort != *bound { return None; }
                },
            }
        }
        match &signature.result {
            Slot::Mono(result) => Some(result.clone()),
            Slot::Poly => poly,
        }
    }
}
