//! A single recursion scheme for every analysis of [`Term`]s.
//!
//! A [`Computation`] says what to do at each of the three shapes of term.
//! It can then be run over a [`Term`] tree, or over a [`TermStore`] where it
//! is memoised by [`Id`], so that shared subterms are computed only once.

use std::collections::{HashMap};

use super::model::{Name, SortName, Value};
use super::signature::{ConstName};
use super::term::{Kind, Term};
use super::store::{Id, StoredTerm, TermStore};

/// Lazily computes the result for argument `i` of an application.
pub type Results<'a, R> = dyn FnMut(usize) -> R + 'a;

/// A fold over terms, with result type `Output`.
pub trait Computation {
    type Output: Clone;

    fn on_var(&self, name: &Name) -> Self::Output;

    fn on_native(&self, value: &Value, sort: &SortName) -> Self::Output;

    /// `args(i)` returns the result for argument `i`, computing it if
    /// necessary. Arguments that are never asked for are never computed.
    fn on_app(
        &self,
        constant: &ConstName,
        count: usize,
        args: &mut Results<'_, Self::Output>,
    ) -> Self::Output;
}

impl Term {
    /// Run `computation` over `self`.
    ///
    /// Each argument position is computed at most once. Shared nodes are
    /// recomputed at each position; use a [`TermStore`] to avoid that.
    pub fn compute<C: Computation>(&self, computation: &C) -> C::Output {
        match self.kind() {
            Kind::Var(name) => computation.on_var(name),
            Kind::Native(value, sort) => computation.on_native(value, sort),
            Kind::App(constant, args) => {
                let mut results: Vec<Option<C::Output>> = vec![None; args.len()];
                computation.on_app(constant, args.len(), &mut |i| {
                    results[i].get_or_insert_with(|| args[i].compute(computation)).clone()
                })
            },
        }
    }
}

// ----------------------------------------------------------------------------

/// The results of a [`Computation`] over a [`TermStore`], indexed by [`Id`].
#[derive(Debug, Clone)]
pub struct Memo<R>(HashMap<Id, R>);

impl<R> Default for Memo<R> {
    fn default() -> Self { Self(HashMap::new()) }
}

impl<R> Memo<R> {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, id: Id) -> Option<&R> { self.0.get(&id) }

    /// The number of `Id`s computed so far.
    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl TermStore {
    /// Run `computation` over the term with `Id` `id`.
    pub fn compute<C: Computation>(&self, computation: &C, id: Id) -> C::Output {
        self.compute_with(computation, &mut Memo::new(), id)
    }

    /// Run `computation` over the term with `Id` `id`, reusing and
    /// extending `memo`.
    ///
    /// `memo` must only be used with one `computation` and one store.
    pub fn compute_with<C: Computation>(
        &self,
        computation: &C,
        memo: &mut Memo<C::Output>,
        id: Id,
    ) -> C::Output {
        if let Some(result) = memo.get(id) { return result.clone(); }
        let result = match &self[id] {
            StoredTerm::Var(name) => computation.on_var(name),
            StoredTerm::Native(value, sort) => computation.on_native(value, sort),
            StoredTerm::App(constant, args) => {
                computation.on_app(constant, args.len(), &mut |i| {
                    self.compute_with(computation, memo, args[i])
                })
            },
        };
        memo.0.insert(id, result.clone());
        result
    }

    /// Run `computation` over every stored term, in `Id` order.
    ///
    /// Every argument is computed, even if `computation` does not ask for
    /// it, so this is only suitable for total computations.
    pub fn compute_all<C: Computation>(&self, computation: &C) -> Vec<C::Output> {
        let mut results: Vec<C::Output> = Vec::with_capacity(self.len());
        for (_, stored) in self.iter() {
            let result = match stored {
                StoredTerm::Var(name) => computation.on_var(name),
                StoredTerm::Native(value, sort) => computation.on_native(value, sort),
                StoredTerm::App(constant, args) => {
                    computation.on_app(constant, args.len(), &mut |i| results[args[i]].clone())
                },
            };
            results.push(result);
        }
        results
    }
}

// ----------------------------------------------------------------------------

mod eval;
pub use eval::{Eval};

mod sort_of;
pub use sort_of::{SortOf};

mod substitution;
pub use substitution::{Substitution};

mod var_names;
pub use var_names::{VarNames};

mod size;
pub use size::{Size};

mod render;
pub use render::{Render};

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::cell::{Cell};

    use super::*;

    /// Counts how many times `on_app` is called.
    #[derive(Default)]
    struct Calls(Cell<usize>);

    impl Computation for Calls {
        type Output = ();

        fn on_var(&self, _: &Name) {}

        fn on_native(&self, _: &Value, _: &SortName) {}

        fn on_app(&self, _: &ConstName, count: usize, args: &mut Results<'_, ()>) {
            self.0.set(self.0.get() + 1);
            for i in 0..count { args(i); args(i); }
        }
    }

    fn doubled(n: usize) -> Term {
        let plus = ConstName::new("INT".into(), Some("plus".into()), 1);
        let mut y = Term::native(1i64, "INT");
        for _ in 0..n { y = Term::app(plus.clone(), [y.clone(), y]); }
        y
    }

    #[test]
    fn tree_form_computes_every_position() {
        let calls = Calls::default();
        doubled(5).compute(&calls);
        assert_eq!(calls.0.get(), 31);
    }

    #[test]
    fn stored_form_computes_every_id_once() {
        let mut store = TermStore::new();
        let id = store.store(&doubled(5));
        let calls = Calls::default();
        store.compute(&calls, id);
        assert_eq!(calls.0.get(), 5);
    }

    #[test]
    fn memo_is_reused() {
        let mut store = TermStore::new();
        let small = store.store(&doubled(3));
        let big = store.store(&doubled(6));
        let calls = Calls::default();
        let mut memo = Memo::new();
        store.compute_with(&calls, &mut memo, small);
        assert_eq!(calls.0.get(), 3);
        store.compute_with(&calls, &mut memo, big);
        assert_eq!(calls.0.get(), 6);
        assert_eq!(memo.len(), 7);
    }

    #[test]
    fn compute_all_agrees_with_compute() {
        let mut store = TermStore::new();
        let id = store.store(&doubled(4));
        let sizes = store.compute_all(&Size);
        assert_eq!(sizes.len(), store.len());
        assert_eq!(sizes[id], store.size(id));
        assert_eq!(sizes[id], 31);
    }
}
