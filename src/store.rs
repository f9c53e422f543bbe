use std::collections::{HashMap, HashSet};
use std::ops::{Index};
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{trace};

use super::model::{Name, SortName, Value};
use super::signature::{ConstName};
use super::term::{Kind, Term};
use super::computation::{Size};

/// The dense index of a [`StoredTerm`] in a [`TermStore`].
pub type Id = usize;

/// Distinguishes one [`TermStore`] from every other in the process.
pub(crate) type StoreKey = u64;

fn fresh_key() -> StoreKey {
    static NEXT: AtomicU64 = AtomicU64::new(0);
    NEXT.fetch_add(1, Ordering::Relaxed)
}

/// The interned shape of one subterm; its arguments are already stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoredTerm {
    Var(Name),
    Native(Value, SortName),
    App(ConstName, Box<[Id]>),
}

impl StoredTerm {
    /// The `Id`s of the arguments, which is empty unless `self` is an `App`.
    pub fn args(&self) -> &[Id] {
        if let Self::App(_, args) = self { args } else { &[] }
    }
}

/// A hash-consing store of [`Term`]s.
///
/// Structurally identical subterms are stored once, so a `TermStore` holds
/// a DAG. Every `App` only mentions `Id`s smaller than its own. Nothing is
/// ever removed.
#[derive(Debug)]
pub struct TermStore {
    key: StoreKey,

    /// Indexed by `Id`.
    terms: Vec<StoredTerm>,

    /// The inverse of `terms`.
    ids: HashMap<StoredTerm, Id>,
}

impl Default for TermStore {
    fn default() -> Self { Self::new() }
}

impl TermStore {
    pub fn new() -> Self {
        Self {key: fresh_key(), terms: Vec::new(), ids: HashMap::new()}
    }

    /// The number of distinct subterms stored so far.
    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    /// Returns the `Id` of `stored`, if it has been stored.
    pub fn id_of(&self, stored: &StoredTerm) -> Option<Id> { self.ids.get(stored).copied() }

    /// Iterate through the stored terms in `Id` order.
    pub fn iter(&self) -> impl Iterator<Item=(Id, &StoredTerm)> { self.terms.iter().enumerate() }

    /// Store `stored` if it is new, and return its `Id`.
    ///
    /// Panics if `stored` mentions an `Id` that does not exist yet.
    pub fn intern(&mut self, stored: StoredTerm) -> Id {
        if let Some(&id) = self.ids.get(&stored) { return id; }
        let id = self.terms.len();
        assert!(
            stored.args().iter().all(|&arg| arg < id),
            "Stored term mentions an unknown id",
        );
        trace!(id, ?stored, "interned");
        self.terms.push(stored.clone());
        self.ids.insert(stored, id);
        id
    }

    /// Store `term` and all its subterms, returning the `Id` of `term`.
    pub fn store(&mut self, term: &Term) -> Id {
        if let Some(id) = term.stored_id(self.key) { return id; }
        let stored = match term.kind() {
            Kind::Var(name) => StoredTerm::Var(name.clone()),
            Kind::Native(value, sort) => StoredTerm::Native(value.clone(), sort.clone()),
            Kind::App(constant, args) => StoredTerm::App(
                constant.clone(),
                args.iter().map(|arg| self.store(arg)).collect(),
            ),
        };
        let id = self.intern(stored);
        term.set_stored_id(self.key, id);
        id
    }

    /// Rebuild the [`Term`] with `Id` `id`.
    ///
    /// Repeated `Id`s become shared nodes.
    pub fn term(&self, id: Id) -> Term {
        fn rebuild(store: &TermStore, memo: &mut HashMap<Id, Term>, id: Id) -> Term {
            if let Some(term) = memo.get(&id) { return term.clone(); }
            let term = match &store[id] {
                StoredTerm::Var(name) => Term::var(name.clone()),
                StoredTerm::Native(value, sort) => Term::native(value.clone(), sort.clone()),
                StoredTerm::App(constant, args) => {
                    let args: Vec<Term> = args.iter().map(|&arg| rebuild(store, memo, arg)).collect();
                    Term::app(constant.clone(), args)
                },
            };
            term.set_stored_id(store.key, id);
            memo.insert(id, term.clone());
            term
        }
        rebuild(self, &mut HashMap::new(), id)
    }

    /// The number of nodes of the tree with `Id` `id`, counting every
    /// occurrence of a shared subterm.
    ///
    /// Saturates at `u64::MAX`.
    pub fn size(&self, id: Id) -> u64 { self.compute(&Size, id) }

    /// The number of distinct subterms reachable from `id`, including `id`.
    pub fn stored_size(&self, id: Id) -> usize {
        let mut visited = HashSet::new();
        let mut todo = vec![id];
        while let Some(id) = todo.pop() {
            if visited.insert(id) {
                todo.extend(self[id].args().iter().copied());
            }
        }
        visited.len()
    }
}

impl Index<Id> for TermStore {
    type Output = StoredTerm;

    fn index(&self, id: Id) -> &Self::Output { &self.terms[id] }
}

// ----------------------------------------------------------------------------
