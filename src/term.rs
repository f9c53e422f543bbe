use std::{fmt};
use std::cell::{Cell};
use std::collections::{HashSet};
use std::rc::{Rc};

use super::model::{Name, SortName, Value};
use super::signature::{ConstName};
use super::store::{Id, StoreKey};
use super::computation::{Render};

/// The three shapes of [`Term`].
#[derive(Debug, PartialEq, Eq)]
pub enum Kind {
    /// A named hole. Its sort and value are supplied by an environment.
    Var(Name),

    /// An embedded value, claimed to inhabit the sort.
    Native(Value, SortName),

    /// A use of one operation.
    App(ConstName, Box<[Term]>),
}

struct Node {
    kind: Kind,

    /// The `Id` this node was last given, and by which store.
    stored: Cell<Option<(StoreKey, Id)>>,
}

/// An immutable expression tree.
///
/// Cloning a `Term` is cheap and shares the node, so a `Term` may be built
/// as a DAG. Equality is structural.
#[derive(Clone)]
pub struct Term(Rc<Node>);

impl Term {
    fn new(kind: Kind) -> Self {
        Self(Rc::new(Node {kind, stored: Cell::new(None)}))
    }

    pub fn var(name: impl Into<Name>) -> Self { Self::new(Kind::Var(name.into())) }

    pub fn native(value: impl Into<Value>, sort: impl Into<SortName>) -> Self {
        Self::new(Kind::Native(value.into(), sort.into()))
    }

    pub fn app(constant: ConstName, args: impl IntoIterator<Item=Term>) -> Self {
        Self::new(Kind::App(constant, args.into_iter().collect()))
    }

    pub fn kind(&self) -> &Kind { &self.0.kind }

    /// The subterms, which is empty unless `self` is an application.
    pub fn args(&self) -> &[Term] {
        if let Kind::App(_, args) = self.kind() { args } else { &[] }
    }

    /// Returns `true` if `self` and `other` are the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool { Rc::ptr_eq(&self.0, &other.0) }

    /// The `Id` given to `self` by the store identified by `key`, if known.
    pub(crate) fn stored_id(&self, key: StoreKey) -> Option<Id> {
        match self.0.stored.get() {
            Some((k, id)) if k == key => Some(id),
            _ => None,
        }
    }

    /// Record the `Id` given to `self` by the store identified by `key`.
    pub(crate) fn set_stored_id(&self, key: StoreKey, id: Id) {
        if let Some(old) = self.stored_id(key) {
            assert_eq!(old, id, "Term was given two different ids by one store");
        }
        self.0.stored.set(Some((key, id)));
    }
}

impl PartialEq for Term {
    /// Structural equality. Each pair of nodes is compared at most once, so
    /// independently built DAGs compare in time linear in their size.
    fn eq(&self, other: &Self) -> bool {
        fn eq(a: &Term, b: &Term, equal: &mut HashSet<(*const Node, *const Node)>) -> bool {
            if a.ptr_eq(b) { return true; }
            let pair = (Rc::as_ptr(&a.0), Rc::as_ptr(&b.0));
            if equal.contains(&pair) { return true; }
            let ret = match (a.kind(), b.kind()) {
                (Kind::Var(x), Kind::Var(y)) => x == y,
                (Kind::Native(v, s), Kind::Native(w, t)) => v == w && s == t,
                (Kind::App(c, xs), Kind::App(d, ys)) => {
                    c == d && xs.len() == ys.len() &&
                    xs.iter().zip(ys.iter()).all(|(x, y)| eq(x, y, equal))
                },
                _ => false,
            };
            if ret { equal.insert(pair); }
            ret
        }
        eq(self, other, &mut HashSet::new())
    }
}

impl Eq for Term {}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.compute(&Render))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Debug::fmt(self, f) }
}

// ----------------------------------------------------------------------------
