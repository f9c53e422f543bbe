use std::{fmt};
use std::hash::{Hash, Hasher};

use indexmap::{IndexMap};

use super::model::{Name, SortName};

/// Identifies an operation owned by exactly one sort.
///
/// The `code` is dense within the owning sort, and is assigned in
/// registration order. Two `ConstName`s are equal if their `sort` and `code`
/// are equal; the `name` is for display only.
#[derive(Clone)]
pub struct ConstName {
    pub sort: SortName,
    pub name: Option<Name>,
    pub code: usize,
}

impl ConstName {
    pub fn new(sort: SortName, name: Option<Name>, code: usize) -> Self {
        Self {sort, name, code}
    }
}

impl PartialEq for ConstName {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.sort == other.sort
    }
}

impl Eq for ConstName {}

impl Hash for ConstName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sort.hash(state);
        self.code.hash(state);
    }
}

impl fmt::Debug for ConstName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}.{}", self.sort, name),
            None => write!(f, "{}.(code={})", self.sort, self.code),
        }
    }
}

impl fmt::Display for ConstName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Debug::fmt(self, f) }
}

// ----------------------------------------------------------------------------

/// One argument or result position of a [`Signature`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Fixed to one sort.
    Mono(SortName),

    /// Resolved by unification at each use.
    Poly,
}

impl Slot {
    /// Returns the fixed sort, if any.
    pub fn sortname(&self) -> Option<&SortName> {
        if let Self::Mono(name) = self { Some(name) } else { None }
    }

    pub fn is_mono(&self) -> bool { matches!(self, Self::Mono(_)) }
}

impl From<&str> for Slot {
    fn from(name: &str) -> Self { Self::Mono(name.into()) }
}

impl From<&SortName> for Slot {
    fn from(name: &SortName) -> Self { Self::Mono(name.clone()) }
}

impl From<Option<&str>> for Slot {
    fn from(name: Option<&str>) -> Self { name.map_or(Self::Poly, Self::from) }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Mono(name) => f.write_str(name),
            Self::Poly => f.write_str("_"),
        }
    }
}

/// The typing rule of a constant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    pub args: Box<[Slot]>,
    pub result: Slot,
}

impl Signature {
    pub fn new(args: impl IntoIterator<Item=Slot>, result: Slot) -> Self {
        Self {args: args.into_iter().collect(), result}
    }

    /// The number of arguments.
    pub fn arity(&self) -> usize { self.args.len() }

    /// Returns `true` if some slot is [`Slot::Mono`].
    pub fn is_anchored(&self) -> bool {
        self.result.is_mono() || self.args.iter().any(Slot::is_mono)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("(")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 { f.write_str(", ")?; }
            write!(f, "{}", arg)?;
        }
        write!(f, ") -> {}", self.result)
    }
}

/// The constant table of a sort, in code order.
pub type Constants = IndexMap<ConstName, Signature>;

// ----------------------------------------------------------------------------

/// Accumulates the [`Constants`] of one sort, assigning dense codes.
#[derive(Debug)]
pub struct SortBuilder {
    sortname: SortName,
    constants: Constants,
}

impl SortBuilder {
    pub fn new(sortname: impl Into<SortName>) -> Self {
        Self {sortname: sortname.into(), constants: Constants::new()}
    }

    pub fn sortname(&self) -> &SortName { &self.sortname }

    /// Declare an operation and return its `ConstName`.
    pub fn add(
        &mut self,
        op: &str,
        args: impl IntoIterator<Item=Slot>,
        result: Slot,
    ) -> ConstName {
        let code = self.constants.len();
        let constname = ConstName::new(self.sortname.clone(), Some(op.into()), code);
        let signature = Signature::new(args, result);
        let old = self.constants.insert(constname.clone(), signature);
        assert!(old.is_none(), "Code {} of {} is already in use", code, self.sortname);
        constname
    }

    pub fn build(self) -> Constants { self.constants }
}

// ----------------------------------------------------------------------------
