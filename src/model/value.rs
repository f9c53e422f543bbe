use std::{fmt};
use std::rc::{Rc};

use super::{Name};

/// A native value, i.e. the meaning of a term.
///
/// Every sort chooses which `Value`s inhabit it; see [`Sort::is_valid()`].
///
/// [`Sort::is_valid()`]: crate::Sort::is_valid
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    /// The only inhabitant of `UNIT`.
    Unit,

    /// A `BOOL`.
    Bool(bool),

    /// An `INT`.
    Int(i64),

    /// A `CHAR`.
    Char(char),

    /// A case of an enumeration.
    Tag(Name),

    /// Something represented as multiple `Value`s, e.g. an array or record.
    Slice(Rc<[Value]>),

    /// An inhabitant of an `OPTIONAL` sort.
    Optional(Option<Rc<Value>>),
}

impl Value {
    /// Assert that `self` is a `Bool`.
    pub fn bool(&self) -> bool {
        let Self::Bool(ret) = self else { panic!("{:?} is not a bool", self); };
        *ret
    }

    /// Assert that `self` is an `Int`.
    pub fn int(&self) -> i64 {
        let Self::Int(ret) = self else { panic!("{:?} is not an int", self); };
        *ret
    }

    /// Assert that `self` is a `Char`.
    pub fn char(&self) -> char {
        let Self::Char(ret) = self else { panic!("{:?} is not a char", self); };
        *ret
    }

    /// Assert that `self` is a `Tag`.
    pub fn tag(&self) -> &Name {
        let Self::Tag(ret) = self else { panic!("{:?} is not a tag", self); };
        ret
    }

    /// Assert that `self` is a `[Value]`.
    pub fn slice(&self) -> &Rc<[Value]> {
        let Self::Slice(ret) = self else { panic!("{:?} is not a slice", self); };
        ret
    }

    /// Assert that `self` is an `Optional`.
    pub fn optional(&self) -> Option<&Value> {
        let Self::Optional(ret) = self else { panic!("{:?} is not an optional", self); };
        ret.as_deref()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Unit => f.write_str("()"),
            Self::Bool(b) => fmt::Debug::fmt(b, f),
            Self::Int(i) => fmt::Debug::fmt(i, f),
            Self::Char(c) => fmt::Debug::fmt(c, f),
            Self::Tag(tag) => f.write_str(tag),
            Self::Slice(values) => fmt::Debug::fmt(values, f),
            Self::Optional(None) => f.write_str("none"),
            Self::Optional(Some(value)) => write!(f, "some({:?})", value),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Debug::fmt(self, f) }
}

impl From<()> for Value { fn from(_: ()) -> Self { Self::Unit } }
impl From<bool> for Value { fn from(v: bool) -> Self { Self::Bool(v) } }
impl From<i64> for Value { fn from(v: i64) -> Self { Self::Int(v) } }
impl From<char> for Value { fn from(v: char) -> Self { Self::Char(v) } }

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self { Self::Slice(values.into()) }
}

impl<const N: usize> From<[Value; N]> for Value {
    fn from(fields: [Value; N]) -> Self { Self::Slice(Rc::new(fields)) }
}

impl From<Option<Value>> for Value {
    fn from(value: Option<Value>) -> Self { Self::Optional(value.map(Rc::new)) }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        assert_eq!(Value::from(7i64).int(), 7);
        assert!(Value::from(true).bool());
        assert_eq!(Value::from('x').char(), 'x');
        assert_eq!(Value::from([Value::Int(1), Value::Unit]).slice().len(), 2);
        assert_eq!(Value::from(Some(Value::Int(3))).optional(), Some(&Value::Int(3)));
        assert_eq!(Value::from(None::<Value>).optional(), None);
    }

    #[test]
    #[should_panic(expected = "is not an int")]
    fn wrong_variant() {
        Value::from(false).int();
    }

    #[test]
    fn display() {
        let v = Value::from([Value::Int(1), Value::from(Some(Value::Char('a')))]);
        assert_eq!(v.to_string(), "[1, some('a')]");
    }
}
