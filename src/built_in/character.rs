use super::{BuiltIn, Row, constant_of, boolean};
use crate::model::{Value};
use crate::signature::{ConstName};
use crate::term::{Term};

pub const SORTNAME: &str = "CHAR";

const CHAR: Option<&str> = Some(SORTNAME);
const BOOL: Option<&str> = Some(boolean::SORTNAME);

const OPERATIONS: [Row; 4] = [
    ("less", &[CHAR, CHAR], BOOL, |args| (args(0).char() < args(1).char()).into()),
    ("leq", &[CHAR, CHAR], BOOL, |args| (args(0).char() <= args(1).char()).into()),
    ("min", &[CHAR, CHAR], CHAR, |args| args(0).char().min(args(1).char()).into()),
    ("max", &[CHAR, CHAR], CHAR, |args| args(0).char().max(args(1).char()).into()),
];

/// Constructs the operation table for sort `CHAR`.
pub fn compile_character() -> BuiltIn {
    BuiltIn::compile(SORTNAME, &OPERATIONS, |v| matches!(v, Value::Char(_)), Some(|| Value::Char(' ')))
}

pub fn constant(op: &str) -> ConstName { constant_of(SORTNAME, &OPERATIONS, op) }

fn app<const N: usize>(op: &str, args: [Term; N]) -> Term { Term::app(constant(op), args) }

pub fn lit(c: char) -> Term { Term::native(c, SORTNAME) }

pub fn less(x: Term, y: Term) -> Term { app("less", [x, y]) }
pub fn leq(x: Term, y: Term) -> Term { app("leq", [x, y]) }
pub fn min(x: Term, y: Term) -> Term { app("min", [x, y]) }
pub fn max(x: Term, y: Term) -> Term { app("max", [x, y]) }

// ----------------------------------------------------------------------------
