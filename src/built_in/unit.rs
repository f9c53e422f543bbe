use super::{BuiltIn, Row, constant_of};
use crate::model::{Value};
use crate::signature::{ConstName};
use crate::term::{Term};

pub const SORTNAME: &str = "UNIT";

const UNIT: Option<&str> = Some(SORTNAME);

const OPERATIONS: [Row; 1] = [
    ("unit", &[], UNIT, |_| Value::Unit),
];

/// Constructs the operation table for sort `UNIT`.
pub fn compile_unit() -> BuiltIn {
    BuiltIn::compile(SORTNAME, &OPERATIONS, |v| matches!(v, Value::Unit), Some(|| Value::Unit))
}

pub fn constant(op: &str) -> ConstName { constant_of(SORTNAME, &OPERATIONS, op) }

pub fn unit() -> Term { Term::app(constant("unit"), []) }
