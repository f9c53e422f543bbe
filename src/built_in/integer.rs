use super::{BuiltIn, Row, constant_of, boolean};
use crate::model::{Value};
use crate::signature::{ConstName};
use crate::term::{Term};

pub const SORTNAME: &str = "INT";

const INT: Option<&str> = Some(SORTNAME);
const BOOL: Option<&str> = Some(boolean::SORTNAME);

const OPERATIONS: [Row; 11] = [
    ("uminus", &[INT], INT, |args| args(0).int().wrapping_neg().into()),
    ("plus", &[INT, INT], INT, |args| args(0).int().wrapping_add(args(1).int()).into()),
    ("minus", &[INT, INT], INT, |args| args(0).int().wrapping_sub(args(1).int()).into()),
    ("mul", &[INT, INT], INT, |args| args(0).int().wrapping_mul(args(1).int()).into()),
    ("div", &[INT, INT], INT, |args| args(0).int().wrapping_div(args(1).int()).into()),
    ("mod", &[INT, INT], INT, |args| args(0).int().wrapping_rem(args(1).int()).into()),
    ("less", &[INT, INT], BOOL, |args| (args(0).int() < args(1).int()).into()),
    ("leq", &[INT, INT], BOOL, |args| (args(0).int() <= args(1).int()).into()),
    ("ifNegative", &[INT, INT], INT, |args| {
        let x = args(0).int();
        if x >= 0 { x.into() } else { args(1) }
    }),
    ("min", &[INT, INT], INT, |args| args(0).int().min(args(1).int()).into()),
    ("max", &[INT, INT], INT, |args| args(0).int().max(args(1).int()).into()),
];

/// Constructs the operation table for sort `INT`.
///
/// Arithmetic wraps. Division by zero panics.
pub fn compile_integer() -> BuiltIn {
    BuiltIn::compile(SORTNAME, &OPERATIONS, |v| matches!(v, Value::Int(_)), Some(|| Value::Int(0)))
}

pub fn constant(op: &str) -> ConstName { constant_of(SORTNAME, &OPERATIONS, op) }

fn app<const N: usize>(op: &str, args: [Term; N]) -> Term { Term::app(constant(op), args) }

pub fn lit(i: i64) -> Term { Term::native(i, SORTNAME) }

pub fn uminus(x: Term) -> Term { app("uminus", [x]) }
pub fn plus(x: Term, y: Term) -> Term { app("plus", [x, y]) }
pub fn minus(x: Term, y: Term) -> Term { app("minus", [x, y]) }
pub fn mul(x: Term, y: Term) -> Term { app("mul", [x, y]) }
pub fn div(x: Term, y: Term) -> Term { app("div", [x, y]) }
pub fn modulo(x: Term, y: Term) -> Term { app("mod", [x, y]) }
pub fn less(x: Term, y: Term) -> Term { app("less", [x, y]) }
pub fn leq(x: Term, y: Term) -> Term { app("leq", [x, y]) }
pub fn greater(x: Term, y: Term) -> Term { less(y, x) }
pub fn geq(x: Term, y: Term) -> Term { leq(y, x) }
pub fn min(x: Term, y: Term) -> Term { app("min", [x, y]) }
pub fn max(x: Term, y: Term) -> Term { app("max", [x, y]) }

/// `x` if it is not negative, otherwise `y`.
pub fn if_negative(x: Term, y: Term) -> Term { app("ifNegative", [x, y]) }

/// `lower <= x && x <= upper`.
pub fn in_range(x: &Term, lower: Term, upper: Term) -> Term {
    boolean::and(leq(lower, x.clone()), leq(x.clone(), upper))
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Language};

    fn eval(t: &Term) -> Value {
        let language = Language::standard();
        assert!(language.is_well_typed(t), "{}", t);
        language.eval_closed(t)
    }

    #[test]
    fn arithmetic() {
        let (x, y) = (123, 27);
        let (tx, ty) = (|| lit(x), || lit(y));
        assert_eq!(eval(&plus(tx(), ty())), Value::Int(x + y));
        assert_eq!(eval(&plus(tx(), lit(1))), Value::Int(x + 1));
        assert_eq!(eval(&minus(tx(), ty())), Value::Int(x - y));
        assert_eq!(eval(&uminus(tx())), Value::Int(-x));
        assert_eq!(eval(&mul(tx(), ty())), Value::Int(x * y));
        assert_eq!(eval(&div(tx(), ty())), Value::Int(x / y));
        assert_eq!(eval(&modulo(tx(), ty())), Value::Int(x % y));
        assert_eq!(eval(&max(tx(), ty())), Value::Int(x));
        assert_eq!(eval(&min(tx(), ty())), Value::Int(y));
        assert_eq!(eval(&plus(lit(i64::MAX), lit(1))), Value::Int(i64::MIN));
    }

    #[test]
    fn comparisons() {
        let (x, y) = (123, 27);
        assert_eq!(eval(&less(lit(x), lit(y))), Value::Bool(false));
        assert_eq!(eval(&leq(lit(x), lit(x))), Value::Bool(true));
        assert_eq!(eval(&greater(lit(x), lit(y))), Value::Bool(true));
        assert_eq!(eval(&geq(lit(y), lit(x))), Value::Bool(false));
        assert_eq!(eval(&boolean::equals(lit(x), lit(x))), Value::Bool(true));
        assert_eq!(eval(&boolean::equals(lit(x), lit(y))), Value::Bool(false));
        assert_eq!(eval(&in_range(&lit(x), lit(0), lit(100))), Value::Bool(false));
        assert_eq!(eval(&in_range(&lit(y), lit(0), lit(100))), Value::Bool(true));
    }

    #[test]
    fn if_negative_picks_fallback() {
        assert_eq!(eval(&if_negative(uminus(lit(123)), lit(27))), Value::Int(27));
        assert_eq!(eval(&if_negative(lit(123), lit(27))), Value::Int(123));
    }

    #[test]
    #[should_panic(expected = "cannot evaluate")]
    fn unknown_code() {
        let language = Language::standard();
        language.eval_closed(&Term::app(ConstName::new(SORTNAME.into(), None, 42), []));
    }
}
