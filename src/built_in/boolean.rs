use super::{BuiltIn, Row, constant_of};
use crate::model::{Value};
use crate::signature::{ConstName};
use crate::term::{Term};
use crate::language::{Language};

pub const SORTNAME: &str = "BOOL";

const BOOL: Option<&str> = Some(SORTNAME);

const OPERATIONS: [Row; 7] = [
    ("false", &[], BOOL, |_| false.into()),
    ("true", &[], BOOL, |_| true.into()),
    ("equals", &[None, None], BOOL, |args| (args(0) == args(1)).into()),
    ("not", &[BOOL], BOOL, |args| (!args(0).bool()).into()),
    ("and", &[BOOL, BOOL], BOOL, |args| (args(0).bool() && args(1).bool()).into()),
    ("or", &[BOOL, BOOL], BOOL, |args| (args(0).bool() || args(1).bool()).into()),
    ("if", &[BOOL, None, None], None, |args| {
        let branch = if args(0).bool() { 1 } else { 2 };
        args(branch)
    }),
];

/// Constructs the operation table for sort `BOOL`.
///
/// `equals` works on any sort, by comparing native values.
pub fn compile_boolean() -> BuiltIn {
    BuiltIn::compile(SORTNAME, &OPERATIONS, |v| matches!(v, Value::Bool(_)), Some(|| Value::Bool(false)))
}

pub fn constant(op: &str) -> ConstName { constant_of(SORTNAME, &OPERATIONS, op) }

fn app<const N: usize>(op: &str, args: [Term; N]) -> Term { Term::app(constant(op), args) }

/// `BOOL.true` or `BOOL.false`.
pub fn lit(b: bool) -> Term { app(if b { "true" } else { "false" }, []) }

pub fn equals(x: Term, y: Term) -> Term { app("equals", [x, y]) }

pub fn not_equals(x: Term, y: Term) -> Term { not(equals(x, y)) }

pub fn not(x: Term) -> Term { app("not", [x]) }

pub fn and(x: Term, y: Term) -> Term { app("and", [x, y]) }

pub fn or(x: Term, y: Term) -> Term { app("or", [x, y]) }

/// `if_then` if `condition` is true, otherwise `if_else`. Only one branch
/// is evaluated.
pub fn if_(condition: Term, if_then: Term, if_else: Term) -> Term {
    app("if", [condition, if_then, if_else])
}

/// `true` if `x` equals any of `xs`.
pub fn one_of(x: &Term, xs: impl IntoIterator<Item=Term>) -> Term {
    xs.into_iter().fold(lit(false), |acc, y| or(acc, equals(x.clone(), y)))
}

/// The result of the first case whose pattern equals `subject`, or
/// `default` if there is none.
///
/// Built from [`equals()`] and [`if_()`], testing the cases in order.
pub fn select(subject: &Term, cases: impl IntoIterator<Item=(Term, Term)>, default: Term) -> Term {
    let cases: Vec<(Term, Term)> = cases.into_iter().collect();
    cases.into_iter().rev().fold(default, |otherwise, (pattern, result)| {
        if_(equals(subject.clone(), pattern), result, otherwise)
    })
}

/// Like [`select()`], falling back to the default value of sort `result`.
///
/// Panics if `language` has no sort `result`, or it has no default value.
pub fn select_or_default(
    language: &Language,
    subject: &Term,
    cases: impl IntoIterator<Item=(Term, Term)>,
    result: &str,
) -> Term {
    select(subject, cases, language.default_of(result))
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::built_in::{integer};

    fn eval(t: &Term) -> Value {
        let language = Language::standard();
        assert!(language.is_well_typed(t), "{}", t);
        language.eval_closed(t)
    }

    #[test]
    fn connectives() {
        for x in [false, true] {
            assert_eq!(eval(&not(lit(x))), Value::Bool(!x));
            for y in [false, true] {
                assert_eq!(eval(&and(lit(x), lit(y))), Value::Bool(x && y));
                assert_eq!(eval(&or(lit(x), lit(y))), Value::Bool(x || y));
                assert_eq!(eval(&equals(lit(x), lit(y))), Value::Bool(x == y));
                assert_eq!(eval(&not_equals(lit(x), lit(y))), Value::Bool(x != y));
            }
        }
    }

    #[test]
    fn native_and_constant_literals_agree() {
        assert_eq!(eval(&equals(lit(true), Term::native(true, SORTNAME))), Value::Bool(true));
    }

    #[test]
    fn if_evaluates_one_branch() {
        // Dividing by zero would panic.
        let boom = integer::div(integer::lit(1), integer::lit(0));
        assert_eq!(eval(&if_(lit(true), integer::lit(7), boom.clone())), Value::Int(7));
        assert_eq!(eval(&if_(lit(false), boom, integer::lit(8))), Value::Int(8));
    }

    #[test]
    fn selection() {
        let choose = |x: i64| select(
            &integer::lit(x),
            [(integer::lit(123), integer::lit(1)), (integer::lit(27), integer::lit(2))],
            integer::lit(0),
        );
        assert_eq!(eval(&choose(123)), Value::Int(1));
        assert_eq!(eval(&choose(27)), Value::Int(2));
        assert_eq!(eval(&choose(151)), Value::Int(0));
    }

    #[test]
    fn selection_with_sort_default() {
        let language = Language::standard();
        let choose = |x: i64| select_or_default(
            &language,
            &integer::lit(x),
            [(integer::lit(123), integer::lit(1))],
            integer::SORTNAME,
        );
        assert_eq!(eval(&choose(123)), Value::Int(1));
        assert_eq!(eval(&choose(27)), Value::Int(0));
    }

    #[test]
    fn membership() {
        let xs = || [integer::lit(123), integer::lit(27)];
        assert_eq!(eval(&one_of(&integer::lit(27), xs())), Value::Bool(true));
        assert_eq!(eval(&one_of(&integer::lit(150), xs())), Value::Bool(false));
        assert_eq!(eval(&one_of(&integer::lit(150), [])), Value::Bool(false));
    }
}
