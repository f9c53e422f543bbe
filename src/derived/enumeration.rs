use crate::built_in::{boolean};
use crate::model::{Name, SortName, Value};
use crate::signature::{ConstName, Constants};
use crate::sort::{Args, Sort, no_such_constant};
use crate::term::{Term};
use crate::language::{Language};

/// A sort with a finite, closed set of cases.
///
/// An enumeration has no constants of its own; cases are compared with
/// `BOOL.equals`. Native values are [`Value::Tag`]s. The default value is
/// the first case.
#[derive(Debug)]
pub struct Enumeration {
    sortname: SortName,
    cases: Vec<Name>,
    constants: Constants,
}

impl Enumeration {
    /// Panics if a case is repeated.
    pub fn new<N: Into<Name>>(sortname: impl Into<SortName>, cases: impl IntoIterator<Item=N>) -> Self {
        let sortname = sortname.into();
        let mut ret: Vec<Name> = Vec::new();
        for case in cases {
            let case = case.into();
            assert!(!ret.contains(&case), "Enumeration {} already has a case {}", sortname, case);
            ret.push(case);
        }
        Self {sortname, cases: ret, constants: Constants::new()}
    }

    pub fn cases(&self) -> &[Name] { &self.cases }

    /// A native leaf holding `case`.
    ///
    /// Panics if `case` is not a case of `self`.
    pub fn case(&self, case: &str) -> Term {
        let name = self.cases.iter().find(|c| &***c == case)
            .unwrap_or_else(|| panic!("{} is not a case of {}", case, self.sortname));
        Term::native(Value::Tag(name.clone()), self.sortname.clone())
    }

    /// The result of the first case equal to `subject`, or `default`.
    pub fn select<'a>(
        &self,
        subject: &Term,
        cases: impl IntoIterator<Item=(&'a str, Term)>,
        default: Term,
    ) -> Term {
        let cases = cases.into_iter().map(|(case, result)| (self.case(case), result));
        boolean::select(subject, cases, default)
    }

    /// Like [`select()`], falling back to the default value of sort
    /// `result`.
    ///
    /// [`select()`]: Self::select
    pub fn select_or_default<'a>(
        &self,
        language: &Language,
        subject: &Term,
        cases: impl IntoIterator<Item=(&'a str, Term)>,
        result: &str,
    ) -> Term {
        self.select(subject, cases, language.default_of(result))
    }
}

impl Sort for Enumeration {
    fn sortname(&self) -> &SortName { &self.sortname }

    fn constants(&self) -> &Constants { &self.constants }

    fn is_valid(&self, value: &Value) -> bool {
        let Value::Tag(tag) = value else { return false; };
        self.cases.contains(tag)
    }

    fn eval(&self, constant: &ConstName, count: usize, _: &mut Args<'_>) -> Value {
        no_such_constant(self, constant, count)
    }

    fn default_value(&self) -> Option<Value> { self.cases.first().cloned().map(Value::Tag) }
}

// ----------------------------------------------------------------------------
