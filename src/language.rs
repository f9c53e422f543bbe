use std::cmp::{Ordering};
use std::collections::{BTreeSet, HashMap};
use std::{fmt};
use std::sync::{Arc};

use tracing::{debug};

use super::model::{Name, SortName, Value};
use super::signature::{ConstName, Signature, Slot};
use super::sort::{Sort};
use super::registry::{SortRegistry};
use super::term::{Term};
use super::store::{Id, TermStore};
use super::computation::{Eval, SortOf, VarNames};
use super::error::{Error, Result};
use super::built_in::{compile_boolean, compile_character, compile_integer, compile_unit};

/// Supplies the sorts of variables.
pub type SortEnv<'a> = &'a dyn Fn(&Name) -> Option<SortName>;

/// Supplies the values of variables.
pub type ValueEnv<'a> = &'a dyn Fn(&Name) -> Option<Value>;

/// A set of [`Sort`]s and the signatures of their constants.
///
/// A `Language` gives meaning to [`Term`]s: [`check()`] computes their sorts
/// and [`eval()`] computes their values.
///
/// Two `Language`s are equal if they have the same sort names. One is less
/// than another if its sort names are a strict subset of the other's.
///
/// [`check()`]: Self::check
/// [`eval()`]: Self::eval
#[derive(Clone)]
pub struct Language {
    registry: Arc<SortRegistry>,
    sorts: HashMap<SortName, Arc<dyn Sort>>,
    constants: HashMap<ConstName, Signature>,
}

impl Default for Language {
    fn default() -> Self { Self::new() }
}

impl Language {
    /// An empty `Language` using [`SortRegistry::global()`].
    pub fn new() -> Self { Self::with_registry(SortRegistry::global()) }

    /// An empty `Language` using `registry`.
    pub fn with_registry(registry: &Arc<SortRegistry>) -> Self {
        Self {registry: registry.clone(), sorts: HashMap::new(), constants: HashMap::new()}
    }

    /// A `Language` containing `UNIT`, `BOOL`, `INT` and `CHAR`.
    pub fn standard() -> Self {
        let mut language = Self::new();
        language.add_builtins();
        language
    }

    /// Add `UNIT`, `BOOL`, `INT` and `CHAR` to `self`.
    pub fn add_builtins(&mut self) {
        self.add(Arc::new(compile_unit()));
        self.add(Arc::new(compile_boolean()));
        self.add(Arc::new(compile_integer()));
        self.add(Arc::new(compile_character()));
    }

    /// Register `sort` and all its constants, and return the canonical
    /// `Sort` with its name.
    ///
    /// Every sort mentioned by the signatures must already be registered,
    /// apart from the sort itself.
    ///
    /// Panics if the sort name or a constant is already registered, or if a
    /// signature is invalid.
    pub fn add(&mut self, sort: Arc<dyn Sort>) -> Arc<dyn Sort> {
        // Only a sort that passes validation may become canonical.
        let sort = self.registry.get(sort.sortname()).unwrap_or(sort);
        self.validate(&*sort);
        let sort = self.registry.canonical(sort);
        let name = sort.sortname().clone();
        self.sorts.insert(name.clone(), sort.clone());
        for (constant, signature) in sort.constants() {
            self.constants.insert(constant.clone(), signature.clone());
        }
        debug!(sort = %name, constants = sort.constants().len(), "sort added");
        sort
    }

    /// Panics unless `sort` can be added to `self`.
    fn validate(&self, sort: &dyn Sort) {
        let name = sort.sortname();
        assert!(!self.sorts.contains_key(name), "Sort {} is already registered", name);
        for (constant, signature) in sort.constants() {
            assert_eq!(&constant.sort, name, "Sort {} declares {}", name, constant);
            assert!(!self.constants.contains_key(constant), "{} is already registered", constant);
            assert!(
                self.is_valid_signature_within(signature, Some(name)),
                "Invalid signature for {}: {}", constant, signature,
            );
        }
    }

    /// Combine the sorts and constants of `self` and `other`.
    ///
    /// Where both have an entry, `self`'s wins.
    pub fn join(&self, other: &Self) -> Self {
        let mut ret = self.clone();
        for (name, sort) in &other.sorts {
            ret.sorts.entry(name.clone()).or_insert_with(|| sort.clone());
        }
        for (constant, signature) in &other.constants {
            ret.constants.entry(constant.clone()).or_insert_with(|| signature.clone());
        }
        ret
    }

    /// The names of the registered sorts, in no particular order.
    pub fn sortnames(&self) -> impl Iterator<Item=&SortName> { self.sorts.keys() }

    /// The registered `Sort` called `name`.
    pub fn sort(&self, name: &str) -> Option<&Arc<dyn Sort>> { self.sorts.get(name) }

    /// The registered `Signature` of `constant`.
    pub fn signature(&self, constant: &ConstName) -> Option<&Signature> {
        self.constants.get(constant)
    }

    /// Look up a constant by the name of its sort and its display name.
    pub fn constant(&self, sort: &str, name: &str) -> Option<ConstName> {
        self.sort(sort)?.constants().keys()
            .find(|c| c.name.as_deref() == Some(name))
            .cloned()
    }

    pub fn is_valid_sort(&self, name: &str) -> bool { self.sorts.contains_key(name) }

    /// A `Signature` is valid if every [`Slot::Mono`] names a registered
    /// sort, and there is at least one `Slot::Mono`.
    pub fn is_valid_signature(&self, signature: &Signature) -> bool {
        self.is_valid_signature_within(signature, None)
    }

    /// Like [`is_valid_signature()`], but `own` also counts as registered.
    ///
    /// [`is_valid_signature()`]: Self::is_valid_signature
    fn is_valid_signature_within(&self, signature: &Signature, own: Option<&SortName>) -> bool {
        let known = |slot: &Slot| slot.sortname().map_or(true, |name| {
            Some(name) == own || self.is_valid_sort(name)
        });
        signature.is_anchored() && known(&signature.result) && signature.args.iter().all(known)
    }

    // ------------------------------------------------------------------------

    /// Compute the sort of `term`, or `None` if it is ill-typed.
    pub fn check(&self, env: SortEnv<'_>, term: &Term) -> Option<SortName> {
        term.compute(&SortOf {language: self, env})
    }

    /// Returns `true` if `term` has no free variables and is well-typed.
    pub fn is_well_typed(&self, term: &Term) -> bool {
        self.check(&|_| None, term).is_some()
    }

    /// Compute the sort of the term with `Id` `id` in `store`.
    pub fn check_stored(&self, env: SortEnv<'_>, store: &TermStore, id: Id) -> Option<SortName> {
        store.compute(&SortOf {language: self, env}, id)
    }

    /// Compute the value of `term`.
    ///
    /// `term` should have passed [`check()`]. Panics on an unbound variable,
    /// and may panic if `term` is ill-typed.
    ///
    /// [`check()`]: Self::check
    pub fn eval(&self, env: ValueEnv<'_>, term: &Term) -> Value {
        term.compute(&Eval {language: self, env})
    }

    /// Compute the value of a closed term.
    pub fn eval_closed(&self, term: &Term) -> Value { self.eval(&|_| None, term) }

    /// Compute the value of the term with `Id` `id` in `store`.
    ///
    /// Each distinct subterm is evaluated at most once.
    pub fn eval_stored(&self, env: ValueEnv<'_>, store: &TermStore, id: Id) -> Value {
        store.compute(&Eval {language: self, env}, id)
    }

    /// Check `term`, then compute its value.
    ///
    /// Every free variable must have a sort in `sorts` and a value in
    /// `values` that inhabits that sort. A sort may still panic on a value
    /// it cannot handle, e.g. `INT.div` by zero.
    pub fn try_eval(&self, sorts: SortEnv<'_>, values: ValueEnv<'_>, term: &Term) -> Result<Value> {
        let ill_typed = || Error::IllTyped {term: term.to_string()};
        for name in self.var_names_of(term) {
            let value = values(&name).ok_or_else(|| Error::Unbound(name.clone()))?;
            let sort = sorts(&name).ok_or_else(ill_typed)?;
            let sort = self.sort(&sort).ok_or(Error::UnknownSort(sort))?;
            if !sort.is_valid(&value) { return Err(ill_typed()); }
        }
        self.check(sorts, term).ok_or_else(ill_typed)?;
        Ok(self.eval(values, term))
    }

    /// The names of every variable in `term`.
    pub fn var_names_of(&self, term: &Term) -> BTreeSet<Name> { term.compute(&VarNames) }

    /// A native leaf holding the default value of sort `name`.
    ///
    /// Panics if there is no such sort, or it has no default value.
    pub fn default_of(&self, name: &str) -> Term {
        self.try_default_of(name).unwrap_or_else(|e| panic!("{}", e))
    }

    pub fn try_default_of(&self, name: &str) -> Result<Term> {
        let sort = self.sort(name).ok_or_else(|| Error::UnknownSort(name.into()))?;
        let value = sort.default_value().ok_or_else(|| Error::NoDefault(name.into()))?;
        Ok(Term::native(value, sort.sortname().clone()))
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Language {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let le = self.sorts.keys().all(|name| other.sorts.contains_key(name));
        let ge = other.sorts.keys().all(|name| self.sorts.contains_key(name));
        match (le, ge) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
        }
    }
}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut names: Vec<&SortName> = self.sorts.keys().collect();
        names.sort();
        f.debug_tuple("Language").field(&names).finish()
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::built_in::{boolean, integer};
    use crate::signature::{SortBuilder, Constants};
    use crate::sort::{Args};
    use crate::derived::{Record};
    use std::panic::{self, AssertUnwindSafe};

    /// A sort whose only constant has an unanchored signature.
    #[derive(Debug)]
    struct Unanchored(SortName, Constants);

    impl Unanchored {
        fn new() -> Self {
            let mut builder = SortBuilder::new("UNANCHORED");
            builder.add("anything", [Slot::Poly], Slot::Poly);
            Self(builder.sortname().clone(), builder.build())
        }
    }

    impl Sort for Unanchored {
        fn sortname(&self) -> &SortName { &self.0 }
        fn constants(&self) -> &Constants { &self.1 }
        fn is_valid(&self, _: &Value) -> bool { false }
        fn eval(&self, _: &ConstName, _: usize, args: &mut Args<'_>) -> Value { args(0) }
    }

    fn private() -> Language { Language::with_registry(&Arc::new(SortRegistry::new())) }

    #[test]
    fn standard_sorts() {
        let language = Language::standard();
        for name in ["UNIT", "BOOL", "INT", "CHAR"] {
            assert!(language.is_valid_sort(name));
        }
        assert!(!language.is_valid_sort("REAL"));
        assert!(language.constant("INT", "plus").is_some());
        assert!(language.constant("INT", "concat").is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn duplicate_sort() {
        let mut language = private();
        language.add(Arc::new(compile_boolean()));
        language.add(Arc::new(compile_boolean()));
    }

    #[test]
    #[should_panic(expected = "Invalid signature")]
    fn unanchored_signature() {
        private().add(Arc::new(Unanchored::new()));
    }

    #[test]
    #[should_panic(expected = "Invalid signature")]
    fn unregistered_dependency() {
        // `INT.less` returns a `BOOL`.
        private().add(Arc::new(compile_integer()));
    }

    #[test]
    fn failed_add_is_not_canonical() {
        let registry = Arc::new(SortRegistry::new());
        let int: Arc<dyn Sort> = Arc::new(compile_integer());
        let mut language = Language::with_registry(&registry);
        let unit = language.add(Arc::new(compile_unit()));
        let broken = Arc::new(Record::builder("R").field("n", &int).build());
        let failed = panic::catch_unwind(AssertUnwindSafe(|| { language.add(broken); }));
        assert!(failed.is_err());
        assert!(registry.get("R").is_none());
        assert!(!language.is_valid_sort("R"));
        let valid: Arc<dyn Sort> = Arc::new(Record::builder("R").field("u", &unit).build());
        let mut fresh = Language::with_registry(&registry);
        fresh.add(unit);
        assert!(Arc::ptr_eq(&fresh.add(valid.clone()), &valid));
        assert!(registry.get("R").is_some());
    }

    #[test]
    fn signature_validity() {
        let language = Language::standard();
        let sig = |args: Vec<Slot>, result: Slot| Signature::new(args, result);
        assert!(language.is_valid_signature(&sig(vec![Slot::Poly, Slot::Poly], "BOOL".into())));
        assert!(language.is_valid_signature(&sig(vec!["BOOL".into(), Slot::Poly], Slot::Poly)));
        assert!(!language.is_valid_signature(&sig(vec![Slot::Poly], Slot::Poly)));
        assert!(!language.is_valid_signature(&sig(vec![], "REAL".into())));
    }

    #[test]
    fn independent_languages_share_sorts() {
        let registry = Arc::new(SortRegistry::new());
        let mut a = Language::with_registry(&registry);
        let mut b = Language::with_registry(&registry);
        let sa = a.add(Arc::new(compile_unit()));
        let sb = b.add(Arc::new(compile_unit()));
        assert!(Arc::ptr_eq(&sa, &sb));
    }

    #[test]
    fn ordering_and_join() {
        let registry = Arc::new(SortRegistry::new());
        let mut small = Language::with_registry(&registry);
        small.add(Arc::new(compile_unit()));
        let mut other = Language::with_registry(&registry);
        other.add(Arc::new(compile_boolean()));
        let mut big = small.clone();
        big.add(Arc::new(compile_boolean()));
        assert!(small < big);
        assert!(big > other);
        assert_eq!(small.partial_cmp(&other), None);
        let joined = small.join(&other);
        assert_eq!(joined, big);
        assert!(joined.signature(&boolean::constant("not")).is_some());
    }

    #[test]
    fn join_prefers_left() {
        let mut left = private();
        let mut right = private();
        let l = left.add(Arc::new(compile_unit()));
        let r = right.add(Arc::new(compile_unit()));
        right.add(Arc::new(compile_boolean()));
        assert!(!Arc::ptr_eq(&l, &r));
        let joined = left.join(&right);
        assert!(Arc::ptr_eq(joined.sort("UNIT").unwrap(), &l));
        assert!(joined.is_valid_sort("BOOL"));
        let reversed = right.join(&left);
        assert!(Arc::ptr_eq(reversed.sort("UNIT").unwrap(), &r));
        assert_eq!(joined, reversed);
    }

    #[test]
    fn check_and_eval() {
        let language = Language::standard();
        let t = integer::plus(integer::lit(2), Term::var("x"));
        let sorts = |name: &Name| (&**name == "x").then(|| SortName::from("INT"));
        let values = |name: &Name| (&**name == "x").then(|| Value::Int(40));
        assert_eq!(language.check(&sorts, &t).as_deref(), Some("INT"));
        assert_eq!(language.check(&|_| None, &t), None);
        assert!(!language.is_well_typed(&t));
        assert_eq!(language.eval(&values, &t), Value::Int(42));
        assert_eq!(language.var_names_of(&t).into_iter().collect::<Vec<_>>(), [Name::from("x")]);
    }

    #[test]
    fn check_rejects_bad_shapes() {
        let language = Language::standard();
        let plus = integer::constant("plus");
        let wrong_arity = Term::app(plus.clone(), [integer::lit(1)]);
        let wrong_sort = Term::app(plus, [integer::lit(1), boolean::lit(true)]);
        let bad_native = Term::native(true, "INT");
        let unknown_native = Term::native(1i64, "REAL");
        let unknown_constant = Term::app(ConstName::new("INT".into(), None, 99), []);
        for t in [wrong_arity, wrong_sort, bad_native, unknown_native, unknown_constant] {
            assert_eq!(language.check(&|_| None, &t), None, "{}", t);
        }
    }

    #[test]
    fn polymorphic_unification() {
        let language = Language::standard();
        let same = boolean::equals(integer::lit(1), integer::lit(2));
        let mixed = boolean::equals(integer::lit(1), boolean::lit(true));
        assert_eq!(language.check(&|_| None, &same).as_deref(), Some("BOOL"));
        assert_eq!(language.check(&|_| None, &mixed), None);
        let choice = boolean::if_(boolean::lit(true), integer::lit(1), integer::lit(2));
        assert_eq!(language.check(&|_| None, &choice).as_deref(), Some("INT"));
        let bad_choice = boolean::if_(boolean::lit(true), integer::lit(1), boolean::lit(false));
        assert_eq!(language.check(&|_| None, &bad_choice), None);
        let bad_condition = boolean::if_(integer::lit(0), integer::lit(1), integer::lit(2));
        assert_eq!(language.check(&|_| None, &bad_condition), None);
    }

    #[test]
    fn try_eval() {
        let language = Language::standard();
        let t = integer::mul(Term::var("x"), integer::lit(3));
        let int = |_: &Name| Some(SortName::from("INT"));
        assert_eq!(language.try_eval(&int, &|_| Some(Value::Int(5)), &t), Ok(Value::Int(15)));
        assert_eq!(language.try_eval(&int, &|_| None, &t), Err(Error::Unbound("x".into())));
        assert!(matches!(
            language.try_eval(&int, &|_| Some(Value::Bool(true)), &t),
            Err(Error::IllTyped {..}),
        ));
        let mixed = boolean::equals(integer::lit(1), boolean::lit(true));
        assert!(matches!(language.try_eval(&|_| None, &|_| None, &mixed), Err(Error::IllTyped {..})));
    }

    #[test]
    #[should_panic(expected = "unbound")]
    fn eval_unbound() {
        Language::standard().eval_closed(&Term::var("x"));
    }

    #[test]
    fn defaults() {
        let language = Language::standard();
        assert_eq!(language.eval_closed(&language.default_of("INT")), Value::Int(0));
        assert_eq!(language.eval_closed(&language.default_of("BOOL")), Value::Bool(false));
        assert_eq!(language.try_default_of("REAL"), Err(Error::UnknownSort("REAL".into())));
    }

    #[test]
    fn stored_forms_agree() {
        let language = Language::standard();
        let mut y = integer::lit(1);
        for _ in 0..10 { y = integer::plus(y.clone(), y); }
        let mut store = TermStore::new();
        let id = store.store(&y);
        assert_eq!(store.size(id), 2047);
        assert_eq!(store.stored_size(id), 11);
        assert_eq!(language.eval_stored(&|_| None, &store, id), Value::Int(1024));
        assert_eq!(language.eval_closed(&y), Value::Int(1024));
        assert_eq!(language.check_stored(&|_| None, &store, id).as_deref(), Some("INT"));
    }
}
