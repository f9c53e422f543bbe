use std::sync::{Arc};

use super::{constant_named};
use crate::model::{Name, SortName, Value};
use crate::signature::{ConstName, Constants, Slot, SortBuilder};
use crate::sort::{Args, Sort, no_such_constant, unpack};
use crate::term::{Term};

/// The name and code of the constructor of every [`Record`].
const INIT: &str = "init";
const INIT_CODE: usize = 0;

/// Declares the fields of a [`Record`], in order.
#[derive(Debug)]
pub struct RecordBuilder {
    sortname: SortName,
    fields: Vec<(Name, Arc<dyn Sort>)>,
}

impl RecordBuilder {
    /// Append a field called `name` of sort `sort`.
    ///
    /// Panics if the name is `init` or is already used.
    pub fn field(mut self, name: impl Into<Name>, sort: &Arc<dyn Sort>) -> Self {
        let name = name.into();
        assert!(&*name != INIT, "A field of {} cannot be called `{}`", self.sortname, INIT);
        assert!(
            self.fields.iter().all(|(n, _)| *n != name),
            "Record {} already has a field `{}`", self.sortname, name,
        );
        self.fields.push((name, sort.clone()));
        self
    }

    pub fn build(self) -> Record {
        let mut builder = SortBuilder::new(self.sortname);
        let record = Slot::from(builder.sortname());
        let init = builder.add(INIT, self.fields.iter().map(|(_, s)| Slot::from(s.sortname())), record.clone());
        assert_eq!(init.code, INIT_CODE);
        for (name, sort) in &self.fields {
            builder.add(name, [record.clone()], Slot::from(sort.sortname()));
        }
        Record {sortname: builder.sortname().clone(), fields: self.fields, constants: builder.build()}
    }
}

/// A sort whose values are tuples of fields.
///
/// The constant `init` constructs a record from its fields. Each field has a
/// projection constant of the same name; field `i` has code `i + 1`.
/// Native values are [`Value::Slice`]s in field order.
#[derive(Debug)]
pub struct Record {
    sortname: SortName,
    fields: Vec<(Name, Arc<dyn Sort>)>,
    constants: Constants,
}

impl Record {
    pub fn builder(sortname: impl Into<SortName>) -> RecordBuilder {
        RecordBuilder {sortname: sortname.into(), fields: Vec::new()}
    }

    pub fn fields(&self) -> &[(Name, Arc<dyn Sort>)] { &self.fields }

    pub fn constant(&self, op: &str) -> ConstName { constant_named(&self.constants, op) }

    /// Construct a record from one term per field.
    pub fn init(&self, fields: impl IntoIterator<Item=Term>) -> Term {
        Term::app(self.constant(INIT), fields)
    }

    /// Project `field` out of `record`.
    pub fn get(&self, record: Term, field: &str) -> Term {
        assert!(field != INIT, "`{}` is not a field", INIT);
        Term::app(self.constant(field), [record])
    }
}

impl Sort for Record {
    fn sortname(&self) -> &SortName { &self.sortname }

    fn constants(&self) -> &Constants { &self.constants }

    fn is_valid(&self, value: &Value) -> bool {
        let Value::Slice(values) = value else { return false; };
        values.len() == self.fields.len() &&
        values.iter().zip(&self.fields).all(|(v, (_, sort))| sort.is_valid(v))
    }

    fn eval(&self, constant: &ConstName, count: usize, args: &mut Args<'_>) -> Value {
        if constant.sort != self.sortname { no_such_constant(self, constant, count); }
        match constant.code {
            INIT_CODE => unpack(count, args).into(),
            code if code <= self.fields.len() => args(0).slice()[code - 1].clone(),
            _ => no_such_constant(self, constant, count),
        }
    }

    /// The record whose fields have their default values.
    fn default_value(&self) -> Option<Value> {
        let values: Option<Vec<Value>> = self.fields.iter().map(|(_, s)| s.default_value()).collect();
        values.map(Value::from)
    }
}

// ----------------------------------------------------------------------------
