use std::sync::{Arc};

use super::{constant_named};
use crate::model::{SortName, Value};
use crate::signature::{ConstName, Constants, Slot, SortBuilder};
use crate::sort::{Args, Sort, no_such_constant};
use crate::built_in::{boolean, integer};
use crate::term::{Term};

const APPEND: usize = 0;
const CONCAT: usize = 1;
const CONTAINS: usize = 2;
const LENGTH: usize = 3;
const AT: usize = 4;

/// The sort `ARRAY<X>` of finite sequences of `X`s.
///
/// Native values are [`Value::Slice`]s. The default value is empty.
#[derive(Debug)]
pub struct Array {
    sortname: SortName,
    elem: Arc<dyn Sort>,
    constants: Constants,
}

impl Array {
    pub fn new(elem: &Arc<dyn Sort>) -> Self {
        let mut builder = SortBuilder::new(format!("ARRAY<{}>", elem.sortname()));
        let array = Slot::from(builder.sortname());
        let x = Slot::from(elem.sortname());
        builder.add("append", [array.clone(), x.clone()], array.clone());
        builder.add("concat", [array.clone(), array.clone()], array.clone());
        builder.add("contains", [array.clone(), x.clone()], boolean::SORTNAME.into());
        builder.add("length", [array.clone()], integer::SORTNAME.into());
        builder.add("at", [array, integer::SORTNAME.into()], x);
        Self {sortname: builder.sortname().clone(), elem: elem.clone(), constants: builder.build()}
    }

    pub fn elem(&self) -> &Arc<dyn Sort> { &self.elem }

    pub fn constant(&self, op: &str) -> ConstName { constant_named(&self.constants, op) }

    /// A native leaf holding `elems`.
    pub fn native(&self, elems: Vec<Value>) -> Term {
        Term::native(elems, self.sortname.clone())
    }

    /// An `append` chain adding each of `elems` to the empty array.
    pub fn literal(&self, elems: impl IntoIterator<Item=Term>) -> Term {
        elems.into_iter().fold(self.native(Vec::new()), |array, x| self.append(array, x))
    }

    pub fn append(&self, array: Term, x: Term) -> Term {
        Term::app(self.constant("append"), [array, x])
    }

    pub fn concat(&self, left: Term, right: Term) -> Term {
        Term::app(self.constant("concat"), [left, right])
    }

    pub fn contains(&self, array: Term, x: Term) -> Term {
        Term::app(self.constant("contains"), [array, x])
    }

    pub fn length(&self, array: Term) -> Term {
        Term::app(self.constant("length"), [array])
    }

    pub fn at(&self, array: Term, index: Term) -> Term {
        Term::app(self.constant("at"), [array, index])
    }
}

impl Sort for Array {
    fn sortname(&self) -> &SortName { &self.sortname }

    fn constants(&self) -> &Constants { &self.constants }

    fn is_valid(&self, value: &Value) -> bool {
        let Value::Slice(xs) = value else { return false; };
        xs.iter().all(|x| self.elem.is_valid(x))
    }

    fn eval(&self, constant: &ConstName, count: usize, args: &mut Args<'_>) -> Value {
        if constant.sort != self.sortname { no_such_constant(self, constant, count); }
        match constant.code {
            APPEND => {
                let mut xs = args(0).slice().to_vec();
                xs.push(args(1));
                xs.into()
            },
            CONCAT => {
                let mut xs = args(0).slice().to_vec();
                xs.extend(args(1).slice().iter().cloned());
                xs.into()
            },
            CONTAINS => {
                let xs = args(0);
                let x = args(1);
                xs.slice().contains(&x).into()
            },
            LENGTH => (args(0).slice().len() as i64).into(),
            AT => {
                let xs = args(0);
                let i = args(1).int();
                usize::try_from(i).ok().and_then(|i| xs.slice().get(i)).cloned()
                    .unwrap_or_else(|| panic!("Index {} is out of range for {:?}", i, xs))
            },
            _ => no_such_constant(self, constant, count),
        }
    }

    fn default_value(&self) -> Option<Value> { Some(Value::from(Vec::<Value>::new())) }
}

// ----------------------------------------------------------------------------
