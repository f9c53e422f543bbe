use std::sync::{Arc};

use super::{constant_named};
use crate::model::{SortName, Value};
use crate::signature::{ConstName, Constants, Slot, SortBuilder};
use crate::sort::{Args, Sort, no_such_constant};
use crate::term::{Term};

const INJECT: usize = 0;
const PROJECT: usize = 1;
const OTHERWISE: usize = 2;

/// The sort `OPTIONAL<X>`, which holds an `X` or nothing.
///
/// Native values are [`Value::Optional`]s. The default value is empty.
#[derive(Debug)]
pub struct Optional {
    sortname: SortName,
    elem: Arc<dyn Sort>,
    constants: Constants,
}

impl Optional {
    pub fn new(elem: &Arc<dyn Sort>) -> Self {
        let mut builder = SortBuilder::new(format!("OPTIONAL<{}>", elem.sortname()));
        let optional = Slot::from(builder.sortname());
        let x = Slot::from(elem.sortname());
        builder.add("inject", [x.clone()], optional.clone());
        builder.add("project", [optional.clone()], x.clone());
        builder.add("otherwise", [optional, x.clone()], x);
        Self {sortname: builder.sortname().clone(), elem: elem.clone(), constants: builder.build()}
    }

    pub fn elem(&self) -> &Arc<dyn Sort> { &self.elem }

    pub fn constant(&self, op: &str) -> ConstName { constant_named(&self.constants, op) }

    /// A native leaf holding nothing.
    pub fn none(&self) -> Term { Term::native(Value::Optional(None), self.sortname.clone()) }

    pub fn inject(&self, x: Term) -> Term { Term::app(self.constant("inject"), [x]) }

    /// The contents of `optional`. Evaluation panics if there are none.
    pub fn project(&self, optional: Term) -> Term {
        Term::app(self.constant("project"), [optional])
    }

    /// The contents of `optional`, or `x` if there are none.
    pub fn otherwise(&self, optional: Term, x: Term) -> Term {
        Term::app(self.constant("otherwise"), [optional, x])
    }
}

impl Sort for Optional {
    fn sortname(&self) -> &SortName { &self.sortname }

    fn constants(&self) -> &Constants { &self.constants }

    fn is_valid(&self, value: &Value) -> bool {
        let Value::Optional(x) = value else { return false; };
        x.as_deref().map_or(true, |x| self.elem.is_valid(x))
    }

    fn eval(&self, constant: &ConstName, count: usize, args: &mut Args<'_>) -> Value {
        if constant.sort != self.sortname { no_such_constant(self, constant, count); }
        match constant.code {
            INJECT => Some(args(0)).into(),
            PROJECT => args(0).optional().cloned()
                .unwrap_or_else(|| panic!("Cannot project an empty {}", self.sortname)),
            OTHERWISE => match args(0).optional() {
                Some(x) => x.clone(),
                None => args(1),
            },
            _ => no_such_constant(self, constant, count),
        }
    }

    fn default_value(&self) -> Option<Value> { Some(Value::Optional(None)) }
}

// ----------------------------------------------------------------------------
