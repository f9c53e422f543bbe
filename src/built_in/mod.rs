use std::{fmt};

use super::model::{SortName, Value};
use super::signature::{ConstName, Constants, Slot, SortBuilder};
use super::sort::{Args, Sort, no_such_constant};

/// Computes the result of one operation of a [`BuiltIn`].
type Operation = fn(&mut Args<'_>) -> Value;

/// One operation of a [`BuiltIn`]: its name, argument sorts, result sort
/// and meaning. `None` means [`Slot::Poly`].
type Row = (&'static str, &'static [Option<&'static str>], Option<&'static str>, Operation);

/// A [`Sort`] defined by a static table of operations.
///
/// The code of each constant is its position in the table.
pub struct BuiltIn {
    sortname: SortName,
    constants: Constants,
    operations: Box<[Operation]>,
    is_valid: fn(&Value) -> bool,
    default: Option<fn() -> Value>,
}

impl BuiltIn {
    fn compile(
        name: &str,
        rows: &[Row],
        is_valid: fn(&Value) -> bool,
        default: Option<fn() -> Value>,
    ) -> Self {
        let mut builder = SortBuilder::new(name);
        for &(op, args, result, _) in rows {
            builder.add(op, args.iter().map(|&arg| Slot::from(arg)), Slot::from(result));
        }
        BuiltIn {
            sortname: builder.sortname().clone(),
            constants: builder.build(),
            operations: rows.iter().map(|row| row.3).collect(),
            is_valid,
            default,
        }
    }
}

impl fmt::Debug for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(&self.sortname) }
}

impl Sort for BuiltIn {
    fn sortname(&self) -> &SortName { &self.sortname }

    fn constants(&self) -> &Constants { &self.constants }

    fn is_valid(&self, value: &Value) -> bool { (self.is_valid)(value) }

    fn eval(&self, constant: &ConstName, count: usize, args: &mut Args<'_>) -> Value {
        if constant.sort != self.sortname { no_such_constant(self, constant, count); }
        let Some(operation) = self.operations.get(constant.code) else {
            no_such_constant(self, constant, count);
        };
        operation(args)
    }

    fn default_value(&self) -> Option<Value> { self.default.map(|default| default()) }
}

/// Returns the `ConstName` of the row of `rows` called `op`.
///
/// Panics if there is no such row.
fn constant_of(sortname: &str, rows: &[Row], op: &str) -> ConstName {
    let code = rows.iter().position(|row| row.0 == op)
        .unwrap_or_else(|| panic!("Sort {} has no operation {}", sortname, op));
    ConstName::new(sortname.into(), Some(op.into()), code)
}

// ----------------------------------------------------------------------------

pub mod unit;
pub use unit::{compile_unit};

pub mod boolean;
pub use boolean::{compile_boolean};

pub mod integer;
pub use integer::{compile_integer};

pub mod character;
pub use character::{compile_character};
