use super::{Computation, Results};
use crate::model::{Name, SortName, Value};
use crate::signature::{ConstName};

/// Renders a term as text, for diagnostics.
///
/// An application renders as `SORT.name(arg1,arg2)`, or `SORT.name` if it
/// has no arguments. A native leaf renders as `{value}:SORT`.
pub struct Render;

impl Computation for Render {
    type Output = String;

    fn on_var(&self, name: &Name) -> String { name.to_string() }

    fn on_native(&self, value: &Value, sort: &SortName) -> String {
        format!("{{{}}}:{}", value, sort)
    }

    fn on_app(&self, constant: &ConstName, count: usize, args: &mut Results<'_, String>) -> String {
        let mut ret = constant.to_string();
        if count > 0 {
            let args: Vec<String> = (0..count).map(args).collect();
            ret.push('(');
            ret.push_str(&args.join(","));
            ret.push(')');
        }
        ret
    }
}
