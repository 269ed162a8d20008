//! The `array` coercer.
//!
//! `array` alone wraps its input into a list. `array.<spec>` additionally
//! coerces every element against `<spec>`, keeping keys and order. Only one
//! level of nesting is supported.

use sp_spec::{nested_array, Spec, SpecError, TypeTag};
use sp_value::{List, Value};

use crate::dispatch::{coerce_spec, validate};

/// Coerce to a list (`array` spec).
pub fn coerce_array(value: &Value, spec: &Spec) -> Result<Value, SpecError> {
    let element = element_spec(spec)?;
    let list = wrap(value);
    let Some(element) = element else {
        return Ok(list);
    };
    match list.as_list() {
        Some(items) => {
            let coerced = items.try_map_values(|item| coerce_spec(item, &element))?;
            Ok(Value::from_list(coerced))
        }
        None => Ok(list),
    }
}

/// The list view of any value. Lists are shared, not copied.
fn wrap(value: &Value) -> Value {
    match value {
        Value::List(_) => value.clone(),
        Value::Null | Value::Object(_) => Value::empty_list(),
        Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_) => {
            Value::from_list(std::iter::once(value.clone()).collect::<List>())
        }
    }
}

/// Parse and validate the element spec of an `array` spec.
///
/// `None` when the spec has no meta. The element spec is checked up front so
/// that a bad one is reported even when there are no elements.
pub(crate) fn element_spec(spec: &Spec) -> Result<Option<Spec>, SpecError> {
    let Some(sub_text) = spec.sub_spec_text() else {
        return Ok(None);
    };
    if spec.meta().first().map(String::as_str) == Some(TypeTag::Array.name()) {
        return Err(nested_array(spec.text()));
    }
    let element = Spec::parse(&sub_text)?;
    validate(&element)?;
    Ok(Some(element))
}
