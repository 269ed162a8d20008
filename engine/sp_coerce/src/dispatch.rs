//! Routing values to coercers.
//!
//! `coerce_one` handles a single spec string, `coerce_many` a mapping of
//! field names to spec strings, and `coerce` either, through `SpecSet`.

use sp_spec::{Spec, SpecError, TypeTag};
use sp_value::{Key, List, Value};

use crate::array::{coerce_array, element_spec};
use crate::scalar::{
    coerce_bool, coerce_float, coerce_int, coerce_string, expect_no_meta, string_modifiers,
};
use crate::spec_set::SpecSet;
use crate::uint64::coerce_uint64;

/// Lookup result for fields missing from the input.
static NULL: Value = Value::Null;

/// Coerce `value` against a spec string.
pub fn coerce_one(value: &Value, spec: &str) -> Result<Value, SpecError> {
    coerce_spec(value, &Spec::parse(spec)?)
}

/// Coerce `value` against an already parsed spec.
pub fn coerce_spec(value: &Value, spec: &Spec) -> Result<Value, SpecError> {
    tracing::trace!(spec = spec.text(), input = value.type_name(), "coerce");
    Ok(match spec.tag() {
        TypeTag::Int => Value::Int(coerce_int(value, spec)?),
        TypeTag::Float => Value::Float(coerce_float(value, spec)?),
        TypeTag::Bool => Value::Bool(coerce_bool(value, spec)?),
        TypeTag::String => Value::string(coerce_string(value, spec)?),
        TypeTag::Array => coerce_array(value, spec)?,
        TypeTag::Uint64 => Value::string(coerce_uint64(value, spec)?),
    })
}

/// Coerce each named field of `data` against its spec.
///
/// Non-list `data` has no fields. Missing fields are coerced from `Null`.
/// The result has one entry per field, in the order given; the first
/// malformed spec aborts the whole call.
pub fn coerce_many<I, K, S>(data: &Value, fields: I) -> Result<Value, SpecError>
where
    I: IntoIterator<Item = (K, S)>,
    K: Into<Key>,
    S: AsRef<str>,
{
    let input = data.as_list();
    let mut output = List::new();
    for (field, spec) in fields {
        let key = field.into();
        let value = input.and_then(|list| list.get(&key)).unwrap_or(&NULL);
        let coerced = coerce_one(value, spec.as_ref())?;
        output.insert(key, coerced);
    }
    Ok(Value::from_list(output))
}

/// Coerce `data` against a single spec or a mapping of field specs.
pub fn coerce(data: &Value, specs: &SpecSet) -> Result<Value, SpecError> {
    match specs {
        SpecSet::Single(spec) => coerce_one(data, spec),
        SpecSet::Fields(fields) => coerce_many(
            data,
            fields.iter().map(|(key, spec)| (key.clone(), spec.as_str())),
        ),
    }
}

/// Check a spec's meta tokens without coercing anything.
///
/// Coercers perform the same checks; this lets a caller reject a bad spec
/// before any data is seen.
pub fn validate(spec: &Spec) -> Result<(), SpecError> {
    match spec.tag() {
        TypeTag::Int | TypeTag::Float | TypeTag::Bool | TypeTag::Uint64 => expect_no_meta(spec),
        TypeTag::String => string_modifiers(spec).map(drop),
        TypeTag::Array => element_spec(spec).map(drop),
    }
}
