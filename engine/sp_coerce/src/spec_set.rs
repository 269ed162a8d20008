//! The shapes a `specs` argument can take.

use sp_spec::{invalid_specs, non_string_spec, SpecError};
use sp_value::{Key, Value};

/// One spec for the whole value, or one spec per named field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpecSet {
    /// Coerce the value itself.
    Single(String),
    /// Coerce each field of a mapping; output follows this order.
    Fields(Vec<(Key, String)>),
}

impl SpecSet {
    /// Read a spec set out of a dynamic value.
    ///
    /// A string is a single spec. A list whose values are all strings maps
    /// its keys to field specs. Anything else is malformed.
    pub fn from_value(specs: &Value) -> Result<SpecSet, SpecError> {
        match specs {
            Value::Str(spec) => Ok(SpecSet::Single(spec.as_str().to_owned())),
            Value::List(list) => list
                .iter()
                .map(|(key, spec)| match spec.as_str() {
                    Some(text) => Ok((key.clone(), text.to_owned())),
                    None => Err(non_string_spec(&key.to_string(), spec.type_name())),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(SpecSet::Fields),
            other => Err(invalid_specs(other.type_name())),
        }
    }

    /// Field specs from `(name, spec)` pairs.
    pub fn fields<I, K, S>(fields: I) -> SpecSet
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<Key>,
        S: Into<String>,
    {
        SpecSet::Fields(
            fields
                .into_iter()
                .map(|(key, spec)| (key.into(), spec.into()))
                .collect(),
        )
    }
}

impl From<&str> for SpecSet {
    fn from(spec: &str) -> Self {
        SpecSet::Single(spec.to_owned())
    }
}

impl From<String> for SpecSet {
    fn from(spec: String) -> Self {
        SpecSet::Single(spec)
    }
}
