//! Scalar coercers: `int`, `float`, `bool` and `string`.
//!
//! Each coercer is total over `Value`. The only error is a malformed spec:
//! `int`, `float` and `bool` take no modifiers, and `string` accepts `trim`.
//!
//! The conversion tables follow the loose casting rules of legacy web
//! runtimes, including their quirks (`"0"` is false but `"0.0"` is true,
//! lists stringify to `"Array"`).

use std::borrow::Cow;

use smallvec::SmallVec;
use sp_spec::{unexpected_meta, unknown_modifier, Spec, SpecError};
use sp_value::Value;

use crate::numeral::Numeral;

/// Characters removed by the `trim` modifier.
const TRIM_CHARS: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Modifiers accepted by `string` specs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StringModifier {
    /// Strip surrounding whitespace.
    Trim,
}

impl StringModifier {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "trim" => Some(StringModifier::Trim),
            _ => None,
        }
    }
}

/// Fail unless `spec` has no meta tokens.
pub(crate) fn expect_no_meta(spec: &Spec) -> Result<(), SpecError> {
    if spec.meta().is_empty() {
        Ok(())
    } else {
        Err(unexpected_meta(spec.text(), spec.tag(), spec.meta()))
    }
}

/// Resolve the modifiers of a `string` spec, in order.
pub(crate) fn string_modifiers(spec: &Spec) -> Result<SmallVec<[StringModifier; 2]>, SpecError> {
    spec.meta()
        .iter()
        .map(|token| {
            StringModifier::from_token(token).ok_or_else(|| unknown_modifier(spec.text(), token))
        })
        .collect()
}

/// Coerce to a 64-bit integer (`int` spec).
pub fn coerce_int(value: &Value, spec: &Spec) -> Result<i64, SpecError> {
    expect_no_meta(spec)?;
    Ok(match value {
        Value::Int(n) => *n,
        Value::Float(f) => float_to_int(*f),
        Value::Bool(b) => i64::from(*b),
        Value::Str(s) => Numeral::scan(s).map_or(0, Numeral::to_i64_saturating),
        Value::Null | Value::List(_) | Value::Object(_) => 0,
    })
}

/// Coerce to a float (`float` spec).
pub fn coerce_float(value: &Value, spec: &Spec) -> Result<f64, SpecError> {
    expect_no_meta(spec)?;
    Ok(match value {
        Value::Float(f) => *f,
        Value::Int(n) => int_to_float(*n),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Str(s) => Numeral::scan(s).map_or(0.0, Numeral::to_f64),
        Value::Null | Value::List(_) | Value::Object(_) => 0.0,
    })
}

/// Coerce to a boolean (`bool` spec).
pub fn coerce_bool(value: &Value, spec: &Spec) -> Result<bool, SpecError> {
    expect_no_meta(spec)?;
    Ok(match value {
        Value::Bool(b) => *b,
        Value::Int(n) => *n != 0,
        // NaN is truthy; -0.0 is not.
        Value::Float(f) => *f != 0.0,
        Value::Str(s) => !(s.is_empty() || s.as_str() == "0"),
        Value::List(list) => !list.is_empty(),
        Value::Null => false,
        Value::Object(_) => true,
    })
}

/// Coerce to a string (`string` spec), then apply modifiers in order.
pub fn coerce_string(value: &Value, spec: &Spec) -> Result<String, SpecError> {
    let modifiers = string_modifiers(spec)?;
    let mut text = stringify(value);
    for modifier in modifiers {
        match modifier {
            StringModifier::Trim => text = trim_cow(text),
        }
    }
    Ok(text.into_owned())
}

/// Base string conversion, before modifiers.
pub(crate) fn stringify(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Str(s) => Cow::Borrowed(s.as_str()),
        Value::List(_) => Cow::Borrowed("Array"),
        Value::Object(obj) => obj
            .to_string_repr()
            .map_or(Cow::Borrowed(""), Cow::Owned),
        Value::Int(n) => Cow::Owned(n.to_string()),
        Value::Float(f) => Cow::Owned(float_to_string(*f)),
        Value::Bool(true) => Cow::Borrowed("1"),
        Value::Bool(false) | Value::Null => Cow::Borrowed(""),
    }
}

/// Strip the `trim` character set from both ends.
pub(crate) fn trim(text: &str) -> &str {
    text.trim_matches(&TRIM_CHARS[..])
}

fn trim_cow(text: Cow<'_, str>) -> Cow<'_, str> {
    match text {
        Cow::Borrowed(s) => Cow::Borrowed(trim(s)),
        Cow::Owned(s) => {
            let trimmed = trim(&s);
            if trimmed.len() == s.len() {
                Cow::Owned(s)
            } else {
                Cow::Owned(trimmed.to_owned())
            }
        }
    }
}

/// Shortest round-trip decimal, never in exponent form.
fn float_to_string(f: f64) -> String {
    if f.is_nan() {
        "NAN".to_owned()
    } else if f.is_infinite() {
        String::from(if f > 0.0 { "INF" } else { "-INF" })
    } else {
        format!("{f}")
    }
}

/// Truncate toward zero. NaN and infinities become 0; finite values outside
/// the `i64` range wrap modulo 2^64 like a two's-complement cast.
#[allow(
    clippy::cast_possible_truncation,
    reason = "the value is integral and inside the i64 range at each cast"
)]
fn float_to_int(f: f64) -> i64 {
    if !f.is_finite() {
        return 0;
    }
    let truncated = f.trunc();
    if (-TWO_POW_63..TWO_POW_63).contains(&truncated) {
        return truncated as i64;
    }
    let mut wrapped = truncated % TWO_POW_64;
    if wrapped < 0.0 {
        wrapped += TWO_POW_64;
    }
    if wrapped >= TWO_POW_63 {
        wrapped -= TWO_POW_64;
    }
    wrapped as i64
}

#[allow(
    clippy::cast_precision_loss,
    reason = "integers beyond 2^53 round to the nearest float"
)]
fn int_to_float(n: i64) -> f64 {
    n as f64
}
