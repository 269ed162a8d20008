//! The `uint64` coercer.
//!
//! Unsigned 64-bit integers do not fit in `Value::Int`, so the result is the
//! canonical decimal string: no sign, no leading zeros, clamped into
//! `[0, 18446744073709551615]`. Intermediate values are arbitrary-precision
//! so that inputs far outside the range clamp instead of wrapping.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use sp_spec::{Spec, SpecError};
use sp_value::Value;

use crate::numeral::Numeral;
use crate::scalar::{expect_no_meta, stringify, trim};

/// `u64::MAX` in canonical form.
pub const UINT64_MAX: &str = "18446744073709551615";

/// Coerce to a canonical uint64 string (`uint64` spec).
pub fn coerce_uint64(value: &Value, spec: &Spec) -> Result<String, SpecError> {
    expect_no_meta(spec)?;
    let canonical = match value {
        // Fixed-point keeps large floats out of exponent form.
        Value::Float(f) => clamp_decimal(&format!("{f:.6}")),
        _ => {
            let text = stringify(value);
            clamp_decimal(trim(&text).trim_start_matches('0'))
        }
    };
    Ok(canonical)
}

/// Read the leading numeral of `text`, drop its fraction and clamp it into
/// the uint64 range. Text without a numeral is zero.
pub fn clamp_decimal(text: &str) -> String {
    let Some(numeral) = Numeral::scan(text) else {
        return "0".to_owned();
    };
    let Ok(decimal) = BigDecimal::from_str(&numeral.to_decimal_text()) else {
        return "0".to_owned();
    };
    let whole = decimal.with_scale(0);
    if whole < BigDecimal::from(0u64) {
        "0".to_owned()
    } else if whole > BigDecimal::from(u64::MAX) {
        UINT64_MAX.to_owned()
    } else {
        let (digits, _) = whole.into_bigint_and_exponent();
        digits.to_string()
    }
}
