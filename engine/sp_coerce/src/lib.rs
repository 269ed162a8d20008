//! SafeParams Coerce - turn untrusted values into declared types.
//!
//! Every coercer is total: any `Value` produces a value of the requested
//! type, no matter how wrong the input is. The only error is a malformed
//! spec, reported as a `SpecError` before or during the call.
//!
//! ```text
//! coerce_one(" 42abc", "int")                  => Int(42)
//! coerce_one([1, 2], "string")                 => Str("Array")
//! coerce_one("18446744073709551616", "uint64") => Str("18446744073709551615")
//! ```
//!
//! # Modules
//!
//! - `scalar`: `int`, `float`, `bool` and `string`
//! - `uint64`: clamped unsigned 64-bit decimal strings
//! - `array`: list wrapping and per-element coercion
//! - `dispatch`: routing by type tag, single values and field mappings
//! - `spec_set`: the accepted shapes of a specs argument

mod array;
mod dispatch;
mod numeral;
mod scalar;
mod spec_set;
mod uint64;

pub use array::coerce_array;
pub use dispatch::{coerce, coerce_many, coerce_one, coerce_spec, validate};
pub use scalar::{coerce_bool, coerce_float, coerce_int, coerce_string};
pub use spec_set::SpecSet;
pub use uint64::{clamp_decimal, coerce_uint64, UINT64_MAX};

pub use sp_spec::{parse_spec, Spec, SpecError, SpecErrorKind, TypeTag};
pub use sp_value::{Key, List, Value};
