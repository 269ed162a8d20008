//! SafeParams Spec - the specification grammar.
//!
//! A spec is a dot-delimited string such as `int`, `string.trim` or
//! `array.uint64`. The first token names one of six target types; the rest
//! are modifiers ("meta") whose meaning depends on the type.
//!
//! Every failure the engine can report is a `SpecError`, defined here.

mod errors;
mod grammar;
mod type_tag;

pub use errors::{
    empty_spec, invalid_specs, nested_array, non_string_spec, unexpected_meta, unknown_modifier,
    unknown_type, SpecError, SpecErrorKind,
};
pub use grammar::{parse_spec, Meta, Spec, DELIMITER};
pub use type_tag::TypeTag;
