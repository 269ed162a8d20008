//! Property-based tests for the coercion engine.
//!
//! Generated values of every shape are pushed through every well-formed
//! spec, checking that:
//! 1. Totality: coercion never fails on data and returns the requested type
//! 2. Canonical uint64: output is a plain `u64` decimal
//! 3. Idempotence: coercing a coerced value again changes nothing

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use sp_coerce::{coerce_many, coerce_one, TypeTag, Value, UINT64_MAX};
use sp_value::NamedObject;

// -- Value Generation Strategies --

/// Strings that look numeric, padded, or not at all.
fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        ".{0,12}",
        "[ \t\n]{0,2}[+-]?[0-9]{0,25}(\\.[0-9]{0,8})?[a-z ]{0,3}",
        Just(String::from("0")),
        Just(String::from(UINT64_MAX)),
    ]
}

fn object_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::object(NamedObject::new("stdClass"))),
        text_strategy().prop_map(|text| Value::object(NamedObject::new("Text").with_display(text))),
    ]
}

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<f64>().prop_map(Value::Float),
        (-1e20f64..1e20).prop_map(Value::Float),
        text_strategy().prop_map(Value::string),
        object_strategy(),
    ]
}

/// Any value, including lists nested two levels deep.
fn value_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(2, 24, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(Value::list)
    })
}

/// Every well-formed spec shape.
fn spec_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "int",
        "float",
        "bool",
        "string",
        "string.trim",
        "uint64",
        "array",
        "array.int",
        "array.float",
        "array.bool",
        "array.string",
        "array.string.trim",
        "array.uint64",
    ])
}

// -- Helpers --

/// Structural equality that treats NaN as equal to itself.
fn same(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Float(x), Value::Float(y)) => x.to_bits() == y.to_bits(),
        (Value::List(x), Value::List(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .zip(y.iter())
                    .all(|((ka, va), (kb, vb))| ka == kb && same(va, vb))
        }
        _ => a == b,
    }
}

fn matches_tag(value: &Value, tag: TypeTag) -> bool {
    match tag {
        TypeTag::Int => matches!(value, Value::Int(_)),
        TypeTag::Float => matches!(value, Value::Float(_)),
        TypeTag::Bool => matches!(value, Value::Bool(_)),
        TypeTag::String | TypeTag::Uint64 => matches!(value, Value::Str(_)),
        TypeTag::Array => matches!(value, Value::List(_)),
    }
}

fn is_canonical_uint64(value: &Value) -> bool {
    value
        .as_str()
        .and_then(|text| text.parse::<u64>().ok().map(|n| n.to_string() == text))
        .unwrap_or(false)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_coercion_is_total(value in value_strategy(), spec in spec_strategy()) {
        let tag = TypeTag::from_name(spec.split('.').next().unwrap()).unwrap();
        let result = coerce_one(&value, spec);
        prop_assert!(result.is_ok(), "{spec} failed on {value:?}");
        let result = result.unwrap();
        prop_assert!(matches_tag(&result, tag), "{spec} on {value:?} gave {result:?}");
    }

    #[test]
    fn prop_uint64_is_canonical(value in value_strategy()) {
        let result = coerce_one(&value, "uint64").unwrap();
        prop_assert!(is_canonical_uint64(&result), "{value:?} gave {result:?}");
    }

    #[test]
    fn prop_array_elements_follow_element_spec(value in value_strategy()) {
        let result = coerce_one(&value, "array.uint64").unwrap();
        let list = result.as_list().unwrap();
        prop_assert!(list.values().all(is_canonical_uint64));
    }

    #[test]
    fn prop_coercion_is_idempotent(value in value_strategy(), spec in spec_strategy()) {
        let once = coerce_one(&value, spec).unwrap();
        let twice = coerce_one(&once, spec).unwrap();
        prop_assert!(same(&once, &twice), "{spec}: {once:?} then {twice:?}");
    }

    #[test]
    fn prop_integers_survive_int_and_string(n in any::<i64>()) {
        prop_assert_eq!(coerce_one(&Value::Int(n), "int").unwrap(), Value::Int(n));
        let text = coerce_one(&Value::Int(n), "string").unwrap();
        prop_assert_eq!(coerce_one(&text, "int").unwrap(), Value::Int(n));
    }

    #[test]
    fn prop_u64_strings_survive_uint64(n in any::<u64>()) {
        let text = n.to_string();
        prop_assert_eq!(
            coerce_one(&Value::string(text.as_str()), "uint64").unwrap(),
            Value::string(text)
        );
    }

    #[test]
    fn prop_missing_fields_get_zero_values(spec in spec_strategy()) {
        let tag = TypeTag::from_name(spec.split('.').next().unwrap()).unwrap();
        let result = coerce_many(&Value::Null, [("missing", spec)]).unwrap();
        let field = result.as_list().unwrap().get_field("missing").unwrap().clone();
        prop_assert!(same(&field, &tag.zero_value()), "{spec} gave {field:?}");
    }
}
