use super::*;
use crate::NamedObject;
use pretty_assertions::assert_eq;

fn decode(json: &str) -> Value {
    serde_json::from_str(json).unwrap()
}

#[test]
fn decodes_scalars() {
    assert_eq!(decode("null"), Value::Null);
    assert_eq!(decode("true"), Value::Bool(true));
    assert_eq!(decode("-12"), Value::Int(-12));
    assert_eq!(decode("2.5"), Value::Float(2.5));
    assert_eq!(decode("\"hi\""), Value::string("hi"));
}

#[test]
fn oversized_unsigned_becomes_float() {
    assert_eq!(
        decode("18446744073709551615"),
        Value::Float(18_446_744_073_709_551_615.0)
    );
}

#[test]
fn decodes_arrays_with_sequential_keys() {
    let value = decode("[1, \"a\", null]");
    assert_eq!(
        value,
        Value::list(vec![Value::Int(1), Value::string("a"), Value::Null])
    );
}

#[test]
fn decodes_objects_with_normalized_keys() {
    let value = decode(r#"{"name": "jack", "7": true}"#);
    let list = value.as_list().unwrap();
    assert_eq!(list.get_field("name"), Some(&Value::string("jack")));
    assert_eq!(list.get(&Key::Index(7)), Some(&Value::Bool(true)));
}

#[test]
fn encodes_sequential_lists_as_arrays() {
    let value = Value::list(vec![Value::Int(1), Value::Float(0.5), Value::Null]);
    assert_eq!(serde_json::to_string(&value).unwrap(), "[1,0.5,null]");
}

#[test]
fn encodes_keyed_lists_as_objects() {
    let list: List = vec![
        (Key::field("id"), Value::string("29")),
        (Key::Index(3), Value::Bool(false)),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        serde_json::to_string(&Value::from(list)).unwrap(),
        r#"{"id":"29","3":false}"#
    );
}

#[test]
fn encodes_objects_by_string_form() {
    let plain = Value::object(NamedObject::new("stdClass"));
    let shown = Value::object(NamedObject::new("Money").with_display("12.50"));
    assert_eq!(serde_json::to_string(&plain).unwrap(), "{}");
    assert_eq!(serde_json::to_string(&shown).unwrap(), "\"12.50\"");
}
