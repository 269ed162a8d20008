use super::*;
use crate::{Key, NamedObject};

#[test]
fn test_factory_methods() {
    let s = Value::string("hello");
    assert_eq!(s.as_str(), Some("hello"));

    let list = Value::list(vec![Value::Int(1), Value::Int(2)]);
    assert_eq!(list.as_list().map(List::len), Some(2));

    assert_eq!(Value::empty_list().as_list().map(List::is_empty), Some(true));
    assert!(Value::Null.is_null());
}

#[test]
fn test_value_equality() {
    assert_eq!(Value::Int(42), Value::Int(42));
    assert_ne!(Value::Int(42), Value::Float(42.0));
    assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    assert_eq!(Value::string("a"), Value::from("a"));
    assert_eq!(
        Value::list(vec![Value::Null]),
        Value::from(vec![Value::Null])
    );
}

#[test]
fn test_list_equality_is_order_sensitive() {
    let ab: List = vec![
        (Key::field("a"), Value::Int(1)),
        (Key::field("b"), Value::Int(2)),
    ]
    .into_iter()
    .collect();
    let ba: List = vec![
        (Key::field("b"), Value::Int(2)),
        (Key::field("a"), Value::Int(1)),
    ]
    .into_iter()
    .collect();
    assert_ne!(Value::from(ab), Value::from(ba));
}

#[test]
fn test_objects_compare_by_identity() {
    let a = Value::object(NamedObject::new("Point"));
    let b = Value::object(NamedObject::new("Point"));
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::Bool(true).type_name(), "bool");
    assert_eq!(Value::Int(0).type_name(), "int");
    assert_eq!(Value::Float(0.0).type_name(), "float");
    assert_eq!(Value::string("").type_name(), "string");
    assert_eq!(Value::empty_list().type_name(), "array");
    assert_eq!(
        Value::object(NamedObject::new("stdClass")).type_name(),
        "object"
    );
}

#[test]
fn test_debug_output() {
    assert_eq!(format!("{:?}", Value::Int(3)), "Int(3)");
    assert_eq!(format!("{:?}", Value::Float(3.0)), "Float(3.0)");
    assert_eq!(format!("{:?}", Value::string("x")), "Str(\"x\")");
    assert_eq!(
        format!("{:?}", Value::list(vec![Value::Bool(true)])),
        "List({0: Bool(true)})"
    );
    assert_eq!(
        format!("{:?}", Value::object(NamedObject::new("stdClass"))),
        "Object(stdClass)"
    );
}

#[test]
fn test_values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
}
