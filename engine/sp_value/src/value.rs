//! The dynamic value coerced by the engine.
//!
//! # Heap Enforcement
//!
//! Strings, lists and objects live behind `Heap<T>`, whose constructor is
//! private to this crate. They are built through factory methods:
//!
//! ```text
//! let s = Value::string("hello");                     // OK
//! let list = Value::list(vec![Value::Int(1)]);       // OK
//! let obj = Value::object(NamedObject::new("Point")); // OK
//! ```
//!
//! Scalars (`Null`, `Bool`, `Int`, `Float`) are stored inline.

use std::fmt;
use std::sync::Arc;

use crate::heap::Heap;
use crate::list::List;
use crate::object::ObjectValue;

/// Untyped input value.
#[derive(Clone)]
pub enum Value {
    /// Absent or explicit null.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit IEEE float.
    Float(f64),
    /// UTF-8 string.
    Str(Heap<String>),
    /// Ordered keyed list (covers both arrays and maps).
    List(Heap<List>),
    /// Host-defined opaque object.
    Object(Heap<dyn ObjectValue>),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a list with sequential indices from `items`.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items.into_iter().collect()))
    }

    /// Wrap an already-built keyed list.
    #[inline]
    pub fn from_list(list: List) -> Self {
        Value::List(Heap::new(list))
    }

    /// Create an empty list.
    #[inline]
    pub fn empty_list() -> Self {
        Value::from_list(List::new())
    }

    /// Wrap a host object.
    pub fn object<O: ObjectValue + 'static>(object: O) -> Self {
        let inner: Arc<dyn ObjectValue> = Arc::new(object);
        Value::Object(Heap::from_arc(inner))
    }
}

// Value Methods

impl Value {
    /// Whether this is `Null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the string contents.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the list contents.
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Get the type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

// Trait Implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n:?})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::List(list) => write!(f, "List({:?})", &**list),
            Value::Object(obj) => write!(f, "Object({})", obj.class_name()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            // Objects are opaque, so only identity is meaningful.
            (Value::Object(a), Value::Object(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<List> for Value {
    fn from(list: List) -> Self {
        Value::from_list(list)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}

#[cfg(test)]
mod tests;
