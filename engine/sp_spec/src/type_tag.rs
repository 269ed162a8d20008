//! The closed set of target types.

use std::fmt;

use sp_value::Value;

/// Target type named by the first token of a spec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Int,
    Float,
    Bool,
    String,
    Array,
    Uint64,
}

impl TypeTag {
    /// Every tag, in declaration order.
    pub const ALL: [TypeTag; 6] = [
        TypeTag::Int,
        TypeTag::Float,
        TypeTag::Bool,
        TypeTag::String,
        TypeTag::Array,
        TypeTag::Uint64,
    ];

    /// Look up a tag by its exact spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "int" => Some(TypeTag::Int),
            "float" => Some(TypeTag::Float),
            "bool" => Some(TypeTag::Bool),
            "string" => Some(TypeTag::String),
            "array" => Some(TypeTag::Array),
            "uint64" => Some(TypeTag::Uint64),
            _ => None,
        }
    }

    /// The tag as written in a spec.
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Bool => "bool",
            TypeTag::String => "string",
            TypeTag::Array => "array",
            TypeTag::Uint64 => "uint64",
        }
    }

    /// The value a missing or null input coerces to under this tag.
    pub fn zero_value(self) -> Value {
        match self {
            TypeTag::Int => Value::Int(0),
            TypeTag::Float => Value::Float(0.0),
            TypeTag::Bool => Value::Bool(false),
            TypeTag::String => Value::string(""),
            TypeTag::Array => Value::empty_list(),
            TypeTag::Uint64 => Value::string("0"),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
