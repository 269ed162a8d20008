//! Opaque host objects.

use std::fmt;

/// A host-defined object carried through the value model untouched.
///
/// Coercion only ever asks an object for its string form; everything else
/// about it is opaque.
pub trait ObjectValue: fmt::Debug + Send + Sync {
    /// Name of the object's type, used in diagnostics.
    fn class_name(&self) -> &str;

    /// String conversion, if the object supports one.
    ///
    /// `None` means the object has no string-conversion capability.
    fn to_string_repr(&self) -> Option<String> {
        None
    }
}

/// A plain object with a class name and an optional fixed string form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedObject {
    class_name: String,
    display: Option<String>,
}

impl NamedObject {
    /// An object with no string conversion.
    pub fn new(class_name: impl Into<String>) -> Self {
        NamedObject {
            class_name: class_name.into(),
            display: None,
        }
    }

    /// Give the object a string form.
    #[must_use]
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }
}

impl ObjectValue for NamedObject {
    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn to_string_repr(&self) -> Option<String> {
        self.display.clone()
    }
}
