//! Malformed-spec errors.
//!
//! A `SpecError` is the only failure the engine ever reports. It always means
//! the *specification* is wrong; input data never produces one.
//!
//! Errors pair a `SpecErrorKind` (WHAT went wrong) with the spec text being
//! processed (WHERE), when there is one. Factory functions below are the
//! public way to build them.

use std::error::Error;
use std::fmt;

use crate::{TypeTag, DELIMITER};

/// What is wrong with a spec.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpecErrorKind {
    /// Splitting produced no tokens.
    #[error("spec has no type")]
    Empty,
    /// The first token is not one of the six type tags.
    #[error("unknown type `{tag}`")]
    UnknownType { tag: String },
    /// Modifiers on a type that takes none (`int.trim`).
    #[error("type `{tag}` takes no modifiers, found `{meta}`")]
    UnexpectedMeta { tag: TypeTag, meta: String },
    /// A `string` modifier other than `trim`.
    #[error("unknown string modifier `{modifier}`")]
    UnknownModifier { modifier: String },
    /// `array.array...`
    #[error("nested `array.array` specs are not supported")]
    NestedArray,
    /// The specs argument is neither a spec string nor a mapping.
    #[error("specs must be a spec string or a mapping of spec strings, got {got}")]
    InvalidSpecs { got: &'static str },
    /// A mapping entry whose spec is not a string.
    #[error("spec for field `{field}` must be a string, got {got}")]
    NonStringSpec { field: String, got: &'static str },
}

/// A malformed specification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecError {
    kind: SpecErrorKind,
    spec: Option<String>,
}

impl SpecError {
    /// An error not tied to a single spec string.
    pub fn new(kind: SpecErrorKind) -> Self {
        SpecError { kind, spec: None }
    }

    /// An error raised while processing `spec`.
    pub fn in_spec(kind: SpecErrorKind, spec: impl Into<String>) -> Self {
        SpecError {
            kind,
            spec: Some(spec.into()),
        }
    }

    pub fn kind(&self) -> &SpecErrorKind {
        &self.kind
    }

    /// The offending spec text, if the error concerns a single spec.
    pub fn spec(&self) -> Option<&str> {
        self.spec.as_deref()
    }
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.spec {
            Some(spec) => write!(f, "malformed spec `{spec}`: {}", self.kind),
            None => write!(f, "malformed specs: {}", self.kind),
        }
    }
}

impl Error for SpecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.kind)
    }
}

// Factory functions

#[cold]
pub fn empty_spec(spec: &str) -> SpecError {
    SpecError::in_spec(SpecErrorKind::Empty, spec)
}

#[cold]
pub fn unknown_type(spec: &str, tag: &str) -> SpecError {
    SpecError::in_spec(
        SpecErrorKind::UnknownType {
            tag: tag.to_owned(),
        },
        spec,
    )
}

#[cold]
pub fn unexpected_meta(spec: &str, tag: TypeTag, meta: &[String]) -> SpecError {
    SpecError::in_spec(
        SpecErrorKind::UnexpectedMeta {
            tag,
            meta: meta.join(DELIMITER),
        },
        spec,
    )
}

#[cold]
pub fn unknown_modifier(spec: &str, modifier: &str) -> SpecError {
    SpecError::in_spec(
        SpecErrorKind::UnknownModifier {
            modifier: modifier.to_owned(),
        },
        spec,
    )
}

#[cold]
pub fn nested_array(spec: &str) -> SpecError {
    SpecError::in_spec(SpecErrorKind::NestedArray, spec)
}

#[cold]
pub fn invalid_specs(got: &'static str) -> SpecError {
    SpecError::new(SpecErrorKind::InvalidSpecs { got })
}

#[cold]
pub fn non_string_spec(field: &str, got: &'static str) -> SpecError {
    SpecError::new(SpecErrorKind::NonStringSpec {
        field: field.to_owned(),
        got,
    })
}
