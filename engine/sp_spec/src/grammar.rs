//! Spec string grammar.
//!
//! ```text
//! spec := type ("." meta)*
//! type := "int" | "float" | "bool" | "string" | "array" | "uint64"
//! ```
//!
//! Only the type is validated here. Meta tokens are kept verbatim; each
//! coercer decides which ones it accepts, so the error can name the type.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::errors::{empty_spec, unknown_type};
use crate::{SpecError, TypeTag};

/// Separator between spec tokens.
pub const DELIMITER: &str = ".";

/// Meta tokens of a spec.
pub type Meta = SmallVec<[String; 2]>;

/// A parsed specification: a type tag plus its modifier tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spec {
    text: String,
    tag: TypeTag,
    meta: Meta,
}

impl Spec {
    /// Parse a spec string.
    pub fn parse(text: &str) -> Result<Spec, SpecError> {
        let mut tokens = text.split(DELIMITER);
        let Some(head) = tokens.next() else {
            return Err(empty_spec(text));
        };
        let Some(tag) = TypeTag::from_name(head) else {
            let err = unknown_type(text, head);
            tracing::debug!(%err, "rejected spec");
            return Err(err);
        };
        Ok(Spec {
            text: text.to_owned(),
            tag,
            meta: tokens.map(str::to_owned).collect(),
        })
    }

    /// The target type.
    #[inline]
    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Modifier tokens after the type, in order.
    #[inline]
    pub fn meta(&self) -> &[String] {
        &self.meta
    }

    /// The spec as originally written.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The meta tokens rejoined into a spec string, if there are any.
    ///
    /// For `array.string.trim` this is `string.trim`.
    pub fn sub_spec_text(&self) -> Option<String> {
        if self.meta.is_empty() {
            None
        } else {
            Some(self.meta.join(DELIMITER))
        }
    }
}

/// Parse a spec string.
pub fn parse_spec(text: &str) -> Result<Spec, SpecError> {
    Spec::parse(text)
}

impl FromStr for Spec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Spec::parse(s)
    }
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
