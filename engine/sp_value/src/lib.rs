//! SafeParams Value - the dynamic value model.
//!
//! This crate provides:
//! - `Value`, a closed tagged union over every shape untrusted input can take
//! - `List` and `Key`, the insertion-ordered keyed container
//! - `ObjectValue`, the seam for host objects with optional string conversion
//! - `Heap<T>`, the `Arc` wrapper that all heap-owning values go through
//!
//! With the `serde` feature, `Value` can be decoded from and encoded to any
//! self-describing format.

mod heap;
mod list;
mod object;
mod value;

#[cfg(feature = "serde")]
mod serialize;

pub use heap::Heap;
pub use list::{Key, List};
pub use object::{NamedObject, ObjectValue};
pub use value::Value;
