//! Ordered, keyed lists.
//!
//! A `List` is the only container in the value model. It behaves like an
//! insertion-ordered map whose keys are either integer indices or names, so a
//! decoded JSON array and a decoded JSON object share one representation.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::Value;

/// Key of a list entry.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Integer position key.
    Index(i64),
    /// Named key.
    Name(String),
}

impl Key {
    /// Build a key from a field name.
    ///
    /// Names that are the canonical decimal form of an `i64` (`"0"`, `"42"`,
    /// `"-7"`) become `Key::Index`, so `"7"` and `7` address the same entry.
    pub fn field(name: &str) -> Self {
        match canonical_index(name) {
            Some(index) => Key::Index(index),
            None => Key::Name(name.to_owned()),
        }
    }

    /// The integer index, if this is an index key.
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }
}

/// Parse `text` as an index key only if it is already in canonical form.
fn canonical_index(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // "007" and "-0" stay names.
    if digits.starts_with('0') && (digits.len() > 1 || digits.len() != text.len()) {
        return None;
    }
    text.parse().ok()
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::field(name)
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        match canonical_index(&name) {
            Some(index) => Key::Index(index),
            None => Key::Name(name),
        }
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Key::Index(index)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => write!(f, "{name:?}"),
        }
    }
}

/// Insertion-ordered list of keyed values.
///
/// Entries keep the order in which their keys were first inserted. Lookups go
/// through a hash index beside the entry vector.
#[derive(Clone, Default)]
pub struct List {
    entries: Vec<(Key, Value)>,
    index: FxHashMap<Key, usize>,
    /// Key assigned by the next `push`: one past the largest index seen.
    next_index: i64,
}

impl List {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a value under the next free index.
    pub fn push(&mut self, value: Value) {
        let key = Key::Index(self.next_index);
        self.insert(key, value);
    }

    /// Insert a value under `key`.
    ///
    /// An existing entry is replaced in place and its old value returned; a
    /// new key is appended at the end.
    pub fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
        if let Some(&pos) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }
        if let Key::Index(index) = key {
            if index >= self.next_index {
                self.next_index = index.saturating_add(1);
            }
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    /// Look up a value by field name, normalizing numeric names to indices.
    pub fn get_field(&self, name: &str) -> Option<&Value> {
        self.get(&Key::field(name))
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Whether the keys are exactly `0, 1, .., len - 1` in order.
    pub fn is_sequential(&self) -> bool {
        self.entries.iter().enumerate().all(|(pos, (key, _))| {
            key.as_index()
                .and_then(|index| usize::try_from(index).ok())
                .is_some_and(|index| index == pos)
        })
    }

    /// Build a new list by transforming every value, keeping keys and order.
    ///
    /// Stops at the first error.
    pub fn try_map_values<E>(
        &self,
        mut f: impl FnMut(&Value) -> Result<Value, E>,
    ) -> Result<List, E> {
        let entries = self
            .entries
            .iter()
            .map(|(key, value)| Ok((key.clone(), f(value)?)))
            .collect::<Result<Vec<_>, E>>()?;
        Ok(List {
            entries,
            index: self.index.clone(),
            next_index: self.next_index,
        })
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut list = List::new();
        for value in iter {
            list.push(value);
        }
        list
    }
}

impl FromIterator<(Key, Value)> for List {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        let mut list = List::new();
        for (key, value) in iter {
            list.insert(key, value);
        }
        list
    }
}
