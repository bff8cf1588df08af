//! # Unknown Fields
//!
//! [`UnknownFields`] holds every JSON property of a decoded object that the
//! record's declared schema does not name. Values are kept verbatim as
//! [`serde_json::Value`] trees and re-emitted unchanged on encode, after the
//! declared fields, in the order they were decoded or inserted.
//!
//! ## Equality
//!
//! Order is kept for reproducible output but is not part of equality: two
//! maps are equal iff they hold the same keys with structurally equal
//! values. [`hash_json_value`] hashes JSON trees consistently with that
//! definition, including nested objects.
//!
//! ## Numbers
//!
//! Values are `serde_json` numbers. Integers in the `i64` and `u64` ranges
//! and finite floats are forwarded exactly. An integer outside both ranges
//! is read as the nearest `f64` and re-emitted in float notation.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Insertion-ordered map of undeclared JSON properties.
///
/// Mutation is crate-private: records insert through
/// [`ExtensibleRecord`](crate::record::ExtensibleRecord), which rejects keys
/// that collide with declared field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnknownFields(IndexMap<String, Value>);

impl UnknownFields {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of captured properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a captured property by JSON key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns true if `key` was captured.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Captured keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Captured properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Consume the map and return the underlying ordered map.
    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.0
    }

    pub(crate) fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    pub(crate) fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }
}

impl Hash for UnknownFields {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.0.len());
        state.write_u64(unordered_entries_digest(self.0.iter()));
    }
}

impl FromIterator<(String, Value)> for UnknownFields {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for UnknownFields {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Hash a JSON tree so that structurally equal values hash equally.
///
/// Object members are combined order-insensitively, so the result does not
/// depend on the map implementation `serde_json` was built with.
pub fn hash_json_value<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Null => state.write_u8(0),
        Value::Bool(b) => {
            state.write_u8(1);
            b.hash(state);
        }
        Value::Number(n) => {
            state.write_u8(2);
            hash_json_number(n, state);
        }
        Value::String(s) => {
            state.write_u8(3);
            s.hash(state);
        }
        Value::Array(items) => {
            state.write_u8(4);
            state.write_usize(items.len());
            for item in items {
                hash_json_value(item, state);
            }
        }
        Value::Object(map) => {
            state.write_u8(5);
            state.write_usize(map.len());
            state.write_u64(unordered_entries_digest(map.iter()));
        }
    }
}

/// Integers hash by value. Floats hash by bit pattern with `-0.0` folded
/// into `0.0`, matching `Number`'s `==`.
fn hash_json_number<H: Hasher>(n: &Number, state: &mut H) {
    if let Some(u) = n.as_u64() {
        state.write_u8(0);
        state.write_u64(u);
    } else if let Some(i) = n.as_i64() {
        state.write_u8(1);
        state.write_i64(i);
    } else if let Some(f) = n.as_f64() {
        let f = if f == 0.0 { 0.0 } else { f };
        state.write_u8(2);
        state.write_u64(f.to_bits());
    } else {
        state.write_u8(3);
        n.to_string().hash(state);
    }
}

/// Sum of per-entry digests; addition commutes, so entry order is irrelevant.
fn unordered_entries_digest<'a>(entries: impl Iterator<Item = (&'a String, &'a Value)>) -> u64 {
    entries
        .map(|(key, value)| {
            let mut h = DefaultHasher::new();
            key.hash(&mut h);
            hash_json_value(value, &mut h);
            h.finish()
        })
        .fold(0u64, u64::wrapping_add)
}
