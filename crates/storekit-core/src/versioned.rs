//! # Versioned Wire Enums
//!
//! A [`Versioned<E>`] holds the raw wire value of an enum-typed field and
//! resolves it against the variant table of `E` only when asked. Decoding
//! a value the local table has never seen is therefore not an error: the
//! value is stored, compared, and re-emitted exactly as received, and
//! [`Versioned::symbol`] simply returns `None`.
//!
//! ## Invariant
//!
//! `symbol() == Some(s)` implies `s.to_wire() == *raw()`. The converse does
//! not hold: unknown raw values are valid and have no symbol.
//!
//! Equality and hashing are defined on the raw value only, so two processes
//! with different variant tables still agree on whether two values are equal.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{require, ModelError};

/// A closed set of symbolic variants with a fixed wire representation.
///
/// Each family fixes its wire primitive for all time: current-generation
/// families use string tokens, legacy families use small integers. The two
/// kinds are unrelated types even when they describe the same concept.
pub trait WireEnum: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Wire primitive carried in JSON.
    type Wire: Clone + Eq + Hash + fmt::Debug + fmt::Display + Serialize + DeserializeOwned + Send + Sync;

    /// Family name, used in diagnostics.
    const FAMILY: &'static str;

    /// Every declared variant, in declaration order.
    fn variants() -> &'static [Self];

    /// The wire value of this variant.
    fn to_wire(self) -> Self::Wire;

    /// Resolve a wire value against the variant table.
    ///
    /// Returns `None` for values not declared in this schema version.
    fn from_wire(raw: &Self::Wire) -> Option<Self>;
}

/// A wire value for an enum family `E`, known or not.
pub struct Versioned<E: WireEnum> {
    raw: E::Wire,
    _family: PhantomData<E>,
}

impl<E: WireEnum> Versioned<E> {
    /// Wrap a raw wire value. Never fails, whether or not `E` declares it.
    pub fn from_raw(raw: impl Into<E::Wire>) -> Self {
        Self {
            raw: raw.into(),
            _family: PhantomData,
        }
    }

    /// Wrap a declared variant.
    pub fn from_symbol(symbol: E) -> Self {
        Self::from_raw(symbol.to_wire())
    }

    /// Wrap a raw value of dynamic origin.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidArgument`] if `raw` is absent.
    pub fn try_from_raw(raw: Option<E::Wire>, argument: &str) -> Result<Self, ModelError> {
        require(raw, argument).map(Self::from_raw)
    }

    /// Wrap a symbol of dynamic origin.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidArgument`] if `symbol` is absent.
    pub fn try_from_symbol(symbol: Option<E>, argument: &str) -> Result<Self, ModelError> {
        require(symbol, argument).map(Self::from_symbol)
    }

    /// The declared variant matching the raw value, if any.
    pub fn symbol(&self) -> Option<E> {
        E::from_wire(&self.raw)
    }

    /// The raw wire value, whether or not it is known.
    pub fn raw(&self) -> &E::Wire {
        &self.raw
    }

    /// Consume the wrapper and return the raw wire value.
    pub fn into_raw(self) -> E::Wire {
        self.raw
    }

    /// Returns true if the raw value resolves to a declared variant.
    pub fn is_known(&self) -> bool {
        self.symbol().is_some()
    }
}

impl<E: WireEnum> From<E> for Versioned<E> {
    fn from(symbol: E) -> Self {
        Self::from_symbol(symbol)
    }
}

impl<E: WireEnum> Clone for Versioned<E> {
    fn clone(&self) -> Self {
        Self::from_raw(self.raw.clone())
    }
}

impl<E: WireEnum> PartialEq for Versioned<E> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<E: WireEnum> Eq for Versioned<E> {}

impl<E: WireEnum> Hash for Versioned<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<E: WireEnum> PartialEq<E> for Versioned<E> {
    fn eq(&self, symbol: &E) -> bool {
        self.raw == symbol.to_wire()
    }
}

impl<E: WireEnum> fmt::Debug for Versioned<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Versioned")
            .field("family", &E::FAMILY)
            .field("raw", &self.raw)
            .field("symbol", &self.symbol())
            .finish()
    }
}

impl<E: WireEnum> fmt::Display for Versioned<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw, f)
    }
}

impl<E: WireEnum> Serialize for Versioned<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de, E: WireEnum> Deserialize<'de> for Versioned<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        E::Wire::deserialize(deserializer).map(Self::from_raw)
    }
}
