//! # storekit-core: Forward-Compatible Schema Mapping
//!
//! This crate holds the two primitives every App Store server API payload
//! type is built from. It depends on no other `storekit-*` crate.
//!
//! ## Key Design Principles
//!
//! 1. **Raw wire value is the source of truth.** [`Versioned<E>`] stores the
//!    wire value of an enum field and resolves the symbol on demand. A value
//!    introduced by a newer server decodes without error and surfaces only
//!    as "no symbol".
//!
//! 2. **Nothing is dropped.** [`ExtensibleRecord`] types capture every JSON
//!    property their declared schema does not name into [`UnknownFields`]
//!    and re-emit it unchanged, so decode-then-encode forwarding is lossless.
//!
//! 3. **Required means required.** Absent required fields fail decode with
//!    [`SchemaValidationError`]; they are never defaulted.
//!
//! 4. **Equality sees everything.** Records compare declared fields (enum
//!    fields by raw value) and unknown fields, so two records that would
//!    encode differently are never equal.
//!
//! ## Crate Policy
//!
//! - No I/O, no shared state. Decode and encode are pure functions.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod record;
pub mod unknown;
pub mod versioned;

// Re-export primary types for ergonomic imports.
pub use error::{require, ModelError, SchemaValidationError};
pub use record::{json_kind, ExtensibleRecord};
pub use unknown::{hash_json_value, UnknownFields};
pub use versioned::{Versioned, WireEnum};
