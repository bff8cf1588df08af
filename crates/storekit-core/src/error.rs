//! # Error Types: Structured Error Hierarchy
//!
//! Defines the error types raised by the schema-mapping layer. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Schema validation errors are raised at decode time only, and name the
//!   record and (where one exists) the offending field.
//! - Unknown enum wire values, unknown JSON properties and absent optional
//!   fields are legal forward-compatibility cases and never produce an error.
//! - Invalid-argument errors are raised synchronously by mutators that are
//!   handed an absent required argument or a key that would break the
//!   declared/unknown disjointness of a record.

use thiserror::Error;

/// Top-level error type for the schema-mapping layer.
#[derive(Error, Debug)]
pub enum ModelError {
    /// A payload failed schema validation while decoding.
    #[error("schema validation error: {0}")]
    SchemaValidation(#[from] SchemaValidationError),

    /// A mutator or constructor was called with an unusable argument.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the argument or field that was rejected.
        argument: String,
        /// Why the argument was rejected.
        reason: String,
    },

    /// Encoding a record to JSON failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Decode-time validation failure.
///
/// Decoding is all-or-nothing: when any of these is returned, no partial
/// record is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaValidationError {
    /// The payload was valid JSON but not a JSON object.
    #[error("{record}: expected a JSON object, found {found}")]
    NotAnObject {
        /// Record type that was being decoded.
        record: &'static str,
        /// JSON kind that was found instead.
        found: &'static str,
    },

    /// A required declared field was absent.
    #[error("{record}: missing required field `{field}`")]
    MissingField {
        /// Record type that was being decoded.
        record: &'static str,
        /// Wire name of the missing field.
        field: &'static str,
    },

    /// A declared field's value could not be coerced to its declared type.
    #[error("{record}: {reason}")]
    InvalidType {
        /// Record type that was being decoded.
        record: &'static str,
        /// Decoder message describing the mismatch.
        reason: String,
    },

    /// The input bytes were not JSON at all.
    #[error("{record}: malformed JSON: {reason}")]
    Syntax {
        /// Record type that was being decoded.
        record: &'static str,
        /// Parser message.
        reason: String,
    },
}

impl SchemaValidationError {
    /// Record type the failure belongs to.
    pub fn record(&self) -> &'static str {
        match self {
            Self::NotAnObject { record, .. }
            | Self::MissingField { record, .. }
            | Self::InvalidType { record, .. }
            | Self::Syntax { record, .. } => record,
        }
    }
}

/// Unwrap a nullable argument, failing with [`ModelError::InvalidArgument`]
/// when it is absent.
///
/// Statically typed mutators take their argument by value and cannot be
/// handed an absent value; this helper backs the overloads that accept
/// input of dynamic origin.
pub fn require<T>(value: Option<T>, argument: &str) -> Result<T, ModelError> {
    value.ok_or_else(|| ModelError::InvalidArgument {
        argument: argument.to_string(),
        reason: "value must not be absent".to_string(),
    })
}
