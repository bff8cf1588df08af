//! # Extensible Records
//!
//! Every payload type implements [`ExtensibleRecord`]: a typed set of
//! declared fields plus an [`UnknownFields`] capture of every property the
//! declared schema does not name.
//!
//! ## Decode
//!
//! Decoding is a two-pass split. The top-level object is partitioned by
//! exact, case-sensitive key match against [`ExtensibleRecord::FIELDS`];
//! the declared part is checked for required fields and deserialized into
//! typed fields, and the remainder is moved verbatim into the record's
//! unknown fields. Enum-typed fields are [`Versioned`](crate::Versioned)
//! and never fail on unrecognized wire values.
//!
//! ## Encode
//!
//! Records serialize declared non-absent fields in declaration order,
//! followed by unknown fields in the order they were captured. The two key
//! sets are disjoint: decode cannot produce a collision, and the mutators
//! here reject unknown keys that name a declared field.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ModelError, SchemaValidationError};
use crate::unknown::UnknownFields;

/// A schema-mapped payload with forward-compatible unknown-field capture.
///
/// Implementors derive `Serialize`/`Deserialize` with one explicitly renamed
/// field per wire name, `skip_serializing_if = "Option::is_none"` on every
/// optional field, and a `#[serde(flatten)]` [`UnknownFields`] member.
pub trait ExtensibleRecord: Serialize + DeserializeOwned {
    /// Record name, used in errors and logs.
    const NAME: &'static str;

    /// Declared wire names, in declaration order.
    const FIELDS: &'static [&'static str];

    /// Wire names that must be present on decode. A subset of `FIELDS`.
    const REQUIRED: &'static [&'static str];

    /// Properties captured because the declared schema does not name them.
    fn unknown_fields(&self) -> &UnknownFields;

    /// Storage for the unknown-field capture. Callers outside this crate
    /// should go through the checked mutators instead.
    #[doc(hidden)]
    fn unknown_fields_slot(&mut self) -> &mut UnknownFields;

    /// Returns true if `name` is a declared wire name of this record.
    fn is_declared_field(name: &str) -> bool {
        Self::FIELDS.iter().any(|field| *field == name)
    }

    /// Decode a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaValidationError::NotAnObject`] unless `value` is an
    /// object, [`SchemaValidationError::MissingField`] if a required field is
    /// absent, and [`SchemaValidationError::InvalidType`] if a declared
    /// field cannot be coerced to its declared type.
    fn decode_value(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Object(map) => decode_entries(map),
            other => Err(reject::<Self>(SchemaValidationError::NotAnObject {
                record: Self::NAME,
                found: json_kind(&other),
            })),
        }
    }

    /// Decode JSON bytes, keeping unknown fields in document order.
    ///
    /// # Errors
    ///
    /// As [`decode_value`](Self::decode_value), plus
    /// [`SchemaValidationError::Syntax`] if `bytes` are not JSON.
    fn decode_slice(bytes: &[u8]) -> Result<Self, ModelError> {
        match serde_json::from_slice::<IndexMap<String, Value>>(bytes) {
            Ok(entries) => decode_entries(entries),
            // Parsed as JSON, but not as an object.
            Err(e) if e.is_data() => {
                let found = serde_json::from_slice::<Value>(bytes)
                    .map(|v| json_kind(&v))
                    .unwrap_or("an unparseable value");
                Err(reject::<Self>(SchemaValidationError::NotAnObject {
                    record: Self::NAME,
                    found,
                }))
            }
            Err(e) => Err(reject::<Self>(SchemaValidationError::Syntax {
                record: Self::NAME,
                reason: e.to_string(),
            })),
        }
    }

    /// Decode a JSON document.
    ///
    /// # Errors
    ///
    /// See [`decode_slice`](Self::decode_slice).
    fn decode_str(json: &str) -> Result<Self, ModelError> {
        Self::decode_slice(json.as_bytes())
    }

    /// Encode to a JSON value.
    ///
    /// `serde_json::Value` objects do not keep member order; use
    /// [`encode_string`](Self::encode_string) or
    /// [`encode_vec`](Self::encode_vec) where byte order matters.
    fn encode_value(&self) -> Result<Value, ModelError> {
        serde_json::to_value(self).map_err(|e| ModelError::Serialization(e.to_string()))
    }

    /// Encode to a compact JSON string: declared fields first, then unknown
    /// fields in capture order.
    fn encode_string(&self) -> Result<String, ModelError> {
        serde_json::to_string(self).map_err(|e| ModelError::Serialization(e.to_string()))
    }

    /// Encode to compact JSON bytes. Same ordering as
    /// [`encode_string`](Self::encode_string).
    fn encode_vec(&self) -> Result<Vec<u8>, ModelError> {
        serde_json::to_vec(self).map_err(|e| ModelError::Serialization(e.to_string()))
    }

    /// Add or replace an unknown field, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidArgument`] if `key` is a declared wire
    /// name; declared fields are set through their typed mutators.
    fn insert_unknown_field(
        &mut self,
        key: impl Into<String>,
        value: Value,
    ) -> Result<Option<Value>, ModelError> {
        let key = key.into();
        ensure_undeclared::<Self>(&key)?;
        Ok(self.unknown_fields_slot().insert(key, value))
    }

    /// Fluent form of [`insert_unknown_field`](Self::insert_unknown_field).
    fn with_unknown_field(mut self, key: impl Into<String>, value: Value) -> Result<Self, ModelError> {
        self.insert_unknown_field(key, value)?;
        Ok(self)
    }

    /// Remove an unknown field, keeping the order of the rest.
    fn remove_unknown_field(&mut self, key: &str) -> Option<Value> {
        self.unknown_fields_slot().remove(key)
    }

    /// Replace the whole unknown-field capture, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidArgument`] if any key in `fields` is a
    /// declared wire name. The record is left unchanged in that case.
    fn replace_unknown_fields(&mut self, fields: UnknownFields) -> Result<UnknownFields, ModelError> {
        for key in fields.keys() {
            ensure_undeclared::<Self>(key)?;
        }
        Ok(std::mem::replace(self.unknown_fields_slot(), fields))
    }
}

/// Partition top-level entries into declared and unknown, then decode.
fn decode_entries<R: ExtensibleRecord>(
    entries: impl IntoIterator<Item = (String, Value)>,
) -> Result<R, ModelError> {
    let mut declared = Map::new();
    let mut unknown = UnknownFields::new();
    for (key, value) in entries {
        if R::is_declared_field(&key) {
            declared.insert(key, value);
        } else {
            unknown.insert(key, value);
        }
    }

    if let Some(&field) = R::REQUIRED.iter().find(|f| !declared.contains_key(**f)) {
        return Err(reject::<R>(SchemaValidationError::MissingField {
            record: R::NAME,
            field,
        }));
    }

    let mut record: R = serde_json::from_value(Value::Object(declared)).map_err(|e| {
        reject::<R>(SchemaValidationError::InvalidType {
            record: R::NAME,
            reason: e.to_string(),
        })
    })?;

    if !unknown.is_empty() {
        tracing::debug!(
            record = R::NAME,
            unknown_fields = unknown.len(),
            "captured undeclared properties"
        );
    }
    *record.unknown_fields_slot() = unknown;
    Ok(record)
}

fn ensure_undeclared<R: ExtensibleRecord>(key: &str) -> Result<(), ModelError> {
    if R::is_declared_field(key) {
        return Err(ModelError::InvalidArgument {
            argument: key.to_string(),
            reason: format!("`{key}` is a declared field of {}", R::NAME),
        });
    }
    Ok(())
}

fn reject<R: ExtensibleRecord>(err: SchemaValidationError) -> ModelError {
    tracing::debug!(record = R::NAME, error = %err, "rejected payload");
    ModelError::SchemaValidation(err)
}

/// JSON kind name, for diagnostics.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    struct Probe {
        #[serde(rename = "name")]
        name: String,
        #[serde(rename = "count", default, skip_serializing_if = "Option::is_none")]
        count: Option<i64>,
        #[serde(flatten)]
        unknown_fields: UnknownFields,
    }

    impl ExtensibleRecord for Probe {
        const NAME: &'static str = "Probe";
        const FIELDS: &'static [&'static str] = &["name", "count"];
        const REQUIRED: &'static [&'static str] = &["name"];

        fn unknown_fields(&self) -> &UnknownFields {
            &self.unknown_fields
        }

        fn unknown_fields_slot(&mut self) -> &mut UnknownFields {
            &mut self.unknown_fields
        }
    }

    fn probe(name: &str) -> Probe {
        Probe {
            name: name.to_string(),
            count: None,
            unknown_fields: UnknownFields::new(),
        }
    }

    #[test]
    fn decode_splits_declared_and_unknown() {
        let p = Probe::decode_value(json!({"name": "a", "count": 3, "later": [1]})).unwrap();
        assert_eq!(p.name, "a");
        assert_eq!(p.count, Some(3));
        assert_eq!(p.unknown_fields().len(), 1);
        assert_eq!(p.unknown_fields().get("later"), Some(&json!([1])));
    }

    #[test]
    fn decode_slice_keeps_document_order() {
        let p = Probe::decode_str(r#"{"zz":1,"name":"a","aa":2}"#).unwrap();
        assert_eq!(p.unknown_fields().keys().collect::<Vec<_>>(), vec!["zz", "aa"]);
        assert_eq!(p.encode_string().unwrap(), r#"{"name":"a","zz":1,"aa":2}"#);
    }

    #[test]
    fn decode_rejects_missing_required_field() {
        let err = Probe::decode_value(json!({"count": 1})).unwrap_err();
        match err {
            ModelError::SchemaValidation(SchemaValidationError::MissingField { record, field }) => {
                assert_eq!(record, "Probe");
                assert_eq!(field, "name");
            }
            other => panic!("Expected MissingField, got: {other}"),
        }
    }

    #[test]
    fn decode_rejects_uncoercible_declared_value() {
        let err = Probe::decode_value(json!({"name": "a", "count": "three"})).unwrap_err();
        assert!(matches!(
            err,
            ModelError::SchemaValidation(SchemaValidationError::InvalidType { .. })
        ));
    }

    #[test]
    fn decode_rejects_non_objects() {
        let err = Probe::decode_value(json!([1, 2])).unwrap_err();
        assert!(matches!(
            err,
            ModelError::SchemaValidation(SchemaValidationError::NotAnObject { found: "array", .. })
        ));
        let err = Probe::decode_str("42").unwrap_err();
        assert!(matches!(
            err,
            ModelError::SchemaValidation(SchemaValidationError::NotAnObject { found: "number", .. })
        ));
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let err = Probe::decode_str("{\"name\": ").unwrap_err();
        assert!(matches!(
            err,
            ModelError::SchemaValidation(SchemaValidationError::Syntax { .. })
        ));
    }

    #[test]
    fn null_optional_field_is_absent() {
        let p = Probe::decode_value(json!({"name": "a", "count": null})).unwrap();
        assert_eq!(p.count, None);
        assert_eq!(p.encode_value().unwrap(), json!({"name": "a"}));
    }

    #[test]
    fn case_variant_of_declared_name_is_unknown() {
        let p = Probe::decode_str(r#"{"name":"a","Name":"b"}"#).unwrap();
        assert_eq!(p.name, "a");
        assert_eq!(p.unknown_fields().get("Name"), Some(&json!("b")));
        assert_eq!(p.encode_string().unwrap(), r#"{"name":"a","Name":"b"}"#);
    }

    #[test]
    fn insert_rejects_declared_names() {
        let mut p = probe("a");
        let err = p.insert_unknown_field("count", json!(1)).unwrap_err();
        assert!(matches!(err, ModelError::InvalidArgument { .. }));
        assert!(p.unknown_fields().is_empty());

        assert_eq!(p.insert_unknown_field("extra", json!(1)).unwrap(), None);
        assert_eq!(p.insert_unknown_field("extra", json!(2)).unwrap(), Some(json!(1)));
        assert_eq!(p.remove_unknown_field("extra"), Some(json!(2)));
    }

    #[test]
    fn replace_rejects_declared_names_and_leaves_record_unchanged() {
        let mut p = probe("a").with_unknown_field("keep", json!(true)).unwrap();
        let bad: UnknownFields = [("name".to_string(), json!("x"))].into_iter().collect();
        assert!(p.replace_unknown_fields(bad).is_err());
        assert_eq!(p.unknown_fields().get("keep"), Some(&json!(true)));

        let mixed: UnknownFields = [
            ("fine".to_string(), json!(1)),
            ("count".to_string(), json!(2)),
        ]
        .into_iter()
        .collect();
        let err = p.replace_unknown_fields(mixed).unwrap_err();
        assert!(matches!(err, ModelError::InvalidArgument { ref argument, .. } if argument == "count"));
        assert!(!p.unknown_fields().contains_key("fine"));

        let good: UnknownFields = [("other".to_string(), json!(0))].into_iter().collect();
        let previous = p.replace_unknown_fields(good).unwrap();
        assert!(previous.contains_key("keep"));
        assert!(p.unknown_fields().contains_key("other"));
    }

    #[test]
    fn records_with_different_unknown_fields_are_unequal() {
        let plain = probe("a");
        let extended = probe("a").with_unknown_field("x", json!(1)).unwrap();
        assert_ne!(plain, extended);
    }

    #[test]
    fn json_kind_names() {
        assert_eq!(json_kind(&json!(null)), "null");
        assert_eq!(json_kind(&json!(true)), "boolean");
        assert_eq!(json_kind(&json!({})), "object");
        assert_eq!(json_kind(&json!("s")), "string");
    }
}
