//! # App Data
//!
//! Metadata about the app a notification or response concerns. Produced by
//! the server and only ever decoded by clients, so every field is optional
//! and no required-field validation applies.

use serde::{Deserialize, Serialize};
use storekit_core::{ExtensibleRecord, UnknownFields, Versioned};

use crate::environment::Environment;

/// The app metadata and signed app transaction information.
///
/// `signed_app_transaction_info` is an opaque signed JWS string; verifying
/// or decoding it is left to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppData {
    #[serde(rename = "appAppleId", default, skip_serializing_if = "Option::is_none")]
    app_apple_id: Option<i64>,

    #[serde(rename = "bundleId", default, skip_serializing_if = "Option::is_none")]
    bundle_id: Option<String>,

    #[serde(rename = "environment", default, skip_serializing_if = "Option::is_none")]
    environment: Option<Versioned<Environment>>,

    #[serde(
        rename = "signedAppTransactionInfo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    signed_app_transaction_info: Option<String>,

    #[serde(flatten)]
    unknown_fields: UnknownFields,
}

impl ExtensibleRecord for AppData {
    const NAME: &'static str = "AppData";
    const FIELDS: &'static [&'static str] =
        &["appAppleId", "bundleId", "environment", "signedAppTransactionInfo"];
    const REQUIRED: &'static [&'static str] = &[];

    fn unknown_fields(&self) -> &UnknownFields {
        &self.unknown_fields
    }

    fn unknown_fields_slot(&mut self) -> &mut UnknownFields {
        &mut self.unknown_fields
    }
}

impl AppData {
    /// An empty record with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// The unique identifier of the app in the App Store.
    pub fn app_apple_id(&self) -> Option<i64> {
        self.app_apple_id
    }

    /// The bundle identifier of the app.
    pub fn bundle_id(&self) -> Option<&str> {
        self.bundle_id.as_deref()
    }

    /// The environment, if present and declared in this schema version.
    pub fn environment(&self) -> Option<Environment> {
        self.environment.as_ref().and_then(Versioned::symbol)
    }

    /// The environment wire token, known or not.
    pub fn raw_environment(&self) -> Option<&str> {
        self.environment.as_ref().map(|v| v.raw().as_str())
    }

    pub fn signed_app_transaction_info(&self) -> Option<&str> {
        self.signed_app_transaction_info.as_deref()
    }

    pub fn with_app_apple_id(mut self, app_apple_id: i64) -> Self {
        self.set_app_apple_id(app_apple_id);
        self
    }

    pub fn with_bundle_id(mut self, bundle_id: impl Into<String>) -> Self {
        self.set_bundle_id(bundle_id);
        self
    }

    /// Accepts a declared [`Environment`] or an already-wrapped wire value.
    pub fn with_environment(mut self, environment: impl Into<Versioned<Environment>>) -> Self {
        self.set_environment(environment);
        self
    }

    pub fn with_raw_environment(mut self, raw: impl Into<String>) -> Self {
        self.set_raw_environment(raw);
        self
    }

    pub fn with_signed_app_transaction_info(mut self, signed: impl Into<String>) -> Self {
        self.set_signed_app_transaction_info(signed);
        self
    }

    pub fn set_app_apple_id(&mut self, app_apple_id: i64) {
        self.app_apple_id = Some(app_apple_id);
    }

    pub fn set_bundle_id(&mut self, bundle_id: impl Into<String>) {
        self.bundle_id = Some(bundle_id.into());
    }

    pub fn set_environment(&mut self, environment: impl Into<Versioned<Environment>>) {
        self.environment = Some(environment.into());
    }

    pub fn set_raw_environment(&mut self, raw: impl Into<String>) {
        self.environment = Some(Versioned::from_raw(raw));
    }

    pub fn set_signed_app_transaction_info(&mut self, signed: impl Into<String>) {
        self.signed_app_transaction_info = Some(signed.into());
    }

    pub fn clear_app_apple_id(&mut self) {
        self.app_apple_id = None;
    }

    pub fn clear_bundle_id(&mut self) {
        self.bundle_id = None;
    }

    pub fn clear_environment(&mut self) {
        self.environment = None;
    }

    pub fn clear_signed_app_transaction_info(&mut self) {
        self.signed_app_transaction_info = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_record_encodes_as_empty_object() {
        assert_eq!(AppData::new().encode_string().unwrap(), "{}");
        let decoded = AppData::decode_str("{}").unwrap();
        assert_eq!(decoded, AppData::new());
    }

    #[test]
    fn unknown_environment_token_is_kept() {
        let data = AppData::decode_value(json!({"environment": "Staging"})).unwrap();
        assert_eq!(data.environment(), None);
        assert_eq!(data.raw_environment(), Some("Staging"));
        assert_eq!(data.encode_value().unwrap(), json!({"environment": "Staging"}));
    }

    #[test]
    fn mutators_set_and_clear() {
        let mut data = AppData::new()
            .with_app_apple_id(1)
            .with_bundle_id("com.example.app")
            .with_environment(Environment::Production);
        assert_eq!(data.environment(), Some(Environment::Production));

        data.set_raw_environment("Sandbox");
        assert_eq!(data.environment(), Some(Environment::Sandbox));

        data.clear_environment();
        data.clear_bundle_id();
        assert_eq!(data.raw_environment(), None);
        assert_eq!(data.encode_string().unwrap(), r#"{"appAppleId":1}"#);
    }

    #[test]
    fn wrong_type_for_optional_field_is_rejected() {
        assert!(AppData::decode_value(json!({"appAppleId": "not-a-number"})).is_err());
        assert!(AppData::decode_value(json!({"environment": 1})).is_err());
    }
}
