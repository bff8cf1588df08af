//! # Consumption Request (V1)
//!
//! Deprecated: use [`ConsumptionRequest`](crate::ConsumptionRequest).
//!
//! The older request generation, carrying the integer-valued
//! [`DeliveryStatusV1`] and [`RefundPreferenceV1`] families. Every field is
//! optional at this layer.

use serde::{Deserialize, Serialize};
use storekit_core::{ExtensibleRecord, UnknownFields, Versioned};
use uuid::Uuid;

use crate::delivery_status::DeliveryStatusV1;
use crate::refund_preference::RefundPreferenceV1;

/// Consumption information in the older request format.
///
/// Deprecated: use [`ConsumptionRequest`](crate::ConsumptionRequest), which
/// uses string tokens and enforces its required fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConsumptionRequestV1 {
    #[serde(rename = "customerConsented", default, skip_serializing_if = "Option::is_none")]
    customer_consented: Option<bool>,

    #[serde(
        rename = "sampleContentProvided",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    sample_content_provided: Option<bool>,

    #[serde(rename = "deliveryStatus", default, skip_serializing_if = "Option::is_none")]
    delivery_status: Option<Versioned<DeliveryStatusV1>>,

    #[serde(rename = "refundPreference", default, skip_serializing_if = "Option::is_none")]
    refund_preference: Option<Versioned<RefundPreferenceV1>>,

    #[serde(rename = "appAccountToken", default, skip_serializing_if = "Option::is_none")]
    app_account_token: Option<Uuid>,

    #[serde(flatten)]
    unknown_fields: UnknownFields,
}

impl ExtensibleRecord for ConsumptionRequestV1 {
    const NAME: &'static str = "ConsumptionRequestV1";
    const FIELDS: &'static [&'static str] = &[
        "customerConsented",
        "sampleContentProvided",
        "deliveryStatus",
        "refundPreference",
        "appAccountToken",
    ];
    const REQUIRED: &'static [&'static str] = &[];

    fn unknown_fields(&self) -> &UnknownFields {
        &self.unknown_fields
    }

    fn unknown_fields_slot(&mut self) -> &mut UnknownFields {
        &mut self.unknown_fields
    }
}

impl ConsumptionRequestV1 {
    /// An empty request with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer_consented(&self) -> Option<bool> {
        self.customer_consented
    }

    pub fn sample_content_provided(&self) -> Option<bool> {
        self.sample_content_provided
    }

    /// The delivery status, if present and declared in this schema version.
    pub fn delivery_status(&self) -> Option<DeliveryStatusV1> {
        self.delivery_status.as_ref().and_then(Versioned::symbol)
    }

    /// The integer delivery status code, known or not.
    pub fn raw_delivery_status(&self) -> Option<i32> {
        self.delivery_status.as_ref().map(|v| *v.raw())
    }

    pub fn refund_preference(&self) -> Option<RefundPreferenceV1> {
        self.refund_preference.as_ref().and_then(Versioned::symbol)
    }

    pub fn raw_refund_preference(&self) -> Option<i32> {
        self.refund_preference.as_ref().map(|v| *v.raw())
    }

    /// The UUID the app associated with the customer's account.
    pub fn app_account_token(&self) -> Option<Uuid> {
        self.app_account_token
    }

    pub fn with_customer_consented(mut self, customer_consented: bool) -> Self {
        self.customer_consented = Some(customer_consented);
        self
    }

    pub fn with_sample_content_provided(mut self, sample_content_provided: bool) -> Self {
        self.sample_content_provided = Some(sample_content_provided);
        self
    }

    pub fn with_delivery_status(
        mut self,
        delivery_status: impl Into<Versioned<DeliveryStatusV1>>,
    ) -> Self {
        self.set_delivery_status(delivery_status);
        self
    }

    /// Set the delivery status from an integer code, declared or not.
    pub fn with_raw_delivery_status(mut self, raw: i32) -> Self {
        self.set_raw_delivery_status(raw);
        self
    }

    pub fn with_refund_preference(
        mut self,
        refund_preference: impl Into<Versioned<RefundPreferenceV1>>,
    ) -> Self {
        self.set_refund_preference(refund_preference);
        self
    }

    pub fn with_raw_refund_preference(mut self, raw: i32) -> Self {
        self.set_raw_refund_preference(raw);
        self
    }

    pub fn with_app_account_token(mut self, token: Uuid) -> Self {
        self.app_account_token = Some(token);
        self
    }

    pub fn set_customer_consented(&mut self, customer_consented: bool) {
        self.customer_consented = Some(customer_consented);
    }

    pub fn set_sample_content_provided(&mut self, sample_content_provided: bool) {
        self.sample_content_provided = Some(sample_content_provided);
    }

    pub fn set_delivery_status(&mut self, delivery_status: impl Into<Versioned<DeliveryStatusV1>>) {
        self.delivery_status = Some(delivery_status.into());
    }

    pub fn set_raw_delivery_status(&mut self, raw: i32) {
        self.delivery_status = Some(Versioned::from_raw(raw));
    }

    pub fn set_refund_preference(
        &mut self,
        refund_preference: impl Into<Versioned<RefundPreferenceV1>>,
    ) {
        self.refund_preference = Some(refund_preference.into());
    }

    pub fn set_raw_refund_preference(&mut self, raw: i32) {
        self.refund_preference = Some(Versioned::from_raw(raw));
    }

    pub fn set_app_account_token(&mut self, token: Uuid) {
        self.app_account_token = Some(token);
    }

    pub fn clear_customer_consented(&mut self) {
        self.customer_consented = None;
    }

    pub fn clear_sample_content_provided(&mut self) {
        self.sample_content_provided = None;
    }

    pub fn clear_delivery_status(&mut self) {
        self.delivery_status = None;
    }

    pub fn clear_refund_preference(&mut self) {
        self.refund_preference = None;
    }

    pub fn clear_app_account_token(&mut self) {
        self.app_account_token = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_codes_decode_to_legacy_symbols() {
        let request = ConsumptionRequestV1::decode_value(json!({
            "deliveryStatus": 4,
            "refundPreference": 2
        }))
        .unwrap();
        assert_eq!(
            request.delivery_status(),
            Some(DeliveryStatusV1::DidNotDeliverDueToInGameCurrencyChange)
        );
        assert_eq!(request.refund_preference(), Some(RefundPreferenceV1::PreferDecline));
    }

    #[test]
    fn unknown_integer_code_round_trips() {
        let request = ConsumptionRequestV1::decode_str(r#"{"deliveryStatus":99}"#).unwrap();
        assert_eq!(request.delivery_status(), None);
        assert_eq!(request.raw_delivery_status(), Some(99));
        assert_eq!(request.encode_string().unwrap(), r#"{"deliveryStatus":99}"#);
    }

    #[test]
    fn current_string_token_is_rejected() {
        assert!(ConsumptionRequestV1::decode_value(json!({"deliveryStatus": "DELIVERED"})).is_err());
        assert!(ConsumptionRequestV1::decode_value(json!({"refundPreference": "DECLINE"})).is_err());
    }

    #[test]
    fn app_account_token_is_a_hyphenated_uuid() {
        let token = Uuid::parse_str("7e3fb20b-4cdb-47cc-936d-99d65f608138").unwrap();
        let request = ConsumptionRequestV1::new().with_app_account_token(token);
        assert_eq!(
            request.encode_value().unwrap(),
            json!({"appAccountToken": "7e3fb20b-4cdb-47cc-936d-99d65f608138"})
        );
        let decoded = ConsumptionRequestV1::decode_value(request.encode_value().unwrap()).unwrap();
        assert_eq!(decoded.app_account_token(), Some(token));

        assert!(ConsumptionRequestV1::decode_value(json!({"appAccountToken": "not-a-uuid"})).is_err());
    }

    #[test]
    fn clear_removes_field_from_output() {
        let mut request = ConsumptionRequestV1::new()
            .with_customer_consented(true)
            .with_raw_refund_preference(1);
        assert_eq!(request.refund_preference(), Some(RefundPreferenceV1::PreferGrant));
        request.clear_refund_preference();
        request.clear_customer_consented();
        assert_eq!(request.encode_string().unwrap(), "{}");
    }
}
