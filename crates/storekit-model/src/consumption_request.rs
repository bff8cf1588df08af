//! # Consumption Request
//!
//! The request body a developer sends with consumption information about an
//! In-App Purchase after a customer requests a refund.
//!
//! `customerConsented`, `deliveryStatus` and `sampleContentProvided` are
//! required: decode fails without them, and [`ConsumptionRequest::new`]
//! takes all three.

use serde::{Deserialize, Serialize};
use storekit_core::{ExtensibleRecord, UnknownFields, Versioned};

use crate::delivery_status::DeliveryStatus;
use crate::refund_preference::RefundPreference;

/// Consumption information about an In-App Purchase, sent in response to a
/// refund request notification.
///
/// Enum-typed fields hold their wire token as received, so a status added by
/// a newer server is forwarded unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConsumptionRequest {
    #[serde(rename = "customerConsented")]
    customer_consented: bool,

    #[serde(
        rename = "consumptionPercentage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    consumption_percentage: Option<i32>,

    #[serde(rename = "deliveryStatus")]
    delivery_status: Versioned<DeliveryStatus>,

    #[serde(rename = "refundPreference", default, skip_serializing_if = "Option::is_none")]
    refund_preference: Option<Versioned<RefundPreference>>,

    #[serde(rename = "sampleContentProvided")]
    sample_content_provided: bool,

    #[serde(flatten)]
    unknown_fields: UnknownFields,
}

impl ExtensibleRecord for ConsumptionRequest {
    const NAME: &'static str = "ConsumptionRequest";
    const FIELDS: &'static [&'static str] = &[
        "customerConsented",
        "consumptionPercentage",
        "deliveryStatus",
        "refundPreference",
        "sampleContentProvided",
    ];
    const REQUIRED: &'static [&'static str] =
        &["customerConsented", "deliveryStatus", "sampleContentProvided"];

    fn unknown_fields(&self) -> &UnknownFields {
        &self.unknown_fields
    }

    fn unknown_fields_slot(&mut self) -> &mut UnknownFields {
        &mut self.unknown_fields
    }
}

impl ConsumptionRequest {
    /// Build a request from its required fields.
    ///
    /// `delivery_status` may be a [`DeliveryStatus`] or a raw
    /// [`Versioned`] value carrying a token this build does not declare.
    pub fn new(
        customer_consented: bool,
        delivery_status: impl Into<Versioned<DeliveryStatus>>,
        sample_content_provided: bool,
    ) -> Self {
        Self {
            customer_consented,
            consumption_percentage: None,
            delivery_status: delivery_status.into(),
            refund_preference: None,
            sample_content_provided,
            unknown_fields: UnknownFields::new(),
        }
    }

    /// Whether the customer consented to sharing consumption data.
    pub fn customer_consented(&self) -> bool {
        self.customer_consented
    }

    /// Share of the purchase consumed, in milliunits (`0..=100000`).
    pub fn consumption_percentage(&self) -> Option<i32> {
        self.consumption_percentage
    }

    /// The delivery status, if declared in this schema version.
    pub fn delivery_status(&self) -> Option<DeliveryStatus> {
        self.delivery_status.symbol()
    }

    /// The delivery status wire token, known or not.
    pub fn raw_delivery_status(&self) -> &str {
        self.delivery_status.raw()
    }

    /// The preferred refund outcome, if present and declared in this schema
    /// version.
    pub fn refund_preference(&self) -> Option<RefundPreference> {
        self.refund_preference.as_ref().and_then(Versioned::symbol)
    }

    /// The refund preference wire token, known or not.
    pub fn raw_refund_preference(&self) -> Option<&str> {
        self.refund_preference.as_ref().map(|v| v.raw().as_str())
    }

    /// Whether a free sample or trial was provided before purchase.
    pub fn sample_content_provided(&self) -> bool {
        self.sample_content_provided
    }

    pub fn with_customer_consented(mut self, customer_consented: bool) -> Self {
        self.set_customer_consented(customer_consented);
        self
    }

    pub fn with_consumption_percentage(mut self, consumption_percentage: i32) -> Self {
        self.set_consumption_percentage(consumption_percentage);
        self
    }

    pub fn with_delivery_status(mut self, delivery_status: impl Into<Versioned<DeliveryStatus>>) -> Self {
        self.set_delivery_status(delivery_status);
        self
    }

    /// Set the delivery status from a wire token, declared or not.
    pub fn with_raw_delivery_status(mut self, raw: impl Into<String>) -> Self {
        self.set_raw_delivery_status(raw);
        self
    }

    pub fn with_refund_preference(
        mut self,
        refund_preference: impl Into<Versioned<RefundPreference>>,
    ) -> Self {
        self.set_refund_preference(refund_preference);
        self
    }

    pub fn with_raw_refund_preference(mut self, raw: impl Into<String>) -> Self {
        self.set_raw_refund_preference(raw);
        self
    }

    pub fn with_sample_content_provided(mut self, sample_content_provided: bool) -> Self {
        self.set_sample_content_provided(sample_content_provided);
        self
    }

    pub fn set_customer_consented(&mut self, customer_consented: bool) {
        self.customer_consented = customer_consented;
    }

    pub fn set_consumption_percentage(&mut self, consumption_percentage: i32) {
        self.consumption_percentage = Some(consumption_percentage);
    }

    /// Accepts a declared [`DeliveryStatus`] or an already-wrapped wire value.
    pub fn set_delivery_status(&mut self, delivery_status: impl Into<Versioned<DeliveryStatus>>) {
        self.delivery_status = delivery_status.into();
    }

    pub fn set_raw_delivery_status(&mut self, raw: impl Into<String>) {
        self.delivery_status = Versioned::from_raw(raw);
    }

    pub fn set_refund_preference(&mut self, refund_preference: impl Into<Versioned<RefundPreference>>) {
        self.refund_preference = Some(refund_preference.into());
    }

    /// Set the refund preference from a wire token, declared or not.
    pub fn set_raw_refund_preference(&mut self, raw: impl Into<String>) {
        self.refund_preference = Some(Versioned::from_raw(raw));
    }

    pub fn set_sample_content_provided(&mut self, sample_content_provided: bool) {
        self.sample_content_provided = sample_content_provided;
    }

    /// Make the field absent, so it is not encoded.
    pub fn clear_consumption_percentage(&mut self) {
        self.consumption_percentage = None;
    }

    pub fn clear_refund_preference(&mut self) {
        self.refund_preference = None;
    }
}
