//! Contract tests: encoded records validate against the published JSON
//! schemas in `schemas/`, and the schemas reject what the decoders reject.

use std::path::PathBuf;

use jsonschema::{Draft, Validator};
use serde_json::{json, Value};
use storekit_core::ExtensibleRecord;
use storekit_model::{
    AppData, ConsumptionRequest, ConsumptionRequestV1, DeliveryStatus, DeliveryStatusV1,
    Environment, RefundPreference,
};
use uuid::Uuid;

/// Find the repository root.
fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir
}

fn validator(filename: &str) -> Validator {
    let path = repo_root().join("schemas").join(filename);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    let schema: Value = serde_json::from_str(&text).unwrap();
    let mut opts = jsonschema::options();
    opts.with_draft(Draft::Draft202012);
    opts.build(&schema)
        .unwrap_or_else(|e| panic!("Failed to compile {filename}: {e}"))
}

fn assert_valid(validator: &Validator, instance: &Value) {
    let errors: Vec<String> = validator.iter_errors(instance).map(|e| e.to_string()).collect();
    assert!(errors.is_empty(), "Schema violations for {instance}: {errors:?}");
}

#[test]
fn test_app_data_conforms() {
    let v = validator("app-data.schema.json");
    let data = AppData::new()
        .with_app_apple_id(987654321)
        .with_bundle_id("com.example")
        .with_environment(Environment::LocalTesting)
        .with_signed_app_transaction_info("header.payload.signature");
    assert_valid(&v, &data.encode_value().unwrap());
    assert_valid(&v, &AppData::new().encode_value().unwrap());
}

#[test]
fn test_consumption_request_conforms() {
    let v = validator("consumption-request.schema.json");
    let request = ConsumptionRequest::new(true, DeliveryStatus::UndeliveredQualityIssue, false)
        .with_consumption_percentage(100000)
        .with_refund_preference(RefundPreference::Decline)
        .with_unknown_field("futureField", json!(42))
        .unwrap();
    assert_valid(&v, &request.encode_value().unwrap());
}

#[test]
fn test_unknown_enum_tokens_conform() {
    let v = validator("consumption-request.schema.json");
    let request = ConsumptionRequest::new(true, DeliveryStatus::Delivered, true)
        .with_raw_delivery_status("NEW_UNKNOWN_STATUS");
    assert_valid(&v, &request.encode_value().unwrap());
}

#[test]
fn test_consumption_request_v1_conforms() {
    let v = validator("consumption-request-v1.schema.json");
    let request = ConsumptionRequestV1::new()
        .with_customer_consented(true)
        .with_delivery_status(DeliveryStatusV1::DidNotDeliverForOtherReason)
        .with_raw_refund_preference(7)
        .with_app_account_token(Uuid::new_v4());
    assert_valid(&v, &request.encode_value().unwrap());
}

#[test]
fn test_schema_and_decoder_agree_on_required_fields() {
    let v = validator("consumption-request.schema.json");
    let incomplete = json!({"customerConsented": true});
    assert!(!v.is_valid(&incomplete));
    assert!(ConsumptionRequest::decode_value(incomplete).is_err());

    let complete = json!({
        "customerConsented": true,
        "deliveryStatus": "DELIVERED",
        "sampleContentProvided": false
    });
    assert!(v.is_valid(&complete));
    assert!(ConsumptionRequest::decode_value(complete).is_ok());
}

#[test]
fn test_schema_and_decoder_agree_on_types() {
    let v = validator("consumption-request.schema.json");
    let wrong = json!({
        "customerConsented": "yes",
        "deliveryStatus": "DELIVERED",
        "sampleContentProvided": false
    });
    assert!(!v.is_valid(&wrong));
    assert!(ConsumptionRequest::decode_value(wrong).is_err());

    let legacy_code = json!({
        "customerConsented": true,
        "deliveryStatus": 0,
        "sampleContentProvided": false
    });
    assert!(!v.is_valid(&legacy_code));
    assert!(ConsumptionRequest::decode_value(legacy_code).is_err());
}

#[test]
fn test_fixtures_conform() {
    let fixtures = repo_root().join("crates/storekit-model/tests/resources/models");
    let cases = [
        ("appData.json", "app-data.schema.json"),
        ("consumptionRequest.json", "consumption-request.schema.json"),
        ("consumptionRequestV1.json", "consumption-request-v1.schema.json"),
    ];
    for (fixture, schema) in cases {
        let text = std::fs::read_to_string(fixtures.join(fixture)).unwrap();
        let instance: Value = serde_json::from_str(&text).unwrap();
        assert_valid(&validator(schema), &instance);
    }
}
