//! # storekit-model: App Store Server API Payloads
//!
//! Concrete payload records and enum families built on `storekit-core`.
//! Each record is a plain value type: declared fields are typed, enum fields
//! are [`Versioned`](storekit_core::Versioned), and every undeclared JSON
//! property is carried through decode and encode unchanged.
//!
//! ## Enum families
//!
//! Current families use string tokens. Legacy families (suffix `V1`) use
//! integer codes and belong to the older request generation; they are
//! distinct types with no conversion to their current counterparts.
//!
//! ## Usage
//!
//! ```
//! use storekit_core::ExtensibleRecord;
//! use storekit_model::{ConsumptionRequest, DeliveryStatus};
//!
//! let request = ConsumptionRequest::decode_str(
//!     r#"{"customerConsented":true,"deliveryStatus":"DELIVERED","sampleContentProvided":false}"#,
//! )
//! .unwrap();
//! assert_eq!(request.delivery_status(), Some(DeliveryStatus::Delivered));
//! ```

pub mod app_data;
pub mod consumption_request;
pub mod consumption_request_v1;
pub mod delivery_status;
pub mod environment;
pub mod refund_preference;
pub mod revocation_type;

pub use app_data::AppData;
pub use consumption_request::ConsumptionRequest;
pub use consumption_request_v1::ConsumptionRequestV1;
pub use delivery_status::{DeliveryStatus, DeliveryStatusV1};
pub use environment::Environment;
pub use refund_preference::{RefundPreference, RefundPreferenceV1};
pub use revocation_type::RevocationType;
