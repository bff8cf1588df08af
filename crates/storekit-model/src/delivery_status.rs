//! # Delivery Status
//!
//! Whether the app successfully delivered an In-App Purchase that works
//! properly. Two unrelated families exist: the current string-valued
//! [`DeliveryStatus`] and the deprecated integer-valued
//! [`DeliveryStatusV1`] used by the older consumption request generation.
//! There is no conversion between them.

use std::fmt;

use storekit_core::WireEnum;

/// Delivery outcome reported in a consumption request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryStatus {
    /// Delivered and working properly.
    Delivered,
    /// Not delivered due to a quality issue.
    UndeliveredQualityIssue,
    /// The wrong item was delivered.
    UndeliveredWrongItem,
    /// Not delivered due to a server outage.
    UndeliveredServerOutage,
    /// Not delivered for another reason.
    UndeliveredOther,
}

impl DeliveryStatus {
    /// The wire token for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delivered => "DELIVERED",
            Self::UndeliveredQualityIssue => "UNDELIVERED_QUALITY_ISSUE",
            Self::UndeliveredWrongItem => "UNDELIVERED_WRONG_ITEM",
            Self::UndeliveredServerOutage => "UNDELIVERED_SERVER_OUTAGE",
            Self::UndeliveredOther => "UNDELIVERED_OTHER",
        }
    }
}

impl WireEnum for DeliveryStatus {
    type Wire = String;
    const FAMILY: &'static str = "DeliveryStatus";

    fn variants() -> &'static [Self] {
        &[
            Self::Delivered,
            Self::UndeliveredQualityIssue,
            Self::UndeliveredWrongItem,
            Self::UndeliveredServerOutage,
            Self::UndeliveredOther,
        ]
    }

    fn to_wire(self) -> String {
        self.as_str().to_string()
    }

    fn from_wire(raw: &String) -> Option<Self> {
        match raw.as_str() {
            "DELIVERED" => Some(Self::Delivered),
            "UNDELIVERED_QUALITY_ISSUE" => Some(Self::UndeliveredQualityIssue),
            "UNDELIVERED_WRONG_ITEM" => Some(Self::UndeliveredWrongItem),
            "UNDELIVERED_SERVER_OUTAGE" => Some(Self::UndeliveredServerOutage),
            "UNDELIVERED_OTHER" => Some(Self::UndeliveredOther),
            _ => None,
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Legacy integer-valued delivery status.
///
/// Deprecated: use [`DeliveryStatus`]. Kept for payloads of the older API
/// generation, whose integer codes are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryStatusV1 {
    /// `0`
    DeliveredAndWorkingProperly,
    /// `1`
    DidNotDeliverDueToQualityIssue,
    /// `2`
    DeliveredWrongItem,
    /// `3`
    DidNotDeliverDueToServerOutage,
    /// `4`
    DidNotDeliverDueToInGameCurrencyChange,
    /// `5`
    DidNotDeliverForOtherReason,
}

impl DeliveryStatusV1 {
    /// The integer wire code for this status.
    pub fn value(&self) -> i32 {
        match self {
            Self::DeliveredAndWorkingProperly => 0,
            Self::DidNotDeliverDueToQualityIssue => 1,
            Self::DeliveredWrongItem => 2,
            Self::DidNotDeliverDueToServerOutage => 3,
            Self::DidNotDeliverDueToInGameCurrencyChange => 4,
            Self::DidNotDeliverForOtherReason => 5,
        }
    }
}

impl WireEnum for DeliveryStatusV1 {
    type Wire = i32;
    const FAMILY: &'static str = "DeliveryStatusV1";

    fn variants() -> &'static [Self] {
        &[
            Self::DeliveredAndWorkingProperly,
            Self::DidNotDeliverDueToQualityIssue,
            Self::DeliveredWrongItem,
            Self::DidNotDeliverDueToServerOutage,
            Self::DidNotDeliverDueToInGameCurrencyChange,
            Self::DidNotDeliverForOtherReason,
        ]
    }

    fn to_wire(self) -> i32 {
        self.value()
    }

    fn from_wire(raw: &i32) -> Option<Self> {
        match raw {
            0 => Some(Self::DeliveredAndWorkingProperly),
            1 => Some(Self::DidNotDeliverDueToQualityIssue),
            2 => Some(Self::DeliveredWrongItem),
            3 => Some(Self::DidNotDeliverDueToServerOutage),
            4 => Some(Self::DidNotDeliverDueToInGameCurrencyChange),
            5 => Some(Self::DidNotDeliverForOtherReason),
            _ => None,
        }
    }
}

impl fmt::Display for DeliveryStatusV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
