//! # Revocation Type

use std::fmt;

use storekit_core::WireEnum;

/// The type of the refund or revocation that applies to a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevocationType {
    /// Full refund.
    RefundFull,
    /// Prorated refund.
    RefundProrated,
    /// Access revoked from a family-sharing member.
    FamilyRevoke,
}

impl RevocationType {
    /// The wire token for this revocation type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RefundFull => "REFUND_FULL",
            Self::RefundProrated => "REFUND_PRORATED",
            Self::FamilyRevoke => "FAMILY_REVOKE",
        }
    }
}

impl WireEnum for RevocationType {
    type Wire = String;
    const FAMILY: &'static str = "RevocationType";

    fn variants() -> &'static [Self] {
        &[Self::RefundFull, Self::RefundProrated, Self::FamilyRevoke]
    }

    fn to_wire(self) -> String {
        self.as_str().to_string()
    }

    fn from_wire(raw: &String) -> Option<Self> {
        match raw.as_str() {
            "REFUND_FULL" => Some(Self::RefundFull),
            "REFUND_PRORATED" => Some(Self::RefundProrated),
            "FAMILY_REVOKE" => Some(Self::FamilyRevoke),
            _ => None,
        }
    }
}

impl fmt::Display for RevocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
