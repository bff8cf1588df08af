//! # Refund Preference
//!
//! The developer's preferred outcome for a refund request, in the current
//! string-valued family and the deprecated integer-valued family.

use std::fmt;

use storekit_core::WireEnum;

/// Preferred outcome for the refund request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefundPreference {
    /// Prefer that the request is declined.
    Decline,
    /// Prefer a full refund.
    GrantFull,
    /// Prefer a prorated refund.
    GrantProrated,
}

impl RefundPreference {
    /// The wire token for this preference.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decline => "DECLINE",
            Self::GrantFull => "GRANT_FULL",
            Self::GrantProrated => "GRANT_PRORATED",
        }
    }
}

impl WireEnum for RefundPreference {
    type Wire = String;
    const FAMILY: &'static str = "RefundPreference";

    fn variants() -> &'static [Self] {
        &[Self::Decline, Self::GrantFull, Self::GrantProrated]
    }

    fn to_wire(self) -> String {
        self.as_str().to_string()
    }

    fn from_wire(raw: &String) -> Option<Self> {
        match raw.as_str() {
            "DECLINE" => Some(Self::Decline),
            "GRANT_FULL" => Some(Self::GrantFull),
            "GRANT_PRORATED" => Some(Self::GrantProrated),
            _ => None,
        }
    }
}

impl fmt::Display for RefundPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Legacy integer-valued refund preference.
///
/// Deprecated: use [`RefundPreference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefundPreferenceV1 {
    /// `0`
    Undeclared,
    /// `1`
    PreferGrant,
    /// `2`
    PreferDecline,
    /// `3`
    NoPreference,
}

impl RefundPreferenceV1 {
    /// The integer wire code for this preference.
    pub fn value(&self) -> i32 {
        match self {
            Self::Undeclared => 0,
            Self::PreferGrant => 1,
            Self::PreferDecline => 2,
            Self::NoPreference => 3,
        }
    }
}

impl WireEnum for RefundPreferenceV1 {
    type Wire = i32;
    const FAMILY: &'static str = "RefundPreferenceV1";

    fn variants() -> &'static [Self] {
        &[
            Self::Undeclared,
            Self::PreferGrant,
            Self::PreferDecline,
            Self::NoPreference,
        ]
    }

    fn to_wire(self) -> i32 {
        self.value()
    }

    fn from_wire(raw: &i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Undeclared),
            1 => Some(Self::PreferGrant),
            2 => Some(Self::PreferDecline),
            3 => Some(Self::NoPreference),
            _ => None,
        }
    }
}

impl fmt::Display for RefundPreferenceV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
