//! # Environment
//!
//! The server environment a payload applies to.

use std::fmt;

use storekit_core::WireEnum;

/// The server environment, either sandbox or production.
///
/// | Variant | Wire |
/// |---------|------|
/// | `Sandbox` | `"Sandbox"` |
/// | `Production` | `"Production"` |
/// | `Xcode` | `"Xcode"` |
/// | `LocalTesting` | `"LocalTesting"` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    /// The App Store sandbox.
    Sandbox,
    /// The production App Store.
    Production,
    /// StoreKit testing in Xcode.
    Xcode,
    /// Local testing environment.
    LocalTesting,
}

impl Environment {
    /// The wire token for this environment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sandbox => "Sandbox",
            Self::Production => "Production",
            Self::Xcode => "Xcode",
            Self::LocalTesting => "LocalTesting",
        }
    }
}

impl WireEnum for Environment {
    type Wire = String;
    const FAMILY: &'static str = "Environment";

    fn variants() -> &'static [Self] {
        &[Self::Sandbox, Self::Production, Self::Xcode, Self::LocalTesting]
    }

    fn to_wire(self) -> String {
        self.as_str().to_string()
    }

    fn from_wire(raw: &String) -> Option<Self> {
        match raw.as_str() {
            "Sandbox" => Some(Self::Sandbox),
            "Production" => Some(Self::Production),
            "Xcode" => Some(Self::Xcode),
            "LocalTesting" => Some(Self::LocalTesting),
            _ => None,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
