//! Coded values referencing external code systems.
//!
//! A [`Coding`] pairs a code with the code system it comes from, an optional
//! display text, and an optional catalog version. The code type determines
//! the system: a `Coding<Icd10Code>` can never hold an ATC code.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A code type bound to a fixed external code system.
pub trait CodeSystem {
    /// Canonical identifier of the code system.
    const SYSTEM: &'static str;
}

macro_rules! define_code {
    ($(#[$meta:meta])* $name:ident, $system:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl CodeSystem for $name {
            const SYSTEM: &'static str = $system;
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_code!(
    /// ICD-10-GM diagnosis code (e.g. "C34.9").
    Icd10Code,
    "ICD-10-GM"
);
define_code!(
    /// ICD-O-3 topography code (e.g. "C34.9").
    IcdO3TCode,
    "ICD-O-3-T"
);
define_code!(
    /// ICD-O-3 morphology code (e.g. "8070/3").
    IcdO3MCode,
    "ICD-O-3-M"
);
define_code!(
    /// ATC medication code (e.g. "L01XE03").
    AtcCode,
    "ATC"
);
define_code!(
    /// HGNC gene symbol (e.g. "BRAF").
    HgncSymbol,
    "HGNC"
);

/// A coded value: code, system, optional display and version.
///
/// The system is fixed by the code type; on the wire it is carried
/// explicitly, and omitted fields default to the type's system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coding<C> {
    pub code: C,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl<C> Coding<C> {
    pub fn new(code: C) -> Self {
        Self {
            code,
            display: None,
            system: None,
            version: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }
}

impl<C: CodeSystem> Coding<C> {
    /// The code system of this coding, defaulting to the code type's system.
    pub fn system(&self) -> &str {
        self.system.as_deref().unwrap_or(C::SYSTEM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_defaults_from_code_type() {
        let coding = Coding::new(Icd10Code::from("C34.9")).with_version("2024");
        assert_eq!(coding.system(), "ICD-10-GM");
        assert_eq!(coding.version.as_deref(), Some("2024"));
    }

    #[test]
    fn explicit_system_wins() {
        let mut coding = Coding::new(AtcCode::from("L01XE03"));
        coding.system = Some("ATC-2020".to_string());
        assert_eq!(coding.system(), "ATC-2020");
    }
}
