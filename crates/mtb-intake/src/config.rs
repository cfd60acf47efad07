//! Process-level intake configuration.

use mtb_model::Zpm;

use crate::error::{IntakeError, Result};

/// Environment variable naming the local tumor-center site.
pub const SITE_ENV: &str = "ZPM_SITE";

/// Intake configuration, supplied out-of-band.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// The local site stamped onto every incoming patient.
    pub site: Zpm,
}

impl SiteConfig {
    /// Read the configuration from the environment. A missing or empty site
    /// identifier is a startup error.
    pub fn from_env() -> Result<Self> {
        Self::from_value(std::env::var(SITE_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Result<Self> {
        match value {
            Some(value) if !value.trim().is_empty() => Ok(Self {
                site: Zpm::new(value.trim()),
            }),
            _ => Err(IntakeError::MissingSite { var: SITE_ENV }),
        }
    }

    pub fn new(site: Zpm) -> Self {
        Self { site }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_non_empty_site() {
        let config = SiteConfig::from_value(Some("ZPM-X".to_string())).expect("config");
        assert_eq!(config.site.as_str(), "ZPM-X");
    }

    #[test]
    fn rejects_absent_or_blank_site() {
        assert!(SiteConfig::from_value(None).is_err());
        assert!(SiteConfig::from_value(Some("   ".to_string())).is_err());
    }
}
