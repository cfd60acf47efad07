//! Intake decision pipeline for MTB file uploads.
//!
//! One [`MtbIntake`] instance serves a site: it stamps incoming patients
//! with the configured local site identifier, runs the validator, and either
//! rejects the file, stages it alongside its quality report, or forwards it
//! to the downstream query service. The validation kernel underneath is
//! pure; all effects live here.

#![deny(unsafe_code)]

mod config;
mod error;
mod processor;
mod query;

pub use config::{SITE_ENV, SiteConfig};
pub use error::{IntakeError, Result};
pub use processor::{Command, MtbIntake, Outcome};
pub use query::{QueryService, QueryServiceError};
