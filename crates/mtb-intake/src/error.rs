//! Intake configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    /// The local site identifier is mandatory and has no fallback.
    #[error("environment variable {var} is not set")]
    MissingSite { var: &'static str },
}

pub type Result<T> = std::result::Result<T, IntakeError>;
