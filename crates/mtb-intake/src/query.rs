//! The downstream query service interface.

use mtb_model::{MtbFile, PatientId};
use thiserror::Error;

/// Failure of a query-service call. Callers may retry; uploads should be
/// idempotent on the service side.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct QueryServiceError {
    pub message: String,
}

impl QueryServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The downstream system admitted files are forwarded to.
pub trait QueryService: Send + Sync {
    fn upload(
        &self,
        file: &MtbFile,
    ) -> impl Future<Output = std::result::Result<(), QueryServiceError>> + Send;

    fn delete(
        &self,
        patient: &PatientId,
    ) -> impl Future<Output = std::result::Result<(), QueryServiceError>> + Send;
}
