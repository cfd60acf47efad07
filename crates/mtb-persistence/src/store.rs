//! The staging store interface.

use mtb_model::{DataQualityReport, MtbFile, PatientId};

use crate::error::Result;

/// Key-scoped storage for files awaiting curation.
///
/// An uploaded file with non-fatal findings is staged together with its
/// quality report until the defects are resolved; a clean upload is
/// forwarded downstream and its staged copy purged. `save_mtb_file` and
/// `save_report` are issued together for the same patient, so an
/// implementation must keep the pair consistent per patient key.
/// `delete_all` is idempotent.
pub trait StagingStore: Send + Sync {
    fn save_mtb_file(&self, file: &MtbFile) -> impl Future<Output = Result<()>> + Send;

    fn save_report(&self, report: &DataQualityReport) -> impl Future<Output = Result<()>> + Send;

    /// Remove every staged document of the patient. Removing an absent
    /// patient is not an error.
    fn delete_all(&self, patient: &PatientId) -> impl Future<Output = Result<()>> + Send;

    fn mtb_file(&self, patient: &PatientId)
    -> impl Future<Output = Result<Option<MtbFile>>> + Send;

    fn data_qc_report(
        &self,
        patient: &PatientId,
    ) -> impl Future<Output = Result<Option<DataQualityReport>>> + Send;

    /// All staged MTB files, in unspecified order.
    fn mtb_files(&self) -> impl Future<Output = Result<Vec<MtbFile>>> + Send;
}
