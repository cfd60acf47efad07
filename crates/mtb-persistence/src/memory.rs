//! In-memory staging store, used in tests and local tooling.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use mtb_model::{DataQualityReport, MtbFile, PatientId};

use crate::error::Result;
use crate::store::StagingStore;

#[derive(Debug, Default)]
struct Inner {
    files: BTreeMap<PatientId, MtbFile>,
    reports: BTreeMap<PatientId, DataQualityReport>,
}

#[derive(Debug, Clone, Default)]
pub struct MemStagingStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemStagingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of staged MTB files.
    pub async fn file_count(&self) -> usize {
        self.inner.read().await.files.len()
    }
}

impl StagingStore for MemStagingStore {
    async fn save_mtb_file(&self, file: &MtbFile) -> Result<()> {
        self.inner
            .write()
            .await
            .files
            .insert(file.patient.id.clone(), file.clone());
        Ok(())
    }

    async fn save_report(&self, report: &DataQualityReport) -> Result<()> {
        self.inner
            .write()
            .await
            .reports
            .insert(report.patient.clone(), report.clone());
        Ok(())
    }

    async fn delete_all(&self, patient: &PatientId) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.files.remove(patient);
        inner.reports.remove(patient);
        Ok(())
    }

    async fn mtb_file(&self, patient: &PatientId) -> Result<Option<MtbFile>> {
        Ok(self.inner.read().await.files.get(patient).cloned())
    }

    async fn data_qc_report(&self, patient: &PatientId) -> Result<Option<DataQualityReport>> {
        Ok(self.inner.read().await.reports.get(patient).cloned())
    }

    async fn mtb_files(&self) -> Result<Vec<MtbFile>> {
        Ok(self.inner.read().await.files.values().cloned().collect())
    }
}
