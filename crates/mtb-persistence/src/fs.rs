//! File-backed staging store.
//!
//! One directory per patient holds the staged MTB file and its quality
//! report as JSON documents. Writes go to a temp file first and are renamed
//! into place, so a crash never leaves a half-written document behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use mtb_model::{DataQualityReport, MtbFile, PatientId};

use crate::error::{PersistenceError, Result};
use crate::store::StagingStore;

const MTB_FILE_NAME: &str = "mtbfile.json";
const REPORT_FILE_NAME: &str = "report.json";

#[derive(Debug, Clone)]
pub struct FsStagingStore {
    root: PathBuf,
}

impl FsStagingStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn patient_dir(&self, patient: &PatientId) -> PathBuf {
        self.root.join(sanitize(patient.as_str()))
    }

    fn save_mtb_file_sync(&self, file: &MtbFile) -> Result<()> {
        let path = self.patient_dir(&file.patient.id).join(MTB_FILE_NAME);
        write_json(&path, file)?;
        tracing::info!(patient = %file.patient.id, path = %path.display(), "Staged MTB file");
        Ok(())
    }

    fn save_report_sync(&self, report: &DataQualityReport) -> Result<()> {
        let path = self.patient_dir(&report.patient).join(REPORT_FILE_NAME);
        write_json(&path, report)?;
        tracing::info!(
            patient = %report.patient,
            issues = report.issues.len(),
            "Staged data quality report"
        );
        Ok(())
    }

    fn delete_all_sync(&self, patient: &PatientId) -> Result<()> {
        let dir = self.patient_dir(patient);
        if !dir.exists() {
            return Ok(());
        }
        fs::remove_dir_all(&dir).map_err(|e| PersistenceError::Io {
            operation: "delete",
            path: dir.clone(),
            source: e,
        })?;
        tracing::info!(patient = %patient, "Purged staged documents");
        Ok(())
    }

    fn mtb_file_sync(&self, patient: &PatientId) -> Result<Option<MtbFile>> {
        read_json(&self.patient_dir(patient).join(MTB_FILE_NAME))
    }

    fn data_qc_report_sync(&self, patient: &PatientId) -> Result<Option<DataQualityReport>> {
        read_json(&self.patient_dir(patient).join(REPORT_FILE_NAME))
    }

    fn mtb_files_sync(&self) -> Result<Vec<MtbFile>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&self.root).map_err(|e| PersistenceError::Io {
            operation: "list",
            path: self.root.clone(),
            source: e,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| PersistenceError::Io {
                operation: "list",
                path: self.root.clone(),
                source: e,
            })?;
            if !entry.path().is_dir() {
                continue;
            }
            if let Some(file) = read_json::<MtbFile>(&entry.path().join(MTB_FILE_NAME))? {
                files.push(file);
            }
        }
        Ok(files)
    }
}

impl StagingStore for FsStagingStore {
    async fn save_mtb_file(&self, file: &MtbFile) -> Result<()> {
        let store = self.clone();
        let file = file.clone();
        spawn_blocking(move || store.save_mtb_file_sync(&file)).await
    }

    async fn save_report(&self, report: &DataQualityReport) -> Result<()> {
        let store = self.clone();
        let report = report.clone();
        spawn_blocking(move || store.save_report_sync(&report)).await
    }

    async fn delete_all(&self, patient: &PatientId) -> Result<()> {
        let store = self.clone();
        let patient = patient.clone();
        spawn_blocking(move || store.delete_all_sync(&patient)).await
    }

    async fn mtb_file(&self, patient: &PatientId) -> Result<Option<MtbFile>> {
        let store = self.clone();
        let patient = patient.clone();
        spawn_blocking(move || store.mtb_file_sync(&patient)).await
    }

    async fn data_qc_report(&self, patient: &PatientId) -> Result<Option<DataQualityReport>> {
        let store = self.clone();
        let patient = patient.clone();
        spawn_blocking(move || store.data_qc_report_sync(&patient)).await
    }

    async fn mtb_files(&self) -> Result<Vec<MtbFile>> {
        let store = self.clone();
        spawn_blocking(move || store.mtb_files_sync()).await
    }
}

/// Run blocking store I/O off the async runtime.
async fn spawn_blocking<T: Send + 'static>(
    f: impl FnOnce() -> Result<T> + Send + 'static,
) -> Result<T> {
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| PersistenceError::Serialization {
            source: Box::new(e),
        })?
}

/// Serialize to a temp file, then rename into place.
fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).map_err(|e| PersistenceError::Serialization {
        source: Box::new(e),
    })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(&bytes).map_err(|e| PersistenceError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| PersistenceError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| PersistenceError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(PersistenceError::Io {
                operation: "read",
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| PersistenceError::Deserialization {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
}

/// Patient ids are opaque strings; anything unsafe for a directory name is
/// mapped to '_'.
fn sanitize(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
