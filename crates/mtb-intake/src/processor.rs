//! The intake processor.
//!
//! `process` stamps the incoming patient with the local site, validates the
//! file, and acts on the classification: reject on fatal findings, stage
//! file and report on curatable findings, forward clean (or merely
//! informational) files downstream and purge their staged copy. Collaborator
//! failures never escape as errors; they fold into the
//! [`Outcome::UnspecificError`] variant.

use std::sync::Arc;

use chrono::Utc;

use mtb_catalogs::CatalogRegistry;
use mtb_model::{DataQualityReport, MtbFile, PatientId, Severity, Zpm};
use mtb_persistence::StagingStore;
use mtb_validate::check_mtb_file;

use crate::config::SiteConfig;
use crate::query::QueryService;

/// An intake request.
#[derive(Debug)]
pub enum Command {
    Upload(Box<MtbFile>),
    Delete(PatientId),
}

/// The caller-visible result of one intake request.
#[derive(Debug)]
pub enum Outcome {
    /// The file was forwarded downstream; nothing remains staged.
    Imported(Box<MtbFile>),
    /// The file and its report were staged for curation.
    IssuesDetected(DataQualityReport),
    /// The file was rejected outright; resubmitting it unchanged is futile.
    InvalidData(DataQualityReport),
    Deleted(PatientId),
    /// A collaborator failed; the caller may retry.
    UnspecificError(String),
}

/// How an upload proceeds, decided on the set of severities in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Classification {
    Forward,
    Stage,
    Reject,
}

fn classify(report: &DataQualityReport) -> Classification {
    match report.max_severity() {
        Some(Severity::Fatal) => Classification::Reject,
        Some(Severity::Error) | Some(Severity::Warning) => Classification::Stage,
        // A report of purely informational findings does not block intake.
        Some(Severity::Info) | None => Classification::Forward,
    }
}

/// The intake pipeline over a staging store and a query service.
pub struct MtbIntake<S, Q> {
    site: Zpm,
    catalogs: Arc<CatalogRegistry>,
    store: S,
    query: Q,
}

impl<S: StagingStore, Q: QueryService> MtbIntake<S, Q> {
    pub fn new(config: SiteConfig, catalogs: Arc<CatalogRegistry>, store: S, query: Q) -> Self {
        Self {
            site: config.site,
            catalogs,
            store,
            query,
        }
    }

    pub async fn process(&self, command: Command) -> Outcome {
        match command {
            Command::Upload(file) => self.upload(*file).await,
            Command::Delete(patient) => self.delete(patient).await,
        }
    }

    async fn upload(&self, mut file: MtbFile) -> Outcome {
        file.patient.managing_zpm = Some(self.site.clone());

        let today = Utc::now().date_naive();
        match check_mtb_file(&self.catalogs, today, &file) {
            Ok(()) => {
                tracing::info!(patient = %file.patient.id, "MTB file is clean, forwarding");
                self.forward(file).await
            }
            Err(report) => match classify(&report) {
                Classification::Reject => {
                    tracing::warn!(
                        patient = %report.patient,
                        issues = report.issues.len(),
                        "MTB file rejected with fatal issues"
                    );
                    Outcome::InvalidData(report)
                }
                Classification::Forward => {
                    tracing::info!(
                        patient = %report.patient,
                        issues = report.issues.len(),
                        "MTB file has informational findings only, forwarding"
                    );
                    self.forward(file).await
                }
                Classification::Stage => {
                    tracing::info!(
                        patient = %report.patient,
                        issues = report.issues.len(),
                        "MTB file staged with quality report"
                    );
                    self.stage(file, report).await
                }
            },
        }
    }

    async fn forward(&self, file: MtbFile) -> Outcome {
        if let Err(e) = self.query.upload(&file).await {
            return Outcome::UnspecificError(e.to_string());
        }
        match self.store.delete_all(&file.patient.id).await {
            Ok(()) => Outcome::Imported(Box::new(file)),
            Err(e) => Outcome::UnspecificError(e.to_string()),
        }
    }

    async fn stage(&self, file: MtbFile, report: DataQualityReport) -> Outcome {
        if let Err(e) = self.store.save_mtb_file(&file).await {
            return Outcome::UnspecificError(e.to_string());
        }
        if let Err(e) = self.store.save_report(&report).await {
            return Outcome::UnspecificError(e.to_string());
        }
        Outcome::IssuesDetected(report)
    }

    /// Both legs run concurrently; success requires both.
    async fn delete(&self, patient: PatientId) -> Outcome {
        let (staged, downstream) = tokio::join!(
            self.store.delete_all(&patient),
            self.query.delete(&patient),
        );

        match (staged, downstream) {
            (Ok(()), Ok(())) => {
                tracing::info!(patient = %patient, "Deleted patient data");
                Outcome::Deleted(patient)
            }
            (Err(e), _) => Outcome::UnspecificError(e.to_string()),
            (_, Err(e)) => Outcome::UnspecificError(e.to_string()),
        }
    }
}
