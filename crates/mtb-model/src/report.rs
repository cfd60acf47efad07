//! Validation issues and data quality reports.
//!
//! Defects found while validating an MTB file are values, not errors: each
//! one is an [`Issue`] with a severity and a structured location, and a
//! file's defects are collected into one [`DataQualityReport`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::PatientId;

/// Severity of a validation issue, in ascending order.
///
/// Only `Fatal` blocks intake; `Error` and `Warning` are stored with the
/// file for curation, `Info` is advisory.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Fatal => "Fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The entity kinds an issue can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    MtbFile,
    Patient,
    Consent,
    MtbEpisode,
    Diagnosis,
    FamilyMemberDiagnosis,
    PreviousGuidelineTherapy,
    LastGuidelineTherapy,
    EcogStatus,
    Specimen,
    TumorCellContent,
    TumorMorphology,
    HistologyReport,
    MolecularPathologyFinding,
    SomaticNgsReport,
    SimpleVariant,
    CarePlan,
    TherapyRecommendation,
    GeneticCounsellingRequest,
    RebiopsyRequest,
    HistologyReevaluationRequest,
    StudyInclusionRequest,
    Claim,
    ClaimResponse,
    MolecularTherapy,
    Response,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MtbFile => "MTBFile",
            Self::Patient => "Patient",
            Self::Consent => "Consent",
            Self::MtbEpisode => "MTBEpisode",
            Self::Diagnosis => "Diagnosis",
            Self::FamilyMemberDiagnosis => "FamilyMemberDiagnosis",
            Self::PreviousGuidelineTherapy => "PreviousGuidelineTherapy",
            Self::LastGuidelineTherapy => "LastGuidelineTherapy",
            Self::EcogStatus => "ECOGStatus",
            Self::Specimen => "Specimen",
            Self::TumorCellContent => "TumorCellContent",
            Self::TumorMorphology => "TumorMorphology",
            Self::HistologyReport => "HistologyReport",
            Self::MolecularPathologyFinding => "MolecularPathologyFinding",
            Self::SomaticNgsReport => "SomaticNGSReport",
            Self::SimpleVariant => "SimpleVariant",
            Self::CarePlan => "CarePlan",
            Self::TherapyRecommendation => "TherapyRecommendation",
            Self::GeneticCounsellingRequest => "GeneticCounsellingRequest",
            Self::RebiopsyRequest => "RebiopsyRequest",
            Self::HistologyReevaluationRequest => "HistologyReevaluationRequest",
            Self::StudyInclusionRequest => "StudyInclusionRequest",
            Self::Claim => "Claim",
            Self::ClaimResponse => "ClaimResponse",
            Self::MolecularTherapy => "MolecularTherapy",
            Self::Response => "Response",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where in the file an issue was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub entity: EntityKind,
    pub id: String,
    pub attribute: String,
}

impl Location {
    pub fn new(entity: EntityKind, id: impl fmt::Display, attribute: impl Into<String>) -> Self {
        Self {
            entity,
            id: id.to_string(),
            attribute: attribute.into(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.entity, self.id, self.attribute)
    }
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
    pub location: Location,
}

impl Issue {
    pub fn new(severity: Severity, location: Location, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            location,
        }
    }

    pub fn info(location: Location, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, location, message)
    }

    pub fn warning(location: Location, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, location, message)
    }

    pub fn error(location: Location, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, location, message)
    }

    pub fn fatal(location: Location, message: impl Into<String>) -> Self {
        Self::new(Severity::Fatal, location, message)
    }
}

/// All defects found in one MTB file, scoped to its patient.
///
/// A report is only ever created for a non-empty issue list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQualityReport {
    pub patient: PatientId,
    pub issued_on: NaiveDate,
    pub issues: Vec<Issue>,
}

impl DataQualityReport {
    pub fn new(patient: PatientId, issued_on: NaiveDate, issues: Vec<Issue>) -> Self {
        Self {
            patient,
            issued_on,
            issues,
        }
    }

    pub fn has_fatal(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Fatal)
    }

    /// The highest severity present, if any issue exists.
    pub fn max_severity(&self) -> Option<Severity> {
        self.issues.iter().map(|i| i.severity).max()
    }

    pub fn error_count(&self) -> usize {
        self.count_of(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count_of(Severity::Warning)
    }

    fn count_of(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc() -> Location {
        Location::new(EntityKind::Patient, "P1", "birthDate")
    }

    #[test]
    fn severities_order_ascending() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn report_summarizes_severities() {
        let report = DataQualityReport::new(
            PatientId::from("P1"),
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            vec![
                Issue::warning(loc(), "missing insurance"),
                Issue::error(loc(), "missing birth date"),
            ],
        );
        assert!(!report.has_fatal());
        assert_eq!(report.max_severity(), Some(Severity::Error));
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Fatal).unwrap(), "\"fatal\"");
    }
}
