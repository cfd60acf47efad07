//! Diagnoses and family member diagnoses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coding::{Coding, Icd10Code, IcdO3TCode};
use crate::ids::{DiagnosisId, FamilyMemberDiagnosisId, HistologyReportId, PatientId};

/// WHO grade of the central nervous system tumor classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhoGrade {
    I,
    II,
    III,
    IV,
}

/// Tumor status at a point in the diagnosis history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TumorStatus {
    TumorFree,
    Local,
    Metastasized,
    Unknown,
}

/// One entry of a diagnosis status history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisStatus {
    pub status: TumorStatus,
    pub date: NaiveDate,
}

/// Whether guideline treatments were available and exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuidelineTreatmentStatus {
    Exhausted,
    NonExhausted,
    Impossible,
    NoGuidelinesAvailable,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    pub id: DiagnosisId,
    pub patient: PatientId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icd10: Option<Coding<Icd10Code>>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "icdO3T")]
    pub icd_o3_t: Option<Coding<IcdO3TCode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub who_grade: Option<WhoGrade>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_history: Option<Vec<DiagnosisStatus>>,
    /// Histology reports backing this diagnosis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histology_results: Option<Vec<HistologyReportId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guideline_treatment_status: Option<GuidelineTreatmentStatus>,
}

/// Relationship of a family member to the patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FamilyRelationship {
    FamilyMember,
    ExtendedFamilyMember,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMemberDiagnosis {
    pub id: FamilyMemberDiagnosisId,
    pub patient: PatientId,
    pub relationship: FamilyRelationship,
}
