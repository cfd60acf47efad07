//! Histology and molecular pathology reports.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{HistologyReportId, MolecularPathologyFindingId, PatientId, SpecimenId};
use crate::specimen::{TumorCellContent, TumorMorphology};

/// A histology report on one specimen.
///
/// The embedded tumor cell content must have been determined histologically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistologyReport {
    pub id: HistologyReportId,
    pub patient: PatientId,
    pub specimen: SpecimenId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tumor_morphology: Option<TumorMorphology>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tumor_cell_content: Option<TumorCellContent>,
}

/// A molecular pathology finding on one specimen, as free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MolecularPathologyFinding {
    pub id: MolecularPathologyFindingId,
    pub patient: PatientId,
    pub specimen: SpecimenId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
