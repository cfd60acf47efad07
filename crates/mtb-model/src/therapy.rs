//! Guideline therapies preceding the MTB presentation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coding::{AtcCode, Coding};
use crate::ids::{DiagnosisId, PatientId, TherapyId};
use crate::time::Period;

/// Reason a guideline therapy was stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuidelineTherapyStopReason {
    PatientWish,
    Progression,
    Toxicity,
    StateDeterioration,
    ChronicRemission,
    Deterioration,
    Other,
    Unknown,
}

/// A guideline therapy given before the last therapy line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousGuidelineTherapy {
    pub id: TherapyId,
    pub patient: PatientId,
    pub diagnosis: DiagnosisId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub therapy_line: Option<u8>,
    pub medication: Vec<Coding<AtcCode>>,
}

/// The most recent guideline therapy before MTB presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastGuidelineTherapy {
    pub id: TherapyId,
    pub patient: PatientId,
    pub diagnosis: DiagnosisId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub therapy_line: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period<NaiveDate>>,
    pub medication: Vec<Coding<AtcCode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_stopped: Option<GuidelineTherapyStopReason>,
}
