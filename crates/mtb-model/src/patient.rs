//! Patient identity, consent, episode, and performance status.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::ids::{ConsentId, EcogStatusId, EpisodeId, PatientId, Zpm};
use crate::time::{Period, YearMonth};

/// Administrative gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
    Unknown,
}

/// Health insurance reference of a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInsurance {
    pub ik: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

/// A patient as carried in an MTB file.
///
/// `birth_date` and `date_of_death` are year-month values; day precision is
/// withheld at the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: PatientId,
    pub gender: Gender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<YearMonth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managing_zpm: Option<Zpm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<HealthInsurance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_death: Option<YearMonth>,
}

/// Whether medical data may be present in the file at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentStatus {
    Active,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consent {
    pub id: ConsentId,
    pub patient: PatientId,
    pub status: ConsentStatus,
}

/// The MTB care episode of a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MtbEpisode {
    pub id: EpisodeId,
    pub patient: PatientId,
    pub period: Period<NaiveDate>,
}

/// ECOG performance status observation (grade 0 to 5).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcogStatus {
    pub id: EcogStatusId,
    pub patient: PatientId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
    pub value: u8,
}
