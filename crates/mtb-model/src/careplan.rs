//! Care plans, therapy recommendations, and MTB request entities.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coding::{AtcCode, Coding};
use crate::ids::{
    CarePlanId, DiagnosisId, GeneticCounsellingRequestId, HistologyReevaluationRequestId,
    PatientId, RebiopsyRequestId, SomaticNgsReportId, SpecimenId, StudyInclusionRequestId,
    TherapyRecommendationId, VariantId,
};

/// Priority of a therapy recommendation, 1 (highest) to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TherapyPriority {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
}

/// Level-of-evidence grading of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoeGrading {
    #[serde(rename = "m1A")]
    M1A,
    #[serde(rename = "m1B")]
    M1B,
    #[serde(rename = "m1C")]
    M1C,
    #[serde(rename = "m2A")]
    M2A,
    #[serde(rename = "m2B")]
    M2B,
    #[serde(rename = "m2C")]
    M2C,
    #[serde(rename = "m3")]
    M3,
    #[serde(rename = "m4")]
    M4,
    #[serde(rename = "undefined")]
    Undefined,
}

/// Level-of-evidence addendum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LoeAddendum {
    #[serde(rename = "is")]
    Is,
    #[serde(rename = "iv")]
    Iv,
    #[serde(rename = "Z")]
    Z,
    #[serde(rename = "R")]
    R,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelOfEvidence {
    pub grading: LoeGrading,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addendums: Option<Vec<LoeAddendum>>,
}

/// A recommendation of a molecular therapy issued by the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapyRecommendation {
    pub id: TherapyRecommendationId,
    pub patient: PatientId,
    pub diagnosis: DiagnosisId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub medication: Vec<Coding<AtcCode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TherapyPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_of_evidence: Option<LevelOfEvidence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngs_report: Option<SomaticNgsReportId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_variants: Option<Vec<VariantId>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneticCounsellingRequest {
    pub id: GeneticCounsellingRequestId,
    pub patient: PatientId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebiopsyRequest {
    pub id: RebiopsyRequestId,
    pub patient: PatientId,
    pub specimen: SpecimenId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistologyReevaluationRequest {
    pub id: HistologyReevaluationRequestId,
    pub patient: PatientId,
    pub specimen: SpecimenId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
}

/// A ClinicalTrials.gov study number. The well-formed shape is `NCT`
/// followed by eight digits; conformance is a validation concern, not a
/// construction one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NctNumber(String);

impl NctNumber {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `NCT` followed by exactly eight digits.
    pub fn is_well_formed(&self) -> bool {
        let Some(digits) = self.0.strip_prefix("NCT") else {
            return false;
        };
        digits.len() == 8 && digits.bytes().all(|b| b.is_ascii_digit())
    }
}

impl fmt::Display for NctNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyInclusionRequest {
    pub id: StudyInclusionRequestId,
    pub patient: PatientId,
    pub diagnosis: DiagnosisId,
    pub nct_number: NctNumber,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
}

/// The outcome of one MTB conference for one diagnosis.
///
/// Either the board found no molecular target (`no_target_finding` set and
/// no recommendations) or it issued at least one recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlan {
    pub id: CarePlanId,
    pub patient: PatientId,
    pub diagnosis: DiagnosisId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_target_finding: Option<NoTargetFinding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<TherapyRecommendationId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genetic_counselling_request: Option<GeneticCounsellingRequestId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebiopsy_requests: Option<Vec<RebiopsyRequestId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_inclusion_request: Option<StudyInclusionRequestId>,
}

/// Statement that no molecularly targetable alteration was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoTargetFinding {
    pub patient: PatientId,
    pub diagnosis: DiagnosisId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nct_number_format() {
        assert!(NctNumber::new("NCT01234567").is_well_formed());
        assert!(!NctNumber::new("NCT1234567").is_well_formed());
        assert!(!NctNumber::new("NCT012345678").is_well_formed());
        assert!(!NctNumber::new("nct01234567").is_well_formed());
        assert!(!NctNumber::new("01234567").is_well_formed());
    }

    #[test]
    fn priority_serializes_as_digit() {
        assert_eq!(serde_json::to_string(&TherapyPriority::One).unwrap(), "\"1\"");
    }

    #[test]
    fn loe_grading_round_trips() {
        let json = serde_json::to_string(&LoeGrading::M1A).unwrap();
        assert_eq!(json, "\"m1A\"");
        assert_eq!(serde_json::from_str::<LoeGrading>(&json).unwrap(), LoeGrading::M1A);
    }
}
