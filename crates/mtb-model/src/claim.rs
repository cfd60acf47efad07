//! Insurance claims for recommended therapies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{ClaimId, ClaimResponseId, PatientId, TherapyRecommendationId};

/// A cost-coverage claim filed for a therapy recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: ClaimId,
    pub patient: PatientId,
    pub issued_on: NaiveDate,
    pub therapy: TherapyRecommendationId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Accepted,
    Rejected,
    Unknown,
}

/// Reason an insurer rejected a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClaimRejectionReason {
    InsufficientEvidence,
    StandardTherapyNotExhausted,
    Other,
    Unknown,
}

/// The insurer's answer to a claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub id: ClaimResponseId,
    pub claim: ClaimId,
    pub patient: PatientId,
    pub issued_on: NaiveDate,
    pub status: ClaimStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ClaimRejectionReason>,
}
