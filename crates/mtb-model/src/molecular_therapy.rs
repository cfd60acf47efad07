//! Documentation of molecular therapies following a recommendation.
//!
//! A molecular therapy is a tagged union over its lifecycle status. The wire
//! discriminator is the `status` field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coding::{AtcCode, Coding};
use crate::ids::{PatientId, TherapyId, TherapyRecommendationId};
use crate::time::Period;

/// Reason a recommended therapy was never started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotDoneReason {
    PaymentRefused,
    PaymentPending,
    NoIndication,
    MedicalReason,
    PatientRefusal,
    PatientDeath,
    OtherTherapyChosen,
    ContinuedExternally,
    LostToFu,
    Other,
    Unknown,
}

/// Reason a running molecular therapy was stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TherapyStopReason {
    Remission,
    PatientWish,
    PaymentEnded,
    MedicalReason,
    Progression,
    PatientDeath,
    Toxicity,
    OtherTherapyChosen,
    ContinuedExternally,
    StateDeterioration,
    Other,
    Unknown,
}

/// One molecular therapy documentation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum MolecularTherapy {
    #[serde(rename_all = "camelCase")]
    NotDone {
        id: TherapyId,
        patient: PatientId,
        recorded_on: NaiveDate,
        based_on: TherapyRecommendationId,
        not_done_reason: NotDoneReason,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Ongoing {
        id: TherapyId,
        patient: PatientId,
        recorded_on: NaiveDate,
        based_on: TherapyRecommendationId,
        period: Period<NaiveDate>,
        medication: Vec<Coding<AtcCode>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Stopped {
        id: TherapyId,
        patient: PatientId,
        recorded_on: NaiveDate,
        based_on: TherapyRecommendationId,
        period: Period<NaiveDate>,
        medication: Vec<Coding<AtcCode>>,
        reason_stopped: TherapyStopReason,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Completed {
        id: TherapyId,
        patient: PatientId,
        recorded_on: NaiveDate,
        based_on: TherapyRecommendationId,
        period: Period<NaiveDate>,
        medication: Vec<Coding<AtcCode>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
}

impl MolecularTherapy {
    pub fn id(&self) -> &TherapyId {
        match self {
            Self::NotDone { id, .. }
            | Self::Ongoing { id, .. }
            | Self::Stopped { id, .. }
            | Self::Completed { id, .. } => id,
        }
    }

    pub fn patient(&self) -> &PatientId {
        match self {
            Self::NotDone { patient, .. }
            | Self::Ongoing { patient, .. }
            | Self::Stopped { patient, .. }
            | Self::Completed { patient, .. } => patient,
        }
    }

    pub fn based_on(&self) -> &TherapyRecommendationId {
        match self {
            Self::NotDone { based_on, .. }
            | Self::Ongoing { based_on, .. }
            | Self::Stopped { based_on, .. }
            | Self::Completed { based_on, .. } => based_on,
        }
    }

    /// Medication of the therapy; empty for a therapy that was not done.
    pub fn medication(&self) -> &[Coding<AtcCode>] {
        match self {
            Self::NotDone { .. } => &[],
            Self::Ongoing { medication, .. }
            | Self::Stopped { medication, .. }
            | Self::Completed { medication, .. } => medication,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_the_wire_discriminator() {
        let therapy = MolecularTherapy::NotDone {
            id: TherapyId::from("MT1"),
            patient: PatientId::from("P1"),
            recorded_on: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            based_on: TherapyRecommendationId::from("TR1"),
            not_done_reason: NotDoneReason::PaymentRefused,
            note: None,
        };
        let json = serde_json::to_value(&therapy).unwrap();
        assert_eq!(json["status"], "not-done");
        assert_eq!(json["notDoneReason"], "payment-refused");

        let parsed: MolecularTherapy = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, therapy);
    }

    #[test]
    fn accessors_reach_into_every_variant() {
        let therapy = MolecularTherapy::Stopped {
            id: TherapyId::from("MT2"),
            patient: PatientId::from("P1"),
            recorded_on: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            based_on: TherapyRecommendationId::from("TR1"),
            period: Period::closed(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            ),
            medication: vec![Coding::new(AtcCode::from("L01XE03"))],
            reason_stopped: TherapyStopReason::Toxicity,
            note: None,
        };
        assert_eq!(therapy.id().as_str(), "MT2");
        assert_eq!(therapy.medication().len(), 1);
    }
}
