//! Therapy response assessments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{PatientId, ResponseId, TherapyId};

/// RECIST response category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recist {
    /// Complete response.
    CR,
    /// Partial response.
    PR,
    /// Minimal response.
    MR,
    /// Stable disease.
    SD,
    /// Progressive disease.
    PD,
    /// Not assessable.
    NA,
}

/// A RECIST assessment of a therapy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub id: ResponseId,
    pub patient: PatientId,
    pub therapy: TherapyId,
    pub effective_date: NaiveDate,
    pub value: Recist,
}
