//! Guideline therapy validators.

use mtb_model::{EntityKind, LastGuidelineTherapy, PreviousGuidelineTherapy};

use crate::context::ValidationContext;
use crate::outcome::{Check, all, in_set, matches_equal, should_be, validate_each};

use super::{coding, loc};

pub fn validate_previous_guideline_therapy(
    ctx: &ValidationContext,
    therapy: &PreviousGuidelineTherapy,
) -> Check {
    let kind = EntityKind::PreviousGuidelineTherapy;
    all([
        matches_equal(
            &therapy.patient,
            &ctx.patient,
            loc(kind, &therapy.id, "patient"),
            "Guideline therapy refers to a different patient",
        ),
        in_set(
            &therapy.diagnosis,
            &ctx.refs.diagnoses,
            loc(kind, &therapy.id, "diagnosis"),
            format!("Diagnosis '{}' is not part of this file", therapy.diagnosis),
        ),
        should_be(
            therapy.therapy_line.is_some(),
            loc(kind, &therapy.id, "therapyLine"),
            "Therapy line is not defined",
        ),
        validate_each(&therapy.medication, |medication| {
            coding::atc(ctx, medication, loc(kind, &therapy.id, "medication"))
        }),
    ])
}

pub fn validate_last_guideline_therapy(
    ctx: &ValidationContext,
    therapy: &LastGuidelineTherapy,
) -> Check {
    let kind = EntityKind::LastGuidelineTherapy;

    // The period warning ladder: a missing period subsumes a missing end.
    let period_check = should_be(
        therapy.period.is_some(),
        loc(kind, &therapy.id, "period"),
        "Therapy period is not defined",
    )
    .and_then(|_| {
        should_be(
            therapy.period.as_ref().is_some_and(|p| p.end.is_some()),
            loc(kind, &therapy.id, "period"),
            "Therapy period has no end date",
        )
    });

    all([
        matches_equal(
            &therapy.patient,
            &ctx.patient,
            loc(kind, &therapy.id, "patient"),
            "Guideline therapy refers to a different patient",
        ),
        in_set(
            &therapy.diagnosis,
            &ctx.refs.diagnoses,
            loc(kind, &therapy.id, "diagnosis"),
            format!("Diagnosis '{}' is not part of this file", therapy.diagnosis),
        ),
        should_be(
            therapy.therapy_line.is_some(),
            loc(kind, &therapy.id, "therapyLine"),
            "Therapy line is not defined",
        ),
        period_check,
        validate_each(&therapy.medication, |medication| {
            coding::atc(ctx, medication, loc(kind, &therapy.id, "medication"))
        }),
        should_be(
            therapy.reason_stopped.is_some(),
            loc(kind, &therapy.id, "reasonStopped"),
            "Stop reason is not defined",
        ),
        should_be(
            ctx.refs.responded_therapies.contains(&therapy.id),
            loc(kind, &therapy.id, "response"),
            "No response is recorded for this therapy",
        ),
    ])
}
