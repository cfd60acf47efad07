//! Claim and claim response validators.

use mtb_model::{Claim, ClaimResponse, ClaimStatus, EntityKind};

use crate::context::ValidationContext;
use crate::outcome::{Check, all, in_set, matches_equal, should_be};

use super::loc;

pub fn validate_claim(ctx: &ValidationContext, claim: &Claim) -> Check {
    let kind = EntityKind::Claim;
    all([
        matches_equal(
            &claim.patient,
            &ctx.patient,
            loc(kind, &claim.id, "patient"),
            "Claim refers to a different patient",
        ),
        in_set(
            &claim.therapy,
            &ctx.refs.recommendations,
            loc(kind, &claim.id, "therapy"),
            format!(
                "Therapy recommendation '{}' is not part of this file",
                claim.therapy
            ),
        ),
    ])
}

pub fn validate_claim_response(ctx: &ValidationContext, response: &ClaimResponse) -> Check {
    let kind = EntityKind::ClaimResponse;

    // A rejection without a stated reason is suspicious but not blocking.
    let reason_check = if response.status == ClaimStatus::Rejected {
        should_be(
            response.reason.is_some(),
            loc(kind, &response.id, "reason"),
            "Rejected claim response has no reason",
        )
    } else {
        Check::ok()
    };

    all([
        matches_equal(
            &response.patient,
            &ctx.patient,
            loc(kind, &response.id, "patient"),
            "Claim response refers to a different patient",
        ),
        in_set(
            &response.claim,
            &ctx.refs.claims,
            loc(kind, &response.id, "claim"),
            format!("Claim '{}' is not part of this file", response.claim),
        ),
        reason_check,
    ])
}
