//! Response validators.

use mtb_model::{EntityKind, Response};

use crate::context::ValidationContext;
use crate::outcome::{Check, all, in_set, matches_equal};

use super::loc;

pub fn validate_response(ctx: &ValidationContext, response: &Response) -> Check {
    let kind = EntityKind::Response;
    all([
        matches_equal(
            &response.patient,
            &ctx.patient,
            loc(kind, &response.id, "patient"),
            "Response refers to a different patient",
        ),
        in_set(
            &response.therapy,
            &ctx.refs.therapies,
            loc(kind, &response.id, "therapy"),
            format!("Therapy '{}' is not part of this file", response.therapy),
        ),
    ])
}
