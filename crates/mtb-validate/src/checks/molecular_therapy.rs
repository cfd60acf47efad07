//! Molecular therapy validators.

use mtb_model::{EntityKind, MolecularTherapy};

use crate::context::ValidationContext;
use crate::outcome::{Check, all, in_set, matches_equal, validate_each};

use super::{coding, loc};

pub fn validate_molecular_therapy(ctx: &ValidationContext, therapy: &MolecularTherapy) -> Check {
    let kind = EntityKind::MolecularTherapy;
    all([
        matches_equal(
            therapy.patient(),
            &ctx.patient,
            loc(kind, therapy.id(), "patient"),
            "Molecular therapy refers to a different patient",
        ),
        in_set(
            therapy.based_on(),
            &ctx.refs.recommendations,
            loc(kind, therapy.id(), "basedOn"),
            format!(
                "Therapy recommendation '{}' is not part of this file",
                therapy.based_on()
            ),
        ),
        validate_each(therapy.medication(), |medication| {
            coding::atc(ctx, medication, loc(kind, therapy.id(), "medication"))
        }),
    ])
}
