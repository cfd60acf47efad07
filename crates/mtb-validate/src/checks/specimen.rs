//! Specimen, tumor cell content, and tumor morphology validators.

use mtb_model::{EntityKind, Specimen, TumorCellContent, TumorMorphology};

use crate::context::ValidationContext;
use crate::outcome::{Check, all, in_set, matches_equal, must_be, should_be};

use super::{coding, loc};

pub fn validate_specimen(ctx: &ValidationContext, specimen: &Specimen) -> Check {
    let kind = EntityKind::Specimen;
    all([
        matches_equal(
            &specimen.patient,
            &ctx.patient,
            loc(kind, &specimen.id, "patient"),
            "Specimen refers to a different patient",
        ),
        coding::icd10(ctx, &specimen.icd10, loc(kind, &specimen.id, "icd10")),
        in_set(
            &specimen.icd10.code.to_string(),
            &ctx.refs.diagnosis_icd10_codes,
            loc(kind, &specimen.id, "icd10"),
            format!(
                "Specimen ICD-10 code '{}' matches no diagnosis of this file",
                specimen.icd10.code
            ),
        ),
        should_be(
            specimen.specimen_type.is_some(),
            loc(kind, &specimen.id, "type"),
            "Specimen type is not defined",
        ),
        should_be(
            specimen.collection.is_some(),
            loc(kind, &specimen.id, "collection"),
            "Specimen collection is not defined",
        ),
    ])
}

/// Intrinsic checks of a tumor cell content value; the expected
/// determination method is asserted by the embedding report's validator.
pub fn validate_tumor_cell_content(ctx: &ValidationContext, content: &TumorCellContent) -> Check {
    let kind = EntityKind::TumorCellContent;
    all([
        in_set(
            &content.specimen,
            &ctx.refs.specimens,
            loc(kind, &content.id, "specimen"),
            format!("Specimen '{}' is not part of this file", content.specimen),
        ),
        must_be(
            (0.0..=1.0).contains(&content.value),
            loc(kind, &content.id, "value"),
            format!("Tumor cell content {} is outside [0, 1]", content.value),
        ),
    ])
}

pub fn validate_tumor_morphology(ctx: &ValidationContext, morphology: &TumorMorphology) -> Check {
    let kind = EntityKind::TumorMorphology;
    all([
        matches_equal(
            &morphology.patient,
            &ctx.patient,
            loc(kind, &morphology.id, "patient"),
            "Tumor morphology refers to a different patient",
        ),
        in_set(
            &morphology.specimen,
            &ctx.refs.specimens,
            loc(kind, &morphology.id, "specimen"),
            format!("Specimen '{}' is not part of this file", morphology.specimen),
        ),
        coding::icd_o3_m(
            ctx,
            &morphology.icd_o3_m,
            loc(kind, &morphology.id, "icdO3M"),
        ),
    ])
}
