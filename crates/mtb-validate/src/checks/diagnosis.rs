//! Diagnosis and family member diagnosis validators.

use mtb_model::{Diagnosis, EntityKind, FamilyMemberDiagnosis};

use crate::context::ValidationContext;
use crate::outcome::{Check, all, could_be, in_set, matches_equal, must_be, should_be, validate_each};

use super::{coding, loc};

pub fn validate_diagnosis(ctx: &ValidationContext, diagnosis: &Diagnosis) -> Check {
    let icd10_check = match &diagnosis.icd10 {
        Some(icd10) => coding::icd10(
            ctx,
            icd10,
            loc(EntityKind::Diagnosis, &diagnosis.id, "icd10"),
        ),
        None => must_be(
            false,
            loc(EntityKind::Diagnosis, &diagnosis.id, "icd10"),
            "ICD-10-GM coding is not defined",
        ),
    };

    let icd_o3_t_check = match &diagnosis.icd_o3_t {
        Some(topography) => coding::icd_o3_t(
            ctx,
            topography,
            loc(EntityKind::Diagnosis, &diagnosis.id, "icdO3T"),
        ),
        None => could_be(
            false,
            loc(EntityKind::Diagnosis, &diagnosis.id, "icdO3T"),
            "ICD-O-3-T coding is not defined",
        ),
    };

    all([
        matches_equal(
            &diagnosis.patient,
            &ctx.patient,
            loc(EntityKind::Diagnosis, &diagnosis.id, "patient"),
            "Diagnosis refers to a different patient",
        ),
        should_be(
            diagnosis.recorded_on.is_some(),
            loc(EntityKind::Diagnosis, &diagnosis.id, "recordedOn"),
            "Recording date is not defined",
        ),
        icd10_check,
        icd_o3_t_check,
        validate_each(diagnosis.histology_results.iter().flatten(), |report| {
            in_set(
                report,
                &ctx.refs.histology_reports,
                loc(EntityKind::Diagnosis, &diagnosis.id, "histologyResults"),
                format!("Histology report '{report}' is not part of this file"),
            )
        }),
        should_be(
            diagnosis.guideline_treatment_status.is_some(),
            loc(
                EntityKind::Diagnosis,
                &diagnosis.id,
                "guidelineTreatmentStatus",
            ),
            "Guideline treatment status is not defined",
        ),
    ])
}

pub fn validate_family_member_diagnosis(
    ctx: &ValidationContext,
    diagnosis: &FamilyMemberDiagnosis,
) -> Check {
    matches_equal(
        &diagnosis.patient,
        &ctx.patient,
        loc(EntityKind::FamilyMemberDiagnosis, &diagnosis.id, "patient"),
        "Family member diagnosis refers to a different patient",
    )
}
