//! Care plan, therapy recommendation, and request validators.

use mtb_model::{
    CarePlan, EntityKind, GeneticCounsellingRequest, HistologyReevaluationRequest,
    RebiopsyRequest, StudyInclusionRequest, TherapyRecommendation,
};

use crate::context::ValidationContext;
use crate::outcome::{Check, all, in_set, matches_equal, must_be, should_be, validate_each};

use super::{coding, loc};

pub fn validate_care_plan(ctx: &ValidationContext, plan: &CarePlan) -> Check {
    let kind = EntityKind::CarePlan;

    let recommendation_count = plan.recommendations.as_ref().map(Vec::len).unwrap_or(0);

    // Exactly one of: a no-target statement, or at least one recommendation.
    let exclusivity_check = if plan.no_target_finding.is_some() {
        must_be(
            recommendation_count == 0,
            loc(kind, &plan.id, "recommendations"),
            "Recommendations are present despite a no-target finding",
        )
    } else {
        must_be(
            recommendation_count > 0,
            loc(kind, &plan.id, "recommendations"),
            "Care plan has neither recommendations nor a no-target finding",
        )
    };

    let counselling_check = match &plan.genetic_counselling_request {
        Some(request) => in_set(
            request,
            &ctx.refs.counselling_requests,
            loc(kind, &plan.id, "geneticCounsellingRequest"),
            format!("Genetic counselling request '{request}' is not part of this file"),
        ),
        None => Check::ok(),
    };

    let study_inclusion_check = match &plan.study_inclusion_request {
        Some(request) => in_set(
            request,
            &ctx.refs.study_inclusion_requests,
            loc(kind, &plan.id, "studyInclusionRequest"),
            format!("Study inclusion request '{request}' is not part of this file"),
        ),
        None => Check::ok(),
    };

    all([
        matches_equal(
            &plan.patient,
            &ctx.patient,
            loc(kind, &plan.id, "patient"),
            "Care plan refers to a different patient",
        ),
        in_set(
            &plan.diagnosis,
            &ctx.refs.diagnoses,
            loc(kind, &plan.id, "diagnosis"),
            format!("Diagnosis '{}' is not part of this file", plan.diagnosis),
        ),
        should_be(
            plan.issued_on.is_some(),
            loc(kind, &plan.id, "issuedOn"),
            "Issue date is not defined",
        ),
        exclusivity_check,
        validate_each(plan.recommendations.iter().flatten(), |recommendation| {
            in_set(
                recommendation,
                &ctx.refs.recommendations,
                loc(kind, &plan.id, "recommendations"),
                format!("Recommendation '{recommendation}' is not part of this file"),
            )
        }),
        counselling_check,
        validate_each(plan.rebiopsy_requests.iter().flatten(), |request| {
            in_set(
                request,
                &ctx.refs.rebiopsy_requests,
                loc(kind, &plan.id, "rebiopsyRequests"),
                format!("Rebiopsy request '{request}' is not part of this file"),
            )
        }),
        study_inclusion_check,
    ])
}

pub fn validate_recommendation(
    ctx: &ValidationContext,
    recommendation: &TherapyRecommendation,
) -> Check {
    let kind = EntityKind::TherapyRecommendation;

    // A missing NGS report is a warning; a dangling one is fatal.
    let ngs_report_check = match &recommendation.ngs_report {
        Some(report) => in_set(
            report,
            &ctx.refs.ngs_reports,
            loc(kind, &recommendation.id, "ngsReport"),
            format!("NGS report '{report}' is not part of this file"),
        ),
        None => should_be(
            false,
            loc(kind, &recommendation.id, "ngsReport"),
            "Recommendation refers to no NGS report",
        ),
    };

    let allowed_variants = ctx.refs.variants_of(recommendation.ngs_report.as_ref());
    let variants_check = match &recommendation.supporting_variants {
        Some(variants) => validate_each(variants, |variant| {
            in_set(
                variant,
                &allowed_variants,
                loc(kind, &recommendation.id, "supportingVariants"),
                format!("Variant '{variant}' is not part of the referenced NGS report"),
            )
        }),
        None => should_be(
            false,
            loc(kind, &recommendation.id, "supportingVariants"),
            "Supporting variants are not defined",
        ),
    };

    all([
        matches_equal(
            &recommendation.patient,
            &ctx.patient,
            loc(kind, &recommendation.id, "patient"),
            "Recommendation refers to a different patient",
        ),
        in_set(
            &recommendation.diagnosis,
            &ctx.refs.diagnoses,
            loc(kind, &recommendation.id, "diagnosis"),
            format!(
                "Diagnosis '{}' is not part of this file",
                recommendation.diagnosis
            ),
        ),
        should_be(
            recommendation.issued_on.is_some(),
            loc(kind, &recommendation.id, "issuedOn"),
            "Issue date is not defined",
        ),
        validate_each(&recommendation.medication, |medication| {
            coding::atc(ctx, medication, loc(kind, &recommendation.id, "medication"))
        }),
        should_be(
            recommendation.priority.is_some(),
            loc(kind, &recommendation.id, "priority"),
            "Priority is not defined",
        ),
        should_be(
            recommendation.level_of_evidence.is_some(),
            loc(kind, &recommendation.id, "levelOfEvidence"),
            "Level of evidence is not defined",
        ),
        ngs_report_check,
        variants_check,
    ])
}

pub fn validate_counselling_request(
    ctx: &ValidationContext,
    request: &GeneticCounsellingRequest,
) -> Check {
    let kind = EntityKind::GeneticCounsellingRequest;
    all([
        matches_equal(
            &request.patient,
            &ctx.patient,
            loc(kind, &request.id, "patient"),
            "Counselling request refers to a different patient",
        ),
        should_be(
            request.issued_on.is_some(),
            loc(kind, &request.id, "issuedOn"),
            "Issue date is not defined",
        ),
    ])
}

pub fn validate_rebiopsy_request(ctx: &ValidationContext, request: &RebiopsyRequest) -> Check {
    let kind = EntityKind::RebiopsyRequest;
    all([
        matches_equal(
            &request.patient,
            &ctx.patient,
            loc(kind, &request.id, "patient"),
            "Rebiopsy request refers to a different patient",
        ),
        in_set(
            &request.specimen,
            &ctx.refs.specimens,
            loc(kind, &request.id, "specimen"),
            format!("Specimen '{}' is not part of this file", request.specimen),
        ),
        should_be(
            request.issued_on.is_some(),
            loc(kind, &request.id, "issuedOn"),
            "Issue date is not defined",
        ),
    ])
}

pub fn validate_histology_reevaluation_request(
    ctx: &ValidationContext,
    request: &HistologyReevaluationRequest,
) -> Check {
    let kind = EntityKind::HistologyReevaluationRequest;
    all([
        matches_equal(
            &request.patient,
            &ctx.patient,
            loc(kind, &request.id, "patient"),
            "Histology reevaluation request refers to a different patient",
        ),
        in_set(
            &request.specimen,
            &ctx.refs.specimens,
            loc(kind, &request.id, "specimen"),
            format!("Specimen '{}' is not part of this file", request.specimen),
        ),
        should_be(
            request.issued_on.is_some(),
            loc(kind, &request.id, "issuedOn"),
            "Issue date is not defined",
        ),
    ])
}

pub fn validate_study_inclusion_request(
    ctx: &ValidationContext,
    request: &StudyInclusionRequest,
) -> Check {
    let kind = EntityKind::StudyInclusionRequest;
    all([
        matches_equal(
            &request.patient,
            &ctx.patient,
            loc(kind, &request.id, "patient"),
            "Study inclusion request refers to a different patient",
        ),
        in_set(
            &request.diagnosis,
            &ctx.refs.diagnoses,
            loc(kind, &request.id, "diagnosis"),
            format!("Diagnosis '{}' is not part of this file", request.diagnosis),
        ),
        must_be(
            request.nct_number.is_well_formed(),
            loc(kind, &request.id, "nctNumber"),
            format!("'{}' is not a valid NCT number", request.nct_number),
        ),
        should_be(
            request.issued_on.is_some(),
            loc(kind, &request.id, "issuedOn"),
            "Issue date is not defined",
        ),
    ])
}
