//! Whole-file validation under the consent-status gate.
//!
//! With rejected consent only the administrative core is validated and any
//! populated medical list is a fatal finding. With active consent the
//! reference sets are derived first, then every entity list is validated in
//! the fixed declaration order of the file; element order is preserved, so
//! equal inputs always produce the same issue list.

use chrono::NaiveDate;
use mtb_catalogs::CatalogRegistry;
use mtb_model::{ConsentStatus, DataQualityReport, EntityKind, Location, MtbFile, PatientId};

use crate::checks;
use crate::context::ValidationContext;
use crate::outcome::{Check, Validated, all, must_be, must_be_fatal, should_be, validate_each};

/// Validate a complete MTB file.
///
/// `today` is the injected clock used for the not-in-the-future checks.
pub fn validate_mtb_file(
    catalogs: &CatalogRegistry,
    today: NaiveDate,
    file: &MtbFile,
) -> Validated<()> {
    let ctx = ValidationContext::new(catalogs, today, file);

    let administrative = all([
        checks::patient::validate_consent(&ctx, &file.consent),
        checks::patient::validate_episode(&ctx, &file.episode),
    ]);

    match file.consent.status {
        // Without consent nothing clinical follows, so only intrinsic date
        // consistency is required of the patient.
        ConsentStatus::Rejected => checks::patient::validate_patient_dates(&ctx, &file.patient)
            .zip(administrative)
            .zip(rejected_consent_gate(file))
            .map(|_| ()),
        ConsentStatus::Active => checks::patient::validate_patient(&ctx, &file.patient)
            .zip(administrative)
            .zip(validate_medical_lists(&ctx, file))
            .map(|_| ()),
    }
}

/// Intake-facing wrapper turning an invalid outcome into a quality report.
pub fn check_mtb_file(
    catalogs: &CatalogRegistry,
    today: NaiveDate,
    file: &MtbFile,
) -> Result<(), DataQualityReport> {
    match validate_mtb_file(catalogs, today, file) {
        Validated::Valid(()) => Ok(()),
        Validated::Invalid(issues) => Err(DataQualityReport::new(
            file.patient.id.clone(),
            today,
            issues,
        )),
    }
}

/// One fatal issue per populated medical list, located at the file level.
fn rejected_consent_gate(file: &MtbFile) -> Check {
    all(file
        .medical_list_counts()
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(name, _)| {
            must_be_fatal(
                false,
                file_location(&file.patient.id, name),
                format!("Medical data '{name}' is present despite rejected consent"),
            )
        }))
}

fn validate_medical_lists(ctx: &ValidationContext, file: &MtbFile) -> Check {
    all([
        list_check(&file.patient.id, &file.diagnoses, "diagnoses", true, |d| {
            checks::diagnosis::validate_diagnosis(ctx, d)
        }),
        list_check(
            &file.patient.id,
            &file.family_member_diagnoses,
            "familyMemberDiagnoses",
            false,
            |d| checks::diagnosis::validate_family_member_diagnosis(ctx, d),
        ),
        list_check(
            &file.patient.id,
            &file.previous_guideline_therapies,
            "previousGuidelineTherapies",
            false,
            |t| checks::therapy::validate_previous_guideline_therapy(ctx, t),
        ),
        list_check(
            &file.patient.id,
            &file.last_guideline_therapies,
            "lastGuidelineTherapies",
            false,
            |t| checks::therapy::validate_last_guideline_therapy(ctx, t),
        ),
        list_check(&file.patient.id, &file.ecog_status, "ecogStatus", false, |e| {
            checks::patient::validate_ecog_status(ctx, e)
        }),
        list_check(&file.patient.id, &file.specimens, "specimens", false, |s| {
            checks::specimen::validate_specimen(ctx, s)
        }),
        list_check(
            &file.patient.id,
            &file.histology_reports,
            "histologyReports",
            false,
            |r| checks::histology::validate_histology_report(ctx, r),
        ),
        list_check(
            &file.patient.id,
            &file.molecular_pathology_findings,
            "molecularPathologyFindings",
            false,
            |f| checks::histology::validate_molecular_pathology_finding(ctx, f),
        ),
        list_check(&file.patient.id, &file.ngs_reports, "ngsReports", false, |r| {
            checks::ngs::validate_ngs_report(ctx, r)
        }),
        list_check(&file.patient.id, &file.care_plans, "carePlans", false, |p| {
            checks::careplan::validate_care_plan(ctx, p)
        }),
        list_check(
            &file.patient.id,
            &file.recommendations,
            "recommendations",
            false,
            |r| checks::careplan::validate_recommendation(ctx, r),
        ),
        list_check(
            &file.patient.id,
            &file.genetic_counselling_requests,
            "geneticCounsellingRequests",
            false,
            |r| checks::careplan::validate_counselling_request(ctx, r),
        ),
        list_check(
            &file.patient.id,
            &file.rebiopsy_requests,
            "rebiopsyRequests",
            false,
            |r| checks::careplan::validate_rebiopsy_request(ctx, r),
        ),
        list_check(
            &file.patient.id,
            &file.histology_reevaluation_requests,
            "histologyReevaluationRequests",
            false,
            |r| checks::careplan::validate_histology_reevaluation_request(ctx, r),
        ),
        list_check(
            &file.patient.id,
            &file.study_inclusion_requests,
            "studyInclusionRequests",
            false,
            |r| checks::careplan::validate_study_inclusion_request(ctx, r),
        ),
        list_check(&file.patient.id, &file.claims, "claims", false, |c| {
            checks::claim::validate_claim(ctx, c)
        }),
        list_check(
            &file.patient.id,
            &file.claim_responses,
            "claimResponses",
            false,
            |c| checks::claim::validate_claim_response(ctx, c),
        ),
        list_check(
            &file.patient.id,
            &file.molecular_therapies,
            "molecularTherapies",
            false,
            |t| checks::molecular_therapy::validate_molecular_therapy(ctx, t),
        ),
        list_check(&file.patient.id, &file.responses, "responses", true, |r| {
            checks::response::validate_response(ctx, r)
        }),
    ])
}

/// Validate one medical list, or flag its absence.
///
/// Diagnoses and responses are required for clinical use; every other list
/// only warns when absent or empty.
fn list_check<'a, T>(
    patient: &PatientId,
    list: &'a Option<Vec<T>>,
    name: &'static str,
    required: bool,
    f: impl FnMut(&'a T) -> Check,
) -> Check {
    match list {
        Some(items) if !items.is_empty() => validate_each(items, f),
        _ => {
            let location = file_location(patient, name);
            let message = format!("List '{name}' is absent or empty");
            if required {
                must_be(false, location, message)
            } else {
                should_be(false, location, message)
            }
        }
    }
}

fn file_location(patient: &PatientId, attribute: &'static str) -> Location {
    Location::new(EntityKind::MtbFile, patient, attribute)
}
