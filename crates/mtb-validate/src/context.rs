//! The explicit validation context carried through traversal.
//!
//! Reference checks need the closed sets of ids and codes defined by the
//! file itself. Those sets are derived in a first pass over the file, and
//! the second pass validates every entity with the sets in scope.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use mtb_catalogs::CatalogRegistry;
use mtb_model::{
    ClaimId, DiagnosisId, GeneticCounsellingRequestId, HistologyReportId, MtbFile, PatientId,
    RebiopsyRequestId, SomaticNgsReportId, SpecimenId, StudyInclusionRequestId, TherapyId,
    TherapyRecommendationId, VariantId,
};

/// Closed reference sets of one MTB file.
#[derive(Debug, Clone, Default)]
pub struct ReferenceContext {
    pub diagnoses: BTreeSet<DiagnosisId>,
    /// ICD-10 codes appearing on any diagnosis; specimens must match one.
    pub diagnosis_icd10_codes: BTreeSet<String>,
    pub specimens: BTreeSet<SpecimenId>,
    pub histology_reports: BTreeSet<HistologyReportId>,
    pub ngs_reports: BTreeSet<SomaticNgsReportId>,
    pub variants_by_ngs_report: BTreeMap<SomaticNgsReportId, BTreeSet<VariantId>>,
    pub recommendations: BTreeSet<TherapyRecommendationId>,
    pub counselling_requests: BTreeSet<GeneticCounsellingRequestId>,
    pub rebiopsy_requests: BTreeSet<RebiopsyRequestId>,
    pub study_inclusion_requests: BTreeSet<StudyInclusionRequestId>,
    pub claims: BTreeSet<ClaimId>,
    /// Union of previous guideline, last guideline, and molecular therapy ids.
    pub therapies: BTreeSet<TherapyId>,
    /// Therapy ids some response refers to.
    pub responded_therapies: BTreeSet<TherapyId>,
}

impl ReferenceContext {
    /// First pass: derive every reference set from the file.
    pub fn of(file: &MtbFile) -> Self {
        let mut refs = Self::default();

        for diagnosis in file.diagnoses.iter().flatten() {
            refs.diagnoses.insert(diagnosis.id.clone());
            if let Some(icd10) = &diagnosis.icd10 {
                refs.diagnosis_icd10_codes.insert(icd10.code.as_str().to_string());
            }
        }

        for specimen in file.specimens.iter().flatten() {
            refs.specimens.insert(specimen.id.clone());
        }

        for report in file.histology_reports.iter().flatten() {
            refs.histology_reports.insert(report.id.clone());
        }

        for report in file.ngs_reports.iter().flatten() {
            refs.ngs_reports.insert(report.id.clone());
            refs.variants_by_ngs_report.insert(
                report.id.clone(),
                report.variant_ids().into_iter().cloned().collect(),
            );
        }

        for recommendation in file.recommendations.iter().flatten() {
            refs.recommendations.insert(recommendation.id.clone());
        }

        for request in file.genetic_counselling_requests.iter().flatten() {
            refs.counselling_requests.insert(request.id.clone());
        }

        for request in file.rebiopsy_requests.iter().flatten() {
            refs.rebiopsy_requests.insert(request.id.clone());
        }

        for request in file.study_inclusion_requests.iter().flatten() {
            refs.study_inclusion_requests.insert(request.id.clone());
        }

        for claim in file.claims.iter().flatten() {
            refs.claims.insert(claim.id.clone());
        }

        for therapy in file.previous_guideline_therapies.iter().flatten() {
            refs.therapies.insert(therapy.id.clone());
        }
        for therapy in file.last_guideline_therapies.iter().flatten() {
            refs.therapies.insert(therapy.id.clone());
        }
        for therapy in file.molecular_therapies.iter().flatten() {
            refs.therapies.insert(therapy.id().clone());
        }

        for response in file.responses.iter().flatten() {
            refs.responded_therapies.insert(response.therapy.clone());
        }

        refs
    }

    /// Variants of the given NGS report; empty when the report is unknown.
    pub fn variants_of(&self, report: Option<&SomaticNgsReportId>) -> BTreeSet<VariantId> {
        report
            .and_then(|id| self.variants_by_ngs_report.get(id))
            .cloned()
            .unwrap_or_default()
    }
}

/// Everything an entity validator may consult.
#[derive(Debug)]
pub struct ValidationContext<'a> {
    pub catalogs: &'a CatalogRegistry,
    /// Injected clock; the validator never reads system time.
    pub today: NaiveDate,
    /// The one patient this file is about.
    pub patient: PatientId,
    pub refs: ReferenceContext,
}

impl<'a> ValidationContext<'a> {
    pub fn new(catalogs: &'a CatalogRegistry, today: NaiveDate, file: &MtbFile) -> Self {
        Self {
            catalogs,
            today,
            patient: file.patient.id.clone(),
            refs: ReferenceContext::of(file),
        }
    }
}
