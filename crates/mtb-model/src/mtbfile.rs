//! The root MTB file aggregate.

use serde::{Deserialize, Serialize};

use crate::careplan::{
    CarePlan, GeneticCounsellingRequest, HistologyReevaluationRequest, RebiopsyRequest,
    StudyInclusionRequest, TherapyRecommendation,
};
use crate::claim::{Claim, ClaimResponse};
use crate::diagnosis::{Diagnosis, FamilyMemberDiagnosis};
use crate::histology::{HistologyReport, MolecularPathologyFinding};
use crate::molecular_therapy::MolecularTherapy;
use crate::ngs::SomaticNgsReport;
use crate::patient::{Consent, EcogStatus, MtbEpisode, Patient};
use crate::response::Response;
use crate::specimen::Specimen;
use crate::therapy::{LastGuidelineTherapy, PreviousGuidelineTherapy};

/// One patient's complete Molecular Tumor Board case.
///
/// The administrative core (patient, consent, episode) is always present;
/// every medical list is optional. Which lists may be populated is governed
/// by the consent status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MtbFile {
    pub patient: Patient,
    pub consent: Consent,
    pub episode: MtbEpisode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnoses: Option<Vec<Diagnosis>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_member_diagnoses: Option<Vec<FamilyMemberDiagnosis>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_guideline_therapies: Option<Vec<PreviousGuidelineTherapy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_guideline_therapies: Option<Vec<LastGuidelineTherapy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecog_status: Option<Vec<EcogStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specimens: Option<Vec<Specimen>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histology_reports: Option<Vec<HistologyReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub molecular_pathology_findings: Option<Vec<MolecularPathologyFinding>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngs_reports: Option<Vec<SomaticNgsReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub care_plans: Option<Vec<CarePlan>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<TherapyRecommendation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genetic_counselling_requests: Option<Vec<GeneticCounsellingRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebiopsy_requests: Option<Vec<RebiopsyRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histology_reevaluation_requests: Option<Vec<HistologyReevaluationRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_inclusion_requests: Option<Vec<StudyInclusionRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<Vec<Claim>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_responses: Option<Vec<ClaimResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub molecular_therapies: Option<Vec<MolecularTherapy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<Vec<Response>>,
}

fn count_of<T>(list: &Option<Vec<T>>) -> usize {
    list.as_ref().map(Vec::len).unwrap_or(0)
}

impl MtbFile {
    /// Element counts of every medical list, in declaration order, keyed by
    /// the wire attribute name.
    pub fn medical_list_counts(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("diagnoses", count_of(&self.diagnoses)),
            ("familyMemberDiagnoses", count_of(&self.family_member_diagnoses)),
            ("previousGuidelineTherapies", count_of(&self.previous_guideline_therapies)),
            ("lastGuidelineTherapies", count_of(&self.last_guideline_therapies)),
            ("ecogStatus", count_of(&self.ecog_status)),
            ("specimens", count_of(&self.specimens)),
            ("histologyReports", count_of(&self.histology_reports)),
            ("molecularPathologyFindings", count_of(&self.molecular_pathology_findings)),
            ("ngsReports", count_of(&self.ngs_reports)),
            ("carePlans", count_of(&self.care_plans)),
            ("recommendations", count_of(&self.recommendations)),
            ("geneticCounsellingRequests", count_of(&self.genetic_counselling_requests)),
            ("rebiopsyRequests", count_of(&self.rebiopsy_requests)),
            ("histologyReevaluationRequests", count_of(&self.histology_reevaluation_requests)),
            ("studyInclusionRequests", count_of(&self.study_inclusion_requests)),
            ("claims", count_of(&self.claims)),
            ("claimResponses", count_of(&self.claim_responses)),
            ("molecularTherapies", count_of(&self.molecular_therapies)),
            ("responses", count_of(&self.responses)),
        ]
    }

    /// True if no medical list holds any element.
    pub fn has_no_medical_data(&self) -> bool {
        self.medical_list_counts().iter().all(|(_, n)| *n == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{ConsentId, EpisodeId, PatientId};
    use crate::patient::{ConsentStatus, Gender};
    use crate::time::{Period, YearMonth};
    use chrono::NaiveDate;

    fn minimal_file() -> MtbFile {
        MtbFile {
            patient: Patient {
                id: PatientId::from("P1"),
                gender: Gender::Male,
                birth_date: Some(YearMonth::new(1970, 1).unwrap()),
                managing_zpm: None,
                insurance: None,
                date_of_death: None,
            },
            consent: Consent {
                id: ConsentId::from("C1"),
                patient: PatientId::from("P1"),
                status: ConsentStatus::Rejected,
            },
            episode: MtbEpisode {
                id: EpisodeId::from("E1"),
                patient: PatientId::from("P1"),
                period: Period::open(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            },
            diagnoses: None,
            family_member_diagnoses: None,
            previous_guideline_therapies: None,
            last_guideline_therapies: None,
            ecog_status: None,
            specimens: None,
            histology_reports: None,
            molecular_pathology_findings: None,
            ngs_reports: None,
            care_plans: None,
            recommendations: None,
            genetic_counselling_requests: None,
            rebiopsy_requests: None,
            histology_reevaluation_requests: None,
            study_inclusion_requests: None,
            claims: None,
            claim_responses: None,
            molecular_therapies: None,
            responses: None,
        }
    }

    #[test]
    fn empty_file_has_no_medical_data() {
        assert!(minimal_file().has_no_medical_data());
    }

    #[test]
    fn populated_list_is_counted() {
        let mut file = minimal_file();
        file.responses = Some(Vec::new());
        assert!(file.has_no_medical_data());

        file.diagnoses = Some(vec![]);
        assert!(file.has_no_medical_data());

        let counts = file.medical_list_counts();
        assert_eq!(counts.first(), Some(&("diagnoses", 0)));
    }

    #[test]
    fn wire_round_trip_preserves_file() {
        let file = minimal_file();
        let json = serde_json::to_string(&file).expect("serialize");
        let parsed: MtbFile = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed, file);
    }
}
