//! Shared fixtures for the unit tests of this crate.

use chrono::NaiveDate;
use mtb_catalogs::{AtcCatalog, CatalogRegistry, HgncCatalog, Icd10Catalog, IcdO3Catalog};
use mtb_model::{
    Consent, ConsentId, ConsentStatus, EpisodeId, Gender, MtbEpisode, MtbFile, Patient, PatientId,
    Period, YearMonth,
};

pub(crate) const ICD10_VERSION: &str = "2024";
pub(crate) const ICDO3_VERSION: &str = "Second Revision";

pub(crate) fn registry_fixture() -> CatalogRegistry {
    let icd10 = Icd10Catalog::from_versions([(
        ICD10_VERSION.to_string(),
        vec!["C34.9".to_string(), "C50.9".to_string()],
    )]);
    let icd_o3 = IcdO3Catalog::from_versions(
        [(
            ICDO3_VERSION.to_string(),
            vec!["C34.9".to_string(), "C50.9".to_string()],
        )],
        [(
            ICDO3_VERSION.to_string(),
            vec!["8070/3".to_string(), "8140/3".to_string()],
        )],
    );
    let atc = AtcCatalog::from_codes(["L01XE03".to_string(), "L01XC02".to_string()]);
    let hgnc = HgncCatalog::from_symbols([
        "BRAF".to_string(),
        "EGFR".to_string(),
        "TP53".to_string(),
    ]);
    CatalogRegistry::from_parts(icd10, icd_o3, atc, hgnc)
}

pub(crate) fn today_fixture() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("fixture date")
}

pub(crate) fn minimal_active_file() -> MtbFile {
    MtbFile {
        patient: Patient {
            id: PatientId::from("P1"),
            gender: Gender::Male,
            birth_date: Some(YearMonth::new(1970, 1).expect("fixture birth date")),
            managing_zpm: None,
            insurance: None,
            date_of_death: None,
        },
        consent: Consent {
            id: ConsentId::from("C1"),
            patient: PatientId::from("P1"),
            status: ConsentStatus::Active,
        },
        episode: MtbEpisode {
            id: EpisodeId::from("E1"),
            patient: PatientId::from("P1"),
            period: Period::open(NaiveDate::from_ymd_opt(2025, 1, 1).expect("fixture date")),
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

pub(crate) fn context_fixture<'a>(
    registry: &'a CatalogRegistry,
    file: &MtbFile,
) -> crate::context::ValidationContext<'a> {
    crate::context::ValidationContext::new(registry, today_fixture(), file)
}
