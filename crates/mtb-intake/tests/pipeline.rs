//! End-to-end intake pipeline scenarios over an in-memory store and a
//! recording query service.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use mtb_catalogs::{AtcCatalog, CatalogRegistry, HgncCatalog, Icd10Catalog, IcdO3Catalog};
use mtb_intake::{Command, MtbIntake, Outcome, QueryService, QueryServiceError, SiteConfig};
use mtb_model::{
    Coding, Consent, ConsentId, ConsentStatus, Diagnosis, DiagnosisId, EpisodeId, Gender,
    Icd10Code, MtbEpisode, MtbFile, Patient, PatientId, Period, Specimen, SpecimenId, YearMonth,
    Zpm,
};
use mtb_persistence::{MemStagingStore, StagingStore};

const ICD10_VERSION: &str = "2024";

#[derive(Clone, Default)]
struct MockQueryService {
    uploads: Arc<Mutex<Vec<PatientId>>>,
    deletes: Arc<Mutex<Vec<PatientId>>>,
    fail_uploads: bool,
    fail_deletes: bool,
}

impl MockQueryService {
    fn uploaded(&self) -> Vec<PatientId> {
        self.uploads.lock().expect("lock").clone()
    }

    fn deleted(&self) -> Vec<PatientId> {
        self.deletes.lock().expect("lock").clone()
    }
}

impl QueryService for MockQueryService {
    async fn upload(&self, file: &MtbFile) -> Result<(), QueryServiceError> {
        if self.fail_uploads {
            return Err(QueryServiceError::new("query service unavailable"));
        }
        self.uploads
            .lock()
            .expect("lock")
            .push(file.patient.id.clone());
        Ok(())
    }

    async fn delete(&self, patient: &PatientId) -> Result<(), QueryServiceError> {
        if self.fail_deletes {
            return Err(QueryServiceError::new("query service unavailable"));
        }
        self.deletes.lock().expect("lock").push(patient.clone());
        Ok(())
    }
}

fn registry() -> CatalogRegistry {
    CatalogRegistry::from_parts(
        Icd10Catalog::from_versions([(
            ICD10_VERSION.to_string(),
            vec!["C34.9".to_string(), "C50.9".to_string()],
        )]),
        IcdO3Catalog::from_versions(
            [("Second Revision".to_string(), vec!["C34.9".to_string()])],
            [("Second Revision".to_string(), vec!["8070/3".to_string()])],
        ),
        AtcCatalog::from_codes(["L01XE03".to_string()]),
        HgncCatalog::from_symbols(["BRAF".to_string()]),
    )
}

fn intake(
    store: MemStagingStore,
    query: MockQueryService,
) -> MtbIntake<MemStagingStore, MockQueryService> {
    MtbIntake::new(
        SiteConfig::new(Zpm::new("ZPM-TEST")),
        Arc::new(registry()),
        store,
        query,
    )
}

fn patient_id() -> PatientId {
    PatientId::from("P1")
}

fn base_file(status: ConsentStatus) -> MtbFile {
    MtbFile {
        patient: Patient {
            id: patient_id(),
            gender: Gender::Male,
            birth_date: Some(YearMonth::new(1970, 1).expect("birth date")),
            managing_zpm: None,
            insurance: None,
            date_of_death: None,
        },
        consent: Consent {
            id: ConsentId::from("C1"),
            patient: patient_id(),
            status,
        },
        episode: MtbEpisode {
            id: EpisodeId::from("E1"),
            patient: patient_id(),
            period: Period::open(NaiveDate::from_ymd_opt(2024, 1, 1).expect("date")),
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

fn diagnosis(id: &str, code: &str) -> Diagnosis {
    Diagnosis {
        id: DiagnosisId::from(id),
        patient: patient_id(),
        recorded_on: Some(NaiveDate::from_ymd_opt(2024, 2, 1).expect("date")),
        icd10: Some(Coding::new(Icd10Code::from(code)).with_version(ICD10_VERSION)),
        icd_o3_t: None,
        who_grade: None,
        status_history: None,
        histology_results: None,
        guideline_treatment_status: None,
    }
}

#[tokio::test]
async fn clean_upload_is_imported_and_stamped() {
    let store = MemStagingStore::new();
    let query = MockQueryService::default();
    let pipeline = intake(store.clone(), query.clone());

    let outcome = pipeline
        .process(Command::Upload(Box::new(base_file(ConsentStatus::Rejected))))
        .await;

    let Outcome::Imported(file) = outcome else {
        panic!("expected Imported, got {outcome:?}");
    };
    assert_eq!(
        file.patient.managing_zpm.as_ref().map(|z| z.as_str()),
        Some("ZPM-TEST")
    );
    assert_eq!(query.uploaded(), vec![patient_id()]);
    assert_eq!(store.file_count().await, 0);
}

#[tokio::test]
async fn curatable_findings_stage_file_and_report() {
    let store = MemStagingStore::new();
    let query = MockQueryService::default();
    let pipeline = intake(store.clone(), query.clone());

    let mut file = base_file(ConsentStatus::Active);
    file.diagnoses = Some(Vec::new());

    let outcome = pipeline.process(Command::Upload(Box::new(file))).await;

    let Outcome::IssuesDetected(report) = outcome else {
        panic!("expected IssuesDetected, got {outcome:?}");
    };
    assert!(!report.has_fatal());
    assert!(query.uploaded().is_empty());
    assert!(store.mtb_file(&patient_id()).await.expect("load").is_some());
    assert!(
        store
            .data_qc_report(&patient_id())
            .await
            .expect("load")
            .is_some()
    );
}

#[tokio::test]
async fn fatal_findings_reject_without_persisting_or_forwarding() {
    let store = MemStagingStore::new();
    let query = MockQueryService::default();
    let pipeline = intake(store.clone(), query.clone());

    // Specimen ICD-10 code matches no diagnosis.
    let mut file = base_file(ConsentStatus::Active);
    file.diagnoses = Some(vec![diagnosis("D1", "C34.9")]);
    file.specimens = Some(vec![Specimen {
        id: SpecimenId::from("S1"),
        patient: patient_id(),
        icd10: Coding::new(Icd10Code::from("C50.9")).with_version(ICD10_VERSION),
        specimen_type: None,
        collection: None,
    }]);

    let outcome = pipeline.process(Command::Upload(Box::new(file))).await;

    let Outcome::InvalidData(report) = outcome else {
        panic!("expected InvalidData, got {outcome:?}");
    };
    assert!(report.has_fatal());
    assert!(query.uploaded().is_empty());
    assert_eq!(store.file_count().await, 0);
}

#[tokio::test]
async fn rejected_consent_with_payload_is_invalid_data() {
    let store = MemStagingStore::new();
    let query = MockQueryService::default();
    let pipeline = intake(store.clone(), query.clone());

    let mut file = base_file(ConsentStatus::Rejected);
    file.diagnoses = Some(vec![diagnosis("D1", "C34.9")]);

    let outcome = pipeline.process(Command::Upload(Box::new(file))).await;
    assert!(matches!(outcome, Outcome::InvalidData(_)));
    assert!(query.uploaded().is_empty());
}

#[tokio::test]
async fn successful_forward_purges_the_staged_copy() {
    let store = MemStagingStore::new();
    let query = MockQueryService::default();
    let pipeline = intake(store.clone(), query.clone());

    // A previous upload left a staged copy behind.
    store
        .save_mtb_file(&base_file(ConsentStatus::Rejected))
        .await
        .expect("stage");
    assert_eq!(store.file_count().await, 1);

    let outcome = pipeline
        .process(Command::Upload(Box::new(base_file(ConsentStatus::Rejected))))
        .await;

    assert!(matches!(outcome, Outcome::Imported(_)));
    assert_eq!(store.file_count().await, 0);
}

#[tokio::test]
async fn forward_failure_is_an_unspecific_error() {
    let store = MemStagingStore::new();
    let query = MockQueryService {
        fail_uploads: true,
        ..MockQueryService::default()
    };
    let pipeline = intake(store.clone(), query.clone());

    let outcome = pipeline
        .process(Command::Upload(Box::new(base_file(ConsentStatus::Rejected))))
        .await;
    assert!(matches!(outcome, Outcome::UnspecificError(_)));
}

#[tokio::test]
async fn delete_purges_staging_and_downstream() {
    let store = MemStagingStore::new();
    let query = MockQueryService::default();
    let pipeline = intake(store.clone(), query.clone());

    store
        .save_mtb_file(&base_file(ConsentStatus::Active))
        .await
        .expect("stage");

    let outcome = pipeline.process(Command::Delete(patient_id())).await;

    assert!(matches!(outcome, Outcome::Deleted(p) if p == patient_id()));
    assert_eq!(store.file_count().await, 0);
    assert_eq!(query.deleted(), vec![patient_id()]);
}

#[tokio::test]
async fn delete_requires_both_legs_to_succeed() {
    let store = MemStagingStore::new();
    let query = MockQueryService {
        fail_deletes: true,
        ..MockQueryService::default()
    };
    let pipeline = intake(store.clone(), query.clone());

    let outcome = pipeline.process(Command::Delete(patient_id())).await;
    assert!(matches!(outcome, Outcome::UnspecificError(_)));
}
