//! MTB data model types and structures.
//!
//! This crate provides the core data model for Molecular Tumor Board (MTB)
//! file processing: strongly typed identifiers, constrained enumerations,
//! coded values referencing external code systems (ICD-10-GM, ICD-O-3, ATC,
//! HGNC), the entity kinds making up one patient case, and the issue/report
//! types produced by validation.
//!
//! # Modules
//!
//! - [`ids`] - Opaque per-kind identifier types
//! - [`coding`] - Coded values and code-system markers
//! - [`time`] - Year-month values and open-ended periods
//! - [`patient`] - Patient, consent, episode, performance status
//! - [`diagnosis`] - Diagnoses and family member diagnoses
//! - [`therapy`] - Guideline therapies
//! - [`specimen`] - Specimens, tumor cell content, tumor morphology
//! - [`histology`] - Histology and molecular pathology reports
//! - [`ngs`] - Somatic NGS reports and variants
//! - [`careplan`] - Care plans, recommendations, and request entities
//! - [`claim`] - Insurance claims and claim responses
//! - [`molecular_therapy`] - Molecular therapy documentation
//! - [`response`] - RECIST response assessments
//! - [`mtbfile`] - The root MTB file aggregate
//! - [`report`] - Validation issues and data quality reports
//! - [`error`] - Error types for model construction

#![deny(unsafe_code)]

pub mod careplan;
pub mod claim;
pub mod coding;
pub mod diagnosis;
pub mod error;
pub mod histology;
pub mod ids;
pub mod molecular_therapy;
pub mod mtbfile;
pub mod ngs;
pub mod patient;
pub mod report;
pub mod response;
pub mod specimen;
pub mod therapy;
pub mod time;

pub use careplan::{
    CarePlan, GeneticCounsellingRequest, HistologyReevaluationRequest, LevelOfEvidence,
    LoeAddendum, LoeGrading, NctNumber, NoTargetFinding, RebiopsyRequest, StudyInclusionRequest,
    TherapyRecommendation, TherapyPriority,
};
pub use claim::{Claim, ClaimRejectionReason, ClaimResponse, ClaimStatus};
pub use coding::{AtcCode, CodeSystem, Coding, HgncSymbol, Icd10Code, IcdO3MCode, IcdO3TCode};
pub use diagnosis::{
    Diagnosis, DiagnosisStatus, FamilyMemberDiagnosis, FamilyRelationship,
    GuidelineTreatmentStatus, TumorStatus, WhoGrade,
};
pub use error::{ModelError, Result};
pub use histology::{HistologyReport, MolecularPathologyFinding};
pub use ids::{
    CarePlanId, ClaimId, ClaimResponseId, ConsentId, DiagnosisId, EcogStatusId, EpisodeId,
    FamilyMemberDiagnosisId, GeneticCounsellingRequestId, HistologyReevaluationRequestId,
    HistologyReportId, MolecularPathologyFindingId, PatientId, RebiopsyRequestId, ResponseId,
    SomaticNgsReportId, SpecimenId, StudyInclusionRequestId, TherapyId, TherapyRecommendationId,
    TumorCellContentId, TumorMorphologyId, VariantId, Zpm,
};
pub use molecular_therapy::{MolecularTherapy, NotDoneReason, TherapyStopReason};
pub use mtbfile::MtbFile;
pub use ngs::{
    Cnv, CnvType, DnaFusion, RnaFusion, RnaSeq, SimpleVariant, SomaticNgsReport,
};
pub use patient::{Consent, ConsentStatus, EcogStatus, Gender, HealthInsurance, MtbEpisode, Patient};
pub use report::{DataQualityReport, EntityKind, Issue, Location, Severity};
pub use response::{Recist, Response};
pub use specimen::{
    CollectionLocalization, CollectionMethod, Specimen, SpecimenCollection, SpecimenType,
    TumorCellContent, TumorCellContentMethod, TumorMorphology,
};
pub use therapy::{GuidelineTherapyStopReason, LastGuidelineTherapy, PreviousGuidelineTherapy};
pub use time::{Period, YearMonth};
