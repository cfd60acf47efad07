//! Opaque identifier types, one per entity kind.
//!
//! Identifiers wrap an opaque string and are compared by value. Each entity
//! kind has its own type so an id of one kind can never be assigned where
//! another kind is expected.

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_id!(PatientId);
define_id!(ConsentId);
define_id!(EpisodeId);
define_id!(DiagnosisId);
define_id!(FamilyMemberDiagnosisId);
define_id!(
    /// Shared by guideline and molecular therapies; responses refer to the
    /// union of all therapy ids in a file.
    TherapyId
);
define_id!(EcogStatusId);
define_id!(SpecimenId);
define_id!(TumorCellContentId);
define_id!(TumorMorphologyId);
define_id!(HistologyReportId);
define_id!(MolecularPathologyFindingId);
define_id!(SomaticNgsReportId);
define_id!(VariantId);
define_id!(CarePlanId);
define_id!(TherapyRecommendationId);
define_id!(GeneticCounsellingRequestId);
define_id!(RebiopsyRequestId);
define_id!(HistologyReevaluationRequestId);
define_id!(StudyInclusionRequestId);
define_id!(ClaimId);
define_id!(ClaimResponseId);
define_id!(ResponseId);
define_id!(
    /// Identifier of a local tumor-center site (Zentrum für Personalisierte
    /// Medizin). Stamped onto incoming patients at intake.
    Zpm
);
