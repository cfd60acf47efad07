//! Tumor specimens and specimen-level findings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coding::{Coding, Icd10Code, IcdO3MCode};
use crate::ids::{PatientId, SpecimenId, TumorCellContentId, TumorMorphologyId};

/// Conservation type of a specimen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecimenType {
    FreshFrozen,
    CryoFrozen,
    #[serde(rename = "FFPE")]
    Ffpe,
    LiquidBiopsy,
    Unknown,
}

/// Where a specimen was taken from, relative to the primary tumor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionLocalization {
    PrimaryTumor,
    Metastasis,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionMethod {
    Biopsy,
    Resection,
    LiquidBiopsy,
    Cytology,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecimenCollection {
    pub date: NaiveDate,
    pub localization: CollectionLocalization,
    pub method: CollectionMethod,
}

/// A tumor specimen. The embedded ICD-10 coding ties the specimen to one of
/// the file's diagnoses by code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specimen {
    pub id: SpecimenId,
    pub patient: PatientId,
    pub icd10: Coding<Icd10Code>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub specimen_type: Option<SpecimenType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<SpecimenCollection>,
}

/// How a tumor cell content value was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TumorCellContentMethod {
    Histologic,
    Bioinformatic,
}

/// Fraction of tumor cells in a specimen, in `[0.0, 1.0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TumorCellContent {
    pub id: TumorCellContentId,
    pub specimen: SpecimenId,
    pub method: TumorCellContentMethod,
    pub value: f64,
}

/// ICD-O-3 morphology finding on a specimen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TumorMorphology {
    pub id: TumorMorphologyId,
    pub patient: PatientId,
    pub specimen: SpecimenId,
    #[serde(rename = "icdO3M")]
    pub icd_o3_m: Coding<IcdO3MCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specimen_type_ffpe_keeps_upper_case() {
        assert_eq!(
            serde_json::to_string(&SpecimenType::Ffpe).unwrap(),
            "\"FFPE\""
        );
        assert_eq!(
            serde_json::to_string(&SpecimenType::LiquidBiopsy).unwrap(),
            "\"liquid-biopsy\""
        );
    }

    #[test]
    fn tumor_cell_content_method_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&TumorCellContentMethod::Bioinformatic).unwrap(),
            "\"bioinformatic\""
        );
    }
}
