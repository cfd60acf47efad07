//! Somatic NGS reports and their variants.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coding::{Coding, HgncSymbol};
use crate::ids::{PatientId, SomaticNgsReportId, SpecimenId, VariantId};
use crate::specimen::TumorCellContent;

/// A small nucleotide variant called from sequencing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleVariant {
    pub id: VariantId,
    pub gene: Coding<HgncSymbol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chromosome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_allele: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_allele: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dna_change: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amino_acid_change: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allelic_frequency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_depth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CnvType {
    LowLevelGain,
    HighLevelGain,
    Loss,
}

/// A copy number variation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cnv {
    pub id: VariantId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genes: Option<Vec<Coding<HgncSymbol>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chromosome: Option<String>,
    #[serde(rename = "type")]
    pub cnv_type: CnvType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_copy_number: Option<u32>,
}

/// A DNA-level gene fusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnaFusion {
    pub id: VariantId,
    #[serde(rename = "gene5prime")]
    pub gene_5_prime: Coding<HgncSymbol>,
    #[serde(rename = "gene3prime")]
    pub gene_3_prime: Coding<HgncSymbol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported_num_reads: Option<u32>,
}

/// An RNA-level gene fusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RnaFusion {
    pub id: VariantId,
    #[serde(rename = "gene5prime")]
    pub gene_5_prime: Coding<HgncSymbol>,
    #[serde(rename = "gene3prime")]
    pub gene_3_prime: Coding<HgncSymbol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported_num_reads: Option<u32>,
}

/// An RNA-seq expression entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RnaSeq {
    pub id: VariantId,
    pub gene: Coding<HgncSymbol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcripts_per_million: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragments_per_kilobase_million: Option<f64>,
}

/// A somatic NGS report on one specimen.
///
/// The embedded tumor cell content must have been determined
/// bioinformatically. `brcaness` and `msi` are optional scores; `tmb` is the
/// tumor mutational burden in mutations per megabase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SomaticNgsReport {
    pub id: SomaticNgsReportId,
    pub patient: PatientId,
    pub specimen: SpecimenId,
    pub issued_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequencing_type: Option<String>,
    pub tumor_cell_content: TumorCellContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brcaness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msi: Option<f64>,
    pub tmb: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub simple_variants: Vec<SimpleVariant>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub copy_number_variants: Vec<Cnv>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dna_fusions: Vec<DnaFusion>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rna_fusions: Vec<RnaFusion>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rna_seqs: Vec<RnaSeq>,
}

impl SomaticNgsReport {
    /// Ids of all variants carried by this report, in declaration order.
    pub fn variant_ids(&self) -> Vec<&VariantId> {
        let mut ids = Vec::new();
        ids.extend(self.simple_variants.iter().map(|v| &v.id));
        ids.extend(self.copy_number_variants.iter().map(|v| &v.id));
        ids.extend(self.dna_fusions.iter().map(|v| &v.id));
        ids.extend(self.rna_fusions.iter().map(|v| &v.id));
        ids.extend(self.rna_seqs.iter().map(|v| &v.id));
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specimen::TumorCellContentMethod;
    use crate::ids::TumorCellContentId;

    fn report() -> SomaticNgsReport {
        SomaticNgsReport {
            id: SomaticNgsReportId::from("N1"),
            patient: PatientId::from("P1"),
            specimen: SpecimenId::from("S1"),
            issued_on: chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            sequencing_type: None,
            tumor_cell_content: TumorCellContent {
                id: TumorCellContentId::from("T1"),
                specimen: SpecimenId::from("S1"),
                method: TumorCellContentMethod::Bioinformatic,
                value: 0.7,
            },
            brcaness: None,
            msi: None,
            tmb: 4.2,
            simple_variants: vec![SimpleVariant {
                id: VariantId::from("V1"),
                gene: Coding::new(HgncSymbol::from("BRAF")),
                chromosome: None,
                position: None,
                ref_allele: None,
                alt_allele: None,
                dna_change: None,
                amino_acid_change: None,
                allelic_frequency: None,
                read_depth: None,
                interpretation: None,
            }],
            copy_number_variants: Vec::new(),
            dna_fusions: Vec::new(),
            rna_fusions: Vec::new(),
            rna_seqs: vec![RnaSeq {
                id: VariantId::from("V2"),
                gene: Coding::new(HgncSymbol::from("EGFR")),
                transcripts_per_million: Some(12.0),
                fragments_per_kilobase_million: None,
            }],
        }
    }

    #[test]
    fn variant_ids_cover_all_lists() {
        let ids: Vec<_> = report().variant_ids().into_iter().cloned().collect();
        assert_eq!(ids, vec![VariantId::from("V1"), VariantId::from("V2")]);
    }

    #[test]
    fn empty_variant_lists_are_omitted_on_wire() {
        let json = serde_json::to_value(report()).unwrap();
        assert!(json.get("dnaFusions").is_none());
        assert!(json.get("simpleVariants").is_some());
    }
}
