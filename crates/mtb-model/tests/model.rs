//! Wire-format integration test: one complete MTB JSON document.

use mtb_model::{
    ClaimStatus, ConsentStatus, Gender, GuidelineTreatmentStatus, MolecularTherapy, MtbFile,
    Recist, TumorCellContentMethod, YearMonth,
};

const FULL_DOCUMENT: &str = r#"{
  "patient": {
    "id": "P1",
    "gender": "male",
    "birthDate": "1968-07",
    "insurance": { "ik": "108018007", "display": "AOK" },
    "dateOfDeath": "2025-03-14"
  },
  "consent": { "id": "C1", "patient": "P1", "status": "active" },
  "episode": { "id": "E1", "patient": "P1", "period": { "start": "2024-11-05" } },
  "diagnoses": [
    {
      "id": "D1",
      "patient": "P1",
      "recordedOn": "2024-11-06",
      "icd10": { "code": "C34.9", "system": "ICD-10-GM", "version": "2024", "display": "Bronchialkarzinom" },
      "icdO3T": { "code": "C34.9", "version": "Second Revision" },
      "statusHistory": [ { "status": "metastasized", "date": "2024-11-06" } ],
      "histologyResults": ["H1"],
      "guidelineTreatmentStatus": "exhausted"
    }
  ],
  "previousGuidelineTherapies": [
    {
      "id": "GT1",
      "patient": "P1",
      "diagnosis": "D1",
      "therapyLine": 1,
      "medication": [ { "code": "L01XE03", "system": "ATC", "display": "Erlotinib" } ]
    }
  ],
  "ecogStatus": [ { "id": "PS1", "patient": "P1", "effectiveDate": "2024-11-07", "value": 1 } ],
  "specimens": [
    {
      "id": "S1",
      "patient": "P1",
      "icd10": { "code": "C34.9", "version": "2024" },
      "type": "FFPE",
      "collection": { "date": "2024-11-10", "localization": "primary-tumor", "method": "biopsy" }
    }
  ],
  "histologyReports": [
    {
      "id": "H1",
      "patient": "P1",
      "specimen": "S1",
      "issuedOn": "2024-11-12",
      "tumorMorphology": {
        "id": "TM1",
        "patient": "P1",
        "specimen": "S1",
        "icdO3M": { "code": "8140/3", "version": "Second Revision" }
      },
      "tumorCellContent": { "id": "TCC1", "specimen": "S1", "method": "histologic", "value": 0.65 }
    }
  ],
  "ngsReports": [
    {
      "id": "N1",
      "patient": "P1",
      "specimen": "S1",
      "issuedOn": "2024-12-01",
      "sequencingType": "panel",
      "tumorCellContent": { "id": "TCC2", "specimen": "S1", "method": "bioinformatic", "value": 0.7 },
      "brcaness": 0.2,
      "msi": 1.1,
      "tmb": 7.5,
      "simpleVariants": [
        {
          "id": "V1",
          "gene": { "code": "EGFR", "system": "HGNC" },
          "chromosome": "chr7",
          "position": 55259515,
          "refAllele": "T",
          "altAllele": "G",
          "aminoAcidChange": "p.L858R",
          "allelicFrequency": 0.38,
          "readDepth": 842
        }
      ]
    }
  ],
  "carePlans": [
    {
      "id": "CP1",
      "patient": "P1",
      "diagnosis": "D1",
      "issuedOn": "2024-12-10",
      "recommendations": ["TR1"]
    }
  ],
  "recommendations": [
    {
      "id": "TR1",
      "patient": "P1",
      "diagnosis": "D1",
      "issuedOn": "2024-12-10",
      "medication": [ { "code": "L01XE03", "system": "ATC" } ],
      "priority": "1",
      "levelOfEvidence": { "grading": "m1A", "addendums": ["Z"] },
      "ngsReport": "N1",
      "supportingVariants": ["V1"]
    }
  ],
  "claims": [
    { "id": "CL1", "patient": "P1", "issuedOn": "2024-12-12", "therapy": "TR1" }
  ],
  "claimResponses": [
    { "id": "CR1", "claim": "CL1", "patient": "P1", "issuedOn": "2025-01-08", "status": "accepted" }
  ],
  "molecularTherapies": [
    {
      "status": "stopped",
      "id": "MT1",
      "patient": "P1",
      "recordedOn": "2025-02-20",
      "basedOn": "TR1",
      "period": { "start": "2025-01-10", "end": "2025-02-18" },
      "medication": [ { "code": "L01XE03", "system": "ATC" } ],
      "reasonStopped": "progression"
    }
  ],
  "responses": [
    { "id": "R1", "patient": "P1", "therapy": "MT1", "effectiveDate": "2025-02-15", "value": "PD" }
  ]
}"#;

#[test]
fn parses_a_complete_document() {
    let file: MtbFile = serde_json::from_str(FULL_DOCUMENT).expect("parse");

    assert_eq!(file.patient.gender, Gender::Male);
    assert_eq!(file.patient.birth_date, Some(YearMonth::new(1968, 7).unwrap()));
    // Lenient year-month: a full date reduces to its month.
    assert_eq!(
        file.patient.date_of_death,
        Some(YearMonth::new(2025, 3).unwrap())
    );
    assert_eq!(file.consent.status, ConsentStatus::Active);

    let diagnosis = &file.diagnoses.as_ref().expect("diagnoses")[0];
    assert_eq!(
        diagnosis.guideline_treatment_status,
        Some(GuidelineTreatmentStatus::Exhausted)
    );
    assert_eq!(
        diagnosis.icd10.as_ref().expect("icd10").version.as_deref(),
        Some("2024")
    );

    let ngs = &file.ngs_reports.as_ref().expect("ngs")[0];
    assert_eq!(
        ngs.tumor_cell_content.method,
        TumorCellContentMethod::Bioinformatic
    );
    assert_eq!(ngs.simple_variants[0].gene.code.as_str(), "EGFR");

    let therapy = &file.molecular_therapies.as_ref().expect("therapies")[0];
    assert!(matches!(therapy, MolecularTherapy::Stopped { .. }));

    let claim_response = &file.claim_responses.as_ref().expect("claim responses")[0];
    assert_eq!(claim_response.status, ClaimStatus::Accepted);

    let response = &file.responses.as_ref().expect("responses")[0];
    assert_eq!(response.value, Recist::PD);
}

#[test]
fn round_trips_through_json() {
    let file: MtbFile = serde_json::from_str(FULL_DOCUMENT).expect("parse");
    let json = serde_json::to_string(&file).expect("serialize");
    let reparsed: MtbFile = serde_json::from_str(&json).expect("reparse");
    assert_eq!(reparsed, file);
}

#[test]
fn serialized_enums_use_kebab_case() {
    let file: MtbFile = serde_json::from_str(FULL_DOCUMENT).expect("parse");
    let json = serde_json::to_value(&file).expect("serialize");

    assert_eq!(json["diagnoses"][0]["guidelineTreatmentStatus"], "exhausted");
    assert_eq!(json["diagnoses"][0]["statusHistory"][0]["status"], "metastasized");
    assert_eq!(json["molecularTherapies"][0]["status"], "stopped");
    assert_eq!(json["molecularTherapies"][0]["reasonStopped"], "progression");
    assert_eq!(json["specimens"][0]["collection"]["localization"], "primary-tumor");
}
