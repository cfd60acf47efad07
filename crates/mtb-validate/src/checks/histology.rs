//! Histology report and molecular pathology finding validators.

use mtb_model::{
    EntityKind, HistologyReport, MolecularPathologyFinding, TumorCellContentMethod,
};

use crate::context::ValidationContext;
use crate::outcome::{Check, all, in_set, matches_equal, must_be, should_be};

use super::{loc, specimen};

pub fn validate_histology_report(ctx: &ValidationContext, report: &HistologyReport) -> Check {
    let kind = EntityKind::HistologyReport;

    let morphology_check = match &report.tumor_morphology {
        Some(morphology) => specimen::validate_tumor_morphology(ctx, morphology),
        None => should_be(
            false,
            loc(kind, &report.id, "tumorMorphology"),
            "Tumor morphology is not defined",
        ),
    };

    let content_check = match &report.tumor_cell_content {
        Some(content) => all([
            must_be(
                content.method == TumorCellContentMethod::Histologic,
                loc(EntityKind::TumorCellContent, &content.id, "method"),
                "Tumor cell content of a histology report must be determined histologically",
            ),
            specimen::validate_tumor_cell_content(ctx, content),
        ]),
        None => must_be(
            false,
            loc(kind, &report.id, "tumorCellContent"),
            "Tumor cell content is not defined",
        ),
    };

    all([
        matches_equal(
            &report.patient,
            &ctx.patient,
            loc(kind, &report.id, "patient"),
            "Histology report refers to a different patient",
        ),
        in_set(
            &report.specimen,
            &ctx.refs.specimens,
            loc(kind, &report.id, "specimen"),
            format!("Specimen '{}' is not part of this file", report.specimen),
        ),
        must_be(
            report.issued_on.is_some(),
            loc(kind, &report.id, "issuedOn"),
            "Issue date is not defined",
        ),
        morphology_check,
        content_check,
    ])
}

pub fn validate_molecular_pathology_finding(
    ctx: &ValidationContext,
    finding: &MolecularPathologyFinding,
) -> Check {
    let kind = EntityKind::MolecularPathologyFinding;
    all([
        matches_equal(
            &finding.patient,
            &ctx.patient,
            loc(kind, &finding.id, "patient"),
            "Molecular pathology finding refers to a different patient",
        ),
        in_set(
            &finding.specimen,
            &ctx.refs.specimens,
            loc(kind, &finding.id, "specimen"),
            format!("Specimen '{}' is not part of this file", finding.specimen),
        ),
        must_be(
            finding.issued_on.is_some(),
            loc(kind, &finding.id, "issuedOn"),
            "Issue date is not defined",
        ),
    ])
}
