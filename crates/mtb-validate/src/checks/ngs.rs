//! Somatic NGS report validators.

use mtb_model::{EntityKind, SomaticNgsReport, TumorCellContentMethod};

use crate::context::ValidationContext;
use crate::outcome::{Check, all, could_be, in_set, matches_equal, must_be, validate_each};

use super::{coding, loc, specimen};

const TMB_MAX: f64 = 1_000_000.0;

pub fn validate_ngs_report(ctx: &ValidationContext, report: &SomaticNgsReport) -> Check {
    let kind = EntityKind::SomaticNgsReport;

    let brcaness_check = match report.brcaness {
        Some(value) => must_be(
            (0.0..=1.0).contains(&value),
            loc(kind, &report.id, "brcaness"),
            format!("BRCAness score {value} is outside [0, 1]"),
        ),
        None => could_be(
            false,
            loc(kind, &report.id, "brcaness"),
            "BRCAness score is not defined",
        ),
    };

    let msi_check = match report.msi {
        Some(value) => must_be(
            (0.0..=2.0).contains(&value),
            loc(kind, &report.id, "msi"),
            format!("MSI score {value} is outside [0, 2]"),
        ),
        None => could_be(
            false,
            loc(kind, &report.id, "msi"),
            "MSI score is not defined",
        ),
    };

    all([
        matches_equal(
            &report.patient,
            &ctx.patient,
            loc(kind, &report.id, "patient"),
            "NGS report refers to a different patient",
        ),
        in_set(
            &report.specimen,
            &ctx.refs.specimens,
            loc(kind, &report.id, "specimen"),
            format!("Specimen '{}' is not part of this file", report.specimen),
        ),
        must_be(
            report.tumor_cell_content.method == TumorCellContentMethod::Bioinformatic,
            loc(
                EntityKind::TumorCellContent,
                &report.tumor_cell_content.id,
                "method",
            ),
            "Tumor cell content of an NGS report must be determined bioinformatically",
        ),
        specimen::validate_tumor_cell_content(ctx, &report.tumor_cell_content),
        brcaness_check,
        msi_check,
        must_be(
            (0.0..=TMB_MAX).contains(&report.tmb),
            loc(kind, &report.id, "tmb"),
            format!(
                "Tumor mutational burden {} is outside [0, {TMB_MAX}]",
                report.tmb
            ),
        ),
        validate_each(&report.simple_variants, |variant| {
            coding::hgnc(
                ctx,
                &variant.gene,
                loc(EntityKind::SimpleVariant, &variant.id, "gene"),
            )
        }),
    ])
}
