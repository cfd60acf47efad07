//! Coded value validation against the catalog registry.
//!
//! Versioned codings run a three-step ladder: the version must be defined,
//! it must name a known catalog release, and the code must be a member of
//! that release. Each step only runs when the previous one held.

use mtb_model::{AtcCode, Coding, HgncSymbol, Icd10Code, IcdO3MCode, IcdO3TCode, Location};

use crate::context::ValidationContext;
use crate::outcome::{Check, must_be};

pub fn icd10(ctx: &ValidationContext, coding: &Coding<Icd10Code>, location: Location) -> Check {
    must_be(
        coding.version.is_some(),
        location.clone(),
        "ICD-10-GM coding has no version",
    )
    .and_then(|_| {
        let version = coding.version.as_deref().unwrap_or_default();
        must_be(
            ctx.catalogs.icd10.has_version(version),
            location.clone(),
            format!("Unknown ICD-10-GM version '{version}'"),
        )
        .and_then(|_| {
            must_be(
                ctx.catalogs.icd10.contains(version, coding.code.as_str()),
                location,
                format!(
                    "Invalid ICD-10-GM code '{}' for version '{version}'",
                    coding.code
                ),
            )
        })
    })
}

pub fn icd_o3_t(ctx: &ValidationContext, coding: &Coding<IcdO3TCode>, location: Location) -> Check {
    must_be(
        coding.version.is_some(),
        location.clone(),
        "ICD-O-3-T coding has no version",
    )
    .and_then(|_| {
        let version = coding.version.as_deref().unwrap_or_default();
        must_be(
            ctx.catalogs.icd_o3.has_topography_version(version),
            location.clone(),
            format!("Unknown ICD-O-3 version '{version}'"),
        )
        .and_then(|_| {
            must_be(
                ctx.catalogs
                    .icd_o3
                    .contains_topography(version, coding.code.as_str()),
                location,
                format!(
                    "Invalid ICD-O-3 topography code '{}' for version '{version}'",
                    coding.code
                ),
            )
        })
    })
}

pub fn icd_o3_m(ctx: &ValidationContext, coding: &Coding<IcdO3MCode>, location: Location) -> Check {
    must_be(
        coding.version.is_some(),
        location.clone(),
        "ICD-O-3-M coding has no version",
    )
    .and_then(|_| {
        let version = coding.version.as_deref().unwrap_or_default();
        must_be(
            ctx.catalogs.icd_o3.has_morphology_version(version),
            location.clone(),
            format!("Unknown ICD-O-3 version '{version}'"),
        )
        .and_then(|_| {
            must_be(
                ctx.catalogs
                    .icd_o3
                    .contains_morphology(version, coding.code.as_str()),
                location,
                format!(
                    "Invalid ICD-O-3 morphology code '{}' for version '{version}'",
                    coding.code
                ),
            )
        })
    })
}

/// ATC membership is unversioned.
pub fn atc(ctx: &ValidationContext, coding: &Coding<AtcCode>, location: Location) -> Check {
    must_be(
        ctx.catalogs.atc.contains(coding.code.as_str()),
        location,
        format!("Invalid ATC medication code '{}'", coding.code),
    )
}

/// HGNC membership is unversioned.
pub fn hgnc(ctx: &ValidationContext, coding: &Coding<HgncSymbol>, location: Location) -> Check {
    must_be(
        ctx.catalogs.hgnc.has_symbol(coding.code.as_str()),
        location,
        format!("Unknown HGNC gene symbol '{}'", coding.code),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{context_fixture, registry_fixture};
    use mtb_model::{EntityKind, MtbFile, Severity};

    fn location() -> Location {
        Location::new(EntityKind::Diagnosis, "D1", "icd10")
    }

    fn with_ctx(f: impl FnOnce(&ValidationContext)) {
        let registry = registry_fixture();
        let file: MtbFile = crate::testsupport::minimal_active_file();
        let ctx = context_fixture(&registry, &file);
        f(&ctx);
    }

    #[test]
    fn ladder_stops_at_missing_version() {
        with_ctx(|ctx| {
            let coding = Coding::new(Icd10Code::from("C34.9"));
            let issues = icd10(ctx, &coding, location()).into_issues();
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].severity, Severity::Error);
        });
    }

    #[test]
    fn ladder_rejects_unknown_version_then_code() {
        with_ctx(|ctx| {
            let coding = Coding::new(Icd10Code::from("C34.9")).with_version("1999");
            assert!(!icd10(ctx, &coding, location()).is_valid());

            let coding = Coding::new(Icd10Code::from("X99.9")).with_version("2024");
            assert!(!icd10(ctx, &coding, location()).is_valid());

            let coding = Coding::new(Icd10Code::from("C34.9")).with_version("2024");
            assert!(icd10(ctx, &coding, location()).is_valid());
        });
    }

    #[test]
    fn atc_and_hgnc_are_membership_checks() {
        with_ctx(|ctx| {
            let known = Coding::new(AtcCode::from("L01XE03"));
            assert!(atc(ctx, &known, location()).is_valid());

            let unknown = Coding::new(HgncSymbol::from("NOT_A_GENE"));
            assert!(!hgnc(ctx, &unknown, location()).is_valid());
        });
    }
}
