//! Patient, consent, episode, and ECOG status validators.

use mtb_model::{Consent, EcogStatus, EntityKind, MtbEpisode, Patient, YearMonth};

use crate::context::ValidationContext;
use crate::outcome::{Check, all, matches_equal, must_be, should_be};

use super::loc;

/// Full patient validation, applied when medical data may be present.
pub fn validate_patient(ctx: &ValidationContext, patient: &Patient) -> Check {
    all([
        must_be(
            patient.birth_date.is_some(),
            loc(EntityKind::Patient, &patient.id, "birthDate"),
            "Birth date is not defined",
        ),
        should_be(
            patient.insurance.is_some(),
            loc(EntityKind::Patient, &patient.id, "insurance"),
            "Health insurance is not defined",
        ),
        validate_patient_dates(ctx, patient),
    ])
}

/// Intrinsic date consistency only. This is all that is checked of a
/// patient when consent is rejected and no clinical use follows.
pub fn validate_patient_dates(ctx: &ValidationContext, patient: &Patient) -> Check {
    match (&patient.date_of_death, &patient.birth_date) {
        (Some(death), Some(birth)) => all([
            must_be(
                death > birth,
                loc(EntityKind::Patient, &patient.id, "dateOfDeath"),
                "Date of death is not after the birth date",
            ),
            must_be(
                *death <= YearMonth::from(ctx.today),
                loc(EntityKind::Patient, &patient.id, "dateOfDeath"),
                "Date of death lies in the future",
            ),
        ]),
        (Some(death), None) => must_be(
            *death <= YearMonth::from(ctx.today),
            loc(EntityKind::Patient, &patient.id, "dateOfDeath"),
            "Date of death lies in the future",
        ),
        (None, _) => Check::ok(),
    }
}

pub fn validate_consent(ctx: &ValidationContext, consent: &Consent) -> Check {
    matches_equal(
        &consent.patient,
        &ctx.patient,
        loc(EntityKind::Consent, &consent.id, "patient"),
        "Consent refers to a different patient",
    )
}

pub fn validate_episode(ctx: &ValidationContext, episode: &MtbEpisode) -> Check {
    matches_equal(
        &episode.patient,
        &ctx.patient,
        loc(EntityKind::MtbEpisode, &episode.id, "patient"),
        "MTB episode refers to a different patient",
    )
}

pub fn validate_ecog_status(ctx: &ValidationContext, ecog: &EcogStatus) -> Check {
    all([
        matches_equal(
            &ecog.patient,
            &ctx.patient,
            loc(EntityKind::EcogStatus, &ecog.id, "patient"),
            "ECOG status refers to a different patient",
        ),
        must_be(
            ecog.effective_date.is_some(),
            loc(EntityKind::EcogStatus, &ecog.id, "effectiveDate"),
            "Effective date is not defined",
        ),
        must_be(
            ecog.value <= 5,
            loc(EntityKind::EcogStatus, &ecog.id, "value"),
            format!("ECOG grade {} is outside 0..5", ecog.value),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{context_fixture, registry_fixture};
    use mtb_model::{Gender, PatientId, Severity};

    fn patient(birth: Option<YearMonth>, death: Option<YearMonth>) -> Patient {
        Patient {
            id: PatientId::from("P1"),
            gender: Gender::Male,
            birth_date: birth,
            managing_zpm: None,
            insurance: None,
            date_of_death: death,
        }
    }

    #[test]
    fn missing_birth_date_is_an_error() {
        let registry = registry_fixture();
        let file = crate::testsupport::minimal_active_file();
        let ctx = context_fixture(&registry, &file);

        let issues = validate_patient(&ctx, &patient(None, None)).into_issues();
        let birth = issues
            .iter()
            .find(|i| i.location.attribute == "birthDate")
            .expect("birth date issue");
        assert_eq!(birth.severity, Severity::Error);
    }

    #[test]
    fn death_before_birth_is_an_error() {
        let registry = registry_fixture();
        let file = crate::testsupport::minimal_active_file();
        let ctx = context_fixture(&registry, &file);

        let p = patient(
            Some(YearMonth::new(1990, 6).unwrap()),
            Some(YearMonth::new(1980, 1).unwrap()),
        );
        let issues = validate_patient(&ctx, &p).into_issues();
        assert!(
            issues
                .iter()
                .any(|i| i.location.attribute == "dateOfDeath" && i.severity == Severity::Error)
        );
    }

    #[test]
    fn death_in_the_future_is_an_error() {
        let registry = registry_fixture();
        let file = crate::testsupport::minimal_active_file();
        let ctx = context_fixture(&registry, &file);

        use chrono::Datelike;
        let future = YearMonth::new(ctx.today.year() + 1, 1).unwrap();
        let p = patient(Some(YearMonth::new(1950, 1).unwrap()), Some(future));
        let issues = validate_patient(&ctx, &p).into_issues();
        assert!(
            issues
                .iter()
                .any(|i| i.location.attribute == "dateOfDeath" && i.severity == Severity::Error)
        );
    }
}
