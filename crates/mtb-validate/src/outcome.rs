//! The accumulating validation kernel.
//!
//! A validation outcome over `T` is either `Valid(T)` or `Invalid` with a
//! non-empty list of issues. Outcomes compose by accumulation: combining two
//! outcomes concatenates their issue lists left to right, and a combined
//! value is only reconstructed when every constituent was valid. Errors are
//! values here; nothing in this module panics or short-circuits beyond what
//! [`Validated::and_then`] asks for.

use std::collections::BTreeSet;

use mtb_model::{Issue, Location, Severity};

/// Outcome of validating a value of type `T`.
#[derive(Debug, Clone, PartialEq)]
pub enum Validated<T> {
    Valid(T),
    /// Invariant: the issue list is non-empty.
    Invalid(Vec<Issue>),
}

/// Outcome of a single check carrying no value.
pub type Check = Validated<()>;

impl Validated<()> {
    /// The passing check.
    pub fn ok() -> Check {
        Validated::Valid(())
    }
}

impl<T> Validated<T> {
    pub fn invalid(issue: Issue) -> Self {
        Validated::Invalid(vec![issue])
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validated::Valid(_))
    }

    /// The accumulated issues; empty for a valid outcome.
    pub fn into_issues(self) -> Vec<Issue> {
        match self {
            Validated::Valid(_) => Vec::new(),
            Validated::Invalid(issues) => issues,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validated<U> {
        match self {
            Validated::Valid(value) => Validated::Valid(f(value)),
            Validated::Invalid(issues) => Validated::Invalid(issues),
        }
    }

    /// Run `f` only if this outcome is valid; used when the follow-up check
    /// depends on the prerequisite holding.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Validated<U>) -> Validated<U> {
        match self {
            Validated::Valid(value) => f(value),
            Validated::Invalid(issues) => Validated::Invalid(issues),
        }
    }

    /// Succeed if either outcome succeeds; if both fail, the issue lists are
    /// concatenated left to right.
    pub fn or_else(self, f: impl FnOnce() -> Validated<T>) -> Validated<T> {
        match self {
            Validated::Valid(value) => Validated::Valid(value),
            Validated::Invalid(mut issues) => match f() {
                Validated::Valid(value) => Validated::Valid(value),
                Validated::Invalid(other) => {
                    issues.extend(other);
                    Validated::Invalid(issues)
                }
            },
        }
    }

    /// Combine with another outcome, accumulating issues from both.
    pub fn zip<U>(self, other: Validated<U>) -> Validated<(T, U)> {
        match (self, other) {
            (Validated::Valid(a), Validated::Valid(b)) => Validated::Valid((a, b)),
            (Validated::Invalid(mut issues), Validated::Invalid(other)) => {
                issues.extend(other);
                Validated::Invalid(issues)
            }
            (Validated::Invalid(issues), _) | (_, Validated::Invalid(issues)) => {
                Validated::Invalid(issues)
            }
        }
    }
}

/// Fold unit checks into one, concatenating issues in order.
pub fn all(checks: impl IntoIterator<Item = Check>) -> Check {
    let mut issues = Vec::new();
    for check in checks {
        issues.extend(check.into_issues());
    }
    if issues.is_empty() {
        Check::ok()
    } else {
        Validated::Invalid(issues)
    }
}

/// Apply a validator to each element, accumulating issues in element order.
pub fn validate_each<'a, T: 'a>(
    items: impl IntoIterator<Item = &'a T>,
    mut f: impl FnMut(&'a T) -> Check,
) -> Check {
    all(items.into_iter().map(&mut f))
}

fn check(pred: bool, severity: Severity, location: Location, message: impl Into<String>) -> Check {
    if pred {
        Check::ok()
    } else {
        Validated::invalid(Issue::new(severity, location, message))
    }
}

/// Assert a mandatory condition; failure is an `Error`.
pub fn must_be(pred: bool, location: Location, message: impl Into<String>) -> Check {
    check(pred, Severity::Error, location, message)
}

/// Assert a condition whose violation blocks intake; failure is `Fatal`.
pub fn must_be_fatal(pred: bool, location: Location, message: impl Into<String>) -> Check {
    check(pred, Severity::Fatal, location, message)
}

/// Assert a recommended condition; failure is a `Warning`.
pub fn should_be(pred: bool, location: Location, message: impl Into<String>) -> Check {
    check(pred, Severity::Warning, location, message)
}

/// Assert an optional condition; failure is `Info`.
pub fn could_be(pred: bool, location: Location, message: impl Into<String>) -> Check {
    check(pred, Severity::Info, location, message)
}

/// Assert that a reference resolves within a closed set; failure is `Fatal`.
pub fn in_set<T: Ord>(
    candidate: &T,
    refs: &BTreeSet<T>,
    location: Location,
    message: impl Into<String>,
) -> Check {
    check(refs.contains(candidate), Severity::Fatal, location, message)
}

/// Assert that a reference equals the one expected value; failure is `Fatal`.
pub fn matches_equal<T: PartialEq>(
    candidate: &T,
    expected: &T,
    location: Location,
    message: impl Into<String>,
) -> Check {
    check(candidate == expected, Severity::Fatal, location, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mtb_model::EntityKind;

    fn loc(attribute: &str) -> Location {
        Location::new(EntityKind::Patient, "P1", attribute)
    }

    #[test]
    fn zip_accumulates_left_to_right() {
        let left = must_be(false, loc("a"), "first");
        let right = should_be(false, loc("b"), "second");
        let issues = left.zip(right).into_issues();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].location.attribute, "a");
        assert_eq!(issues[1].location.attribute, "b");
    }

    #[test]
    fn and_then_skips_dependent_check_on_failure() {
        let outcome = must_be(false, loc("version"), "missing")
            .and_then(|_| must_be(false, loc("code"), "unreachable"));
        let issues = outcome.into_issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location.attribute, "version");
    }

    #[test]
    fn or_else_concatenates_when_both_fail() {
        let outcome = must_be(false, loc("a"), "first")
            .or_else(|| must_be(false, loc("b"), "second"));
        assert_eq!(outcome.into_issues().len(), 2);

        let recovered = must_be(false, loc("a"), "first").or_else(Check::ok);
        assert!(recovered.is_valid());
    }

    #[test]
    fn validate_each_preserves_element_order() {
        let items = vec!["x", "y"];
        let outcome = validate_each(&items, |item| {
            must_be(false, loc("item"), format!("bad {item}"))
        });
        let issues = outcome.into_issues();
        assert_eq!(issues[0].message, "bad x");
        assert_eq!(issues[1].message, "bad y");
    }

    #[test]
    fn assertion_flavors_differ_only_in_severity() {
        assert_eq!(
            must_be(false, loc("x"), "m").into_issues()[0].severity,
            Severity::Error
        );
        assert_eq!(
            must_be_fatal(false, loc("x"), "m").into_issues()[0].severity,
            Severity::Fatal
        );
        assert_eq!(
            should_be(false, loc("x"), "m").into_issues()[0].severity,
            Severity::Warning
        );
        assert_eq!(
            could_be(false, loc("x"), "m").into_issues()[0].severity,
            Severity::Info
        );
    }

    #[test]
    fn in_set_failure_is_fatal() {
        let refs: BTreeSet<&str> = ["D1"].into_iter().collect();
        assert!(in_set(&"D1", &refs, loc("diagnosis"), "m").is_valid());
        let issues = in_set(&"D2", &refs, loc("diagnosis"), "m").into_issues();
        assert_eq!(issues[0].severity, Severity::Fatal);
    }
}
