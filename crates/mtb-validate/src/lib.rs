//! Accumulating validation of MTB files.
//!
//! This crate decides whether one Molecular Tumor Board file may be admitted
//! downstream. The traversal never stops at the first defect: every finding
//! is collected into one outcome, classified by severity and located by a
//! structured path.
//!
//! - [`outcome`] - the `Valid`/`Invalid` sum type and its combinators
//! - [`checks`] - one pure validator per entity kind
//! - [`context`] - catalogs, injected clock, and derived reference sets
//! - the file validator composes everything under the consent-status gate
//!
//! # Example
//!
//! ```ignore
//! use mtb_validate::check_mtb_file;
//!
//! match check_mtb_file(&catalogs, today, &file) {
//!     Ok(()) => println!("clean"),
//!     Err(report) => {
//!         for issue in &report.issues {
//!             println!("[{}] {}: {}", issue.severity, issue.location, issue.message);
//!         }
//!     }
//! }
//! ```

#![deny(unsafe_code)]

pub mod checks;
mod context;
mod file;
mod outcome;
#[cfg(test)]
pub(crate) mod testsupport;

pub use context::{ReferenceContext, ValidationContext};
pub use file::{check_mtb_file, validate_mtb_file};
pub use outcome::{
    Check, Validated, all, could_be, in_set, matches_equal, must_be, must_be_fatal, should_be,
    validate_each,
};
