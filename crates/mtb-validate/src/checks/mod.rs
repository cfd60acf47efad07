//! One validator per entity kind.
//!
//! Every validator is a pure function `(ctx, value) -> outcome`. Fatal
//! issues are reserved for unresolved cross-references (and medical payload
//! under rejected consent, handled by the file validator); value-domain
//! violations are errors, missing recommended attributes are warnings, and
//! missing optional attributes are informational.

pub mod careplan;
pub mod claim;
pub mod coding;
pub mod diagnosis;
pub mod histology;
pub mod molecular_therapy;
pub mod ngs;
pub mod patient;
pub mod response;
pub mod specimen;
pub mod therapy;

use mtb_model::{EntityKind, Location};
use std::fmt;

/// Shorthand for building an issue location.
pub(crate) fn loc(entity: EntityKind, id: &impl fmt::Display, attribute: &str) -> Location {
    Location::new(entity, id, attribute)
}
