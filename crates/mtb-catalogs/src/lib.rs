//! Read-only code-system catalogs backing MTB validation.
//!
//! The validator checks coded values against four external terminologies:
//!
//! - **ICD-10-GM** - diagnosis codes, versioned by yearly release
//! - **ICD-O-3** - oncology topography and morphology codes, versioned
//! - **ATC** - medication codes, unversioned membership
//! - **HGNC** - gene symbols, unversioned membership
//!
//! Catalogs are loaded once at process start from CSV files in a catalog
//! directory; absence of a catalog is a startup error, never a per-request
//! one. After construction, all lookups are total and allocation-free.

#![deny(unsafe_code)]

mod atc;
mod error;
mod hgnc;
mod icd10;
mod icdo3;
mod loader;
mod registry;

pub use atc::AtcCatalog;
pub use error::{CatalogError, Result};
pub use hgnc::HgncCatalog;
pub use icd10::Icd10Catalog;
pub use icdo3::IcdO3Catalog;
pub use registry::CatalogRegistry;
