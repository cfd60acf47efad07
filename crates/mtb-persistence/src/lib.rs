//! Staging store for MTB files awaiting curation.
//!
//! Files whose validation found non-fatal defects are kept here together
//! with their data quality report until the source system resubmits a
//! corrected file. The store is keyed by patient id; saving a file and its
//! report for the same patient is consistent per key, and deletion is
//! idempotent.

#![deny(unsafe_code)]

mod error;
mod fs;
mod memory;
mod store;

pub use error::{PersistenceError, Result};
pub use fs::FsStagingStore;
pub use memory::MemStagingStore;
pub use store::StagingStore;
