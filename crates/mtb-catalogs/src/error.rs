//! Catalog loading error types.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog directory not found: {path}")]
    MissingDirectory { path: PathBuf },

    /// A required catalog has no usable content.
    #[error("catalog {name} is missing or empty under {path}")]
    MissingCatalog { name: &'static str, path: PathBuf },

    #[error("failed to read catalog file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("catalog file {path} has no '{column}' column")]
    MissingColumn { path: PathBuf, column: &'static str },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
