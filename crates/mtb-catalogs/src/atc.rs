//! ATC medication code catalog.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::loader::read_code_column;

const FILE_NAME: &str = "atc.csv";

#[derive(Debug, Clone, Default)]
pub struct AtcCatalog {
    codes: BTreeSet<String>,
}

impl AtcCatalog {
    /// Load `atc.csv` under `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(FILE_NAME);
        if !path.is_file() {
            return Err(CatalogError::MissingCatalog {
                name: "ATC",
                path: dir.to_path_buf(),
            });
        }
        let codes = read_code_column(&path, "code")?;
        if codes.is_empty() {
            return Err(CatalogError::MissingCatalog {
                name: "ATC",
                path: dir.to_path_buf(),
            });
        }
        Ok(Self { codes })
    }

    pub fn from_codes(codes: impl IntoIterator<Item = String>) -> Self {
        Self {
            codes: codes.into_iter().collect(),
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
