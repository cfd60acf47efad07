//! HGNC gene symbol catalog.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::loader::read_code_column;

const FILE_NAME: &str = "hgnc.csv";

#[derive(Debug, Clone, Default)]
pub struct HgncCatalog {
    symbols: BTreeSet<String>,
}

impl HgncCatalog {
    /// Load `hgnc.csv` under `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(FILE_NAME);
        if !path.is_file() {
            return Err(CatalogError::MissingCatalog {
                name: "HGNC",
                path: dir.to_path_buf(),
            });
        }
        let symbols = read_code_column(&path, "symbol")?;
        if symbols.is_empty() {
            return Err(CatalogError::MissingCatalog {
                name: "HGNC",
                path: dir.to_path_buf(),
            });
        }
        Ok(Self { symbols })
    }

    pub fn from_symbols(symbols: impl IntoIterator<Item = String>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
