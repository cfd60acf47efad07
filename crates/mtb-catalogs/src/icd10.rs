//! ICD-10-GM diagnosis code catalog, versioned by yearly release.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::loader::{read_code_column, versioned_files};

const FILE_PREFIX: &str = "icd10gm";

#[derive(Debug, Clone, Default)]
pub struct Icd10Catalog {
    codes_by_version: BTreeMap<String, BTreeSet<String>>,
}

impl Icd10Catalog {
    /// Load all `icd10gm_<version>.csv` files under `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut codes_by_version = BTreeMap::new();
        for (version, path) in versioned_files(dir, FILE_PREFIX)? {
            let codes = read_code_column(&path, "code")?;
            codes_by_version.insert(version, codes);
        }

        if codes_by_version.is_empty() {
            return Err(CatalogError::MissingCatalog {
                name: "ICD-10-GM",
                path: dir.to_path_buf(),
            });
        }

        Ok(Self { codes_by_version })
    }

    /// Build a catalog from in-memory releases.
    pub fn from_versions<V, C>(versions: V) -> Self
    where
        V: IntoIterator<Item = (String, C)>,
        C: IntoIterator<Item = String>,
    {
        Self {
            codes_by_version: versions
                .into_iter()
                .map(|(v, codes)| (v, codes.into_iter().collect()))
                .collect(),
        }
    }

    pub fn versions(&self) -> BTreeSet<&str> {
        self.codes_by_version.keys().map(String::as_str).collect()
    }

    pub fn has_version(&self, version: &str) -> bool {
        self.codes_by_version.contains_key(version)
    }

    pub fn codes(&self, version: &str) -> Option<&BTreeSet<String>> {
        self.codes_by_version.get(version)
    }

    pub fn contains(&self, version: &str, code: &str) -> bool {
        self.codes(version).is_some_and(|codes| codes.contains(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_per_version() {
        let catalog = Icd10Catalog::from_versions([
            ("2023".to_string(), vec!["C34.9".to_string()]),
            ("2024".to_string(), vec!["C34.9".to_string(), "C50.9".to_string()]),
        ]);
        assert!(catalog.has_version("2024"));
        assert!(!catalog.has_version("2025"));
        assert!(catalog.contains("2024", "C50.9"));
        assert!(!catalog.contains("2023", "C50.9"));
    }
}
