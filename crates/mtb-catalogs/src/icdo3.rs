//! ICD-O-3 topography and morphology catalog, versioned.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::loader::{read_code_column, versioned_files};

const TOPOGRAPHY_PREFIX: &str = "icdo3_topography";
const MORPHOLOGY_PREFIX: &str = "icdo3_morphology";

#[derive(Debug, Clone, Default)]
pub struct IcdO3Catalog {
    topography_by_version: BTreeMap<String, BTreeSet<String>>,
    morphology_by_version: BTreeMap<String, BTreeSet<String>>,
}

impl IcdO3Catalog {
    /// Load `icdo3_topography_<version>.csv` and `icdo3_morphology_<version>.csv`
    /// files under `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut topography_by_version = BTreeMap::new();
        for (version, path) in versioned_files(dir, TOPOGRAPHY_PREFIX)? {
            topography_by_version.insert(version, read_code_column(&path, "code")?);
        }

        let mut morphology_by_version = BTreeMap::new();
        for (version, path) in versioned_files(dir, MORPHOLOGY_PREFIX)? {
            morphology_by_version.insert(version, read_code_column(&path, "code")?);
        }

        if topography_by_version.is_empty() || morphology_by_version.is_empty() {
            return Err(CatalogError::MissingCatalog {
                name: "ICD-O-3",
                path: dir.to_path_buf(),
            });
        }

        Ok(Self {
            topography_by_version,
            morphology_by_version,
        })
    }

    pub fn from_versions(
        topography: impl IntoIterator<Item = (String, Vec<String>)>,
        morphology: impl IntoIterator<Item = (String, Vec<String>)>,
    ) -> Self {
        Self {
            topography_by_version: topography
                .into_iter()
                .map(|(v, codes)| (v, codes.into_iter().collect()))
                .collect(),
            morphology_by_version: morphology
                .into_iter()
                .map(|(v, codes)| (v, codes.into_iter().collect()))
                .collect(),
        }
    }

    /// Versions for which both code sets are present.
    pub fn versions(&self) -> BTreeSet<&str> {
        self.topography_by_version
            .keys()
            .filter(|v| self.morphology_by_version.contains_key(*v))
            .map(String::as_str)
            .collect()
    }

    pub fn has_topography_version(&self, version: &str) -> bool {
        self.topography_by_version.contains_key(version)
    }

    pub fn has_morphology_version(&self, version: &str) -> bool {
        self.morphology_by_version.contains_key(version)
    }

    pub fn topography_codes(&self, version: &str) -> Option<&BTreeSet<String>> {
        self.topography_by_version.get(version)
    }

    pub fn morphology_codes(&self, version: &str) -> Option<&BTreeSet<String>> {
        self.morphology_by_version.get(version)
    }

    pub fn contains_topography(&self, version: &str, code: &str) -> bool {
        self.topography_codes(version)
            .is_some_and(|codes| codes.contains(code))
    }

    pub fn contains_morphology(&self, version: &str, code: &str) -> bool {
        self.morphology_codes(version)
            .is_some_and(|codes| codes.contains(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topography_and_morphology_are_separate_sets() {
        let catalog = IcdO3Catalog::from_versions(
            [("Second Revision".to_string(), vec!["C34.9".to_string()])],
            [("Second Revision".to_string(), vec!["8070/3".to_string()])],
        );
        assert!(catalog.contains_topography("Second Revision", "C34.9"));
        assert!(!catalog.contains_morphology("Second Revision", "C34.9"));
        assert!(catalog.contains_morphology("Second Revision", "8070/3"));
        assert_eq!(catalog.versions().len(), 1);
    }
}
