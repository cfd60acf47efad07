//! The process-lifetime catalog registry.

use std::path::{Path, PathBuf};

use crate::atc::AtcCatalog;
use crate::error::{CatalogError, Result};
use crate::hgnc::HgncCatalog;
use crate::icd10::Icd10Catalog;
use crate::icdo3::IcdO3Catalog;

/// Environment variable overriding the catalog directory.
pub const CATALOG_DIR_ENV: &str = "MTB_CATALOG_DIR";

/// All catalogs the validator consults.
///
/// Constructed once at startup; a validator cannot be built without one.
#[derive(Debug, Clone)]
pub struct CatalogRegistry {
    pub icd10: Icd10Catalog,
    pub icd_o3: IcdO3Catalog,
    pub atc: AtcCatalog,
    pub hgnc: HgncCatalog,
}

impl CatalogRegistry {
    /// Load every catalog from `dir`. Any missing catalog fails the load.
    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(CatalogError::MissingDirectory {
                path: dir.to_path_buf(),
            });
        }

        let icd10 = Icd10Catalog::load(dir)?;
        let icd_o3 = IcdO3Catalog::load(dir)?;
        let atc = AtcCatalog::load(dir)?;
        let hgnc = HgncCatalog::load(dir)?;

        tracing::info!(
            dir = %dir.display(),
            icd10_versions = icd10.versions().len(),
            atc_codes = atc.len(),
            hgnc_symbols = hgnc.len(),
            "Loaded catalog registry"
        );

        Ok(Self {
            icd10,
            icd_o3,
            atc,
            hgnc,
        })
    }

    /// Load from the default directory, honoring `MTB_CATALOG_DIR`.
    pub fn load_default() -> Result<Self> {
        Self::load(&default_catalog_dir())
    }

    /// Assemble a registry from already-built catalogs.
    pub fn from_parts(
        icd10: Icd10Catalog,
        icd_o3: IcdO3Catalog,
        atc: AtcCatalog,
        hgnc: HgncCatalog,
    ) -> Self {
        Self {
            icd10,
            icd_o3,
            atc,
            hgnc,
        }
    }
}

fn default_catalog_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(CATALOG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../catalogs")
}
