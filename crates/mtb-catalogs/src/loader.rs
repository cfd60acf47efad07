//! CSV loading shared by all catalogs.
//!
//! Catalog files are headered CSVs. A versioned catalog is split into one
//! file per release, with the version embedded in the file name
//! (e.g. `icd10gm_2024.csv`); the version is parsed from the name the same
//! way the release date is parsed from a CT file name.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::error::{CatalogError, Result};

/// Read one column of a headered CSV into a set.
pub(crate) fn read_code_column(path: &Path, column: &'static str) -> Result<BTreeSet<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();
    let index = headers
        .iter()
        .position(|h| h.trim_matches('\u{feff}').eq_ignore_ascii_case(column))
        .ok_or(CatalogError::MissingColumn {
            path: path.to_path_buf(),
            column,
        })?;

    let mut codes = BTreeSet::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        let value = record.get(index).unwrap_or("").trim();
        if !value.is_empty() {
            codes.insert(value.to_string());
        }
    }
    Ok(codes)
}

/// Collect `<prefix>_<version>.csv` files under `dir`, keyed by version.
pub(crate) fn versioned_files(dir: &Path, prefix: &str) -> Result<Vec<(String, PathBuf)>> {
    let entries = std::fs::read_dir(dir).map_err(|e| CatalogError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CatalogError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(version) = parse_version(name, prefix) {
            files.push((version, path));
        }
    }

    files.sort();
    Ok(files)
}

/// Parse `<prefix>_<version>.csv` into the version part.
fn parse_version(file_name: &str, prefix: &str) -> Option<String> {
    let stem = file_name.strip_suffix(".csv")?;
    let version = stem.strip_prefix(prefix)?.strip_prefix('_')?;
    if version.is_empty() {
        return None;
    }
    Some(version.to_string())
}

fn csv_error(path: &Path, source: csv::Error) -> CatalogError {
    CatalogError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_version_from_file_name() {
        assert_eq!(
            parse_version("icd10gm_2024.csv", "icd10gm"),
            Some("2024".to_string())
        );
        assert_eq!(parse_version("icd10gm_.csv", "icd10gm"), None);
        assert_eq!(parse_version("atc.csv", "icd10gm"), None);
    }

    #[test]
    fn reads_code_column_case_insensitively() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("codes.csv");
        let mut f = std::fs::File::create(&path).expect("create");
        writeln!(f, "Code,Display").unwrap();
        writeln!(f, "C34.9,Lung").unwrap();
        writeln!(f, " C50.9 ,Breast").unwrap();
        writeln!(f, ",empty").unwrap();
        drop(f);

        let codes = read_code_column(&path, "code").expect("read");
        assert_eq!(codes.len(), 2);
        assert!(codes.contains("C50.9"));
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("codes.csv");
        std::fs::write(&path, "display\nLung\n").expect("write");

        let err = read_code_column(&path, "code").expect_err("must fail");
        assert!(matches!(err, CatalogError::MissingColumn { .. }));
    }
}
