//! Requirement-table loading
//!
//! Reads the primary, multi-major and catalog CSV files once at start-up.
//! Everything here runs before any evaluation; the core itself never touches
//! the filesystem.

pub mod csv_parser;
pub mod headers;

pub use csv_parser::{parse_catalog_csv, parse_multi_csv, parse_primary_csv, TableParse};
pub use headers::{Column, HeaderMap};

use crate::core::error::AdvisorError;
use crate::core::repository::MajorCatalog;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Signature shared by the table parsers: `(content, source_name)`
pub type TableParser<T> = fn(&str, &str) -> Result<TableParse<T>, AdvisorError>;

/// Read and parse one table, degrading to an empty table when the file is missing
///
/// Data-quality warnings found while parsing are logged at warn level.
///
/// # Errors
/// Returns an error if the file exists but cannot be read, or if the parser
/// rejects its header.
pub fn load_table_or_empty<T>(path: &Path, parser: TableParser<T>) -> Result<Vec<T>, AdvisorError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            crate::warn!(
                "Table {} not found; lookups will use built-in defaults",
                path.display()
            );
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(AdvisorError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let source_name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    let parsed = parser(&content, &source_name)?;
    for warning in &parsed.warnings {
        crate::warn!("{}", warning);
    }
    crate::debug!(
        "Parsed {} rows from {} ({} warnings)",
        parsed.rows.len(),
        source_name,
        parsed.warnings.len()
    );
    Ok(parsed.rows)
}

/// Load the major catalog, or an empty catalog when the file is missing
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_catalog(path: &Path) -> Result<MajorCatalog, AdvisorError> {
    let entries = load_table_or_empty(path, parse_catalog_csv)?;
    crate::info!("Loaded {} catalog majors from {}", entries.len(), path.display());
    Ok(MajorCatalog::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty_table() {
        let rows = load_table_or_empty(
            Path::new("/nonexistent/mmadvisor/primary.csv"),
            parse_primary_csv,
        )
        .unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_catalog_is_empty() {
        let catalog = load_catalog(Path::new("/nonexistent/mmadvisor/majors.csv")).unwrap();
        assert!(catalog.is_empty());
    }
}
