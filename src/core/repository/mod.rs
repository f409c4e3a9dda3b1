//! Read-only requirement lookup over the primary and multi-major tables
//!
//! Lookups never fail. A request that matches no row walks the fallback chain
//! in [`matching`] and finally degrades to the built-in per-program default.

pub mod catalog;
pub mod matching;

pub use catalog::{CatalogEntry, MajorCatalog};
pub use matching::{fallback_match, normalize_major_name, RequirementKey, RequirementSource};

use crate::core::error::AdvisorError;
use crate::core::models::{MultiRequirement, PrimaryRequirement, ProgramType};
use crate::core::tables;
use std::collections::HashMap;
use std::path::Path;

type RowKey = (String, ProgramType, u32);

/// A looked-up record together with how it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup<T> {
    /// The record (an owned copy of the table row, or the built-in default)
    pub record: T,
    /// How the record was resolved
    pub source: RequirementSource,
}

/// Requirement tables, loaded once and shared by reference for the process lifetime
#[derive(Debug, Clone, Default)]
pub struct RequirementRepository {
    primary: Vec<PrimaryRequirement>,
    multi: Vec<MultiRequirement>,
    primary_index: HashMap<RowKey, usize>,
    multi_index: HashMap<RowKey, usize>,
}

fn build_index<T: RequirementKey>(rows: &[T]) -> HashMap<RowKey, usize> {
    let mut index = HashMap::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        // First row wins for duplicate keys, matching table order everywhere else
        index
            .entry((row.major().to_string(), row.program_type(), row.admission_year()))
            .or_insert(idx);
    }
    index
}

fn lookup_in<T: RequirementKey + Clone>(
    rows: &[T],
    index: &HashMap<RowKey, usize>,
    major: &str,
    program: ProgramType,
    year: u32,
) -> Option<Lookup<T>> {
    let major = major.trim();
    if let Some(&idx) = index.get(&(major.to_string(), program, year)) {
        return Some(Lookup {
            record: rows[idx].clone(),
            source: RequirementSource::Exact,
        });
    }
    fallback_match(rows, major, program, year).map(|(row, source)| Lookup {
        record: row.clone(),
        source,
    })
}

impl RequirementRepository {
    /// Build a repository from already-parsed rows
    #[must_use]
    pub fn new(primary: Vec<PrimaryRequirement>, multi: Vec<MultiRequirement>) -> Self {
        let primary_index = build_index(&primary);
        let multi_index = build_index(&multi);
        Self {
            primary,
            multi,
            primary_index,
            multi_index,
        }
    }

    /// Load both tables from CSV files
    ///
    /// A missing file yields an empty table (every lookup then degrades to
    /// defaults) and a logged warning.
    ///
    /// # Errors
    /// Returns an error if a file exists but cannot be read or has no usable
    /// header.
    pub fn load(primary_path: &Path, multi_path: &Path) -> Result<Self, AdvisorError> {
        let primary = tables::load_table_or_empty(primary_path, tables::parse_primary_csv)?;
        let multi = tables::load_table_or_empty(multi_path, tables::parse_multi_csv)?;
        crate::info!(
            "Loaded {} primary and {} multi-major requirement rows",
            primary.len(),
            multi.len()
        );
        Ok(Self::new(primary, multi))
    }

    /// Primary-table rows in load order
    #[must_use]
    pub fn primary_rows(&self) -> &[PrimaryRequirement] {
        &self.primary
    }

    /// Multi-major-table rows in load order
    #[must_use]
    pub fn multi_rows(&self) -> &[MultiRequirement] {
        &self.multi
    }

    /// Home-major requirement for a student taking `program`
    #[must_use]
    pub fn lookup_primary(
        &self,
        major: &str,
        program: ProgramType,
        year: u32,
    ) -> Lookup<PrimaryRequirement> {
        lookup_in(&self.primary, &self.primary_index, major, program, year).map_or_else(
            || {
                crate::debug!(
                    "No primary requirement for {major} ({program}, {year}); using default"
                );
                Lookup {
                    record: PrimaryRequirement::fallback(major.trim(), program, year),
                    source: RequirementSource::Default,
                }
            },
            |found| {
                if found.source.is_estimate() {
                    crate::debug!(
                        "Primary requirement for {major} ({program}, {year}) resolved via {}",
                        found.source
                    );
                }
                found
            },
        )
    }

    /// Multi-major requirement for `major` under `program`
    #[must_use]
    pub fn lookup_multi(
        &self,
        major: &str,
        program: ProgramType,
        year: u32,
    ) -> Lookup<MultiRequirement> {
        lookup_in(&self.multi, &self.multi_index, major, program, year).map_or_else(
            || {
                crate::debug!(
                    "No multi-major requirement for {major} ({program}, {year}); using default"
                );
                Lookup {
                    record: MultiRequirement::fallback(major.trim(), program, year),
                    source: RequirementSource::Default,
                }
            },
            |found| {
                if found.source.is_estimate() {
                    crate::debug!(
                        "Multi-major requirement for {major} ({program}, {year}) resolved via {}",
                        found.source
                    );
                }
                found
            },
        )
    }
}
