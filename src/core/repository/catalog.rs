//! Major catalog: canonical major names and the programs they are offered under

use super::normalize_major_name;
use crate::core::models::ProgramType;

/// One catalog major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Canonical major name
    pub name: String,
    /// Program types the major can be taken under
    pub programs: Vec<ProgramType>,
}

/// Catalog of majors used to canonicalize names and pick candidate programs
#[derive(Debug, Clone, Default)]
pub struct MajorCatalog {
    entries: Vec<CatalogEntry>,
}

impl MajorCatalog {
    /// Build a catalog from entries (later duplicates merge into the first)
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut catalog = Self::default();
        for entry in entries {
            catalog.add(entry);
        }
        catalog
    }

    /// Add an entry, merging program lists for a repeated name
    pub fn add(&mut self, entry: CatalogEntry) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.name == entry.name) {
            for program in entry.programs {
                if !existing.programs.contains(&program) {
                    existing.programs.push(program);
                }
            }
        } else {
            self.entries.push(entry);
        }
    }

    /// Number of majors in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in load order
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Find the entry for a user-supplied major name
    ///
    /// Exact name first, then the unique entry whose normalized name equals
    /// the normalized input. Ambiguous normalized matches resolve to nothing.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&CatalogEntry> {
        let trimmed = name.trim();
        if let Some(entry) = self.entries.iter().find(|e| e.name == trimmed) {
            return Some(entry);
        }
        let key = normalize_major_name(trimmed);
        if key.is_empty() {
            return None;
        }
        let mut matches = self
            .entries
            .iter()
            .filter(|e| normalize_major_name(&e.name) == key);
        match (matches.next(), matches.next()) {
            (Some(entry), None) => Some(entry),
            _ => None,
        }
    }

    /// Canonical spelling of a major, or the input unchanged when unknown
    #[must_use]
    pub fn canonical_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.find(name).map_or_else(|| name.trim(), |e| e.name.as_str())
    }

    /// Whether the major is a convergence major
    #[must_use]
    pub fn is_convergence(&self, name: &str) -> bool {
        self.find(name)
            .is_some_and(|e| e.programs.contains(&ProgramType::ConvergenceMajor))
    }

    /// Whether the major is only offered as a micro-degree course
    #[must_use]
    pub fn is_micro_degree(&self, name: &str) -> bool {
        self.find(name).is_some_and(|e| {
            !e.programs.is_empty() && e.programs.iter().all(|&p| p == ProgramType::MicroDegree)
        })
    }
}
