//! Major-name normalization and the requirement fallback chain

use crate::core::models::{MultiRequirement, PrimaryRequirement, ProgramType};
use std::fmt;

/// Where a looked-up requirement record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequirementSource {
    /// Exact (major, program type, year) row
    Exact,
    /// Same program type and year, major matched after normalization
    NormalizedName,
    /// Same program type, closest available catalog year
    NearestYear {
        /// Catalog year actually used
        year: u32,
    },
    /// No row matched; the built-in per-program default was used
    Default,
}

impl RequirementSource {
    /// Whether the record is an estimate rather than the student's own row
    #[must_use]
    pub const fn is_estimate(self) -> bool {
        !matches!(self, Self::Exact)
    }
}

impl fmt::Display for RequirementSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact match"),
            Self::NormalizedName => write!(f, "matched by normalized major name"),
            Self::NearestYear { year } => write!(f, "nearest catalog year ({year})"),
            Self::Default => write!(f, "built-in default"),
        }
    }
}

/// Rows that can be matched by (major, program type, year)
pub trait RequirementKey {
    /// Major name as written in the table
    fn major(&self) -> &str;
    /// Program type of the row
    fn program_type(&self) -> ProgramType;
    /// Reference admission year of the row
    fn admission_year(&self) -> u32;
}

impl RequirementKey for PrimaryRequirement {
    fn major(&self) -> &str {
        &self.major
    }
    fn program_type(&self) -> ProgramType {
        self.program_type
    }
    fn admission_year(&self) -> u32 {
        self.admission_year
    }
}

impl RequirementKey for MultiRequirement {
    fn major(&self) -> &str {
        &self.major
    }
    fn program_type(&self) -> ProgramType {
        self.program_type
    }
    fn admission_year(&self) -> u32 {
        self.admission_year
    }
}

/// Reduce a major name to its matching key
///
/// Drops parenthetical campus/degree suffixes such as `(평캠)` or `(5년제)`,
/// removes the generic noun `전공`, and collapses whitespace.
///
/// # Examples
/// ```
/// use multimajor_advisor::core::repository::normalize_major_name;
/// assert_eq!(normalize_major_name("경영학전공(평캠)"), "경영학");
/// ```
#[must_use]
pub fn normalize_major_name(name: &str) -> String {
    let mut stripped = String::with_capacity(name.len());
    let mut depth = 0usize;
    for ch in name.chars() {
        match ch {
            '(' | '（' => depth += 1,
            ')' | '）' => depth = depth.saturating_sub(1),
            _ if depth == 0 => stripped.push(ch),
            _ => {}
        }
    }
    stripped
        .replace("전공", "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Resolve a row once the exact (major, program, year) key has missed
///
/// Fallback priority:
/// 1. normalized-name containment, same program type and year
/// 2. exact name, same program type, nearest year
/// 3. normalized-name containment, same program type, nearest year
///
/// Year ties go to the older catalog year; among rows with the chosen year
/// the first in table order wins.
pub fn fallback_match<'a, T: RequirementKey>(
    rows: &'a [T],
    major: &str,
    program: ProgramType,
    year: u32,
) -> Option<(&'a T, RequirementSource)> {
    let keyword = normalize_major_name(major);
    let contains_keyword = |row: &T| {
        !keyword.is_empty() && row.major().to_lowercase().contains(keyword.as_str())
    };
    let same_program: Vec<&'a T> = rows
        .iter()
        .filter(|row| row.program_type() == program)
        .collect();

    if let Some(&row) = same_program
        .iter()
        .find(|row| row.admission_year() == year && contains_keyword(**row))
    {
        return Some((row, RequirementSource::NormalizedName));
    }

    let nearest = |candidates: Vec<&'a T>| {
        candidates
            .into_iter()
            .min_by_key(|row| (row.admission_year().abs_diff(year), row.admission_year()))
            .map(|row| {
                (
                    row,
                    RequirementSource::NearestYear {
                        year: row.admission_year(),
                    },
                )
            })
    };

    let exact_name: Vec<&'a T> = same_program
        .iter()
        .copied()
        .filter(|row| row.major() == major)
        .collect();
    nearest(exact_name).or_else(|| {
        let by_keyword: Vec<&'a T> = same_program
            .iter()
            .copied()
            .filter(|row| contains_keyword(*row))
            .collect();
        nearest(by_keyword)
    })
}
