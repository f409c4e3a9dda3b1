//! Requirement records loaded from the reference tables

use super::ProgramType;
use serde::{Deserialize, Serialize};

/// Graduation credits assumed when a table gives none
pub const DEFAULT_GRADUATION_CREDITS: u32 = 120;

/// Home-major major-required credits assumed when a table gives none
pub const DEFAULT_MAJOR_REQUIRED: u32 = 15;

/// Home-major major-elective credits assumed when a table gives none
pub const DEFAULT_MAJOR_ELECTIVE: u32 = 33;

/// Home-major requirements for one (major, program type, catalog year)
///
/// The `*_changed` columns hold the reduced home-major requirement that
/// applies once the student declares the program in `program_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryRequirement {
    /// Home major name as written in the table
    pub major: String,
    /// Program type this row was written for
    pub program_type: ProgramType,
    /// Reference admission year (기준학번)
    pub admission_year: u32,
    /// 전공필수 without any multi-major
    pub major_required: u32,
    /// 전공선택 without any multi-major
    pub major_elective: u32,
    /// 전공필수 once the program is declared
    pub major_required_changed: u32,
    /// 전공선택 once the program is declared
    pub major_elective_changed: u32,
    /// 기초교양(기초문해), when the catalog sets one
    pub basic_literacy: Option<u32>,
    /// 기초교양(기초과학), when the catalog sets one
    pub basic_science: Option<u32>,
    /// 핵심교양, when the catalog sets one
    pub core_liberal: Option<u32>,
    /// Overall graduation-credit target
    pub graduation_credits: u32,
}

impl PrimaryRequirement {
    /// Built-in record used when no table row matches
    #[must_use]
    pub fn fallback(major: &str, program_type: ProgramType, admission_year: u32) -> Self {
        Self {
            major: major.to_string(),
            program_type,
            admission_year,
            major_required: DEFAULT_MAJOR_REQUIRED,
            major_elective: DEFAULT_MAJOR_ELECTIVE,
            major_required_changed: DEFAULT_MAJOR_REQUIRED,
            major_elective_changed: DEFAULT_MAJOR_ELECTIVE,
            basic_literacy: None,
            basic_science: None,
            core_liberal: None,
            graduation_credits: DEFAULT_GRADUATION_CREDITS,
        }
    }

    /// `(required, elective)` home-major requirement while taking `program`
    #[must_use]
    pub const fn major_requirement_for(&self, program: ProgramType) -> (u32, u32) {
        if program.changes_primary_requirements() {
            (self.major_required_changed, self.major_elective_changed)
        } else {
            (self.major_required, self.major_elective)
        }
    }
}

/// Multi-major requirements for one (major, program type, catalog year)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiRequirement {
    /// Multi-major name as written in the table
    pub major: String,
    /// Program type
    pub program_type: ProgramType,
    /// Reference admission year (기준학번)
    pub admission_year: u32,
    /// 다전공 전공필수
    pub multi_required: u32,
    /// 다전공 전공선택
    pub multi_elective: u32,
    /// 다전공 계
    pub total: u32,
    /// Graduation-credit ceiling for a double major in this program, when the
    /// catalog overrides the institution-wide cap (e.g. five-year programs)
    pub max_graduation_credits: Option<u32>,
}

impl MultiRequirement {
    /// Built-in record used when no table row matches
    #[must_use]
    pub fn fallback(major: &str, program_type: ProgramType, admission_year: u32) -> Self {
        let (multi_required, multi_elective, total) = program_type.default_multi_requirement();
        Self {
            major: major.to_string(),
            program_type,
            admission_year,
            multi_required,
            multi_elective,
            total,
            max_graduation_credits: None,
        }
    }
}
