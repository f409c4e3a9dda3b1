//! Computed analysis, result and plan models

use super::{GraduationStatus, ProgramType};
use crate::core::error::DataWarning;
use crate::core::repository::RequirementSource;

/// Required, completed and outstanding credits for one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCredits {
    /// Credits the catalog requires
    pub required: u32,
    /// Credits counted as completed (after excess rollover)
    pub completed: u32,
    /// `max(0, required - completed)`
    pub deficit: u32,
}

impl CategoryCredits {
    /// Build a category from its requirement and completed credits
    #[must_use]
    pub const fn new(required: u32, completed: u32) -> Self {
        Self {
            required,
            completed,
            deficit: crate::core::deficit::deficit(completed, required),
        }
    }
}

/// Per-category credit analysis for one student under one program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreditAnalysis {
    /// Home-major 전공필수
    pub major_required: CategoryCredits,
    /// Home-major 전공선택
    pub major_elective: CategoryCredits,
    /// Multi-major 전공필수
    pub multi_required: CategoryCredits,
    /// Multi-major 전공선택
    pub multi_elective: CategoryCredits,
    /// 기초교양(기초문해)
    pub basic_literacy: CategoryCredits,
    /// 기초교양(기초과학)
    pub basic_science: CategoryCredits,
    /// 핵심교양
    pub core_liberal: CategoryCredits,
    /// Overall graduation credits
    pub graduation: CategoryCredits,
    /// Home-major `(required, elective)` before any multi-major declaration
    pub baseline_major_requirement: (u32, u32),
    /// Semesters left in the program
    pub remaining_semesters: u32,
    /// Most credits the remaining semesters can hold
    pub max_additional_credits: u32,
}

impl CreditAnalysis {
    /// Sum of the four major/multi-major category deficits
    ///
    /// This is the quantity feasibility is classified and ranked on.
    #[must_use]
    pub const fn category_deficit_total(&self) -> u32 {
        self.major_required
            .deficit
            .saturating_add(self.major_elective.deficit)
            .saturating_add(self.multi_required.deficit)
            .saturating_add(self.multi_elective.deficit)
    }

    /// Sum of the general-education deficits
    #[must_use]
    pub const fn general_education_deficit(&self) -> u32 {
        self.basic_literacy
            .deficit
            .saturating_add(self.basic_science.deficit)
            .saturating_add(self.core_liberal.deficit)
    }

    /// Every category minimum still outstanding
    #[must_use]
    pub const fn required_deficit(&self) -> u32 {
        self.category_deficit_total()
            .saturating_add(self.general_education_deficit())
    }

    /// Credits still missing against the graduation-credit target
    #[must_use]
    pub const fn graduation_deficit(&self) -> u32 {
        self.graduation.deficit
    }
}

/// Semester-plan categories, in the order they are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanCategory {
    /// 기초교양(기초문해)
    BasicLiteracy,
    /// 기초교양(기초과학)
    BasicScience,
    /// 핵심교양
    CoreLiberal,
    /// Home-major 전공필수
    MajorRequired,
    /// Multi-major 전공필수
    MultiRequired,
    /// Home-major 전공선택
    MajorElective,
    /// Multi-major 전공선택
    MultiElective,
    /// Free electives needed only to reach the graduation target
    Free,
}

impl PlanCategory {
    /// Every category, in reporting order
    pub const ALL: [Self; 8] = [
        Self::BasicLiteracy,
        Self::BasicScience,
        Self::CoreLiberal,
        Self::MajorRequired,
        Self::MultiRequired,
        Self::MajorElective,
        Self::MultiElective,
        Self::Free,
    ];

    /// Korean column label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BasicLiteracy => "기초문해",
            Self::BasicScience => "기초과학",
            Self::CoreLiberal => "핵심교양",
            Self::MajorRequired => "본전공 필수",
            Self::MultiRequired => "다전공 필수",
            Self::MajorElective => "본전공 선택",
            Self::MultiElective => "다전공 선택",
            Self::Free => "자유",
        }
    }

    /// Whether the category is a general-education category
    #[must_use]
    pub const fn is_general_education(self) -> bool {
        matches!(
            self,
            Self::BasicLiteracy | Self::BasicScience | Self::CoreLiberal
        )
    }

    /// Whether the category is a required-course category subject to the
    /// per-semester required cap
    #[must_use]
    pub const fn is_required_course(self) -> bool {
        matches!(self, Self::MajorRequired | Self::MultiRequired)
    }
}

/// Credits assigned to each category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryBreakdown {
    /// 기초교양(기초문해)
    pub basic_literacy: u32,
    /// 기초교양(기초과학)
    pub basic_science: u32,
    /// 핵심교양
    pub core_liberal: u32,
    /// Home-major 전공필수
    pub major_required: u32,
    /// Multi-major 전공필수
    pub multi_required: u32,
    /// Home-major 전공선택
    pub major_elective: u32,
    /// Multi-major 전공선택
    pub multi_elective: u32,
    /// Free electives
    pub free: u32,
}

impl CategoryBreakdown {
    /// Credits for a category
    #[must_use]
    pub const fn get(&self, category: PlanCategory) -> u32 {
        match category {
            PlanCategory::BasicLiteracy => self.basic_literacy,
            PlanCategory::BasicScience => self.basic_science,
            PlanCategory::CoreLiberal => self.core_liberal,
            PlanCategory::MajorRequired => self.major_required,
            PlanCategory::MultiRequired => self.multi_required,
            PlanCategory::MajorElective => self.major_elective,
            PlanCategory::MultiElective => self.multi_elective,
            PlanCategory::Free => self.free,
        }
    }

    /// Mutable slot for a category
    pub fn slot_mut(&mut self, category: PlanCategory) -> &mut u32 {
        match category {
            PlanCategory::BasicLiteracy => &mut self.basic_literacy,
            PlanCategory::BasicScience => &mut self.basic_science,
            PlanCategory::CoreLiberal => &mut self.core_liberal,
            PlanCategory::MajorRequired => &mut self.major_required,
            PlanCategory::MultiRequired => &mut self.multi_required,
            PlanCategory::MajorElective => &mut self.major_elective,
            PlanCategory::MultiElective => &mut self.multi_elective,
            PlanCategory::Free => &mut self.free,
        }
    }

    /// Sum across categories
    #[must_use]
    pub fn total(&self) -> u32 {
        PlanCategory::ALL.iter().map(|&c| self.get(c)).sum()
    }
}

/// One planned semester
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterAllocation {
    /// School year (학년)
    pub grade: u32,
    /// Half of the year, 1 or 2
    pub half: u32,
    /// Credits assigned per category
    pub credits: CategoryBreakdown,
    /// Total credits this semester
    pub total: u32,
}

impl SemesterAllocation {
    /// Display label, e.g. `3학년 1학기`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}학년 {}학기", self.grade, self.half)
    }
}

/// Evaluation of one program type for one student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// Program type evaluated
    pub program_type: ProgramType,
    /// Multi-major evaluated
    pub multi_major: String,
    /// Feasibility classification
    pub status: GraduationStatus,
    /// Whether the status allows on-time graduation
    pub can_graduate: bool,
    /// Credit breakdown
    pub analysis: CreditAnalysis,
    /// Where the home-major requirement came from
    pub primary_source: RequirementSource,
    /// Where the multi-major requirement came from
    pub multi_source: RequirementSource,
    /// 1-based rank once ranked, 0 before
    pub rank: usize,
    /// Set on the top-ranked result
    pub recommended: bool,
    /// Human-readable rationale, filled by the ranker
    pub reason: String,
    /// Semester-by-semester plan
    pub semester_plan: Vec<SemesterAllocation>,
    /// Data-quality findings met while evaluating
    pub warnings: Vec<DataWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_credits_deficit() {
        assert_eq!(CategoryCredits::new(15, 9).deficit, 6);
        assert_eq!(CategoryCredits::new(15, 20).deficit, 0);
    }

    #[test]
    fn test_analysis_totals() {
        let analysis = CreditAnalysis {
            major_required: CategoryCredits::new(15, 9),
            major_elective: CategoryCredits::new(33, 20),
            multi_required: CategoryCredits::new(15, 0),
            multi_elective: CategoryCredits::new(21, 0),
            basic_literacy: CategoryCredits::new(6, 3),
            ..CreditAnalysis::default()
        };
        assert_eq!(analysis.category_deficit_total(), 55);
        assert_eq!(analysis.general_education_deficit(), 3);
        assert_eq!(analysis.required_deficit(), 58);
    }

    #[test]
    fn test_totals_saturate_on_huge_requirements() {
        let analysis = CreditAnalysis {
            major_required: CategoryCredits::new(u32::MAX, 0),
            multi_elective: CategoryCredits::new(21, 0),
            core_liberal: CategoryCredits::new(u32::MAX, 0),
            basic_science: CategoryCredits::new(3, 0),
            ..CreditAnalysis::default()
        };
        assert_eq!(analysis.category_deficit_total(), u32::MAX);
        assert_eq!(analysis.general_education_deficit(), u32::MAX);
        assert_eq!(analysis.required_deficit(), u32::MAX);
    }

    #[test]
    fn test_breakdown_slots() {
        let mut breakdown = CategoryBreakdown::default();
        *breakdown.slot_mut(PlanCategory::MultiRequired) += 6;
        *breakdown.slot_mut(PlanCategory::Free) += 3;
        assert_eq!(breakdown.get(PlanCategory::MultiRequired), 6);
        assert_eq!(breakdown.total(), 9);
    }

    #[test]
    fn test_allocation_label() {
        let allocation = SemesterAllocation {
            grade: 3,
            half: 2,
            credits: CategoryBreakdown::default(),
            total: 0,
        };
        assert_eq!(allocation.label(), "3학년 2학기");
    }
}
