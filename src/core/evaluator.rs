//! Program evaluation: one fully analyzed result per candidate program type
//!
//! The evaluator looks up both requirement records, runs the deficit rules
//! over every category, derives the graduation-credit target and classifies
//! feasibility. It holds the repository by reference and never mutates it, so
//! evaluating the same snapshot twice gives identical results.

use crate::core::capacity::CapacityModel;
use crate::core::deficit::apply_excess_to_elective;
use crate::core::error::DataWarning;
use crate::core::models::{
    CategoryCredits, CreditAnalysis, GraduationStatus, MultiRequirement, PrimaryRequirement,
    ProgramType, SimulationResult, StudentKind, StudentSnapshot,
};
use crate::core::planner::{FillPolicy, SemesterPlanner};
use crate::core::repository::{RequirementRepository, RequirementSource};

/// Institution-wide ceiling on double-major graduation credits
pub const DOUBLE_MAJOR_CAP: u32 = 130;

/// Whether the student's earned multi-major credits count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Participation {
    /// Prospective applicant; multi-major credits are taken as zero
    NewApplicant,
    /// Already enrolled; earned multi-major credits offset the deficits
    ExistingParticipant,
}

impl Participation {
    /// Whether earned multi-major credits are counted
    #[must_use]
    pub const fn counts_multi_credits(self) -> bool {
        matches!(self, Self::ExistingParticipant)
    }
}

impl From<StudentKind> for Participation {
    fn from(kind: StudentKind) -> Self {
        match kind {
            StudentKind::NewApplicant => Self::NewApplicant,
            StudentKind::CurrentParticipant => Self::ExistingParticipant,
        }
    }
}

/// Tunable advising policy, passed explicitly to everything that needs it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorPolicy {
    /// Per-semester cap and feasibility margin
    pub capacity: CapacityModel,
    /// Double-major graduation-credit ceiling when the multi record sets none
    pub double_major_cap: u32,
    /// Semester-plan category order and required-course cap
    pub fill_policy: FillPolicy,
}

impl Default for AdvisorPolicy {
    fn default() -> Self {
        Self {
            capacity: CapacityModel::default(),
            double_major_cap: DOUBLE_MAJOR_CAP,
            fill_policy: FillPolicy::default(),
        }
    }
}

impl AdvisorPolicy {
    /// Planner configured from this policy
    #[must_use]
    pub fn planner(&self) -> SemesterPlanner {
        SemesterPlanner::new(
            self.capacity.max_credits_per_semester,
            self.fill_policy.clone(),
        )
    }
}

/// Evaluates program types for a student against a shared repository
#[derive(Debug, Clone)]
pub struct ProgramEvaluator<'a> {
    repo: &'a RequirementRepository,
    policy: AdvisorPolicy,
}

/// General-education categories; transfers are exempt and get zero requirements
fn general_education(
    student: &StudentSnapshot,
    primary: &PrimaryRequirement,
) -> (CategoryCredits, CategoryCredits, CategoryCredits) {
    let c = &student.credits;
    let required = |value: Option<u32>| {
        if student.admission_type.is_freshman() {
            value.unwrap_or(0)
        } else {
            0
        }
    };
    (
        CategoryCredits::new(required(primary.basic_literacy), c.basic_literacy),
        CategoryCredits::new(required(primary.basic_science), c.basic_science),
        CategoryCredits::new(required(primary.core_liberal), c.core_liberal),
    )
}

/// Home-major categories after rolling excess required credits into electives
fn major_categories(
    student: &StudentSnapshot,
    requirement: (u32, u32),
) -> (CategoryCredits, CategoryCredits) {
    let (required, elective) = requirement;
    let (adj_required, adj_elective) = apply_excess_to_elective(
        student.credits.major_required,
        required,
        student.credits.major_elective,
    );
    (
        CategoryCredits::new(required, adj_required),
        CategoryCredits::new(elective, adj_elective),
    )
}

impl<'a> ProgramEvaluator<'a> {
    /// Create an evaluator over `repo`
    #[must_use]
    pub const fn new(repo: &'a RequirementRepository, policy: AdvisorPolicy) -> Self {
        Self { repo, policy }
    }

    /// The policy in use
    #[must_use]
    pub const fn policy(&self) -> &AdvisorPolicy {
        &self.policy
    }

    /// Graduation-credit target for `program`
    ///
    /// A double major needs the larger of the home-major target and the home
    /// target plus the multi-major total, capped at the multi record's own
    /// ceiling or else the policy's double-major cap. Every other program
    /// keeps the home-major target.
    #[must_use]
    pub fn graduation_target(
        &self,
        program: ProgramType,
        primary_graduation: u32,
        multi: &MultiRequirement,
    ) -> u32 {
        if program != ProgramType::DoubleMajor {
            return primary_graduation;
        }
        let cap = multi
            .max_graduation_credits
            .unwrap_or(self.policy.double_major_cap);
        let multi_graduation = primary_graduation.saturating_add(multi.total);
        primary_graduation.max(multi_graduation).min(cap)
    }

    /// Remaining semesters, recording a warning when the snapshot reports more
    /// completed semesters than the program has
    fn remaining_semesters(
        &self,
        student: &StudentSnapshot,
        warnings: &mut Vec<DataWarning>,
    ) -> u32 {
        let total = student.admission_type.total_semesters();
        if student.completed_semesters > total {
            let warning = DataWarning::SemestersExceedProgram {
                completed: student.completed_semesters,
                total,
            };
            crate::warn!("{}", warning);
            warnings.push(warning);
        }
        CapacityModel::remaining_semesters(student.admission_type, student.completed_semesters)
    }

    /// Evaluate one program type for one target major
    #[must_use]
    pub fn evaluate(
        &self,
        student: &StudentSnapshot,
        program: ProgramType,
        target_major: &str,
        participation: Participation,
    ) -> SimulationResult {
        let mut warnings = Vec::new();
        let capacity = &self.policy.capacity;
        let year = student.admission_year;

        let primary = self.repo.lookup_primary(&student.primary_major, program, year);
        let multi = self.repo.lookup_multi(target_major, program, year);
        for (table, major, source) in [
            ("primary", student.primary_major.as_str(), primary.source),
            ("multi", target_major, multi.source),
        ] {
            if source == RequirementSource::Default {
                let warning = DataWarning::RequirementDefaulted {
                    table,
                    major: major.trim().to_string(),
                    program: program.label(),
                };
                crate::warn!("{}", warning);
                warnings.push(warning);
            }
        }

        let remaining_semesters = self.remaining_semesters(student, &mut warnings);
        let max_additional_credits = capacity.max_additional_credits(remaining_semesters);

        let (major_required, major_elective) =
            major_categories(student, primary.record.major_requirement_for(program));
        let (basic_literacy, basic_science, core_liberal) =
            general_education(student, &primary.record);

        let counts_multi = participation.counts_multi_credits();
        let (multi_done_required, multi_done_elective) = if counts_multi {
            (student.credits.multi_required, student.credits.multi_elective)
        } else {
            (0, 0)
        };
        let multi_required = CategoryCredits::new(multi.record.multi_required, multi_done_required);
        let multi_elective = CategoryCredits::new(multi.record.multi_elective, multi_done_elective);

        let graduation = CategoryCredits::new(
            self.graduation_target(program, primary.record.graduation_credits, &multi.record),
            student.completed_total(counts_multi),
        );

        let analysis = CreditAnalysis {
            major_required,
            major_elective,
            multi_required,
            multi_elective,
            basic_literacy,
            basic_science,
            core_liberal,
            graduation,
            baseline_major_requirement: (
                primary.record.major_required,
                primary.record.major_elective,
            ),
            remaining_semesters,
            max_additional_credits,
        };

        let status = capacity.classify(
            analysis.category_deficit_total(),
            max_additional_credits,
            remaining_semesters,
        );
        crate::debug!(
            "{} {} for {}: deficit {} of {} available -> {}",
            target_major,
            program,
            student.primary_major,
            analysis.category_deficit_total(),
            max_additional_credits,
            status
        );

        SimulationResult {
            program_type: program,
            multi_major: target_major.trim().to_string(),
            status,
            can_graduate: status.can_graduate(),
            analysis,
            primary_source: primary.source,
            multi_source: multi.source,
            rank: 0,
            recommended: false,
            reason: String::new(),
            semester_plan: Vec::new(),
            warnings,
        }
    }

    /// Home-major-only analysis, as if no multi-major were declared
    ///
    /// The primary record is looked up under 복수전공 and its unchanged major
    /// columns are used; multi-major categories stay empty.
    #[must_use]
    pub fn analyze_current_status(&self, student: &StudentSnapshot) -> CreditAnalysis {
        let primary = self.repo.lookup_primary(
            &student.primary_major,
            ProgramType::DoubleMajor,
            student.admission_year,
        );
        let remaining_semesters =
            CapacityModel::remaining_semesters(student.admission_type, student.completed_semesters);
        let baseline = (primary.record.major_required, primary.record.major_elective);
        let (major_required, major_elective) = major_categories(student, baseline);
        let (basic_literacy, basic_science, core_liberal) =
            general_education(student, &primary.record);

        CreditAnalysis {
            major_required,
            major_elective,
            basic_literacy,
            basic_science,
            core_liberal,
            graduation: CategoryCredits::new(
                primary.record.graduation_credits,
                student.completed_total(false),
            ),
            baseline_major_requirement: baseline,
            remaining_semesters,
            max_additional_credits: self
                .policy
                .capacity
                .max_additional_credits(remaining_semesters),
            ..CreditAnalysis::default()
        }
    }

    /// Feasibility of graduating on the home major alone, judged on the
    /// graduation-credit deficit
    #[must_use]
    pub const fn classify_current(&self, current: &CreditAnalysis) -> GraduationStatus {
        self.policy.capacity.classify(
            current.graduation_deficit(),
            current.max_additional_credits,
            current.remaining_semesters,
        )
    }
}
