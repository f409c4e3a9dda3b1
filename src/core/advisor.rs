//! End-to-end advising run for one student snapshot

use crate::core::error::AdvisorError;
use crate::core::evaluator::{AdvisorPolicy, Participation, ProgramEvaluator};
use crate::core::models::{
    CreditAnalysis, ProgramType, SimulationResult, StudentKind, StudentSnapshot,
};
use crate::core::planner::SemesterPlanner;
use crate::core::ranker;
use crate::core::repository::{MajorCatalog, RequirementRepository};

/// Programs compared for an ordinary major
pub const STANDARD_CANDIDATES: [ProgramType; 3] = [
    ProgramType::DoubleMajor,
    ProgramType::Minor,
    ProgramType::LinkedMajor,
];

/// Programs compared for a convergence major
pub const CONVERGENCE_CANDIDATES: [ProgramType; 3] = [
    ProgramType::ConvergenceMajor,
    ProgramType::ConvergenceMinor,
    ProgramType::LinkedMajor,
];

/// Programs compared for a micro-degree course
pub const MICRO_DEGREE_CANDIDATES: [ProgramType; 1] = [ProgramType::MicroDegree];

/// Everything one advising run produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutput {
    /// The snapshot that was analyzed
    pub student: StudentSnapshot,
    /// Home-major-only baseline
    pub current_analysis: CreditAnalysis,
    /// Whether the baseline alone allows on-time graduation
    pub current_can_graduate: bool,
    /// Evaluated programs, ranked best first for applicants
    pub results: Vec<SimulationResult>,
}

impl AnalysisOutput {
    /// The top-ranked result, if any program was evaluated
    #[must_use]
    pub fn recommended(&self) -> Option<&SimulationResult> {
        self.results.iter().find(|r| r.recommended)
    }
}

/// Ties the repository, catalog and policy together
#[derive(Debug, Clone)]
pub struct Advisor {
    repo: RequirementRepository,
    catalog: MajorCatalog,
    policy: AdvisorPolicy,
}

impl Advisor {
    /// Create an advisor; the repository is shared read-only by every run
    #[must_use]
    pub const fn new(
        repo: RequirementRepository,
        catalog: MajorCatalog,
        policy: AdvisorPolicy,
    ) -> Self {
        Self {
            repo,
            catalog,
            policy,
        }
    }

    /// The underlying repository
    #[must_use]
    pub const fn repository(&self) -> &RequirementRepository {
        &self.repo
    }

    /// The major catalog
    #[must_use]
    pub const fn catalog(&self) -> &MajorCatalog {
        &self.catalog
    }

    /// An evaluator borrowing this advisor's repository
    #[must_use]
    pub fn evaluator(&self) -> ProgramEvaluator<'_> {
        ProgramEvaluator::new(&self.repo, self.policy.clone())
    }

    fn planner(&self) -> SemesterPlanner {
        self.policy.planner()
    }

    /// Programs to compare for `target_major`
    #[must_use]
    pub fn candidate_programs(&self, target_major: &str) -> &'static [ProgramType] {
        if self.catalog.is_micro_degree(target_major) {
            &MICRO_DEGREE_CANDIDATES
        } else if self.catalog.is_convergence(target_major) {
            &CONVERGENCE_CANDIDATES
        } else {
            &STANDARD_CANDIDATES
        }
    }

    /// Evaluate and plan a single program
    #[must_use]
    pub fn evaluate_with_plan(
        &self,
        student: &StudentSnapshot,
        program: ProgramType,
        target_major: &str,
        participation: Participation,
    ) -> SimulationResult {
        let target = self.catalog.canonical_name(target_major);
        let mut result = self.evaluator().evaluate(student, program, target, participation);
        result.semester_plan = self.planner().generate_plan(&result.analysis, student);
        result
    }

    /// Run the full advising flow
    ///
    /// New applicants get every candidate program for their desired major,
    /// evaluated, planned and ranked. Existing participants get their current
    /// program only, with earned multi-major credits counted.
    ///
    /// # Errors
    /// Returns [`AdvisorError::MissingField`] when the snapshot lacks the
    /// fields its student kind needs.
    pub fn run(&self, student: &StudentSnapshot) -> Result<AnalysisOutput, AdvisorError> {
        student.validate()?;
        let evaluator = self.evaluator();
        let current_analysis = evaluator.analyze_current_status(student);
        let current_can_graduate = evaluator.classify_current(&current_analysis).can_graduate();

        let results = match (student.kind, student.current_program) {
            (StudentKind::CurrentParticipant, Some(program)) => {
                let major = student.current_multi_major.as_deref().unwrap_or_default();
                vec![self.evaluate_with_plan(
                    student,
                    program,
                    major,
                    Participation::ExistingParticipant,
                )]
            }
            _ => {
                let major = student.desired_multi_major.as_deref().unwrap_or_default();
                let candidates = self.candidate_programs(major);
                crate::info!(
                    "Comparing {} programs for {}",
                    candidates.len(),
                    self.catalog.canonical_name(major)
                );
                ranker::rank(
                    candidates
                        .iter()
                        .map(|&program| {
                            self.evaluate_with_plan(
                                student,
                                program,
                                major,
                                Participation::NewApplicant,
                            )
                        })
                        .collect(),
                )
            }
        };

        Ok(AnalysisOutput {
            student: student.clone(),
            current_analysis,
            current_can_graduate,
            results,
        })
    }
}
