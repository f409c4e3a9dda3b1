//! Semester planner for spreading outstanding credits over the remaining semesters
//!
//! Each remaining semester gets an even share of what is still outstanding
//! (never more than the per-semester cap), and that share is poured into the
//! categories in the order the [`FillPolicy`] gives for the semester's grade.

use super::policy::FillPolicy;
use crate::core::capacity::MAX_CREDITS_PER_SEMESTER;
use crate::core::models::{
    AdmissionType, CategoryBreakdown, CreditAnalysis, PlanCategory, SemesterAllocation,
    StudentSnapshot,
};

/// Planner limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterPlanner {
    /// Most credits one semester may carry
    pub max_credits_per_semester: u32,
    /// Category order and required-course cap
    pub fill_policy: FillPolicy,
}

impl Default for SemesterPlanner {
    fn default() -> Self {
        Self {
            max_credits_per_semester: MAX_CREDITS_PER_SEMESTER,
            fill_policy: FillPolicy::default(),
        }
    }
}

/// `(grade, half)` of the semester numbered `absolute_semester` from program start
///
/// Direct-entry students start in grade 1; transfers start in grade 3.
#[must_use]
pub const fn grade_and_half(admission_type: AdmissionType, absolute_semester: u32) -> (u32, u32) {
    let index = absolute_semester.saturating_sub(1);
    let grade = admission_type.starting_grade().saturating_add(index / 2);
    let half = if absolute_semester % 2 == 1 { 1 } else { 2 };
    (grade, half)
}

/// Outstanding credits per category at the start of planning
fn initial_pool(analysis: &CreditAnalysis) -> CategoryBreakdown {
    let required_deficit = analysis.required_deficit();
    CategoryBreakdown {
        basic_literacy: analysis.basic_literacy.deficit,
        basic_science: analysis.basic_science.deficit,
        core_liberal: analysis.core_liberal.deficit,
        major_required: analysis.major_required.deficit,
        multi_required: analysis.multi_required.deficit,
        major_elective: analysis.major_elective.deficit,
        multi_elective: analysis.multi_elective.deficit,
        free: analysis.graduation_deficit().saturating_sub(required_deficit),
    }
}

impl SemesterPlanner {
    /// Create a planner
    #[must_use]
    pub const fn new(max_credits_per_semester: u32, fill_policy: FillPolicy) -> Self {
        Self {
            max_credits_per_semester,
            fill_policy,
        }
    }

    /// Lay out the outstanding credits of `analysis` semester by semester
    ///
    /// Semesters that end up empty are left out, so a student with nothing
    /// outstanding gets an empty plan.
    #[must_use]
    pub fn generate_plan(
        &self,
        analysis: &CreditAnalysis,
        student: &StudentSnapshot,
    ) -> Vec<SemesterAllocation> {
        let semesters = analysis.remaining_semesters;
        if semesters == 0 {
            return Vec::new();
        }

        let mut pool = initial_pool(analysis);
        let mut remaining_total = analysis
            .required_deficit()
            .max(analysis.graduation_deficit());
        let mut plan = Vec::new();

        for offset in 0..semesters {
            let semesters_left = semesters - offset;
            let target = self
                .max_credits_per_semester
                .min(remaining_total.div_ceil(semesters_left))
                .min(remaining_total);

            let absolute = student.completed_semesters + offset + 1;
            let (grade, half) = grade_and_half(student.admission_type, absolute);
            let credits = self.fill_semester(&mut pool, target, grade);
            let total = credits.total();
            remaining_total = remaining_total.saturating_sub(total);

            if total > 0 {
                plan.push(SemesterAllocation {
                    grade,
                    half,
                    credits,
                    total,
                });
            }
        }

        crate::debug!(
            "Planned {} semesters for {} ({} credits left unplaced)",
            plan.len(),
            student.primary_major,
            remaining_total
        );
        plan
    }

    /// Take up to `target` credits from `pool` in the grade's category order
    fn fill_semester(
        &self,
        pool: &mut CategoryBreakdown,
        target: u32,
        grade: u32,
    ) -> CategoryBreakdown {
        let mut credits = CategoryBreakdown::default();
        let mut room = target;

        for &category in self.fill_policy.order_for_grade(grade) {
            if room == 0 {
                break;
            }
            let outstanding = pool.get(category);
            let mut take = outstanding.min(room);
            if let Some(cap) = self.fill_policy.category_cap(category) {
                take = take.min(cap);
            }
            if take == 0 {
                continue;
            }
            *pool.slot_mut(category) -= take;
            *credits.slot_mut(category) += take;
            room -= take;
        }

        credits
    }
}

/// Plan with the default limits
#[must_use]
pub fn generate_plan(
    analysis: &CreditAnalysis,
    student: &StudentSnapshot,
) -> Vec<SemesterAllocation> {
    SemesterPlanner::default().generate_plan(analysis, student)
}

/// Sum of every planned semester
#[must_use]
pub fn planned_total(plan: &[SemesterAllocation]) -> u32 {
    plan.iter().map(|s| s.total).sum()
}

/// Sum of one category across a plan
#[must_use]
pub fn planned_category(plan: &[SemesterAllocation], category: PlanCategory) -> u32 {
    plan.iter().map(|s| s.credits.get(category)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CategoryCredits;

    fn analysis(
        deficits: [u32; 4],
        gen_ed: [u32; 3],
        graduation: u32,
        remaining: u32,
    ) -> CreditAnalysis {
        CreditAnalysis {
            major_required: CategoryCredits::new(deficits[0], 0),
            major_elective: CategoryCredits::new(deficits[1], 0),
            multi_required: CategoryCredits::new(deficits[2], 0),
            multi_elective: CategoryCredits::new(deficits[3], 0),
            basic_literacy: CategoryCredits::new(gen_ed[0], 0),
            basic_science: CategoryCredits::new(gen_ed[1], 0),
            core_liberal: CategoryCredits::new(gen_ed[2], 0),
            graduation: CategoryCredits::new(graduation, 0),
            remaining_semesters: remaining,
            max_additional_credits: remaining * 18,
            ..CreditAnalysis::default()
        }
    }

    #[test]
    fn test_grade_and_half() {
        assert_eq!(grade_and_half(AdmissionType::Freshman, 1), (1, 1));
        assert_eq!(grade_and_half(AdmissionType::Freshman, 5), (3, 1));
        assert_eq!(grade_and_half(AdmissionType::Freshman, 8), (4, 2));
        assert_eq!(grade_and_half(AdmissionType::TransferSameField, 1), (3, 1));
        assert_eq!(grade_and_half(AdmissionType::TransferOtherField, 4), (4, 2));
    }

    #[test]
    fn test_plan_spreads_evenly_and_respects_caps() {
        let student = StudentSnapshot::new(2023, "경영학전공", AdmissionType::Freshman, 4);
        let analysis = analysis([6, 13, 15, 21], [0, 0, 0], 0, 4);
        let plan = generate_plan(&analysis, &student);

        assert_eq!(plan.len(), 4);
        assert_eq!(plan[0].label(), "3학년 1학기");
        assert_eq!(plan[3].label(), "4학년 2학기");
        for semester in &plan {
            assert!(semester.total <= 18);
            assert!(semester.credits.major_required <= 6);
            assert!(semester.credits.multi_required <= 6);
        }
        assert_eq!(planned_total(&plan), 55);
        assert_eq!(planned_category(&plan, PlanCategory::MultiRequired), 15);
    }

    #[test]
    fn test_general_education_first_in_fourth_grade() {
        let student = StudentSnapshot::new(2023, "경영학전공", AdmissionType::Freshman, 6);
        let analysis = analysis([3, 0, 0, 0], [2, 0, 0], 0, 2);
        let plan = generate_plan(&analysis, &student);

        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].credits.basic_literacy, 2);
        assert_eq!(plan[0].credits.major_required, 1);
        assert_eq!(plan[1].credits.major_required, 2);
    }

    #[test]
    fn test_free_credits_fill_graduation_gap() {
        let student = StudentSnapshot::new(2023, "경영학전공", AdmissionType::Freshman, 7);
        let analysis = analysis([0, 3, 0, 0], [0, 0, 0], 12, 1);
        let plan = generate_plan(&analysis, &student);

        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].credits.major_elective, 3);
        assert_eq!(plan[0].credits.free, 9);
        assert_eq!(plan[0].total, 12);
    }

    #[test]
    fn test_empty_semesters_are_omitted() {
        let student = StudentSnapshot::new(2023, "경영학전공", AdmissionType::Freshman, 4);
        let plan = generate_plan(&analysis([2, 0, 0, 0], [0, 0, 0], 0, 4), &student);
        assert_eq!(plan.len(), 2);
        assert!(generate_plan(&analysis([0; 4], [0; 3], 0, 4), &student).is_empty());
        assert!(generate_plan(&analysis([9; 4], [0; 3], 0, 0), &student).is_empty());
    }

    #[test]
    fn test_required_cap_can_leave_credits_unplaced() {
        let student = StudentSnapshot::new(2023, "경영학전공", AdmissionType::TransferSameField, 3);
        let plan = generate_plan(&analysis([15, 0, 0, 0], [0, 0, 0], 0, 1), &student);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].total, 6);
        assert_eq!(plan[0].label(), "4학년 2학기");
    }
}
