//! Year-dependent category fill order

use crate::core::models::PlanCategory;

/// Credits of one required-course category allowed per semester
pub const REQUIRED_CAP_PER_SEMESTER: u32 = 6;

/// School years in which general education is filled before major courses
pub const GENERAL_EDUCATION_FIRST_GRADES: [u32; 2] = [1, 4];

const GENERAL_EDUCATION_FIRST: [PlanCategory; 8] = [
    PlanCategory::BasicLiteracy,
    PlanCategory::BasicScience,
    PlanCategory::CoreLiberal,
    PlanCategory::MajorRequired,
    PlanCategory::MultiRequired,
    PlanCategory::MajorElective,
    PlanCategory::MultiElective,
    PlanCategory::Free,
];

const MAJOR_FIRST: [PlanCategory; 8] = [
    PlanCategory::MajorRequired,
    PlanCategory::MultiRequired,
    PlanCategory::MajorElective,
    PlanCategory::MultiElective,
    PlanCategory::BasicLiteracy,
    PlanCategory::BasicScience,
    PlanCategory::CoreLiberal,
    PlanCategory::Free,
];

/// How a semester's credits are spread over the outstanding categories
///
/// The grade boundaries are institutional policy, not a fact about every
/// school, so they are carried as data and can be overridden from config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillPolicy {
    /// Grades filled general-education first; every other grade is major first
    pub general_education_first_grades: Vec<u32>,
    /// Cap per semester for each required-course category
    pub required_cap_per_semester: u32,
}

impl Default for FillPolicy {
    fn default() -> Self {
        Self {
            general_education_first_grades: GENERAL_EDUCATION_FIRST_GRADES.to_vec(),
            required_cap_per_semester: REQUIRED_CAP_PER_SEMESTER,
        }
    }
}

impl FillPolicy {
    /// Category order for a semester in `grade`
    #[must_use]
    pub fn order_for_grade(&self, grade: u32) -> &'static [PlanCategory; 8] {
        if self.general_education_first_grades.contains(&grade) {
            &GENERAL_EDUCATION_FIRST
        } else {
            &MAJOR_FIRST
        }
    }

    /// Most credits of `category` one semester may take
    #[must_use]
    pub const fn category_cap(&self, category: PlanCategory) -> Option<u32> {
        if category.is_required_course() {
            Some(self.required_cap_per_semester)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order_flips_between_grades() {
        let policy = FillPolicy::default();
        assert_eq!(policy.order_for_grade(1)[0], PlanCategory::BasicLiteracy);
        assert_eq!(policy.order_for_grade(2)[0], PlanCategory::MajorRequired);
        assert_eq!(policy.order_for_grade(3)[4], PlanCategory::BasicLiteracy);
        assert_eq!(policy.order_for_grade(4)[0], PlanCategory::BasicLiteracy);
        for grade in 1..=4 {
            assert_eq!(policy.order_for_grade(grade)[7], PlanCategory::Free);
        }
    }

    #[test]
    fn test_overridden_grades() {
        let policy = FillPolicy {
            general_education_first_grades: vec![1],
            ..FillPolicy::default()
        };
        assert_eq!(policy.order_for_grade(4)[0], PlanCategory::MajorRequired);
    }

    #[test]
    fn test_required_cap_only_on_required_courses() {
        let policy = FillPolicy::default();
        assert_eq!(policy.category_cap(PlanCategory::MultiRequired), Some(6));
        assert_eq!(policy.category_cap(PlanCategory::MajorElective), None);
    }
}
