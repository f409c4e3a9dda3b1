//! Graduation capacity: remaining semesters, credit headroom and feasibility

use crate::core::models::{AdmissionType, GraduationStatus};

/// Most credits a student may register for in one semester
pub const MAX_CREDITS_PER_SEMESTER: u32 = 18;

/// Slack per remaining semester needed before a plan counts as comfortable
pub const MARGIN_PER_SEMESTER: u32 = 6;

/// Capacity limits used for feasibility classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityModel {
    /// Per-semester credit cap
    pub max_credits_per_semester: u32,
    /// Slack per remaining semester separating Possible from At-Risk
    pub margin_per_semester: u32,
}

impl Default for CapacityModel {
    fn default() -> Self {
        Self {
            max_credits_per_semester: MAX_CREDITS_PER_SEMESTER,
            margin_per_semester: MARGIN_PER_SEMESTER,
        }
    }
}

impl CapacityModel {
    /// Semesters left: `max(0, total - completed)`
    #[must_use]
    pub const fn remaining_semesters(
        admission_type: AdmissionType,
        completed_semesters: u32,
    ) -> u32 {
        admission_type
            .total_semesters()
            .saturating_sub(completed_semesters)
    }

    /// Most credits the remaining semesters can hold
    #[must_use]
    pub const fn max_additional_credits(&self, remaining_semesters: u32) -> u32 {
        remaining_semesters.saturating_mul(self.max_credits_per_semester)
    }

    /// Classify feasibility of closing `deficit_total` credits
    ///
    /// - nothing outstanding: Possible
    /// - more outstanding than the headroom: Infeasible
    /// - otherwise Possible when the leftover headroom is at least
    ///   `margin_per_semester` per remaining semester, else At-Risk
    #[must_use]
    pub const fn classify(
        &self,
        deficit_total: u32,
        max_additional: u32,
        remaining_semesters: u32,
    ) -> GraduationStatus {
        if deficit_total == 0 {
            return GraduationStatus::Possible;
        }
        match max_additional.checked_sub(deficit_total) {
            None => GraduationStatus::Infeasible,
            Some(margin)
                if margin >= remaining_semesters.saturating_mul(self.margin_per_semester) =>
            {
                GraduationStatus::Possible
            }
            Some(_) => GraduationStatus::AtRisk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_semesters() {
        assert_eq!(CapacityModel::remaining_semesters(AdmissionType::Freshman, 4), 4);
        assert_eq!(
            CapacityModel::remaining_semesters(AdmissionType::TransferSameField, 1),
            3
        );
        assert_eq!(CapacityModel::remaining_semesters(AdmissionType::Freshman, 11), 0);
    }

    #[test]
    fn test_max_additional_credits() {
        let model = CapacityModel::default();
        assert_eq!(model.max_additional_credits(4), 72);
        assert_eq!(model.max_additional_credits(0), 0);
    }

    #[test]
    fn test_classify_thresholds() {
        let model = CapacityModel::default();
        assert_eq!(model.classify(0, 0, 0), GraduationStatus::Possible);
        assert_eq!(model.classify(48, 72, 4), GraduationStatus::Possible);
        assert_eq!(model.classify(49, 72, 4), GraduationStatus::AtRisk);
        assert_eq!(model.classify(55, 72, 4), GraduationStatus::AtRisk);
        assert_eq!(model.classify(72, 72, 4), GraduationStatus::AtRisk);
        assert_eq!(model.classify(73, 72, 4), GraduationStatus::Infeasible);
        assert_eq!(model.classify(1, 0, 0), GraduationStatus::Infeasible);
    }

    #[test]
    fn test_classify_is_monotonic_in_deficit() {
        let model = CapacityModel::default();
        for remaining in 0..=8 {
            let max_additional = model.max_additional_credits(remaining);
            let mut previous = GraduationStatus::Possible;
            for deficit_total in 0..=max_additional + 10 {
                let status = model.classify(deficit_total, max_additional, remaining);
                assert!(status >= previous, "tier improved at deficit {deficit_total}");
                previous = status;
            }
        }
    }

    #[test]
    fn test_huge_policy_values_saturate() {
        let model = CapacityModel {
            max_credits_per_semester: 18,
            margin_per_semester: 2_000_000_000,
        };
        assert_eq!(model.classify(10, 72, 4), GraduationStatus::AtRisk);
        assert_eq!(model.classify(0, 72, 4), GraduationStatus::Possible);

        let model = CapacityModel {
            max_credits_per_semester: u32::MAX,
            margin_per_semester: 6,
        };
        assert_eq!(model.max_additional_credits(4), u32::MAX);
        assert_eq!(model.classify(100, u32::MAX, 4), GraduationStatus::Possible);
    }
}
