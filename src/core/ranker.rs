//! Recommendation ranking across evaluated programs
//!
//! Results are ordered by feasibility tier, then by the coarsened category
//! deficit, then by the fixed program priority. The deficit is bucketed in
//! threes so near-equal deficits do not reshuffle the ranking.

use crate::core::models::{GraduationStatus, SimulationResult};

/// Width of the deficit bucket used as the second sort key
pub const DEFICIT_BUCKET: u32 = 3;

/// Deficits at or below this read as "only N credits" in the reason text
pub const SMALL_DEFICIT: u32 = 36;

/// Sort key for one result; smaller ranks higher
#[must_use]
pub const fn rank_key(result: &SimulationResult) -> (u8, u32, u8) {
    (
        result.status.tier(),
        result.analysis.category_deficit_total() / DEFICIT_BUCKET,
        result.program_type.priority(),
    )
}

/// Human-readable rationale for a result
#[must_use]
pub fn recommendation_reason(result: &SimulationResult) -> String {
    let deficit = result.analysis.category_deficit_total();
    let feasibility = match result.status {
        GraduationStatus::Possible => {
            format!("남은 {}학기 내 이수 가능", result.analysis.remaining_semesters)
        }
        GraduationStatus::AtRisk => "학기당 집중 이수 시 이수 가능".to_string(),
        GraduationStatus::Infeasible => "현재 학점으로는 졸업이 어려움".to_string(),
    };
    let magnitude = if deficit <= SMALL_DEFICIT {
        format!("총 {deficit}학점만 추가 이수 필요")
    } else {
        format!("총 {deficit}학점 추가 이수 필요")
    };
    [feasibility, magnitude, result.program_type.benefit().to_string()].join(" / ")
}

/// Order results best first, filling in rank, reason and the recommended flag
///
/// The sort is stable, so results with equal keys keep their input order.
#[must_use]
pub fn rank(mut results: Vec<SimulationResult>) -> Vec<SimulationResult> {
    results.sort_by_key(rank_key);
    for (idx, result) in results.iter_mut().enumerate() {
        result.rank = idx + 1;
        result.recommended = idx == 0;
        result.reason = recommendation_reason(result);
    }
    if let Some(top) = results.first() {
        crate::info!(
            "Top recommendation: {} {} ({})",
            top.multi_major,
            top.program_type,
            top.status
        );
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{CategoryCredits, CreditAnalysis, ProgramType};
    use crate::core::repository::RequirementSource;

    fn result(program: ProgramType, status: GraduationStatus, deficit: u32) -> SimulationResult {
        SimulationResult {
            program_type: program,
            multi_major: "통계학전공".to_string(),
            status,
            can_graduate: status.can_graduate(),
            analysis: CreditAnalysis {
                multi_elective: CategoryCredits::new(deficit, 0),
                remaining_semesters: 4,
                max_additional_credits: 72,
                ..CreditAnalysis::default()
            },
            primary_source: RequirementSource::Exact,
            multi_source: RequirementSource::Exact,
            rank: 0,
            recommended: false,
            reason: String::new(),
            semester_plan: Vec::new(),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_tier_dominates_deficit() {
        let ranked = rank(vec![
            result(ProgramType::Minor, GraduationStatus::AtRisk, 3),
            result(ProgramType::DoubleMajor, GraduationStatus::Possible, 40),
            result(ProgramType::LinkedMajor, GraduationStatus::Infeasible, 0),
        ]);
        let order: Vec<_> = ranked.iter().map(|r| r.program_type).collect();
        assert_eq!(
            order,
            vec![ProgramType::DoubleMajor, ProgramType::Minor, ProgramType::LinkedMajor]
        );
        assert!(ranked[0].recommended);
        assert!(!ranked[1].recommended);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn test_priority_breaks_ties_within_bucket() {
        let ranked = rank(vec![
            result(ProgramType::Minor, GraduationStatus::Possible, 21),
            result(ProgramType::DoubleMajor, GraduationStatus::Possible, 23),
        ]);
        assert_eq!(ranked[0].program_type, ProgramType::DoubleMajor);

        let ranked = rank(vec![
            result(ProgramType::Minor, GraduationStatus::Possible, 20),
            result(ProgramType::DoubleMajor, GraduationStatus::Possible, 21),
        ]);
        assert_eq!(ranked[0].program_type, ProgramType::Minor);
    }

    #[test]
    fn test_order_stable_under_small_perturbation() {
        let base = [
            (ProgramType::DoubleMajor, 30),
            (ProgramType::Minor, 15),
            (ProgramType::LinkedMajor, 33),
        ];
        let order = |shift: u32| -> Vec<ProgramType> {
            rank(
                base.iter()
                    .map(|&(p, d)| result(p, GraduationStatus::Possible, d + shift))
                    .collect(),
            )
            .iter()
            .map(|r| r.program_type)
            .collect()
        };
        assert_eq!(order(0), order(1));
        assert_eq!(order(0), order(2));
    }

    #[test]
    fn test_reason_text() {
        let ranked = rank(vec![result(ProgramType::DoubleMajor, GraduationStatus::Possible, 36)]);
        assert_eq!(
            ranked[0].reason,
            "남은 4학기 내 이수 가능 / 총 36학점만 추가 이수 필요 / 학위 2개 취득 가능"
        );

        let ranked = rank(vec![result(ProgramType::Minor, GraduationStatus::Infeasible, 40)]);
        assert_eq!(
            ranked[0].reason,
            "현재 학점으로는 졸업이 어려움 / 총 40학점 추가 이수 필요 / \
             비교적 적은 학점으로 이수 가능"
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(rank(Vec::new()).is_empty());
    }
}
