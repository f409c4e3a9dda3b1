//! Deficit arithmetic shared by the evaluator and the baseline analysis

/// Roll major-required credits beyond the requirement into the elective bucket
///
/// Returns `(adjusted_required, adjusted_elective)`. When
/// `completed_required > required_required` the required side is capped at
/// the requirement and the excess is added to the elective side, so the sum of
/// both buckets is unchanged (saturating at `u32::MAX`). Otherwise the inputs
/// come back as they were.
#[must_use]
pub const fn apply_excess_to_elective(
    completed_required: u32,
    required_required: u32,
    completed_elective: u32,
) -> (u32, u32) {
    if completed_required > required_required {
        let excess = completed_required - required_required;
        (required_required, completed_elective.saturating_add(excess))
    } else {
        (completed_required, completed_elective)
    }
}

/// Credits still missing: `max(0, required - completed)`
#[must_use]
pub const fn deficit(completed: u32, required: u32) -> u32 {
    required.saturating_sub(completed)
}

/// Clamp a possibly negative raw value to a credit count
///
/// Returns the clamped value and whether clamping happened, so the caller can
/// record a data-quality warning.
#[must_use]
pub fn clamp_credits(raw: i64) -> (u32, bool) {
    if raw < 0 {
        (0, true)
    } else {
        (u32::try_from(raw).unwrap_or(u32::MAX), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deficit_is_zero_once_met() {
        for required in 0..40 {
            for completed in required..required + 10 {
                assert_eq!(deficit(completed, required), 0);
            }
        }
        assert_eq!(deficit(9, 15), 6);
    }

    #[test]
    fn test_excess_rollover_conserves_credits() {
        for required in 0..20 {
            for completed_required in required + 1..required + 12 {
                for completed_elective in [0, 7, 33] {
                    let (adj_required, adj_elective) =
                        apply_excess_to_elective(completed_required, required, completed_elective);
                    assert_eq!(adj_required, required);
                    assert_eq!(
                        adj_required + adj_elective,
                        completed_required + completed_elective
                    );
                }
            }
        }
    }

    #[test]
    fn test_no_rollover_below_requirement() {
        assert_eq!(apply_excess_to_elective(9, 15, 20), (9, 20));
        assert_eq!(apply_excess_to_elective(15, 15, 20), (15, 20));
        assert_eq!(apply_excess_to_elective(21, 15, 20), (15, 26));
    }

    #[test]
    fn test_clamp_credits() {
        assert_eq!(clamp_credits(-3), (0, true));
        assert_eq!(clamp_credits(12), (12, false));
    }

    #[test]
    fn test_rollover_saturates_on_huge_elective() {
        assert_eq!(apply_excess_to_elective(20, 15, u32::MAX), (15, u32::MAX));
        assert_eq!(apply_excess_to_elective(u32::MAX, 0, 1), (0, u32::MAX));
    }
}
