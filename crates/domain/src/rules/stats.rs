//! Derived player stats.

/// Level reached with the given experience.
///
/// Evaluated in floating point; truncation toward zero happens once, after
/// the division by 100.
pub fn compute_level(experience: i32) -> i32 {
    let root = (2500.0 + 200.0 * f64::from(experience)).sqrt();
    ((root - 50.0) / 100.0) as i32
}

/// Experience still missing before `level + 1`.
///
/// Either sign is possible: a level that does not match
/// `compute_level(experience)` can give a negative result. The product is
/// evaluated in `i128` and only saturates to `i32::MIN`/`i32::MAX` when the
/// exact value does not fit.
pub fn compute_experience_next_level(level: i32, experience: i32) -> i32 {
    let level = i128::from(level);
    let exact = 50 * (level + 1) * (level + 2) - i128::from(experience);
    i32::try_from(exact).unwrap_or(if exact < 0 { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_for_known_values() {
        assert_eq!(compute_level(1), 0);
        assert_eq!(compute_level(99), 0);
        assert_eq!(compute_level(100), 1);
        assert_eq!(compute_level(5000), 9);
        assert_eq!(compute_level(9_999_999), 446);
    }

    #[test]
    fn level_is_non_negative_and_monotonic() {
        let mut previous = compute_level(1);
        for experience in (1..10_000_000).step_by(997) {
            let level = compute_level(experience);
            assert!(level >= 0);
            assert!(level >= previous, "level dropped at {experience}");
            previous = level;
        }
    }

    #[test]
    fn next_level_matches_formula() {
        for experience in [1, 100, 250, 5000, 123_456, 9_999_999] {
            let level = compute_level(experience);
            assert_eq!(
                compute_experience_next_level(level, experience),
                50 * (level + 1) * (level + 2) - experience
            );
        }
        assert_eq!(compute_experience_next_level(9, 5000), 500);
        assert_eq!(compute_experience_next_level(1, 100), 200);
    }

    #[test]
    fn next_level_is_positive_for_consistent_levels() {
        for experience in (1..10_000_000).step_by(7919) {
            let level = compute_level(experience);
            assert!(compute_experience_next_level(level, experience) > 0);
        }
    }

    #[test]
    fn next_level_is_not_clamped() {
        assert_eq!(compute_experience_next_level(0, 500), -400);
    }

    #[test]
    fn max_experience_does_not_overflow() {
        let level = compute_level(i32::MAX);
        assert_eq!(level, 6553);
        // 50 * 6554 * 6555 = 2_148_073_500 exceeds i32::MAX before subtracting
        assert_eq!(compute_experience_next_level(level, i32::MAX), 589_853);
    }

    #[test]
    fn out_of_range_results_saturate() {
        assert_eq!(compute_experience_next_level(i32::MAX, 0), i32::MAX);
        assert_eq!(compute_experience_next_level(0, i32::MIN), i32::MAX);
        assert_eq!(compute_experience_next_level(-1, i32::MAX), -i32::MAX);
        assert_eq!(compute_experience_next_level(i32::MIN, 0), i32::MAX);
    }
}
