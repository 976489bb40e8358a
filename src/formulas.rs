//! Strength calculation formula for e1RM.

use crate::error::FormulaError;

/// Numerator constant of the Brzycki formula.
const BRZYCKI_NUMERATOR: u64 = 36;

/// Reps at which the Brzycki denominator reaches zero.
const BRZYCKI_LIMIT: u32 = 37;

/// Highest rep count the formula accepts.
pub const MAX_REPS: u32 = BRZYCKI_LIMIT - 1;

/// Returns true if `reps` is inside the domain of [`brzycki_one_rm`].
pub fn reps_in_range(reps: u32) -> bool {
    (1..=MAX_REPS).contains(&reps)
}

/// Calculates estimated 1RM from weight and reps with the Brzycki formula,
/// using integer arithmetic.
///
/// Brzycki: w × 36 / (37 - r), truncated toward zero.
///
/// # Arguments
/// * `weight` - Weight lifted, unitless
/// * `reps` - Number of repetitions performed, 1 to 36
///
/// # Errors
/// Returns `FormulaError::RepsOutOfRange` for zero reps or reps of 37 and
/// above, where the denominator is zero or negative.
pub fn brzycki_one_rm(weight: u32, reps: u32) -> Result<u64, FormulaError> {
    if !reps_in_range(reps) {
        return Err(FormulaError::RepsOutOfRange(reps));
    }

    let denominator = u64::from(BRZYCKI_LIMIT - reps);
    Ok(BRZYCKI_NUMERATOR * u64::from(weight) / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_rm_ten_reps() {
        // 45 × 36 / 27 = 60
        assert_eq!(brzycki_one_rm(45, 10), Ok(60));
    }

    #[test]
    fn test_one_rm_truncates() {
        // 50 × 36 / 32 = 56.25
        assert_eq!(brzycki_one_rm(50, 5), Ok(56));
    }

    #[test]
    fn test_one_rm_single_rep_is_weight() {
        assert_eq!(brzycki_one_rm(100, 1), Ok(100));
        assert_eq!(brzycki_one_rm(0, 1), Ok(0));
    }

    #[test]
    fn test_one_rm_upper_bound() {
        // Denominator of 1 at 36 reps
        assert_eq!(brzycki_one_rm(10, 36), Ok(360));
    }

    #[test]
    fn test_one_rm_large_weight_does_not_overflow() {
        assert_eq!(
            brzycki_one_rm(u32::MAX, 36),
            Ok(36 * u64::from(u32::MAX))
        );
    }

    #[test]
    fn test_one_rm_rejects_out_of_range_reps() {
        assert_eq!(brzycki_one_rm(100, 0), Err(FormulaError::RepsOutOfRange(0)));
        assert_eq!(
            brzycki_one_rm(100, 37),
            Err(FormulaError::RepsOutOfRange(37))
        );
        assert_eq!(
            brzycki_one_rm(100, 50),
            Err(FormulaError::RepsOutOfRange(50))
        );
    }

    #[test]
    fn test_reps_in_range() {
        assert!(!reps_in_range(0));
        assert!(reps_in_range(1));
        assert!(reps_in_range(36));
        assert!(!reps_in_range(37));
    }
}
