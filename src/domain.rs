//! Domain types for workout data representation.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::FormulaError;
use crate::formulas::brzycki_one_rm;

/// One logged exercise performance.
///
/// Construction validates the rep count, so every `WorkoutSet` has a
/// defined 1RM estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSet {
    date: NaiveDate,
    exercise_name: String,
    reps: u32,
    weight: u32,
    one_rm: u64,
}

impl WorkoutSet {
    /// Creates a new workout set.
    ///
    /// # Errors
    /// Returns `FormulaError::RepsOutOfRange` if `reps` is 0 or 37 and above.
    pub fn new(
        date: NaiveDate,
        exercise_name: impl Into<String>,
        reps: u32,
        weight: u32,
    ) -> Result<Self, FormulaError> {
        let one_rm = brzycki_one_rm(weight, reps)?;
        Ok(Self {
            date,
            exercise_name: exercise_name.into(),
            reps,
            weight,
            one_rm,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn exercise_name(&self) -> &str {
        &self.exercise_name
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Raw Brzycki estimate for this single set.
    pub fn one_rm(&self) -> u64 {
        self.one_rm
    }
}

impl std::fmt::Display for WorkoutSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.date.format("%b %-d, %Y"),
            self.exercise_name,
            self.reps,
            self.weight
        )
    }
}

/// Best 1RM estimate for one exercise on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OneRmData {
    pub exercise_name: String,
    pub date: NaiveDate,
    pub one_rm: u64,
}

/// Immutable collection of loaded workout sets, in input order.
#[derive(Debug, Clone, Default)]
pub struct WorkoutLog {
    sets: Vec<WorkoutSet>,
}

impl WorkoutLog {
    /// Creates a log from already parsed sets, keeping their order.
    pub fn from_sets(sets: Vec<WorkoutSet>) -> Self {
        Self { sets }
    }

    pub fn sets(&self) -> &[WorkoutSet] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Returns the number of sets logged for an exercise.
    pub fn count(&self, exercise_name: &str) -> usize {
        self.sets
            .iter()
            .filter(|s| s.exercise_name == exercise_name)
            .count()
    }

    /// Returns the earliest and latest date in the log.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min_date = self.sets.iter().map(|s| s.date).min()?;
        let max_date = self.sets.iter().map(|s| s.date).max()?;
        Some((min_date, max_date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_workout_set_computes_one_rm() {
        let set = WorkoutSet::new(make_date(2020, 10, 11), "Back Squat", 10, 45).unwrap();
        assert_eq!(set.one_rm(), 60);
        assert_eq!(set.reps(), 10);
        assert_eq!(set.weight(), 45);
        assert_eq!(set.exercise_name(), "Back Squat");
    }

    #[test]
    fn test_workout_set_rejects_degenerate_reps() {
        assert!(WorkoutSet::new(make_date(2020, 10, 11), "Back Squat", 37, 45).is_err());
        assert!(WorkoutSet::new(make_date(2020, 10, 11), "Back Squat", 0, 45).is_err());
    }

    #[test]
    fn test_workout_set_display() {
        let set = WorkoutSet::new(make_date(2020, 10, 1), "Deadlift", 5, 135).unwrap();
        assert_eq!(set.to_string(), "Oct 1, 2020, Deadlift, 5, 135");
    }

    #[test]
    fn test_one_rm_data_serializes_iso_date() {
        let data = OneRmData {
            exercise_name: "Bench".to_string(),
            date: make_date(2021, 3, 7),
            one_rm: 120,
        };
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(
            json,
            r#"{"exercise_name":"Bench","date":"2021-03-07","one_rm":120}"#
        );
    }

    #[test]
    fn test_workout_log_counts_and_range() {
        let log = WorkoutLog::from_sets(vec![
            WorkoutSet::new(make_date(2024, 1, 15), "Squat", 5, 100).unwrap(),
            WorkoutSet::new(make_date(2024, 1, 10), "Squat", 5, 95).unwrap(),
            WorkoutSet::new(make_date(2024, 1, 12), "Bench", 5, 80).unwrap(),
        ]);

        assert_eq!(log.len(), 3);
        assert_eq!(log.count("Squat"), 2);
        assert_eq!(log.count("squat"), 0);
        assert_eq!(
            log.date_range(),
            Some((make_date(2024, 1, 10), make_date(2024, 1, 15)))
        );

        // Input order preserved
        assert_eq!(log.sets()[0].date(), make_date(2024, 1, 15));
    }

    #[test]
    fn test_empty_log() {
        let log = WorkoutLog::default();
        assert!(log.is_empty());
        assert!(log.date_range().is_none());
    }
}
