//! Aggregation of workout sets into per-exercise 1RM estimates.
//!
//! The free functions recompute from the raw sets on every call.
//! `ExerciseIndex` builds the per-date maxima once and answers the same
//! queries from the cached maps.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;

use crate::domain::{OneRmData, WorkoutLog, WorkoutSet};
use crate::error::AnalysisError;

/// Returns the distinct exercise names, sorted ascending.
pub fn unique_exercise_names(sets: &[WorkoutSet]) -> Vec<String> {
    sets.iter()
        .map(|s| s.exercise_name())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Computes the best 1RM estimate per date for one exercise.
///
/// Sets on the same date collapse to the maximum of their estimates.
/// The result is sorted by date and empty if no set matches.
pub fn estimate_one_rm(sets: &[WorkoutSet], exercise_name: &str) -> Vec<OneRmData> {
    let daily_max = daily_max_one_rm(sets.iter().filter(|s| s.exercise_name() == exercise_name));
    to_series(exercise_name, &daily_max)
}

/// Computes the mean of the per-date estimates, truncated toward zero.
///
/// # Errors
/// Returns `AnalysisError::InvalidExercise` if the exercise has no estimates.
pub fn overall_one_rm(sets: &[WorkoutSet], exercise_name: &str) -> Result<u64, AnalysisError> {
    mean_one_rm(
        exercise_name,
        estimate_one_rm(sets, exercise_name).iter().map(|d| d.one_rm),
    )
}

/// Reduces sets to the maximum estimate per date.
fn daily_max_one_rm<'a>(sets: impl Iterator<Item = &'a WorkoutSet>) -> BTreeMap<NaiveDate, u64> {
    let mut daily_max: BTreeMap<NaiveDate, u64> = BTreeMap::new();

    for set in sets {
        daily_max
            .entry(set.date())
            .and_modify(|best| *best = (*best).max(set.one_rm()))
            .or_insert(set.one_rm());
    }

    daily_max
}

fn to_series(exercise_name: &str, daily_max: &BTreeMap<NaiveDate, u64>) -> Vec<OneRmData> {
    daily_max
        .iter()
        .map(|(&date, &one_rm)| OneRmData {
            exercise_name: exercise_name.to_string(),
            date,
            one_rm,
        })
        .collect()
}

fn mean_one_rm(
    exercise_name: &str,
    values: impl ExactSizeIterator<Item = u64>,
) -> Result<u64, AnalysisError> {
    let count = values.len() as u64;
    if count == 0 {
        return Err(AnalysisError::InvalidExercise(exercise_name.to_string()));
    }

    let sum: u64 = values.sum();
    Ok(sum / count)
}

/// Per-exercise `date -> max 1RM` maps, built once from a log.
#[derive(Debug, Clone, Default)]
pub struct ExerciseIndex {
    by_exercise: HashMap<String, BTreeMap<NaiveDate, u64>>,
}

impl ExerciseIndex {
    /// Builds the index in a single pass over the log.
    pub fn build(log: &WorkoutLog) -> Self {
        let mut by_exercise: HashMap<String, BTreeMap<NaiveDate, u64>> = HashMap::new();

        for set in log.sets() {
            by_exercise
                .entry(set.exercise_name().to_string())
                .or_default()
                .entry(set.date())
                .and_modify(|best| *best = (*best).max(set.one_rm()))
                .or_insert(set.one_rm());
        }

        Self { by_exercise }
    }

    /// Returns the distinct exercise names, sorted ascending.
    pub fn exercise_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.by_exercise.keys().cloned().collect();
        names.sort();
        names
    }

    /// Same as [`estimate_one_rm`], served from the index.
    pub fn series(&self, exercise_name: &str) -> Vec<OneRmData> {
        self.by_exercise
            .get(exercise_name)
            .map(|daily_max| to_series(exercise_name, daily_max))
            .unwrap_or_default()
    }

    /// Same as [`overall_one_rm`], served from the index.
    pub fn overall(&self, exercise_name: &str) -> Result<u64, AnalysisError> {
        match self.by_exercise.get(exercise_name) {
            Some(daily_max) => mean_one_rm(exercise_name, daily_max.values().copied()),
            None => Err(AnalysisError::InvalidExercise(exercise_name.to_string())),
        }
    }

    /// Returns the highest per-date estimate for an exercise.
    pub fn best(&self, exercise_name: &str) -> Option<u64> {
        self.by_exercise
            .get(exercise_name)
            .and_then(|daily_max| daily_max.values().copied().max())
    }
}

/// Overview of one exercise for list display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseSummary {
    pub exercise_name: String,
    pub overall_one_rm: u64,
    pub best_one_rm: u64,
    pub series: Vec<OneRmData>,
}

impl ExerciseSummary {
    /// Creates a summary from the index. Returns None for unknown exercises.
    pub fn from_index(index: &ExerciseIndex, exercise_name: &str) -> Option<Self> {
        let overall_one_rm = index.overall(exercise_name).ok()?;
        let best_one_rm = index.best(exercise_name)?;

        Some(Self {
            exercise_name: exercise_name.to_string(),
            overall_one_rm,
            best_one_rm,
            series: index.series(exercise_name),
        })
    }
}

/// Summarizes every exercise in the log, in name order.
///
/// Uses parallel processing via rayon to build the summaries concurrently.
pub fn summarize_all(log: &WorkoutLog) -> Vec<ExerciseSummary> {
    let index = ExerciseIndex::build(log);

    index
        .exercise_names()
        .par_iter()
        .filter_map(|name| ExerciseSummary::from_index(&index, name))
        .collect()
}
