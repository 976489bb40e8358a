//! Estimated one-rep-max tracking from a plain-text workout log.
//!
//! Load records with [`loader::load_workout_log`] or
//! [`loader::parse_workout_log`], then query the resulting
//! [`domain::WorkoutLog`] with the functions in [`analysis`].

pub mod analysis;
pub mod domain;
pub mod error;
pub mod formulas;
pub mod loader;
pub mod report;
pub mod watcher;

pub use analysis::{
    ExerciseIndex, ExerciseSummary, estimate_one_rm, overall_one_rm, summarize_all,
    unique_exercise_names,
};
pub use domain::{OneRmData, WorkoutLog, WorkoutSet};
pub use error::{AnalysisError, FormulaError, ParseError};
pub use loader::{load_workout_log, parse_workout_log};
