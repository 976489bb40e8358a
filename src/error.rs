//! Error types for the bestshot library.

use thiserror::Error;

/// Errors that can occur when loading workout records.
///
/// `FileNotFound` and `CannotRead` are fatal for a load. The per-line
/// variants are reported by the loader and the offending record is skipped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("cannot read file: {0}")]
    CannotRead(String),

    #[error("expected 4 fields in line {line}, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("invalid date format in line {line}: {value}")]
    InvalidDate { line: usize, value: String },

    #[error("invalid repetitions value in line {line}: {value}")]
    InvalidReps { line: usize, value: String },

    #[error("invalid weight value in line {line}: {value}")]
    InvalidWeight { line: usize, value: String },

    #[error("empty exercise name in line {line}")]
    EmptyExerciseName { line: usize },
}

/// Errors that can occur in formula calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormulaError {
    #[error("repetitions must be between 1 and 36: {0}")]
    RepsOutOfRange(u32),
}

/// Errors that can occur when querying aggregated data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("no estimates available for exercise: {0}")]
    InvalidExercise(String),
}
