//! Plain-text parsing for workout records.
//!
//! Each record is one line of the form `<Mon> <DD> <YYYY>,<Exercise>,<reps>,<weight>`,
//! for example `Oct 11 2020,Back Squat,10,45`.

use chrono::NaiveDate;
use log::{info, warn};
use std::path::Path;

use crate::domain::{WorkoutLog, WorkoutSet};
use crate::error::ParseError;
use crate::formulas::reps_in_range;

/// Date format of the first field. `%b` only matches English month
/// abbreviations, so parsing does not depend on the host locale.
const DATE_FORMAT: &str = "%b %d %Y";

/// Number of comma-separated fields per record.
const FIELD_COUNT: usize = 4;

/// Loads workout records from a text file.
///
/// # Arguments
/// * `path` - Path to the record file
///
/// # Returns
/// WorkoutLog containing all valid records, in file order.
///
/// # Errors
/// Returns ParseError if the file is missing or cannot be read. Malformed
/// records are skipped with a warning instead.
pub fn load_workout_log<P: AsRef<Path>>(path: P) -> Result<WorkoutLog, ParseError> {
    let path = path.as_ref();

    // Check if file exists
    if !path.exists() {
        return Err(ParseError::FileNotFound(path.display().to_string()));
    }

    let text = std::fs::read_to_string(path)
        .map_err(|e| ParseError::CannotRead(format!("{}: {}", path.display(), e)))?;

    let log = parse_workout_log(&text);
    info!("Loaded {} workout sets from {}", log.len(), path.display());

    Ok(log)
}

/// Parses workout records from a block of text.
///
/// Lines that fail to parse are logged and skipped; the rest are kept in
/// input order.
pub fn parse_workout_log(text: &str) -> WorkoutLog {
    let mut sets = Vec::new();

    for (line_idx, line) in text.trim().lines().enumerate() {
        let line_num = line_idx + 1;

        // Skip blank lines silently
        if line.trim().is_empty() {
            continue;
        }

        match parse_record(line, line_num) {
            Ok(set) => sets.push(set),
            Err(e) => warn!("{}", e),
        }
    }

    WorkoutLog::from_sets(sets)
}

/// Parses a single record.
///
/// Fields are used as-is: the exercise name is an exact-match key and the
/// numeric fields must not carry surrounding whitespace.
pub fn parse_record(line: &str, line_num: usize) -> Result<WorkoutSet, ParseError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(ParseError::FieldCount {
            line: line_num,
            found: fields.len(),
        });
    }

    let date = parse_date(fields[0], line_num)?;

    let exercise_name = fields[1];
    if exercise_name.is_empty() {
        return Err(ParseError::EmptyExerciseName { line: line_num });
    }

    let reps = parse_reps(fields[2], line_num)?;
    let weight = parse_weight(fields[3], line_num)?;

    WorkoutSet::new(date, exercise_name, reps, weight).map_err(|_| ParseError::InvalidReps {
        line: line_num,
        value: fields[2].to_string(),
    })
}

/// Parses a date like `Oct 11 2020`.
fn parse_date(value: &str, line: usize) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ParseError::InvalidDate {
        line,
        value: value.to_string(),
    })
}

/// Parses repetitions. Zero and values the formula cannot handle are rejected.
fn parse_reps(value: &str, line: usize) -> Result<u32, ParseError> {
    let invalid = || ParseError::InvalidReps {
        line,
        value: value.to_string(),
    };

    let reps: u32 = value.parse().map_err(|_| invalid())?;
    if reps_in_range(reps) {
        Ok(reps)
    } else {
        Err(invalid())
    }
}

/// Parses a non-negative integer weight.
fn parse_weight(value: &str, line: usize) -> Result<u32, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidWeight {
        line,
        value: value.to_string(),
    })
}
