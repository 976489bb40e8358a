//! Text and JSON rendering of exercise summaries.

use serde::Serialize;

use crate::analysis::{ExerciseIndex, ExerciseSummary, summarize_all};
use crate::domain::WorkoutLog;
use crate::error::AnalysisError;

/// Renders the exercise list, one line per exercise in name order.
pub fn render_overview(log: &WorkoutLog) -> String {
    let mut out = String::from("=== One Rep Max Overview ===\n\n");

    if let Some((min_date, max_date)) = log.date_range() {
        out.push_str(&format!(
            "{} sets from {} to {}\n\n",
            log.len(),
            min_date,
            max_date
        ));
    }

    for summary in summarize_all(log) {
        out.push_str(&format!(
            "{:30} {:>6}  (best {}, {} days)\n",
            summary.exercise_name,
            summary.overall_one_rm,
            summary.best_one_rm,
            summary.series.len()
        ));
    }

    out
}

/// Renders the per-date series for one exercise followed by its overall 1RM.
///
/// # Errors
/// Returns `AnalysisError::InvalidExercise` if the exercise is not in the log.
pub fn render_exercise(log: &WorkoutLog, exercise_name: &str) -> Result<String, AnalysisError> {
    let summary = exercise_summary(log, exercise_name)?;

    let mut out = format!("=== {} ===\n\n", summary.exercise_name);
    for point in &summary.series {
        out.push_str(&format!("{}  {:>6}\n", point.date, point.one_rm));
    }
    out.push_str(&format!("\nOverall 1RM: {}\n", summary.overall_one_rm));

    Ok(out)
}

/// Renders all summaries, or a single exercise's summary, as pretty JSON.
///
/// # Errors
/// Returns `AnalysisError::InvalidExercise` for an unknown exercise.
pub fn render_json(log: &WorkoutLog, exercise_name: Option<&str>) -> Result<String, AnalysisError> {
    match exercise_name {
        Some(name) => Ok(to_json(&exercise_summary(log, name)?)),
        None => Ok(to_json(&summarize_all(log))),
    }
}

fn exercise_summary(log: &WorkoutLog, exercise_name: &str) -> Result<ExerciseSummary, AnalysisError> {
    let index = ExerciseIndex::build(log);
    ExerciseSummary::from_index(&index, exercise_name)
        .ok_or_else(|| AnalysisError::InvalidExercise(exercise_name.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> String {
    // Summaries hold only strings, dates and integers, which always serialize
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_workout_log;

    const SAMPLE: &str = "Oct 11 2020,Back Squat,10,45\n\
                          Oct 12 2020,Back Squat,5,50\n\
                          Oct 12 2020,Bench Press,1,100";

    #[test]
    fn test_render_overview() {
        let out = render_overview(&parse_workout_log(SAMPLE));

        assert!(out.contains("3 sets from 2020-10-11 to 2020-10-12"));
        let squat_line = out.lines().find(|l| l.starts_with("Back Squat")).unwrap();
        assert!(squat_line.contains("58"));
        assert!(squat_line.contains("(best 60, 2 days)"));

        // Name order
        let squat_pos = out.find("Back Squat").unwrap();
        let bench_pos = out.find("Bench Press").unwrap();
        assert!(squat_pos < bench_pos);
    }

    #[test]
    fn test_render_overview_empty_log() {
        let out = render_overview(&WorkoutLog::default());
        assert_eq!(out, "=== One Rep Max Overview ===\n\n");
    }

    #[test]
    fn test_render_exercise() {
        let out = render_exercise(&parse_workout_log(SAMPLE), "Back Squat").unwrap();
        assert!(out.contains("2020-10-11      60"));
        assert!(out.contains("2020-10-12      56"));
        assert!(out.ends_with("Overall 1RM: 58\n"));
    }

    #[test]
    fn test_render_exercise_unknown() {
        let err = render_exercise(&parse_workout_log(SAMPLE), "Snatch").unwrap_err();
        assert_eq!(err, AnalysisError::InvalidExercise("Snatch".to_string()));
    }

    #[test]
    fn test_render_json_single_exercise() {
        let json = render_json(&parse_workout_log(SAMPLE), Some("Back Squat")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["exercise_name"], "Back Squat");
        assert_eq!(value["overall_one_rm"], 58);
        assert_eq!(value["series"][0]["date"], "2020-10-11");
        assert_eq!(value["series"][1]["one_rm"], 56);
    }

    #[test]
    fn test_render_json_all() {
        let json = render_json(&parse_workout_log(SAMPLE), None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let list = value.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1]["exercise_name"], "Bench Press");
    }

    #[test]
    fn test_render_json_unknown_exercise() {
        assert!(render_json(&parse_workout_log(SAMPLE), Some("Snatch")).is_err());
    }
}
