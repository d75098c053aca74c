//! Workout document loading and date routing.
//!
//! Documents are JSON files in a workouts directory. For a given date the
//! lookup order is `<YYYY-MM-DD>.json`, then `<weekday>.json`, then
//! `default.json`.

use crate::{Error, Result, WorkoutSpec};
use chrono::{Datelike, NaiveDate, Weekday};
use std::path::{Path, PathBuf};

/// Fallback document used when nothing date-specific exists
pub const DEFAULT_WORKOUT_FILE: &str = "default.json";

/// Parse a workout document from JSON text
pub fn parse_spec(contents: &str) -> Result<WorkoutSpec> {
    let spec: WorkoutSpec = serde_json::from_str(contents)?;
    Ok(spec)
}

/// Load a workout document from a file
pub fn load_spec(path: &Path) -> Result<WorkoutSpec> {
    if !path.exists() {
        return Err(Error::WorkoutNotFound(format!("{}", path.display())));
    }

    let contents = std::fs::read_to_string(path)?;
    let spec = parse_spec(&contents)?;
    tracing::info!("Loaded {} workout from {:?}", spec.workout_type, path);
    Ok(spec)
}

/// Find the document that applies to `date`
pub fn resolve_spec_path(dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    let candidates = [
        format!("{}.json", date.format("%Y-%m-%d")),
        format!("{}.json", weekday_name(date.weekday())),
        DEFAULT_WORKOUT_FILE.to_string(),
    ];

    for candidate in &candidates {
        let path = dir.join(candidate);
        if path.exists() {
            tracing::debug!("Resolved workout for {} to {:?}", date, path);
            return Ok(path);
        }
    }

    Err(Error::WorkoutNotFound(format!(
        "no workout for {} in {}",
        date,
        dir.display()
    )))
}

/// Resolve and load the document that applies to `date`
pub fn load_spec_for_date(dir: &Path, date: NaiveDate) -> Result<WorkoutSpec> {
    let path = resolve_spec_path(dir, date)?;
    load_spec(&path)
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}
