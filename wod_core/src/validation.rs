//! Construction-time validation shared by the section builders.
//!
//! Every check either returns a usable value or an [`Error::Validation`];
//! missing values are never replaced with a silent zero.

use crate::{Effort, Error, Result, Section, SourceKind, TimelineSection, WorkoutType};

/// Most sections a single main block may expand into
pub const MAX_MAIN_BLOCK_SECTIONS: u64 = 10_000;

/// Require a strictly positive numeric field
pub fn require_positive(value: Option<i64>, field: &str, workout_type: WorkoutType) -> Result<u32> {
    match value {
        None => Err(Error::Validation(format!(
            "{} workout is missing '{}'",
            workout_type, field
        ))),
        Some(v) if v < 1 => Err(Error::Validation(format!(
            "{} workout has non-positive '{}': {}",
            workout_type, field, v
        ))),
        Some(v) => to_seconds(v, field),
    }
}

/// Bound the number of sections `rounds` rounds of `per_round` sections expand to
pub fn require_section_budget(
    rounds: u32,
    per_round: usize,
    workout_type: WorkoutType,
) -> Result<usize> {
    let count = u64::from(rounds).saturating_mul(per_round as u64);
    if count > MAX_MAIN_BLOCK_SECTIONS {
        return Err(Error::Validation(format!(
            "{} workout expands to {} sections, limit is {}",
            workout_type, count, MAX_MAIN_BLOCK_SECTIONS
        )));
    }
    Ok(count as usize)
}

/// Require a non-empty exercise list
pub fn require_exercises(exercises: &[Section], workout_type: WorkoutType) -> Result<()> {
    if exercises.is_empty() {
        return Err(Error::Validation(format!(
            "{} workout has no exercises",
            workout_type
        )));
    }
    Ok(())
}

/// Resolve the effort of an exercise that must define exactly one of
/// duration or reps
pub fn exercise_effort(exercise: &Section, index: usize) -> Result<Effort> {
    match optional_effort(exercise, index)? {
        Some(effort) => Ok(effort),
        None => Err(Error::Validation(format!(
            "exercise {} ('{}') defines neither duration nor reps",
            index + 1,
            exercise.name
        ))),
    }
}

/// Resolve the effort of an exercise that may define at most one of
/// duration or reps
pub fn optional_effort(exercise: &Section, index: usize) -> Result<Option<Effort>> {
    match (exercise.duration, &exercise.reps) {
        (Some(_), Some(_)) => Err(Error::Validation(format!(
            "exercise {} ('{}') defines both duration and reps",
            index + 1,
            exercise.name
        ))),
        (Some(seconds), None) => {
            let seconds = non_negative(seconds, &exercise.name)?;
            Ok(Some(Effort::Timed(seconds)))
        }
        (None, Some(label)) => Ok(Some(Effort::Reps(label.clone()))),
        (None, None) => Ok(None),
    }
}

/// Turn a warm-up or cool-down step into a timeline section
///
/// These steps always carry a real duration.
pub fn passthrough_section(step: &Section, source_kind: SourceKind) -> Result<TimelineSection> {
    let seconds = match step.duration {
        Some(seconds) => non_negative(seconds, &step.name)?,
        None => {
            return Err(Error::Validation(format!(
                "{:?} step '{}' has no duration",
                source_kind, step.name
            )))
        }
    };

    Ok(TimelineSection {
        name: step.name.clone(),
        effective_duration: seconds,
        description: step.description.clone(),
        source_kind,
        round_index: None,
        reps: None,
    })
}

fn non_negative(seconds: i64, name: &str) -> Result<u32> {
    if seconds < 0 {
        return Err(Error::Validation(format!(
            "'{}' has negative duration: {}",
            name, seconds
        )));
    }
    to_seconds(seconds, name)
}

fn to_seconds(value: i64, field: &str) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| Error::Validation(format!("'{}' is out of range: {}", field, value)))
}
