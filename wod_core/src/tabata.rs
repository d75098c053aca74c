//! Tabata main block: alternating work and rest intervals.

use crate::validation::{
    optional_effort, require_exercises, require_positive, require_section_budget,
};
use crate::{MainBlockSpec, Result, SourceKind, TimelineSection, WorkoutType};

/// Name given to every rest interval
pub const REST_SECTION_NAME: &str = "Rest";

/// Expand a tabata main block into timeline sections
///
/// Each round visits every exercise in input order; each visit is a work
/// interval immediately followed by a rest interval, giving
/// `rounds * exercises * 2` sections. Entries may define neither duration
/// nor reps; only an entry defining both is rejected.
pub fn build(block: &MainBlockSpec) -> Result<Vec<TimelineSection>> {
    let rounds = require_positive(block.rounds, "rounds", WorkoutType::Tabata)?;
    let work = require_positive(block.work_duration, "workDuration", WorkoutType::Tabata)?;
    let rest = require_positive(block.rest_duration, "restDuration", WorkoutType::Tabata)?;
    require_exercises(&block.exercises, WorkoutType::Tabata)?;
    let count = require_section_budget(rounds, block.exercises.len() * 2, WorkoutType::Tabata)?;

    // Per-exercise durations are governed by workDuration, but an entry still
    // must not claim both a duration and a rep target.
    for (index, exercise) in block.exercises.iter().enumerate() {
        optional_effort(exercise, index)?;
    }

    let mut sections = Vec::with_capacity(count);
    for round in 0..rounds {
        for exercise in &block.exercises {
            sections.push(TimelineSection {
                name: exercise.name.clone(),
                effective_duration: work,
                description: exercise.description.clone(),
                source_kind: SourceKind::Main,
                round_index: Some(round),
                reps: None,
            });
            sections.push(TimelineSection {
                name: REST_SECTION_NAME.to_string(),
                effective_duration: rest,
                description: None,
                source_kind: SourceKind::Main,
                round_index: Some(round),
                reps: None,
            });
        }
    }

    tracing::debug!(
        "Tabata {}x{} ({}s on / {}s off) expanded into {} sections",
        rounds,
        block.exercises.len(),
        work,
        rest,
        sections.len()
    );
    Ok(sections)
}
