//! EMOM (every minute on the minute) main block.
//!
//! Each round is one fixed 60-second slot bundling every exercise scheduled
//! for that minute; exercises are not split into slots of their own.

use crate::validation::{
    optional_effort, require_exercises, require_positive, require_section_budget,
};
use crate::{MainBlockSpec, Result, SourceKind, TimelineSection, WorkoutType, EMOM_SLOT_SECONDS};

/// Expand an EMOM main block into one section per round
///
/// Entries may define neither duration nor reps; only an entry defining
/// both is rejected.
pub fn build(block: &MainBlockSpec) -> Result<Vec<TimelineSection>> {
    let rounds = require_positive(block.rounds, "rounds", WorkoutType::Emom)?;
    require_exercises(&block.exercises, WorkoutType::Emom)?;
    require_section_budget(rounds, 1, WorkoutType::Emom)?;

    for (index, exercise) in block.exercises.iter().enumerate() {
        optional_effort(exercise, index)?;
    }

    let bundle = block
        .exercises
        .iter()
        .map(|e| e.summary())
        .collect::<Vec<_>>()
        .join(", ");

    let sections: Vec<_> = (0..rounds)
        .map(|round| TimelineSection {
            name: round_name(round, rounds),
            effective_duration: EMOM_SLOT_SECONDS,
            description: Some(bundle.clone()),
            source_kind: SourceKind::Main,
            round_index: Some(round),
            reps: None,
        })
        .collect();

    tracing::debug!(
        "EMOM of {} rounds bundling {} exercises per minute",
        rounds,
        block.exercises.len()
    );
    Ok(sections)
}

fn round_name(round: u32, rounds: u32) -> String {
    format!("Minute {} of {}", round + 1, rounds)
}
