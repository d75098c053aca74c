//! Circuit main block: the exercise list repeated for a number of rounds.
//!
//! No rest is inserted between entries; rest periods are authored as
//! explicit entries (e.g. named "Rest").

use crate::validation::{
    exercise_effort, require_exercises, require_positive, require_section_budget,
};
use crate::{MainBlockSpec, Result, SourceKind, TimelineSection, WorkoutType};

/// Expand a circuit main block into timeline sections
pub fn build(block: &MainBlockSpec) -> Result<Vec<TimelineSection>> {
    let rounds = require_positive(block.rounds, "rounds", WorkoutType::Circuit)?;
    require_exercises(&block.exercises, WorkoutType::Circuit)?;
    let count = require_section_budget(rounds, block.exercises.len(), WorkoutType::Circuit)?;

    let efforts = block
        .exercises
        .iter()
        .enumerate()
        .map(|(index, exercise)| exercise_effort(exercise, index))
        .collect::<Result<Vec<_>>>()?;

    let mut sections = Vec::with_capacity(count);
    for round in 0..rounds {
        for (exercise, effort) in block.exercises.iter().zip(&efforts) {
            sections.push(TimelineSection {
                name: exercise.name.clone(),
                effective_duration: effort.effective_duration(),
                description: exercise.description.clone(),
                source_kind: SourceKind::Main,
                round_index: Some(round),
                reps: effort.reps_label(),
            });
        }
    }

    tracing::debug!(
        "Circuit expanded {} exercises x {} rounds into {} sections",
        efforts.len(),
        rounds,
        sections.len()
    );
    Ok(sections)
}
