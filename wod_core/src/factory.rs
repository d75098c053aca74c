//! Workout factory: turns a declarative workout into a timeline.
//!
//! The type tag selects the main-block builder; warm-up and cool-down steps
//! are passed through around it. Construction either fully succeeds or
//! returns the first validation error, so a partially built timeline is
//! never observable.

use crate::validation::passthrough_section;
use crate::{
    amrap, circuit, emom, tabata, MainBlockSpec, Result, Section, SourceKind, Timeline,
    TimelineSection, WorkoutSpec, WorkoutType,
};

/// Build the timeline for a workout document
///
/// Sections are ordered warm-up, main block, cool-down.
pub fn create_workout(spec: WorkoutSpec) -> Result<Timeline> {
    let workout_type: WorkoutType = spec.workout_type.parse()?;

    let main_block = build_main_block(workout_type, &spec.main_block)?;
    let warm_up = passthrough(&spec.warm_up, SourceKind::Warmup)?;
    let cool_down = passthrough(&spec.cool_down, SourceKind::Cooldown)?;

    let mut sections = Vec::with_capacity(warm_up.len() + main_block.len() + cool_down.len());
    sections.extend(warm_up);
    sections.extend(main_block);
    sections.extend(cool_down);

    let timeline = Timeline::new(sections);
    tracing::info!(
        "Built {} workout: {} sections, {}s total",
        workout_type,
        timeline.len(),
        timeline.total_duration()
    );
    Ok(timeline)
}

/// Expand only the main block for a given workout type
pub fn build_main_block(
    workout_type: WorkoutType,
    block: &MainBlockSpec,
) -> Result<Vec<TimelineSection>> {
    match workout_type {
        WorkoutType::Circuit => circuit::build(block),
        WorkoutType::Amrap => amrap::build(block),
        WorkoutType::Tabata => tabata::build(block),
        WorkoutType::Emom => emom::build(block),
    }
}

fn passthrough(steps: &[Section], kind: SourceKind) -> Result<Vec<TimelineSection>> {
    steps
        .iter()
        .map(|step| passthrough_section(step, kind))
        .collect()
}
