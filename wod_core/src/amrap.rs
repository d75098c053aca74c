//! AMRAP main block: a single time-capped section.

use crate::validation::{optional_effort, require_exercises, require_positive};
use crate::{MainBlockSpec, Result, SourceKind, TimelineSection, WorkoutType};

/// Name of the single section produced for an AMRAP main block
pub const AMRAP_SECTION_NAME: &str = "AMRAP";

/// Expand an AMRAP main block into its single timeline section
///
/// The description lists every exercise in input order, e.g.
/// "10 Burpees, 15 Air Squats". Entries may define neither duration nor
/// reps; only an entry defining both is rejected.
pub fn build(block: &MainBlockSpec) -> Result<Vec<TimelineSection>> {
    let duration = require_positive(block.duration, "duration", WorkoutType::Amrap)?;
    require_exercises(&block.exercises, WorkoutType::Amrap)?;

    for (index, exercise) in block.exercises.iter().enumerate() {
        optional_effort(exercise, index)?;
    }

    let description = block
        .exercises
        .iter()
        .map(|e| e.summary())
        .collect::<Vec<_>>()
        .join(", ");

    tracing::debug!("AMRAP of {}s over {} exercises", duration, block.exercises.len());

    Ok(vec![TimelineSection {
        name: AMRAP_SECTION_NAME.to_string(),
        effective_duration: duration,
        description: Some(description),
        source_kind: SourceKind::Main,
        round_index: None,
        reps: None,
    }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Section};

    fn block(duration: Option<i64>, exercises: Vec<Section>) -> MainBlockSpec {
        MainBlockSpec {
            exercises,
            duration,
            ..MainBlockSpec::default()
        }
    }

    #[test]
    fn test_single_section() {
        let block = block(
            Some(600),
            vec![
                Section::reps("Burpees", "10"),
                Section::reps("Air Squats", "15"),
                Section::reps("Sit-ups", "20"),
            ],
        );

        let sections = build(&block).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "AMRAP");
        assert_eq!(sections[0].effective_duration, 600);
        assert_eq!(
            sections[0].description.as_deref(),
            Some("10 Burpees, 15 Air Squats, 20 Sit-ups")
        );
    }

    #[test]
    fn test_missing_duration_rejected() {
        let block = block(None, vec![Section::reps("Burpees", "10")]);
        assert!(matches!(build(&block), Err(Error::Validation(_))));
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        let block = block(Some(0), vec![Section::reps("Burpees", "10")]);
        assert!(matches!(build(&block), Err(Error::Validation(_))));
    }

    #[test]
    fn test_entry_with_both_rejected() {
        let mut both = Section::timed("Row", 60);
        both.reps = Some("250m".into());
        let block = block(Some(600), vec![Section::reps("Burpees", "10"), both]);
        assert!(matches!(build(&block), Err(Error::Validation(_))));
    }

    #[test]
    fn test_bare_names_accepted() {
        let block = block(Some(300), vec![Section::named("Row"), Section::named("Bike")]);
        let sections = build(&block).unwrap();
        assert_eq!(sections[0].description.as_deref(), Some("Row, Bike"));
    }

    #[test]
    fn test_empty_exercises_rejected() {
        let block = block(Some(600), vec![]);
        assert!(matches!(build(&block), Err(Error::Validation(_))));
    }
}
