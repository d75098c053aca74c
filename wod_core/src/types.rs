//! Core domain types for the WOD timeline engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - Workout type tags
//! - Declarative workout documents (sections, main block, whole workout)
//! - Derived timeline sections produced by the builders

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time-domain slot given to a repetition-based exercise.
///
/// Such a section has no real-time length but still needs a strictly
/// positive, navigable slot in the timeline.
pub const REP_SECTION_SECONDS: u32 = 1;

/// Length of a single EMOM round.
pub const EMOM_SLOT_SECONDS: u32 = 60;

// ============================================================================
// Workout Types
// ============================================================================

/// Shape of the main block
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    Circuit,
    Amrap,
    Tabata,
    Emom,
}

impl WorkoutType {
    /// Canonical lowercase tag as used in workout documents
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Circuit => "circuit",
            WorkoutType::Amrap => "amrap",
            WorkoutType::Tabata => "tabata",
            WorkoutType::Emom => "emom",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "circuit" => Ok(WorkoutType::Circuit),
            "amrap" => Ok(WorkoutType::Amrap),
            "tabata" => Ok(WorkoutType::Tabata),
            "emom" => Ok(WorkoutType::Emom),
            _ => Err(Error::UnsupportedType(s.to_string())),
        }
    }
}

// ============================================================================
// Declarative Workout Document
// ============================================================================

/// An author-supplied section: a warm-up/cool-down step or a main-block exercise
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub name: String,

    /// Real duration in seconds
    #[serde(default, alias = "realDuration", skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    /// Repetition label, e.g. "10" or "10 each side"
    #[serde(default, alias = "repsLabel", skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Section {
    /// A section with a real duration
    pub fn timed(name: impl Into<String>, seconds: i64) -> Self {
        Self {
            name: name.into(),
            duration: Some(seconds),
            ..Self::default()
        }
    }

    /// A repetition-based section
    pub fn reps(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reps: Some(label.into()),
            ..Self::default()
        }
    }

    /// A section carrying only a name (used by tabata and EMOM lists)
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Short human label: "10 Burpees", "40s Plank" or just the name
    pub fn summary(&self) -> String {
        match (&self.reps, self.duration) {
            (Some(reps), _) => format!("{} {}", reps, self.name),
            (None, Some(seconds)) => format!("{}s {}", seconds, self.name),
            (None, None) => self.name.clone(),
        }
    }
}

/// Shape-specific main block fields
///
/// Numeric fields are signed so that non-positive values reach validation
/// instead of failing at parse time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MainBlockSpec {
    #[serde(default)]
    pub exercises: Vec<Section>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounds: Option<i64>,

    /// AMRAP time cap in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_duration: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_duration: Option<i64>,
}

/// A complete declarative workout description
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSpec {
    /// Raw type tag; parsed into [`WorkoutType`] by the factory
    #[serde(rename = "type")]
    pub workout_type: String,

    #[serde(default)]
    pub warm_up: Vec<Section>,

    #[serde(default)]
    pub cool_down: Vec<Section>,

    #[serde(rename = "workout", default)]
    pub main_block: MainBlockSpec,
}

// ============================================================================
// Exercise Effort
// ============================================================================

/// Validated effort of a main-block exercise
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effort {
    /// Real duration in seconds
    Timed(u32),
    /// Repetition label
    Reps(String),
}

impl Effort {
    /// Seconds this effort occupies on the timeline
    pub fn effective_duration(&self) -> u32 {
        match self {
            Effort::Timed(seconds) => *seconds,
            Effort::Reps(_) => REP_SECTION_SECONDS,
        }
    }

    pub fn reps_label(&self) -> Option<String> {
        match self {
            Effort::Timed(_) => None,
            Effort::Reps(label) => Some(label.clone()),
        }
    }
}

// ============================================================================
// Timeline Sections
// ============================================================================

/// Which part of the workout a section came from
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Warmup,
    Main,
    Cooldown,
}

/// One named, time-bounded slot in a built timeline
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TimelineSection {
    pub name: String,
    pub effective_duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source_kind: SourceKind,
    /// Zero-based round this section belongs to, for round-based main blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_index: Option<u32>,
    /// Repetition label for rep-based exercises
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
}

impl TimelineSection {
    /// Whether this slot stands for a repetition target rather than real time
    pub fn is_rep_based(&self) -> bool {
        self.reps.is_some()
    }
}
