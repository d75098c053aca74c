//! Error types for the wod_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for wod_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Workout document failed construction-time validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Workout type tag not recognized by the factory
    #[error("Unsupported workout type: {0}")]
    UnsupportedType(String),

    /// No workout document could be resolved
    #[error("Workout not found: {0}")]
    WorkoutNotFound(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
