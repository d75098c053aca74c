#![forbid(unsafe_code)]

//! Core timeline engine for the WOD countdown timer.
//!
//! This crate provides:
//! - Declarative workout types (warm-up, typed main block, cool-down)
//! - Section builders for circuit, AMRAP, tabata and EMOM main blocks
//! - The immutable timeline with point-in-time queries
//! - Workout factory dispatching on the workout type tag
//! - Loading, presentation decoration and a completion journal

pub mod types;
pub mod error;
pub mod validation;
pub mod circuit;
pub mod amrap;
pub mod tabata;
pub mod emom;
pub mod timeline;
pub mod factory;
pub mod loader;
pub mod decorate;
pub mod config;
pub mod logging;
pub mod journal;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use timeline::{SectionPosition, Timeline};
pub use factory::create_workout;
pub use loader::{load_spec, load_spec_for_date, parse_spec, resolve_spec_path};
pub use decorate::{decorate, format_clock, DecoratedSection, Palette, SectionRole};
pub use config::Config;
pub use journal::{Journal, JournalEntry, JournalFilter, JournalTotals};
