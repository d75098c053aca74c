//! Immutable workout timeline and its point-in-time queries.
//!
//! A timeline is built once from the ordered section list and never changes
//! afterwards, so every query is a pure function of the elapsed time.
//!
//! Boundary rules:
//! - Section `i` covers the half-open interval `[start_i, start_i + duration_i)`,
//!   so a time exactly on a boundary belongs to the following section.
//! - Any time at or beyond the total duration clamps to the last section with
//!   a local offset equal to its full duration.

use crate::{SourceKind, TimelineSection};

/// Where in the timeline a given elapsed time falls
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionPosition<'a> {
    pub index: usize,
    pub section: &'a TimelineSection,
    /// Seconds elapsed since the start of `section`
    pub local_offset: u64,
}

/// Ordered, fixed-length sequence of timeline sections
#[derive(Clone, Debug)]
pub struct Timeline {
    sections: Vec<TimelineSection>,
    /// Cumulative end offset of each section
    ends: Vec<u64>,
    total_duration: u64,
}

impl Timeline {
    /// Build a timeline over an ordered section list
    pub fn new(sections: Vec<TimelineSection>) -> Self {
        let mut ends = Vec::with_capacity(sections.len());
        let mut acc = 0u64;
        for section in &sections {
            acc += u64::from(section.effective_duration);
            ends.push(acc);
        }

        Self {
            sections,
            ends,
            total_duration: acc,
        }
    }

    /// Sum of all effective durations
    pub fn total_duration(&self) -> u64 {
        self.total_duration
    }

    pub fn sections(&self) -> &[TimelineSection] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Start offset of the section at `index`
    pub fn section_start(&self, index: usize) -> Option<u64> {
        if index >= self.sections.len() {
            return None;
        }
        Some(self.start_of(index))
    }

    /// Total effective duration of the sections from one part of the workout
    pub fn duration_of(&self, kind: SourceKind) -> u64 {
        self.sections
            .iter()
            .filter(|s| s.source_kind == kind)
            .map(|s| u64::from(s.effective_duration))
            .sum()
    }

    /// Locate the section active at `elapsed` seconds
    ///
    /// Returns `None` only for an empty timeline.
    pub fn section_at(&self, elapsed: u64) -> Option<SectionPosition<'_>> {
        let last = self.sections.len().checked_sub(1)?;

        if elapsed >= self.total_duration {
            let section = &self.sections[last];
            return Some(SectionPosition {
                index: last,
                section,
                local_offset: u64::from(section.effective_duration),
            });
        }

        // First section whose end lies strictly after `elapsed`. Zero-length
        // sections are skipped because their end equals their start.
        let index = self.ends.partition_point(|&end| end <= elapsed);
        Some(SectionPosition {
            index,
            section: &self.sections[index],
            local_offset: elapsed - self.start_of(index),
        })
    }

    pub fn current_section(&self, elapsed: u64) -> Option<&TimelineSection> {
        self.section_at(elapsed).map(|p| p.section)
    }

    /// Section following the current one, `None` once the last section is current
    pub fn next_section(&self, elapsed: u64) -> Option<&TimelineSection> {
        let position = self.section_at(elapsed)?;
        self.sections.get(position.index + 1)
    }

    /// Fraction of the workout completed, in `[0, 1]`
    pub fn progress(&self, elapsed: u64) -> f64 {
        if self.total_duration == 0 {
            return 0.0;
        }
        (elapsed as f64 / self.total_duration as f64).clamp(0.0, 1.0)
    }

    /// Seconds left in the current section
    pub fn remaining_in_section(&self, elapsed: u64) -> u64 {
        self.section_at(elapsed)
            .map(|p| u64::from(p.section.effective_duration) - p.local_offset)
            .unwrap_or(0)
    }

    fn start_of(&self, index: usize) -> u64 {
        if index == 0 {
            0
        } else {
            self.ends[index - 1]
        }
    }
}
