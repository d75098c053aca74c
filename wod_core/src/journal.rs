//! Completion journal for finished workouts.
//!
//! One JSON document per line in `<data_dir>/journal.jsonl`. Several `wod run`
//! processes may finish at once, so writes hold an exclusive lock and reads a
//! shared one. History is read back through [`JournalFilter`] queries.

use crate::{Result, Timeline, WorkoutType};
use chrono::{DateTime, NaiveDate, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A workout that was run to completion
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct JournalEntry {
    pub id: Uuid,
    pub workout_type: WorkoutType,
    /// Date the workout document was resolved for
    pub workout_date: NaiveDate,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub total_duration_seconds: u64,
    pub section_count: usize,
}

impl JournalEntry {
    /// Entry for a timeline that finished just now
    pub fn completed(
        workout_type: WorkoutType,
        workout_date: NaiveDate,
        started_at: DateTime<Utc>,
        timeline: &Timeline,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            workout_type,
            workout_date,
            started_at,
            completed_at: Utc::now(),
            total_duration_seconds: timeline.total_duration(),
            section_count: timeline.len(),
        }
    }
}

/// Which journal entries a history query returns
///
/// Unset fields match everything.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct JournalFilter {
    pub date: Option<NaiveDate>,
    pub workout_type: Option<WorkoutType>,
}

impl JournalFilter {
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn of_type(mut self, workout_type: WorkoutType) -> Self {
        self.workout_type = Some(workout_type);
        self
    }

    pub fn matches(&self, entry: &JournalEntry) -> bool {
        self.date.map_or(true, |d| entry.workout_date == d)
            && self.workout_type.map_or(true, |t| entry.workout_type == t)
    }
}

/// Totals over a set of journal entries
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JournalTotals {
    pub workouts: usize,
    pub seconds: u64,
}

impl JournalTotals {
    pub fn of(entries: &[JournalEntry]) -> Self {
        Self {
            workouts: entries.len(),
            seconds: entries.iter().map(|e| e.total_duration_seconds).sum(),
        }
    }
}

/// The completion journal file
#[derive(Clone, Debug)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a completed workout
    ///
    /// The line is serialized before the lock is taken and written with a
    /// single call, so concurrent writers never interleave partial lines.
    pub fn record(&self, entry: &JournalEntry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut locked = LockedFile::exclusive(file)?;
        locked.file.write_all(&line)?;
        locked.file.flush()?;

        tracing::debug!(
            "Recorded {} workout {} in {:?}",
            entry.workout_type,
            entry.id,
            self.path
        );
        Ok(())
    }

    /// Every readable entry, oldest first
    pub fn entries(&self) -> Result<Vec<JournalEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let locked = LockedFile::shared(File::open(&self.path)?)?;
        let (entries, skipped) = parse_lines(BufReader::new(&locked.file))?;
        if skipped > 0 {
            tracing::warn!("Skipped {} unreadable lines in {:?}", skipped, self.path);
        }
        Ok(entries)
    }

    /// Entries matching `filter`, most recently completed first
    pub fn query(&self, filter: &JournalFilter) -> Result<Vec<JournalEntry>> {
        let mut entries: Vec<_> = self
            .entries()?
            .into_iter()
            .filter(|e| filter.matches(e))
            .collect();

        // Later lines win ties on completion time
        entries.reverse();
        entries.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(entries)
    }
}

/// An open journal file holding an advisory lock until dropped
struct LockedFile {
    file: File,
}

impl LockedFile {
    fn exclusive(file: File) -> Result<Self> {
        file.lock_exclusive()?;
        Ok(Self { file })
    }

    fn shared(file: File) -> Result<Self> {
        file.lock_shared()?;
        Ok(Self { file })
    }
}

impl Drop for LockedFile {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

/// Parse journal lines, returning the entries and the count of skipped lines
fn parse_lines(reader: impl BufRead) -> Result<(Vec<JournalEntry>, usize)> {
    let mut entries = Vec::new();
    let mut skipped = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<JournalEntry>(&line) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                tracing::warn!("Journal line {} is not an entry: {}", line_num + 1, e);
                skipped += 1;
            }
        }
    }

    Ok((entries, skipped))
}
