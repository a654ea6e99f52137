//! Bounded activity timeline

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// How many entries the visible timeline keeps
pub const TIMELINE_CAPACITY: usize = 10;

/// Category of a synthetic event, mapped to a marker in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    Obstacle,
    Navigation,
    Alert,
    Success,
    Info,
}

/// One synthetic event shown to the user. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub kind: TimelineKind,
    pub title: String,
    pub description: String,
    /// Human label like "Just now"; the UI owns real timestamps
    pub time_label: String,
}

impl TimelineEntry {
    pub fn new(kind: TimelineKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            time_label: "Just now".to_string(),
        }
    }
}

/// Fixed-capacity newest-first log with oldest-eviction on overflow.
///
/// No deduplication and no persistence across reloads. Single-threaded by
/// itself; sinks shared across tasks wrap it in a mutex.
#[derive(Debug, Default)]
pub struct Timeline {
    entries: VecDeque<TimelineEntry>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the front; drop the back entry once capacity is exceeded.
    pub fn push(&mut self, entry: TimelineEntry) {
        self.entries.push_front(entry);
        if self.entries.len() > TIMELINE_CAPACITY {
            self.entries.pop_back();
        }
    }

    /// Entries newest-first
    pub fn entries(&self) -> impl Iterator<Item = &TimelineEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&TimelineEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Owned snapshot, newest-first
    pub fn snapshot(&self) -> Vec<TimelineEntry> {
        self.entries.iter().cloned().collect()
    }
}
