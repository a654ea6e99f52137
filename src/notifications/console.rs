//! Console sink for the demo binary

use async_trait::async_trait;
use log::info;
use tokio::sync::Mutex;

use super::{EventSink, Severity};
use crate::domain::{Timeline, TimelineEntry};

/// Sink that renders everything to the log and keeps the bounded timeline
/// in memory. One mutex guards the timeline, so inserts are safe from any
/// interleaving of timer tasks and user actions.
pub struct ConsoleSink {
    timeline: Mutex<Timeline>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            timeline: Mutex::new(Timeline::new()),
        }
    }

    /// Current timeline contents, newest-first
    pub async fn timeline_snapshot(&self) -> Vec<TimelineEntry> {
        self.timeline.lock().await.snapshot()
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventSink for ConsoleSink {
    async fn notify(&self, message: &str, severity: Severity) {
        info!("[toast:{}] {}", severity.as_str(), message);
    }

    async fn announce(&self, title: &str, message: &str) {
        info!("[modal] {}: {}", title, message);
    }

    async fn timeline_insert(&self, entry: TimelineEntry) {
        info!("[timeline:{:?}] {}: {}", entry.kind, entry.title, entry.description);
        self.timeline.lock().await.push(entry);
    }

    async fn speak(&self, message: &str) {
        info!("[voice] {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimelineKind;

    #[tokio::test]
    async fn inserts_are_bounded_and_newest_first() {
        let sink = ConsoleSink::new();
        for n in 1..=12 {
            sink.timeline_insert(TimelineEntry::new(
                TimelineKind::Info,
                format!("event {}", n),
                "test",
            ))
            .await;
        }

        let snapshot = sink.timeline_snapshot().await;
        assert_eq!(snapshot.len(), 10);
        assert_eq!(snapshot.first().unwrap().title, "event 12");
        assert_eq!(snapshot.last().unwrap().title, "event 3");
    }
}
