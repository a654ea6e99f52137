//! Recording sink for development and testing

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{EventSink, Severity};
use crate::domain::{Timeline, TimelineEntry};

/// One captured sink call
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Notify { message: String, severity: Severity },
    Announce { title: String, message: String },
    Timeline(TimelineEntry),
    Speak(String),
}

/// Sink that captures every call in order, alongside the bounded timeline.
pub struct RecordingSink {
    events: Mutex<Vec<SinkEvent>>,
    timeline: Mutex<Timeline>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            timeline: Mutex::new(Timeline::new()),
        }
    }

    /// All captured calls in arrival order
    pub async fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().await.clone()
    }

    pub async fn event_count(&self) -> usize {
        self.events.lock().await.len()
    }

    /// Notifications only, in arrival order
    pub async fn notifications(&self) -> Vec<(String, Severity)> {
        self.events
            .lock()
            .await
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Notify { message, severity } => Some((message.clone(), *severity)),
                _ => None,
            })
            .collect()
    }

    /// Spoken messages only, in arrival order
    pub async fn spoken(&self) -> Vec<String> {
        self.events
            .lock()
            .await
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Speak(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    /// Bounded timeline contents, newest-first
    pub async fn timeline_snapshot(&self) -> Vec<TimelineEntry> {
        self.timeline.lock().await.snapshot()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventSink for RecordingSink {
    async fn notify(&self, message: &str, severity: Severity) {
        self.events.lock().await.push(SinkEvent::Notify {
            message: message.to_string(),
            severity,
        });
    }

    async fn announce(&self, title: &str, message: &str) {
        self.events.lock().await.push(SinkEvent::Announce {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    async fn timeline_insert(&self, entry: TimelineEntry) {
        self.events.lock().await.push(SinkEvent::Timeline(entry.clone()));
        self.timeline.lock().await.push(entry);
    }

    async fn speak(&self, message: &str) {
        self.events.lock().await.push(SinkEvent::Speak(message.to_string()));
    }
}
