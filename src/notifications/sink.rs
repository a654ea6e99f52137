//! Presentation-layer display contracts consumed by the core

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::TimelineEntry;

/// Severity of a toast-style notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// Everything the core needs from the presentation layer.
///
/// All operations are fire-and-forget: they never fail the caller and
/// return nothing. A real frontend maps these to toasts, modals, the
/// activity timeline and text-to-speech.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Auto-dismissing toast notification
    async fn notify(&self, message: &str, severity: Severity);

    /// Modal-style announcement; looks blocking, is not
    async fn announce(&self, title: &str, message: &str);

    /// Bounded newest-first timeline insert
    async fn timeline_insert(&self, entry: TimelineEntry);

    /// Best-effort voice feedback stub
    async fn speak(&self, message: &str);
}

/// Shared sink handle passed to services
pub type SharedEventSink = Arc<dyn EventSink>;
