//! Storage trait definitions

use async_trait::async_trait;

/// Logical storage scopes for the current-user record.
///
/// The session tier ends with the browser session; the durable tier
/// survives restarts. They differ only in lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceTier {
    Session,
    Durable,
}

/// One key/value storage scope (the shape of browser local/session storage).
///
/// Operations cannot fail: quota and availability problems are out of scope
/// here, and implementations log-and-continue rather than surface errors.
#[async_trait]
pub trait StorageTier: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;
    async fn set(&self, key: &str, value: String);
    async fn remove(&self, key: &str);
}
