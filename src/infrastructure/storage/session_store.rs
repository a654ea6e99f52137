//! Two-tier current-user session store

use std::sync::Arc;

use log::{debug, warn};

use super::{InMemoryTier, PersistenceTier, StorageTier};
use crate::domain::{DomainError, DomainResult, UserRecord};

/// Well-known key holding the serialized record, one per tier
pub const USER_KEY: &str = "smartguide_user";
/// Well-known key holding the remember flag, durable tier only
pub const REMEMBER_KEY: &str = "smartguide_remember";

/// Read/write/clear of the single current-user record across two
/// persistence tiers. Only the auth gate mutates it; everything else reads.
pub struct SessionStore {
    session: Arc<dyn StorageTier>,
    durable: Arc<dyn StorageTier>,
}

impl SessionStore {
    pub fn new(session: Arc<dyn StorageTier>, durable: Arc<dyn StorageTier>) -> Self {
        Self { session, durable }
    }

    /// Store backed by two in-memory tiers, for development and testing
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTier::new()), Arc::new(InMemoryTier::new()))
    }

    fn tier(&self, tier: PersistenceTier) -> &dyn StorageTier {
        match tier {
            PersistenceTier::Session => self.session.as_ref(),
            PersistenceTier::Durable => self.durable.as_ref(),
        }
    }

    /// Persist the record. Always lands in the session tier; with
    /// `remember` it additionally lands in the durable tier together with
    /// the remember flag, so later reads prefer the durable copy.
    ///
    /// Serialization failure is logged and swallowed: a broken write must
    /// never take the page down.
    pub async fn write(&self, record: &UserRecord, remember: bool) {
        let json = match serde_json::to_string(record) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize session record: {}", e);
                return;
            }
        };

        self.session.set(USER_KEY, json.clone()).await;
        if remember {
            self.durable.set(USER_KEY, json).await;
            self.durable.set(REMEMBER_KEY, "true".to_string()).await;
        }
    }

    /// Current record, if any. The durable tier wins when its remember
    /// flag is set; otherwise the session tier is consulted. Malformed
    /// data reads as absent and the offending tier is left untouched.
    pub async fn read(&self) -> Option<UserRecord> {
        let remembered = self.durable.get(REMEMBER_KEY).await.as_deref() == Some("true");
        let tier = if remembered {
            PersistenceTier::Durable
        } else {
            PersistenceTier::Session
        };
        self.record_in(tier).await
    }

    /// Record stored in one explicit tier, ignoring the remember flag
    pub async fn record_in(&self, tier: PersistenceTier) -> Option<UserRecord> {
        let raw = self.tier(tier).get(USER_KEY).await?;
        match parse_record(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!("Ignoring stored session in {:?} tier: {}", tier, e);
                None
            }
        }
    }

    /// Remove the record and remember flag from both tiers. Idempotent.
    pub async fn clear(&self) {
        self.session.remove(USER_KEY).await;
        self.durable.remove(USER_KEY).await;
        self.durable.remove(REMEMBER_KEY).await;
    }
}

fn parse_record(raw: &str) -> DomainResult<UserRecord> {
    serde_json::from_str(raw).map_err(|e| DomainError::MalformedStoredSession(e.to_string()))
}

/// Thread-safe shared session store
pub type SharedSessionStore = Arc<SessionStore>;
