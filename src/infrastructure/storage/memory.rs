//! In-memory storage tier implementation

use async_trait::async_trait;
use dashmap::DashMap;

use super::StorageTier;

/// In-memory tier for development and testing.
///
/// Stands in for one browser storage scope; a real frontend would back
/// this with sessionStorage or localStorage.
pub struct InMemoryTier {
    values: DashMap<String, String>,
}

impl InMemoryTier {
    pub fn new() -> Self {
        Self {
            values: DashMap::new(),
        }
    }

    /// Drop everything in this tier. Used by tests to simulate the end of
    /// a browser session.
    pub fn wipe(&self) {
        self.values.clear();
    }
}

impl Default for InMemoryTier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageTier for InMemoryTier {
    async fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).map(|v| v.clone())
    }

    async fn set(&self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    async fn remove(&self, key: &str) {
        self.values.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_remove() {
        let tier = InMemoryTier::new();
        assert_eq!(tier.get("k").await, None);

        tier.set("k", "v".into()).await;
        assert_eq!(tier.get("k").await, Some("v".to_string()));

        tier.remove("k").await;
        assert_eq!(tier.get("k").await, None);
    }

    #[tokio::test]
    async fn wipe_clears_all_keys() {
        let tier = InMemoryTier::new();
        tier.set("a", "1".into()).await;
        tier.set("b", "2".into()).await;
        tier.wipe();
        assert_eq!(tier.get("a").await, None);
        assert_eq!(tier.get("b").await, None);
    }
}
