//! External concerns: storage backing the session state

pub mod storage;

pub use storage::{InMemoryTier, PersistenceTier, SessionStore, SharedSessionStore, StorageTier};
