//! Storage tiers and the current-user session store

pub mod memory;
pub mod session_store;
pub mod traits;

pub use memory::InMemoryTier;
pub use session_store::{SessionStore, SharedSessionStore, REMEMBER_KEY, USER_KEY};
pub use traits::{PersistenceTier, StorageTier};
