//! Core business entities and types

pub mod credentials;
pub mod error;
pub mod timeline;
pub mod user;

pub use credentials::{CredentialCheck, CredentialEntry, DemoCredentials};
pub use error::{DomainError, DomainResult};
pub use timeline::{Timeline, TimelineEntry, TimelineKind, TIMELINE_CAPACITY};
pub use user::{str_to_role, Page, Role, UserRecord};
