//! # SmartGuide Core
//!
//! Session/authentication gate and simulated-device event core for the
//! SmartGuide demo application: a role-gated login flow over a two-tier
//! session store, plus timer-driven generators that feed a bounded
//! activity timeline through a presentation-layer sink.
//!
//! ## Architecture
//!
//! - **domain**: entities, the demo credential table, the bounded timeline
//! - **application**: login gate, access checks, password reset, device
//!   simulation and dashboard actions
//! - **infrastructure**: storage tiers and the two-tier session store
//! - **notifications**: display contracts the core emits through
//! - **shared**: shutdown signalling and small validations

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod notifications;
pub mod shared;

pub use config::{default_config_path, AppConfig};
pub use domain::{DomainError, DomainResult, Page, Role, TimelineEntry, TimelineKind, UserRecord};

// Re-export the main services for easy access
pub use application::{
    AccessDecision, AuthGate, DeviceActions, LoginForm, LoginOutcome, PasswordReset,
    SimulationClock,
};
pub use infrastructure::storage::{SessionStore, SharedSessionStore};
pub use notifications::{ConsoleSink, EventSink, Severity, SharedEventSink};
pub use shared::ShutdownSignal;
