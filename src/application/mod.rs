//! Business logic and use-case services

pub mod auth;
pub mod simulation;

pub use auth::{AccessDecision, AuthGate, LoginForm, LoginOutcome, PasswordReset};
pub use simulation::{DeviceActions, SimulationClock};
