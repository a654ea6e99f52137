//! Authentication use-cases: login gate, access checks, password reset

pub mod gate;
pub mod password_reset;

pub use gate::{AccessDecision, AuthGate, LoginForm, LoginOutcome};
pub use password_reset::PasswordReset;
