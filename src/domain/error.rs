//! Domain errors

use thiserror::Error;

/// Everything that can go wrong from the user's point of view.
///
/// All of these are recoverable by retry; none are fatal. They reach the
/// user only through the notification sink, never as a raw error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Login submitted with an empty username or password
    #[error("Please fill in all fields")]
    MissingFields,

    /// Credentials did not match the demo table
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Password-reset email failed the structural check
    #[error("Please enter a valid email address")]
    InvalidEmailFormat,

    /// Stored session data failed to parse; callers treat this as "no session"
    #[error("Malformed stored session: {0}")]
    MalformedStoredSession(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
