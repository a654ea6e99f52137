//! Current-user identity types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account roles known to the demo credential table.
///
/// Exactly two values exist; a stored record carrying any other role string
/// fails deserialization and is treated as no session at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Administrator,
    User,
}

impl Role {
    /// The page this role lands on after login
    pub fn landing_page(&self) -> Page {
        match self {
            Role::Administrator => Page::AdminLanding,
            Role::User => Page::UserLanding,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::User => "User",
        }
    }
}

/// Parse a role from loose user input ("admin", "Administrator", ...).
/// Anything unrecognized falls back to the regular user role.
pub fn str_to_role(s: &str) -> Role {
    match s.to_lowercase().as_str() {
        "admin" | "administrator" => Role::Administrator,
        _ => Role::User,
    }
}

/// Navigation targets, referenced by logical name.
/// Exact addressing is a presentation-layer concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    AdminLanding,
    UserLanding,
}

/// Identity established at a successful login.
///
/// Wire layout matches the persisted JSON:
/// `{"username", "name", "role", "loginTime"}` with an ISO-8601 timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    #[serde(rename = "name")]
    pub display_name: String,
    pub role: Role,
    #[serde(rename = "loginTime")]
    pub login_time: DateTime<Utc>,
}
