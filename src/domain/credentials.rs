//! Demo credential table
//!
//! The fixed, compiled-in accounts the login form accepts. This is a demo
//! fixture, not a user directory: passwords are plaintext on purpose.

use super::Role;

/// A static compiled-in demo account
#[derive(Debug, Clone)]
pub struct CredentialEntry {
    pub role: Role,
    pub username: &'static str,
    pub password: &'static str,
    pub display_name: &'static str,
}

/// Seam for credential validation, so the gate stays decoupled from the
/// concrete table and tests can count invocations.
pub trait CredentialCheck: Send + Sync {
    /// Exact, case-sensitive match on both username and password for the
    /// given role. No normalization, no lockout, no errors.
    fn validate(&self, role: Role, username: &str, password: &str) -> bool;

    /// Display name shown after a successful login for this role
    fn display_name(&self, role: Role) -> String;
}

/// The demo table: exactly one entry per role, immutable at runtime.
pub struct DemoCredentials {
    entries: [CredentialEntry; 2],
}

impl DemoCredentials {
    pub fn new() -> Self {
        Self {
            entries: [
                CredentialEntry {
                    role: Role::Administrator,
                    username: "admin",
                    password: "admin123",
                    display_name: "Admin User",
                },
                CredentialEntry {
                    role: Role::User,
                    username: "user",
                    password: "user123",
                    display_name: "Juan Dela Cruz",
                },
            ],
        }
    }

    fn entry(&self, role: Role) -> &CredentialEntry {
        self.entries
            .iter()
            .find(|e| e.role == role)
            .expect("table holds one entry per role")
    }
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialCheck for DemoCredentials {
    fn validate(&self, role: Role, username: &str, password: &str) -> bool {
        let entry = self.entry(role);
        username == entry.username && password == entry.password
    }

    fn display_name(&self, role: Role) -> String {
        self.entry(role).display_name.to_string()
    }
}
