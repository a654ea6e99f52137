//! Configuration module
//!
//! Reads configuration from a TOML file (~/.config/smartguide/config.toml).
//! Every field has a default matching the original demo timings, so a
//! missing or partial file is fine.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub auth: AuthSettings,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter when RUST_LOG is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Timings and options for the login gate
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    /// Artificial delay standing in for a network round trip
    pub latency_ms: u64,
    /// Pause between the success notification and the redirect signal
    pub redirect_delay_ms: u64,
    /// How long the submission guard stays locked regardless of outcome
    pub guard_timeout_ms: u64,
    /// Redirect away from the login page when a valid session already
    /// exists. Off by default.
    pub redirect_on_existing_session: bool,
}

impl AuthSettings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn guard_timeout(&self) -> Duration {
        Duration::from_millis(self.guard_timeout_ms)
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            latency_ms: 1500,
            redirect_delay_ms: 1000,
            guard_timeout_ms: 2000,
            redirect_on_existing_session: false,
        }
    }
}

/// Tuning for the device activity simulation
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub activity_interval_ms: u64,
    pub distance_interval_ms: u64,
    pub battery_interval_ms: u64,
    /// Per-tick draw above this fires an obstacle event
    pub obstacle_threshold: f64,
    /// Per-tick draw above this fires a navigation update
    pub navigation_threshold: f64,
    /// Per-tick draw above this bumps the distance counter
    pub distance_threshold: f64,
    pub distance_step_km: f64,
    pub start_distance_km: f64,
    /// Displayed battery level that triggers the low-battery warning
    pub low_battery_percent: u8,
}

impl SimulationConfig {
    pub fn activity_interval(&self) -> Duration {
        Duration::from_millis(self.activity_interval_ms)
    }

    pub fn distance_interval(&self) -> Duration {
        Duration::from_millis(self.distance_interval_ms)
    }

    pub fn battery_interval(&self) -> Duration {
        Duration::from_millis(self.battery_interval_ms)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            activity_interval_ms: 8_000,
            distance_interval_ms: 10_000,
            battery_interval_ms: 30_000,
            obstacle_threshold: 0.95,
            navigation_threshold: 0.98,
            distance_threshold: 0.7,
            distance_step_km: 0.01,
            start_distance_km: 2.4,
            low_battery_percent: 20,
        }
    }
}

/// Default config file location under the user config directory
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("smartguide")
        .join("config.toml")
}
