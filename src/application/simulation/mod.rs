//! Simulated device behavior: periodic generators and user actions

pub mod actions;
pub mod battery;
pub mod clock;

pub use actions::DeviceActions;
pub use battery::BatteryWatcher;
pub use clock::{SimulationClock, STREETS};
