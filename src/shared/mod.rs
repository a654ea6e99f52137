//! Cross-cutting helpers

pub mod shutdown;
pub mod validations;

pub use shutdown::{listen_for_ctrl_c, ShutdownNotified, ShutdownSignal};
pub use validations::is_valid_email;
