//! Display contracts between the core and the presentation layer

pub mod console;
pub mod recording;
pub mod sink;

pub use console::ConsoleSink;
pub use recording::{RecordingSink, SinkEvent};
pub use sink::{EventSink, Severity, SharedEventSink};
