//! Observability module
//!
//! Logging setup for `storydoc` runs.

pub mod logging;

pub use logging::{LogFormat, LogSettings, init_logging};
