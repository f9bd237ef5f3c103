//! Configuration module
//!
//! Loads the optional `storydoc.yaml` file and supplies the path and
//! convention settings each command runs with.

pub mod loader;
pub mod schema;

pub use loader::{ConfigSource, DEFAULT_CONFIG_FILE, LoadedConfig, load_config};
pub use schema::{Config, ConvertOptions, IndexOptions};
