//! Configuration loader
//!
//! Resolution order:
//! 1. An explicitly requested file (`--config` / `STORYDOC_CONFIG`), which
//!    must exist
//! 2. `storydoc.yaml` in the working directory, if present
//! 3. Built-in defaults
//!
//! Relative paths inside a file resolve against that file's directory.
//! Without a file they resolve against the working directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::schema::Config;
use crate::error::ConfigError;

/// File name probed in the working directory when no config is given.
pub const DEFAULT_CONFIG_FILE: &str = "storydoc.yaml";

/// Upper bound on configuration file size in bytes.
const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from this file.
    File(PathBuf),
    /// No file; built-in defaults.
    Defaults,
}

/// Loaded configuration together with its origin.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Validated configuration with anchored paths.
    pub config: Config,
    /// Origin of the configuration.
    pub source: ConfigSource,
}

/// Loads the effective configuration.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] if `explicit` does not exist,
/// [`ConfigError::ParseError`] if the file cannot be read or parsed, and
/// [`ConfigError::InvalidValue`] if validation fails.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig, ConfigError> {
    let path = match explicit {
        Some(path) => {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                cwd.join(path)
            };
            if !path.is_file() {
                return Err(ConfigError::MissingFile { path });
            }
            Some(path)
        }
        None => Some(cwd.join(DEFAULT_CONFIG_FILE)).filter(|p| p.is_file()),
    };

    let Some(path) = path else {
        debug!(cwd = %cwd.display(), "no config file, using defaults");
        let config = Config::default().anchored_at(cwd);
        config.validate()?;
        return Ok(LoadedConfig {
            config,
            source: ConfigSource::Defaults,
        });
    };

    let config = parse_file(&path)?;
    let base = path.parent().unwrap_or(cwd);
    let config = config.anchored_at(base);
    config.validate()?;

    debug!(path = %path.display(), "loaded config file");
    Ok(LoadedConfig {
        config,
        source: ConfigSource::File(path),
    })
}

fn parse_file(path: &Path) -> Result<Config, ConfigError> {
    let parse_error = |message: String| ConfigError::ParseError {
        path: path.to_path_buf(),
        message,
    };

    let size = std::fs::metadata(path)
        .map_err(|e| parse_error(e.to_string()))?
        .len();
    if size > MAX_CONFIG_SIZE {
        return Err(parse_error(format!(
            "file is {size} bytes, limit is {MAX_CONFIG_SIZE}"
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| parse_error(e.to_string()))?;
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))
}
