//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod index;
pub mod strip;
pub mod version;

use std::path::Path;

use crate::cli::args::{Cli, Commands};
use crate::config::{Config, ConfigSource, load_config};
use crate::error::StorydocError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if configuration loading or the dispatched command
/// handler fails.
pub async fn dispatch(cli: Cli) -> Result<(), StorydocError> {
    match cli.command {
        Commands::Index(args) => {
            let config = effective_config(cli.config.as_deref())?;
            index::run(&args, config, cli.quiet).await
        }
        Commands::Strip(args) => {
            let config = effective_config(cli.config.as_deref())?;
            strip::run(&args, config, cli.quiet).await
        }
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

/// Loads the config file (if any) relative to the working directory.
fn effective_config(explicit: Option<&Path>) -> Result<Config, StorydocError> {
    let cwd = std::env::current_dir()?;
    let loaded = load_config(explicit, &cwd)?;
    match &loaded.source {
        ConfigSource::File(path) => tracing::info!(path = %path.display(), "using config file"),
        ConfigSource::Defaults => tracing::debug!("using built-in defaults"),
    }
    Ok(loaded.config)
}
