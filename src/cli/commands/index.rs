//! `index` command handler.

use serde_json::json;

use crate::catalog::generate_index;
use crate::cli::args::{IndexArgs, OutputFormat};
use crate::config::{Config, IndexOptions};
use crate::error::StorydocError;

/// Execute `index`.
///
/// # Errors
///
/// Returns an error if the overridden settings are invalid, the examples
/// root is missing, or the index cannot be written.
pub async fn run(args: &IndexArgs, config: Config, quiet: bool) -> Result<(), StorydocError> {
    let options = resolve(args, config)?;
    let summary = generate_index(&options).await?;

    match args.format {
        OutputFormat::Human => {
            if !quiet {
                eprintln!(
                    "Indexed {} examples in {} groups -> {}",
                    summary.entries,
                    summary.groups,
                    options.output.display()
                );
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                json!({
                    "entries": summary.entries,
                    "groups": summary.groups,
                    "output": options.output.display().to_string(),
                })
            );
        }
    }

    Ok(())
}

/// Applies CLI overrides on top of the loaded configuration.
fn resolve(args: &IndexArgs, mut config: Config) -> Result<IndexOptions, StorydocError> {
    if let Some(root) = &args.root {
        config.index.root.clone_from(root);
    }
    if let Some(output) = &args.output {
        config.index.output.clone_from(output);
    }
    if let Some(suffix) = &args.suffix {
        config.index.suffix.clone_from(suffix);
    }
    if let Some(prefix) = &args.exclude_prefix {
        config.index.exclude_prefix.clone_from(prefix);
    }
    config.validate()?;
    Ok(config.index)
}
