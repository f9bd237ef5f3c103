//! `strip` command handler.

use serde_json::json;

use crate::cli::args::{OutputFormat, StripArgs};
use crate::config::{Config, ConvertOptions};
use crate::error::StorydocError;
use crate::mdx::convert_dir;

/// Execute `strip`.
///
/// Per-file failures do not fail the command; they only reduce the
/// converted count.
///
/// # Errors
///
/// Returns an error if the input directory is missing or the output
/// directory cannot be prepared.
pub async fn run(args: &StripArgs, config: Config, quiet: bool) -> Result<(), StorydocError> {
    let options = resolve(args, config);
    let summary = convert_dir(&options).await?;

    match args.format {
        OutputFormat::Human => {
            if !quiet {
                eprintln!(
                    "Converted {}/{} files -> {}",
                    summary.converted,
                    summary.discovered,
                    options.output.display()
                );
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                json!({
                    "converted": summary.converted,
                    "discovered": summary.discovered,
                    "output": options.output.display().to_string(),
                })
            );
        }
    }

    Ok(())
}

/// Applies CLI overrides on top of the loaded configuration.
fn resolve(args: &StripArgs, config: Config) -> ConvertOptions {
    let mut options = config.strip;
    if let Some(input) = &args.input {
        options.input.clone_from(input);
    }
    if let Some(output) = &args.output {
        options.output.clone_from(output);
    }
    if let Some(passes) = args.max_tag_passes {
        options.max_tag_passes = usize::from(passes);
    }
    options
}
