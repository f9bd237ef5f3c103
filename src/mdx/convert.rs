//! Batch conversion of an `.mdx` directory into `.md` files.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::ConvertOptions;
use crate::error::{Result, StorydocError};
use crate::mdx::strip::{StripOptions, strip_mdx};

/// Outcome of a conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConvertSummary {
    /// Files written successfully.
    pub converted: usize,
    /// `.mdx` files found in the input directory.
    pub discovered: usize,
}

/// Converts every `.mdx` file directly inside `options.input`.
///
/// Files are processed one at a time in name order. A file that fails to
/// read or write is logged and skipped; it only shows up as the gap
/// between `converted` and `discovered`.
///
/// # Errors
///
/// Returns [`StorydocError::MissingInputDir`] if the input directory does
/// not exist (nothing is created in that case), or an I/O error if the
/// input cannot be listed or the output directory cannot be created.
pub async fn convert_dir(options: &ConvertOptions) -> Result<ConvertSummary> {
    if !options.input.is_dir() {
        return Err(StorydocError::MissingInputDir {
            path: options.input.clone(),
        });
    }

    let sources = discover_mdx(&options.input).await?;
    tokio::fs::create_dir_all(&options.output).await?;

    let strip = options.strip_options();
    let mut converted = 0;

    for source in &sources {
        match convert_file(source, &options.output, &strip).await {
            Ok(dest) => {
                converted += 1;
                debug!(source = %source.display(), dest = %dest.display(), "converted");
            }
            Err(e) => {
                warn!(path = %source.display(), error = %e, "failed to convert, skipping");
            }
        }
    }

    let summary = ConvertSummary {
        converted,
        discovered: sources.len(),
    };
    info!(
        converted = summary.converted,
        discovered = summary.discovered,
        output = %options.output.display(),
        "markdown conversion finished"
    );
    Ok(summary)
}

/// Converts one file into `output_dir`, returning the written path.
///
/// # Errors
///
/// Returns an I/O error if the source cannot be read or the result cannot
/// be written.
pub async fn convert_file(
    source: &Path,
    output_dir: &Path,
    options: &StripOptions,
) -> std::io::Result<PathBuf> {
    let mdx = tokio::fs::read_to_string(source).await?;
    let markdown = strip_mdx(&mdx, options);

    let stem = source
        .file_stem()
        .ok_or_else(|| std::io::Error::other("source path has no file name"))?;
    let dest = output_dir.join(format!("{}.md", stem.to_string_lossy()));

    tokio::fs::write(&dest, markdown).await?;
    Ok(dest)
}

/// Lists `.mdx` files directly inside `dir`, sorted by path.
async fn discover_mdx(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_mdx = path.extension().is_some_and(|ext| ext == "mdx");
        if is_mdx && entry.file_type().await?.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
