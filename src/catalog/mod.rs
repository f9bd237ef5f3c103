//! Example catalog: scans example files and emits the JSON index the
//! docs site uses to list and search component demos.

pub mod index;
pub mod scanner;
pub mod tags;

pub use index::{ExampleEntry, ExampleIndex, write_index};
pub use scanner::scan_examples;
pub use tags::extract_tags;

use serde::Serialize;
use tracing::info;

use crate::config::IndexOptions;
use crate::error::Result;

/// Outcome of an index run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexSummary {
    /// Entries written.
    pub entries: usize,
    /// Groups written.
    pub groups: usize,
}

/// Scans the examples root and writes the index file.
///
/// Nothing is written when the root is missing.
///
/// # Errors
///
/// Returns an error if the root does not exist or the index cannot be
/// written.
pub async fn generate_index(options: &IndexOptions) -> Result<IndexSummary> {
    let index = scan_examples(options).await?;
    write_index(&index, &options.output).await?;

    let summary = IndexSummary {
        entries: index.len(),
        groups: index.group_count(),
    };
    info!(
        entries = summary.entries,
        groups = summary.groups,
        output = %options.output.display(),
        "example index generated"
    );
    Ok(summary)
}
