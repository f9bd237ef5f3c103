//! Example index model and JSON emission.
//!
//! The index maps a group name (the example's directory relative to the
//! scan root) to the examples found there. It is rebuilt from scratch on
//! every run and written as pretty-printed JSON for the docs site.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// A single indexed example file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleEntry {
    /// Basename of the file without its extension.
    pub name: String,
    /// Path relative to the scan root, `/`-separated.
    pub file_path: String,
    /// Tags from the file's `@tags` annotation.
    pub tags: Vec<String>,
}

/// Examples grouped by directory.
///
/// Groups are kept in ascending key order so the emitted JSON is stable
/// across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExampleIndex {
    groups: BTreeMap<String, Vec<ExampleEntry>>,
}

impl ExampleIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry to `group`, creating the group on first use.
    pub fn insert(&mut self, group: impl Into<String>, entry: ExampleEntry) {
        self.groups.entry(group.into()).or_default().push(entry);
    }

    /// Sorts every group's entries ascending by name.
    ///
    /// The sort is stable, so entries sharing a name keep discovery order.
    pub fn sort(&mut self) {
        for entries in self.groups.values_mut() {
            entries.sort_by(|a, b| a.name.cmp(&b.name));
        }
    }

    /// Total number of entries across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Returns `true` if no entries have been indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Iterates over `(group, entries)` in ascending group order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[ExampleEntry])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Entries of a single group.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&[ExampleEntry]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    /// Renders the index as JSON with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Writes the index to `output`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if serialization, directory creation, or the write
/// itself fails.
pub async fn write_index(index: &ExampleIndex, output: &Path) -> Result<()> {
    let json = index.to_json()?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    tokio::fs::write(output, json).await?;
    debug!(path = %output.display(), entries = index.len(), "wrote example index");
    Ok(())
}
