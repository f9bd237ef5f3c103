//! Example directory scanner.
//!
//! Walks the examples root in file-name order, prunes anything whose name
//! starts with the exclusion marker, and indexes every file carrying the
//! configured suffix.

use std::path::{Component, Path};

use ignore::{DirEntry, WalkBuilder};
use tracing::{debug, warn};

use crate::catalog::index::{ExampleEntry, ExampleIndex};
use crate::catalog::tags::extract_tags;
use crate::config::IndexOptions;
use crate::error::{Result, StorydocError};

/// Scans `options.root` and builds a sorted example index.
///
/// A file that cannot be read is still indexed, with an empty tag list;
/// the failure is logged and the scan continues.
///
/// # Errors
///
/// Returns [`StorydocError::MissingInputDir`] if the root is not an
/// existing directory.
pub async fn scan_examples(options: &IndexOptions) -> Result<ExampleIndex> {
    if !options.root.is_dir() {
        return Err(StorydocError::MissingInputDir {
            path: options.root.clone(),
        });
    }

    let mut index = ExampleIndex::new();

    for path in discover(options) {
        let Ok(relative) = path.strip_prefix(&options.root) else {
            continue;
        };

        let tags = match tokio::fs::read_to_string(&path).await {
            Ok(source) => extract_tags(&source),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read example, indexing without tags");
                Vec::new()
            }
        };

        let entry = ExampleEntry {
            name: example_name(relative),
            file_path: slash_path(relative),
            tags,
        };
        let group = group_name(relative, &options.default_group);
        debug!(group = %group, name = %entry.name, tags = entry.tags.len(), "indexed example");
        index.insert(group, entry);
    }

    index.sort();
    Ok(index)
}

/// Lists qualifying example files under the root in walk order.
fn discover(options: &IndexOptions) -> Vec<std::path::PathBuf> {
    let prefix = options.exclude_prefix.clone();
    let walker = WalkBuilder::new(&options.root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| !is_excluded(entry, &prefix))
        .build();

    let mut files = Vec::new();
    for result in walker {
        match result {
            Ok(entry) => {
                let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
                let qualifies = entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.ends_with(options.suffix.as_str()));
                if is_file && qualifies {
                    files.push(entry.into_path());
                }
            }
            Err(e) => {
                warn!(error = %e, "walk error");
            }
        }
    }
    files
}

/// The root itself is never excluded, only entries below it.
fn is_excluded(entry: &DirEntry, prefix: &str) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(prefix))
}

/// Basename without its final extension.
fn example_name(relative: &Path) -> String {
    relative
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Parent directory relative to the root, or `default` for root files.
fn group_name(relative: &Path, default: &str) -> String {
    match relative.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => slash_path(parent),
        _ => default.to_string(),
    }
}

/// Joins path components with `/` regardless of platform.
fn slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
