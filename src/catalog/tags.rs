//! `@tags` annotation parsing for example files.
//!
//! Example files carry search metadata in a doc comment:
//!
//! ```text
//! /** @tags form, validation, async */
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Matches the first `@tags` marker and everything up to the next `*/`.
static TAGS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)@tags(.*?)\*/").expect("valid regex"));

/// Extracts the tag list from an example file's source text.
///
/// Only the first `@tags` occurrence is considered and its content ends at
/// the first `*/`. The list may wrap onto following comment lines, whose
/// leading `*` is ignored; the next line starting with another `@` block
/// tag ends it. Items are separated by commas or line breaks, trimmed,
/// and empty items are dropped, so a missing or empty annotation yields an empty list.
#[must_use]
pub fn extract_tags(source: &str) -> Vec<String> {
    let Some(caps) = TAGS_RE.captures(source) else {
        return Vec::new();
    };

    annotation_lines(&caps[1])
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// The `@tags` line plus its continuation lines, with comment gutters removed.
fn annotation_lines(block: &str) -> impl Iterator<Item = &str> {
    let mut lines = block.lines();
    let first = lines.next();
    let rest = lines
        .map(|line| line.trim_start().trim_start_matches('*'))
        .take_while(|line| !line.trim_start().starts_with('@'));
    first.into_iter().chain(rest)
}
