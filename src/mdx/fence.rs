//! Fenced code block protection.
//!
//! Code samples routinely contain text that looks like JSX, imports or
//! exports. Each fenced block is swapped for a sentinel token before the
//! stripping passes run and swapped back afterwards.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// A triple-backtick fence, non-greedy up to the next closing fence.
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("valid regex"));

/// Sentinel tokens emitted by [`CodeFences::extract`].
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x00FENCE(\d+)\x00").expect("valid regex"));

fn placeholder(index: usize) -> String {
    format!("\x00FENCE{index}\x00")
}

/// Fenced code blocks set aside from a document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeFences {
    blocks: Vec<String>,
}

impl CodeFences {
    /// Replaces every fenced block in `text` with a placeholder.
    ///
    /// Returns the recorded blocks and the rewritten text.
    #[must_use]
    pub fn extract(text: &str) -> (Self, String) {
        let mut blocks = Vec::new();
        let replaced = FENCE_RE
            .replace_all(text, |caps: &Captures| {
                blocks.push(caps[0].to_string());
                placeholder(blocks.len() - 1)
            })
            .into_owned();
        (Self { blocks }, replaced)
    }

    /// Puts the original blocks back in place of their placeholders.
    ///
    /// Restoration is a single pass, so restored code is never rescanned.
    /// A placeholder whose block was removed along with surrounding markup
    /// simply never comes back.
    #[must_use]
    pub fn restore(&self, text: &str) -> String {
        PLACEHOLDER_RE
            .replace_all(text, |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| self.blocks.get(i))
                    .map_or_else(|| caps[0].to_string(), Clone::clone)
            })
            .into_owned()
    }

    /// Number of blocks set aside.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` if the document had no fenced blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
