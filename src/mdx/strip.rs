//! The MDX-to-Markdown stripping pipeline.

use serde::{Deserialize, Serialize};

use crate::config::schema::DEFAULT_MAX_TAG_PASSES;
use crate::mdx::fence::CodeFences;
use crate::mdx::frontmatter::{assemble, split_frontmatter};
use crate::mdx::jsx::{strip_paired, strip_self_closing};
use crate::mdx::statements::{collapse_blank_lines, strip_exports, strip_imports};

/// Tuning for [`strip_mdx`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripOptions {
    /// Cap on paired-tag removal passes.
    pub max_tag_passes: usize,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            max_tag_passes: DEFAULT_MAX_TAG_PASSES,
        }
    }
}

/// Converts an MDX document to plain markdown.
///
/// Frontmatter is carried over verbatim and fenced code blocks are
/// restored byte-for-byte. Blank-line runs are collapsed while code is
/// still masked, so whitespace inside a fence survives untouched.
#[must_use]
pub fn strip_mdx(source: &str, options: &StripOptions) -> String {
    let doc = split_frontmatter(source);
    let (fences, body) = CodeFences::extract(&doc.body);

    let body = strip_self_closing(&body);
    let body = strip_paired(&body, options.max_tag_passes);
    let body = strip_imports(&body);
    let body = strip_exports(&body);
    let body = collapse_blank_lines(&body);
    let body = fences.restore(&body);

    assemble(doc.frontmatter.as_deref(), body.trim_start())
}
