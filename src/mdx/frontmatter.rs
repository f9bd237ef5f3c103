//! Frontmatter splitting and reassembly for MDX documents.

use regex::Regex;
use std::sync::LazyLock;

/// Leading `---` block, including the closing delimiter line.
static FRONTMATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)\A---[ \t]*\r?\n(?s:.*?)^---[ \t]*(?:\r?\n|\z)").expect("valid regex")
});

/// An MDX source split into its frontmatter block and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The frontmatter block verbatim, delimiters included.
    pub frontmatter: Option<String>,
    /// Everything after the frontmatter.
    pub body: String,
}

/// Splits a leading frontmatter block off `source`.
///
/// Only a block that opens on the very first line counts; a `---` rule
/// further down the document is ordinary markdown.
#[must_use]
pub fn split_frontmatter(source: &str) -> Document {
    FRONTMATTER_RE.find(source).map_or_else(
        || Document {
            frontmatter: None,
            body: source.to_string(),
        },
        |m| Document {
            frontmatter: Some(m.as_str().to_string()),
            body: source[m.end()..].to_string(),
        },
    )
}

/// Joins a frontmatter block and a body with one blank line between them.
#[must_use]
pub fn assemble(frontmatter: Option<&str>, body: &str) -> String {
    match frontmatter {
        Some(block) => {
            let block = block.trim_end_matches(['\r', '\n']);
            format!("{block}\n\n{body}")
        }
        None => body.to_string(),
    }
}
