//! ESM statement removal and whitespace cleanup.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `import x from "y"`, including a braced specifier list spanning lines.
static IMPORT_FROM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?m)^import[ \t]+(?:\{[^}]*\}|[^\n'"{}])*?[ \t]from[ \t]*["'][^"'\n]+["'];?[ \t]*\r?$\n?"#,
    )
    .expect("valid regex")
});

/// Side-effect import: `import "y"`.
static BARE_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^import[ \t]*["'][^"'\n]+["'];?[ \t]*\r?$\n?"#).expect("valid regex")
});

/// Any line starting with an `export` keyword.
static EXPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^export[ \t].*$\n?").expect("valid regex"));

/// Three or more line breaks, allowing whitespace-only lines between.
static BLANK_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n(?:[ \t]*\r?\n){2,}").expect("valid regex"));

/// Removes import statements that start a line.
#[must_use]
pub fn strip_imports(text: &str) -> String {
    let text = IMPORT_FROM_RE.replace_all(text, "");
    BARE_IMPORT_RE.replace_all(&text, "").into_owned()
}

/// Removes `export` lines other than `export default`.
///
/// Only the line holding the keyword goes; a multi-line export body
/// leaves its continuation lines behind.
#[must_use]
pub fn strip_exports(text: &str) -> String {
    EXPORT_RE
        .replace_all(text, |caps: &Captures| {
            if caps[0].starts_with("export default") {
                caps[0].to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// Collapses runs of blank lines down to a single blank line.
///
/// The kept line breaks follow the ending of the line before the run.
#[must_use]
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN_RE
        .replace_all(text, |caps: &Captures| {
            if caps[0].starts_with('\r') {
                "\r\n\r\n"
            } else {
                "\n\n"
            }
        })
        .into_owned()
}
