//! JSX element removal.
//!
//! Components are recognized by a capitalized tag name. Lowercase HTML
//! elements are ordinary markdown and stay. Attribute values must not
//! contain `>`; markup that breaks this is stripped incorrectly.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::warn;

/// `<Name ... />`
static SELF_CLOSING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[A-Z][A-Za-z0-9_.]*(?:\s[^>]*)?/>").expect("valid regex")
});

/// `<Name ...>`, capturing the name.
static OPEN_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([A-Z][A-Za-z0-9_.]*)(?:\s[^>]*)?>").expect("valid regex")
});

/// Removes every self-closing component element.
#[must_use]
pub fn strip_self_closing(text: &str) -> String {
    SELF_CLOSING_RE.replace_all(text, "").into_owned()
}

/// Removes paired component elements and everything between their tags.
///
/// Each pass removes the innermost element of every nested run, so
/// `<Tabs><Tabs>..</Tabs></Tabs>` needs two passes. Passes repeat until
/// the text stops changing or `max_passes` is reached.
#[must_use]
pub fn strip_paired(text: &str, max_passes: usize) -> String {
    let mut current = text.to_string();

    for _ in 0..max_passes {
        let next = strip_paired_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }

    if strip_paired_once(&current) != current {
        warn!(max_passes, "paired tag removal hit its pass limit, output may still contain markup");
    }
    current
}

/// A non-self-closing component open tag.
struct OpenTag<'t> {
    name: &'t str,
    start: usize,
    end: usize,
}

/// One left-to-right removal pass, linear in the input.
///
/// An element is removed when no open tag of the same name sits between
/// its open tag and the first matching closing tag after it.
fn strip_paired_once(text: &str) -> String {
    let opens: Vec<OpenTag<'_>> = OPEN_TAG_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let tag = caps.get(0)?;
            let name = caps.get(1)?;
            (!tag.as_str().ends_with("/>")).then(|| OpenTag {
                name: name.as_str(),
                start: tag.start(),
                end: tag.end(),
            })
        })
        .collect();

    // Start of the next same-name open tag, for each open tag.
    let mut next_same = vec![usize::MAX; opens.len()];
    let mut upcoming: HashMap<&str, usize> = HashMap::new();
    for (i, tag) in opens.iter().enumerate().rev() {
        if let Some(&start) = upcoming.get(tag.name) {
            next_same[i] = start;
        }
        upcoming.insert(tag.name, tag.start);
    }

    let mut closings = ClosingTags::new(text);
    let mut out = String::with_capacity(text.len());
    let mut copied_to = 0;

    for (tag, &next_open) in opens.iter().zip(&next_same) {
        if tag.start < copied_to {
            continue;
        }
        let Some((close_start, close_end)) = closings.after(tag.name, tag.end) else {
            continue;
        };
        if next_open < close_start {
            continue;
        }
        out.push_str(&text[copied_to..tag.start]);
        copied_to = close_end;
    }

    out.push_str(&text[copied_to..]);
    out
}

/// Per-name memo of the next closing tag.
///
/// Lookups arrive with increasing offsets, so each name's closing tags
/// are searched for at most once across the whole text.
struct ClosingTags<'t> {
    text: &'t str,
    found: HashMap<&'t str, Option<usize>>,
}

impl<'t> ClosingTags<'t> {
    fn new(text: &'t str) -> Self {
        Self {
            text,
            found: HashMap::new(),
        }
    }

    /// Span of the first `</name>` starting at or after `from`.
    fn after(&mut self, name: &'t str, from: usize) -> Option<(usize, usize)> {
        let start = match self.found.get(name) {
            Some(None) => return None,
            Some(&Some(pos)) if pos >= from => pos,
            _ => {
                let pos = self.text[from..]
                    .find(&format!("</{name}>"))
                    .map(|offset| from + offset);
                self.found.insert(name, pos);
                pos?
            }
        };
        Some((start, start + name.len() + 3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_closing() {
        let text = "a <ComponentPreview name=\"x\" /> b <Icon/> c";
        assert_eq!(strip_self_closing(text), "a  b  c");
    }

    #[test]
    fn test_self_closing_multiline_attrs() {
        let text = "<Preview\n  name=\"dialog\"\n  height={320}\n/>\nafter";
        assert_eq!(strip_self_closing(text), "\nafter");
    }

    #[test]
    fn test_lowercase_tags_kept() {
        let text = "<img src=\"a.png\" /> and <div>text</div>";
        assert_eq!(strip_self_closing(text), text);
        assert_eq!(strip_paired(text, 8), text);
    }

    #[test]
    fn test_paired_with_content() {
        let text = "before\n<Callout type=\"warn\">\nCareful **now**\n</Callout>\nafter";
        assert_eq!(strip_paired(text, 8), "before\n\nafter");
    }

    #[test]
    fn test_paired_different_children() {
        let text = "<Tabs><Tab>a</Tab><Tab>b</Tab></Tabs>rest";
        assert_eq!(strip_paired(text, 8), "rest");
    }

    #[test]
    fn test_nested_same_name() {
        let text = "x<Box><Box>inner</Box>outer</Box>y";
        assert_eq!(strip_paired(text, 8), "xy");
    }

    #[test]
    fn test_nested_needs_two_passes() {
        let text = "x<Box><Box>inner</Box>outer</Box>y";
        assert_eq!(strip_paired(text, 1), "x<Box>outer</Box>y");
    }

    #[test]
    fn test_unclosed_tag_left_alone() {
        let text = "<Steps>\n1. one\n2. two\n";
        assert_eq!(strip_paired(text, 8), text);
    }

    #[test]
    fn test_sibling_elements() {
        let text = "<A>1</A> mid <B>2</B> end";
        assert_eq!(strip_paired(text, 8), " mid  end");
    }

    #[test]
    fn test_member_expression_tags() {
        let text = "<Dialog.Root><Dialog.Trigger>Open</Dialog.Trigger></Dialog.Root>!";
        assert_eq!(strip_paired(text, 8), "!");
    }

    #[test]
    fn test_many_unclosed_tags_stay_linear() {
        let text = "<A>".repeat(50_000);
        assert_eq!(strip_paired(&text, 64), text);
    }

    #[test]
    fn test_deep_nesting_stops_at_pass_limit() {
        let depth = 5_000;
        let text = format!("{}x{}", "<A>".repeat(depth), "</A>".repeat(depth));
        let left = depth - 64;
        assert_eq!(
            strip_paired(&text, 64),
            format!("{}{}", "<A>".repeat(left), "</A>".repeat(left))
        );
    }

    #[test]
    fn test_closing_tag_reused_across_siblings() {
        let text = "<A>1</A><B><A>2</A></B><A>3";
        assert_eq!(strip_paired(text, 8), "<A>3");
    }
}
