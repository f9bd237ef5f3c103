//! MDX-to-Markdown conversion.
//!
//! Turns hybrid markdown/JSX documentation pages into plain markdown:
//! - frontmatter is kept verbatim
//! - fenced code blocks are protected and restored untouched
//! - capitalized JSX elements (self-closing and paired) are removed
//! - `import` statements and non-default `export` lines are removed
//!
//! Removal is regex based and best effort; it is not an MDX parser.

pub mod convert;
pub mod fence;
pub mod frontmatter;
pub mod jsx;
pub mod statements;
pub mod strip;

pub use convert::{ConvertSummary, convert_dir, convert_file};
pub use fence::CodeFences;
pub use frontmatter::{Document, split_frontmatter};
pub use strip::{StripOptions, strip_mdx};
