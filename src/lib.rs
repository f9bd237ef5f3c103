//! `storydoc` - documentation build tooling for component libraries
//!
//! Two batch tools for a component docs site:
//! - [`catalog`] scans example files for `@tags` annotations and writes a
//!   grouped JSON index
//! - [`mdx`] strips JSX markup and ESM statements from `.mdx` pages to
//!   produce plain markdown

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod mdx;
pub mod observability;
