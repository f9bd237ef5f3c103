//! Configuration schema for `storydoc`.
//!
//! Every field has a default, so an empty (or absent) `storydoc.yaml`
//! reproduces the conventional layout of a component docs repository.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::mdx::StripOptions;

/// Default directory scanned for example files.
pub const DEFAULT_EXAMPLES_ROOT: &str = "registry/examples";

/// Default location of the emitted example index.
pub const DEFAULT_INDEX_OUTPUT: &str = "public/examples-index.json";

/// Default suffix of files that qualify as examples.
pub const DEFAULT_EXAMPLE_SUFFIX: &str = ".tsx";

/// Default marker prefix of excluded files and directories.
pub const DEFAULT_EXCLUDE_PREFIX: &str = "_";

/// Default group for files directly inside the scan root.
pub const DEFAULT_GROUP: &str = "root";

/// Default directory holding `.mdx` sources.
pub const DEFAULT_MDX_INPUT: &str = "content/docs";

/// Default directory receiving converted `.md` files.
pub const DEFAULT_MD_OUTPUT: &str = "public/docs";

/// Default cap on paired-tag removal passes.
pub const DEFAULT_MAX_TAG_PASSES: usize = 64;

/// Top-level `storydoc.yaml` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Example index generation.
    pub index: IndexOptions,
    /// MDX conversion.
    pub strip: ConvertOptions,
}

/// Settings for `storydoc index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexOptions {
    /// Directory to scan.
    pub root: PathBuf,
    /// JSON file to write.
    pub output: PathBuf,
    /// Only files ending with this suffix are indexed.
    pub suffix: String,
    /// Files and directories starting with this prefix are skipped.
    pub exclude_prefix: String,
    /// Group name for files directly inside `root`.
    pub default_group: String,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_EXAMPLES_ROOT),
            output: PathBuf::from(DEFAULT_INDEX_OUTPUT),
            suffix: DEFAULT_EXAMPLE_SUFFIX.to_string(),
            exclude_prefix: DEFAULT_EXCLUDE_PREFIX.to_string(),
            default_group: DEFAULT_GROUP.to_string(),
        }
    }
}

/// Settings for `storydoc strip`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOptions {
    /// Directory holding `.mdx` files.
    pub input: PathBuf,
    /// Directory receiving `.md` files.
    pub output: PathBuf,
    /// Maximum paired-tag removal passes per document.
    pub max_tag_passes: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_MDX_INPUT),
            output: PathBuf::from(DEFAULT_MD_OUTPUT),
            max_tag_passes: DEFAULT_MAX_TAG_PASSES,
        }
    }
}

impl ConvertOptions {
    /// Options for the per-document stripping pipeline.
    #[must_use]
    pub const fn strip_options(&self) -> StripOptions {
        StripOptions {
            max_tag_passes: self.max_tag_passes,
        }
    }
}

impl Config {
    /// Resolves every relative path in the config against `base`.
    #[must_use]
    pub fn anchored_at(mut self, base: &Path) -> Self {
        self.index.root = anchor(base, &self.index.root);
        self.index.output = anchor(base, &self.index.output);
        self.strip.input = anchor(base, &self.strip.input);
        self.strip.output = anchor(base, &self.strip.output);
        self
    }

    /// Checks values that deserialize fine but cannot drive a run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_empty("index.suffix", &self.index.suffix)?;
        non_empty("index.exclude_prefix", &self.index.exclude_prefix)?;
        non_empty("index.default_group", &self.index.default_group)?;

        if self.strip.max_tag_passes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "strip.max_tag_passes".to_string(),
                value: "0".to_string(),
                expected: "a positive integer".to_string(),
            });
        }

        Ok(())
    }
}

fn anchor(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn non_empty(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: String::new(),
            expected: "a non-empty string".to_string(),
        });
    }
    Ok(())
}
