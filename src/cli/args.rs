//! CLI argument definitions
//!
//! All Clap derive structs for `storydoc` command-line parsing. Every
//! path option is optional; unset options fall back to the config file
//! and then to built-in defaults.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Example index and MDX-to-Markdown tooling for component docs.
#[derive(Parser, Debug)]
#[command(name = "storydoc", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a `storydoc.yaml` configuration file.
    #[arg(short, long, global = true, env = "STORYDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "STORYDOC_COLOR")]
    pub color: ColorChoice,

    /// Log line format [default: human, or `STORYDOC_LOG_FORMAT`].
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan example files and write the JSON example index.
    Index(IndexArgs),

    /// Convert `.mdx` documentation pages to plain markdown.
    Strip(StripArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for `index`.
#[derive(Args, Debug, Default)]
pub struct IndexArgs {
    /// Directory to scan for examples.
    #[arg(long, env = "STORYDOC_EXAMPLES_ROOT")]
    pub root: Option<PathBuf>,

    /// JSON index file to write.
    #[arg(short, long, env = "STORYDOC_INDEX_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Only index files whose name ends with this suffix.
    #[arg(long)]
    pub suffix: Option<String>,

    /// Skip files and directories whose name starts with this prefix.
    #[arg(long)]
    pub exclude_prefix: Option<String>,

    /// Summary output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `strip`.
#[derive(Args, Debug, Default)]
pub struct StripArgs {
    /// Directory holding `.mdx` files.
    #[arg(short, long, env = "STORYDOC_MDX_INPUT")]
    pub input: Option<PathBuf>,

    /// Directory receiving `.md` files.
    #[arg(short, long, env = "STORYDOC_MD_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Maximum paired-tag removal passes per document.
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub max_tag_passes: Option<u16>,

    /// Summary output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for command summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable line on stderr.
    #[default]
    Human,
    /// JSON object on stdout.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_without_flags() {
        let cli = Cli::try_parse_from(["storydoc", "index"]).unwrap();
        let Commands::Index(args) = cli.command else {
            panic!("Expected IndexArgs");
        };
        assert!(args.root.is_none());
        assert!(args.output.is_none());
        assert_eq!(args.format, OutputFormat::Human);
    }

    #[test]
    fn test_index_with_overrides() {
        let cli = Cli::try_parse_from([
            "storydoc",
            "index",
            "--root",
            "demos",
            "--output",
            "out/index.json",
            "--suffix",
            ".demo.tsx",
            "--exclude-prefix",
            ".",
            "--format",
            "json",
        ])
        .unwrap();
        let Commands::Index(args) = cli.command else {
            panic!("Expected IndexArgs");
        };
        assert_eq!(args.root, Some(PathBuf::from("demos")));
        assert_eq!(args.suffix.as_deref(), Some(".demo.tsx"));
        assert_eq!(args.exclude_prefix.as_deref(), Some("."));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_strip_without_flags() {
        let cli = Cli::try_parse_from(["storydoc", "strip"]).unwrap();
        assert!(matches!(cli.command, Commands::Strip(_)));
    }

    #[test]
    fn test_strip_rejects_zero_passes() {
        let result = Cli::try_parse_from(["storydoc", "strip", "--max-tag-passes", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_help_output() {
        let err = Cli::try_parse_from(["storydoc", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_output() {
        let err = Cli::try_parse_from(["storydoc", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "storydoc",
            "strip",
            "-vv",
            "--quiet",
            "--config",
            "site/storydoc.yaml",
            "--color",
            "never",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("site/storydoc.yaml")));
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn test_log_formats_parse() {
        for variant in ["human", "json"] {
            let cli = Cli::try_parse_from(["storydoc", "--log-format", variant, "index"]);
            assert!(cli.is_ok(), "Failed to parse log-format={variant}");
        }
    }

    #[test]
    fn test_completions_shells_parse() {
        for shell in ["bash", "zsh", "fish", "powershell", "elvish"] {
            let cli = Cli::try_parse_from(["storydoc", "completions", shell]);
            assert!(cli.is_ok(), "Failed to parse shell={shell}");
        }
    }

    #[test]
    fn test_unknown_command() {
        assert!(Cli::try_parse_from(["storydoc", "serve"]).is_err());
    }
}
