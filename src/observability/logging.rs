//! Stderr logging for `storydoc` runs.
//!
//! Both commands are short batch jobs, so logs are plain lines on stderr,
//! either a compact human layout or one JSON object per line. A full
//! `EnvFilter` directive in `STORYDOC_LOG_LEVEL` overrides `-v` and `-q`.
//! `STORYDOC_LOG_FORMAT` is read only when `--log-format` is absent.

use std::io::IsTerminal;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, ColorChoice};

/// Filter directive that replaces the verbosity flags.
pub const LOG_LEVEL_ENV: &str = "STORYDOC_LOG_LEVEL";

/// Fallback for `--log-format`.
pub const LOG_FORMAT_ENV: &str = "STORYDOC_LOG_FORMAT";

/// Log line layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Compact text, colored on a terminal.
    #[default]
    Human,
    /// Newline-delimited JSON.
    Json,
}

impl LogFormat {
    /// The flag wins, then a parseable env value, then [`LogFormat::Human`].
    fn resolve(flag: Option<Self>, env_value: Option<&str>) -> Self {
        flag.or_else(|| env_value.and_then(|v| <Self as ValueEnum>::from_str(v.trim(), true).ok()))
            .unwrap_or_default()
    }
}

/// Everything the subscriber needs, resolved from flags and environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    pub format: LogFormat,
    /// Default filter when `STORYDOC_LOG_LEVEL` is unset.
    pub directive: &'static str,
    pub ansi: bool,
    /// Module paths are shown from `-vv` up.
    pub show_target: bool,
}

impl LogSettings {
    /// Reads the global flags and the logging environment variables.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let env_format = std::env::var(LOG_FORMAT_ENV).ok();
        Self {
            format: LogFormat::resolve(cli.log_format, env_format.as_deref()),
            directive: level_directive(cli.verbose, cli.quiet),
            ansi: wants_ansi(cli.color),
            show_target: cli.verbose >= 2,
        }
    }
}

/// `-q` keeps errors only; otherwise each `-v` lowers the threshold one
/// level, starting from warn.
#[must_use]
pub const fn level_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn wants_ansi(color: ColorChoice) -> bool {
    match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_logging(settings: &LogSettings) {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(settings.directive));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(settings.show_target)
        .with_writer(std::io::stderr);

    let _ = match settings.format {
        LogFormat::Human => builder.with_ansi(settings.ansi).try_init(),
        LogFormat::Json => builder.json().with_ansi(false).try_init(),
    };
}
