//! `storydoc` - example index and MDX-to-Markdown tooling

use clap::Parser;

use storydoc::cli::args::Cli;
use storydoc::cli::commands;
use storydoc::error::ExitCode;
use storydoc::observability::{LogSettings, init_logging};

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(ExitCode::USAGE_ERROR);
        }
        Err(e) => e.exit(),
    };

    init_logging(&LogSettings::from_cli(&cli));

    let result = tokio::select! {
        result = commands::dispatch(cli) => result,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nInterrupted");
            std::process::exit(ExitCode::INTERRUPTED);
        }
    };

    match result {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
