//! Quill: brand content console for a generative-AI API.
//!
//! This is the main entry point for the `quill` CLI. It parses arguments,
//! installs logging, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

mod cli;
mod commands;
pub mod archive;
pub mod client;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod history;
pub mod logging;
pub mod prompt;
pub mod studio;
pub mod substitute;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli).await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
