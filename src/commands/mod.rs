//! Command implementations for quill.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the helpers they share for loading config and
//! building a session.

mod console;
mod generate;
mod init;
mod modes;
mod package;
mod trends;

use crate::cli::{Cli, Command};
use crate::client::GeminiClient;
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{QuillError, Result};
use crate::fs::atomic_write_file;
use crate::studio::Studio;
use std::path::{Path, PathBuf};

/// Dispatch a command to its implementation.
pub async fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Init(args) => init::cmd_init(config_path, args),
        Command::Modes => modes::cmd_modes(),
        Command::Package(args) => package::cmd_package(&load_config(config_path)?, args),
        Command::Generate(args) => {
            let studio = open_studio(load_config(config_path)?)?;
            generate::cmd_generate(studio, args).await
        }
        Command::Trends => {
            let studio = open_studio(load_config(config_path)?)?;
            trends::cmd_trends(studio).await
        }
        Command::Console => {
            let studio = open_studio(load_config(config_path)?)?;
            console::cmd_console(studio).await
        }
    }
}

/// Load `--config` if given (must exist), else `./quill.yaml` if present, else defaults.
pub(crate) fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_or_default(path, true),
        None => Config::load_or_default(DEFAULT_CONFIG_FILE, false),
    }
}

/// Build a session against the configured API.
fn open_studio(config: Config) -> Result<Studio> {
    let client = GeminiClient::from_config(&config)?;
    Ok(Studio::new(Box::new(client), config))
}

/// Write Markdown output atomically, creating parent directories.
pub(crate) fn save_markdown(path: &Path, content: &str) -> Result<()> {
    atomic_write_file(path, content).map_err(|e| {
        QuillError::UserError(format!("failed to write '{}': {}", path.display(), e))
    })
}

/// Directory for archives: explicit choice, else config `output_dir`.
pub(crate) fn output_dir(explicit: Option<PathBuf>, config: &Config) -> PathBuf {
    explicit.unwrap_or_else(|| PathBuf::from(&config.output_dir))
}
