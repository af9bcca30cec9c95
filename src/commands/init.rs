//! Implementation of the `quill init` command.
//!
//! Writes the default configuration so it can be edited instead of typed
//! from scratch. An existing file is left alone unless `--force` is given.

use crate::cli::InitArgs;
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{QuillError, Result};
use crate::fs::atomic_write_file;
use std::path::Path;

const HEADER: &str = "\
# quill configuration
#
# The API key may also come from GEMINI_API_KEY or API_KEY.
# api_key: \"...\"
# request_timeout_secs: 120

";

/// Execute the `quill init` command.
pub fn cmd_init(config_path: Option<&Path>, args: InitArgs) -> Result<()> {
    let path = config_path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
    write_default_config(path, args.force)?;

    println!("Wrote {}", path.display());
    println!();
    println!("Set an API key, then try `quill generate --topic \"...\"`.");
    Ok(())
}

/// Write the default config to `path`.
pub(crate) fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(QuillError::UserError(format!(
            "'{}' already exists.\n\nUse `quill init --force` to overwrite it.",
            path.display()
        )));
    }

    let yaml = Config::default().to_yaml()?;
    atomic_write_file(path, &format!("{}{}", HEADER, yaml)).map_err(|e| {
        QuillError::UserError(format!("failed to write '{}': {}", path.display(), e))
    })
}
