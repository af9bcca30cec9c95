//! Implementation of the `quill package` command.
//!
//! Packaging is purely local: no API key is needed.

use super::output_dir;
use crate::archive::{build_archive, save_archive};
use crate::cli::PackageArgs;
use crate::config::Config;
use crate::error::{QuillError, Result};

/// Execute the `quill package` command.
pub fn cmd_package(config: &Config, args: PackageArgs) -> Result<()> {
    let markdown = std::fs::read_to_string(&args.file).map_err(|e| {
        QuillError::UserError(format!(
            "failed to read '{}': {}",
            args.file.display(),
            e
        ))
    })?;

    let archive = build_archive(&markdown, args.title.as_deref())?;
    let path = save_archive(&archive, &output_dir(args.out_dir, config))?;

    println!("Packaged '{}'", archive.folder);
    println!("  images:  {}", archive.image_count);
    println!("  archive: {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::PNG_B64;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn packages_file_into_out_dir() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("post.md");
        std::fs::write(
            &file,
            format!("# 早餐吃什麼\n\n![早餐](data:image/png;base64,{})\n", PNG_B64),
        )
        .unwrap();
        let out = temp.path().join("dist");

        cmd_package(
            &Config::default(),
            PackageArgs {
                file,
                title: None,
                out_dir: Some(out.clone()),
            },
        )
        .unwrap();

        assert!(out.join("早餐吃什麼.zip").is_file());
    }

    #[test]
    fn missing_input_is_user_error() {
        let err = cmd_package(
            &Config::default(),
            PackageArgs {
                file: PathBuf::from("/nonexistent/post.md"),
                title: None,
                out_dir: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, QuillError::UserError(_)));
    }
}
