//! Implementation of the `quill modes` command.

use crate::error::Result;
use crate::prompt::{AppMode, ArticleCategory, GeneratorInputs};

pub fn cmd_modes() -> Result<()> {
    println!("Modes:");
    for mode in AppMode::ALL {
        let marker = if mode.produces_article() { " [library]" } else { "" };
        println!("  {:<14} {}{}", mode.cli_name(), mode.label(), marker);
        println!("  {:<14} {}", "", mode.description());
    }

    println!();
    println!("Categories:");
    for category in ArticleCategory::ALL {
        println!("  {:<17} {}", category.key(), category.label());
    }

    println!();
    println!("Fields: {}", GeneratorInputs::FIELDS.join(", "));

    Ok(())
}
