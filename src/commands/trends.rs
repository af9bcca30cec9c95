//! Implementation of the `quill trends` command.

use crate::error::Result;
use crate::studio::Studio;

/// Execute the `quill trends` command.
pub async fn cmd_trends(mut studio: Studio) -> Result<()> {
    let trends = studio.search_trends().await?;

    if trends.is_empty() {
        println!("No trending topics found.");
        return Ok(());
    }

    for (i, trend) in trends.iter().enumerate() {
        println!("{}. {}", i + 1, trend);
    }
    println!();
    println!("Write one with `quill generate --mode trend-article --trend-topic \"...\"`.");

    Ok(())
}
