//! Implementation of the `quill generate` command.

use super::{output_dir, save_markdown};
use crate::archive::{build_archive, save_archive};
use crate::cli::GenerateArgs;
use crate::error::{QuillError, Result};
use crate::prompt::{AppMode, GeneratorInputs};
use crate::studio::{GenerateOptions, GenerationReport, Studio};

/// Execute the `quill generate` command.
///
/// The generated Markdown goes to stdout (or `--out`); progress and the
/// image summary go to stderr so the output can be piped.
pub async fn cmd_generate(mut studio: Studio, args: GenerateArgs) -> Result<()> {
    let mode = parse_mode(&args.mode)?;
    apply_args(&mut studio.inputs, &args)?;
    studio.set_mode(mode);

    let mut options = GenerateOptions::from_config(studio.config());
    options.images = options.images && !args.no_images;
    options.cover = args.cover;

    eprintln!("Generating {} ...", mode.label());
    let report = studio.generate(options).await?;
    print_summary(&report);

    match &args.out {
        Some(path) => {
            save_markdown(path, &report.content)?;
            eprintln!("Saved Markdown to {}", path.display());
        }
        None => println!("{}", report.content),
    }

    if let Some(dir) = args.zip {
        let archive = build_archive(&report.content, None)?;
        let path = save_archive(&archive, &output_dir(Some(dir), studio.config()))?;
        eprintln!(
            "Packaged {} image(s) into {}",
            archive.image_count,
            path.display()
        );
    }

    Ok(())
}

pub(crate) fn parse_mode(value: &str) -> Result<AppMode> {
    AppMode::from_str(value).ok_or_else(|| {
        let valid: Vec<&str> = AppMode::ALL.iter().map(|m| m.cli_name()).collect();
        QuillError::UserError(format!(
            "unknown mode '{}'.\n\nValid modes: {}",
            value,
            valid.join(", ")
        ))
    })
}

/// Copy the field flags that were given into `inputs`.
fn apply_args(inputs: &mut GeneratorInputs, args: &GenerateArgs) -> Result<()> {
    let quantity = args.quantity.map(|q| q.to_string());
    let fields = [
        ("category", args.category.as_deref()),
        ("topic", args.topic.as_deref()),
        ("word-count", args.word_count.as_deref()),
        ("quantity", quantity.as_deref()),
        ("trend-topic", args.trend_topic.as_deref()),
        ("brand-concept", args.brand_concept.as_deref()),
        ("hub-type", args.hub_type.as_deref()),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            inputs.set_field(field, value)?;
        }
    }
    Ok(())
}

fn print_summary(report: &GenerationReport) {
    if let Some(images) = &report.images {
        if images.requested > 0 {
            eprintln!(
                "Images: {} generated, {} failed",
                images.succeeded,
                images.failed()
            );
        }
        if !images.rejected.is_empty() {
            eprintln!(
                "Warning: {} malformed image directive(s) left in place",
                images.rejected.len()
            );
        }
    }
    if report.cover == Some(false) {
        eprintln!("Warning: cover image could not be generated");
    }
    if let Some(id) = report.history_id {
        eprintln!("Saved to library as #{}", id);
    }
}
