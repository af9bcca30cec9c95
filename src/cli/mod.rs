//! CLI argument parsing for quill.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Quill: brand content console backed by a generative-AI API.
///
/// Generates brand hub pages, article plans, knowledge articles and trend
/// articles, fills in AI-generated illustrations, and packages finished
/// articles as zip archives.
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the config file (default: ./quill.yaml if present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). QUILL_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Available commands for quill.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate content for one mode.
    ///
    /// Prints the result to stdout unless `--out` is given. Image directives
    /// in the generated text are replaced with generated images.
    Generate(GenerateArgs),

    /// Search for current trending topics suitable for trend articles.
    Trends,

    /// Package a Markdown file with embedded images into a zip archive.
    Package(PackageArgs),

    /// List generation modes and article categories.
    Modes,

    /// Write a default quill.yaml to the current directory.
    Init(InitArgs),

    /// Start an interactive session with a library that lasts until exit.
    Console,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug, Default)]
pub struct GenerateArgs {
    /// Mode: hub-page, article-plan, article, trend-article.
    #[arg(short, long, default_value = "article")]
    pub mode: String,

    /// Article category (key such as `seasonal-living`, or free text).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Article topic.
    #[arg(short, long)]
    pub topic: Option<String>,

    /// Target word-count range.
    #[arg(long)]
    pub word_count: Option<String>,

    /// Number of articles to plan (article-plan mode).
    #[arg(short, long)]
    pub quantity: Option<u32>,

    /// Current-events topic (trend-article mode).
    #[arg(long)]
    pub trend_topic: Option<String>,

    /// Free-form brand concept (hub-page mode).
    #[arg(long)]
    pub brand_concept: Option<String>,

    /// Hub page type: brand-story or emotional-value.
    #[arg(long)]
    pub hub_type: Option<String>,

    /// Leave image directives unfilled.
    #[arg(long)]
    pub no_images: bool,

    /// Prepend a generated cover image for the topic.
    #[arg(long)]
    pub cover: bool,

    /// Write the Markdown result to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Also package the result as a zip archive into this directory.
    #[arg(long, value_name = "DIR")]
    pub zip: Option<PathBuf>,
}

/// Arguments for the `package` command.
#[derive(Parser, Debug)]
pub struct PackageArgs {
    /// Markdown file to package.
    pub file: PathBuf,

    /// Archive title (default: first `# ` heading).
    #[arg(long)]
    pub title: Option<String>,

    /// Output directory (default: config `output_dir`).
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite an existing quill.yaml.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_defaults() {
        let cli = Cli::try_parse_from(["quill", "generate", "--topic", "睡眠"]).unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("Expected Generate command");
        };
        assert_eq!(args.mode, "article");
        assert_eq!(args.topic.as_deref(), Some("睡眠"));
        assert!(!args.no_images);
        assert!(args.out.is_none());
    }

    #[test]
    fn parse_generate_full() {
        let cli = Cli::try_parse_from([
            "quill",
            "generate",
            "--mode",
            "article-plan",
            "--category",
            "active-living",
            "--quantity",
            "6",
            "--no-images",
            "--out",
            "plan.md",
            "--zip",
            "dist",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("Expected Generate command");
        };
        assert_eq!(args.mode, "article-plan");
        assert_eq!(args.quantity, Some(6));
        assert!(args.no_images);
        assert_eq!(args.out, Some(PathBuf::from("plan.md")));
        assert_eq!(args.zip, Some(PathBuf::from("dist")));
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["quill", "trends", "--config", "alt.yaml", "-vv"]).unwrap();
        assert!(matches!(cli.command, Command::Trends));
        assert_eq!(cli.config, Some(PathBuf::from("alt.yaml")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn parse_package() {
        let cli =
            Cli::try_parse_from(["quill", "package", "post.md", "--title", "冬季"]).unwrap();
        let Command::Package(args) = cli.command else {
            panic!("Expected Package command");
        };
        assert_eq!(args.file, PathBuf::from("post.md"));
        assert_eq!(args.title.as_deref(), Some("冬季"));
        assert!(args.out_dir.is_none());
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::try_parse_from(["quill", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Command::Init(InitArgs { force: true })));
    }

    #[test]
    fn package_requires_file() {
        assert!(Cli::try_parse_from(["quill", "package"]).is_err());
    }
}
