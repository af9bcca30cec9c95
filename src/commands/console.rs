//! Implementation of the `quill console` command.
//!
//! A line-oriented session over stdin. One `Studio` lives for the whole
//! session, so the library fills up as articles are generated and is gone
//! when the console exits. Errors are reported and the session continues.

use super::generate::parse_mode;
use super::{output_dir, save_markdown};
use crate::error::{QuillError, Result};
use crate::prompt::{AppMode, GeneratorInputs};
use crate::studio::{GenerateOptions, Studio};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  mode [name]                  show or switch the generation mode
  set <field> <value>          set a form field (see `show-inputs`)
  show-inputs                  print the current form
  generate [--cover] [--no-images]
  trends                       search current trending topics
  use-trend <n>                copy suggestion n into trend-topic
  library                      list generated articles
  view <id>                    show a library article
  delete <id>                  remove a library article
  download <id> [dir]          package a library article as a zip
  save <file>                  write the current result as Markdown
  clear                        clear the current result
  help                         show this message
  quit                         leave the console";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ConsoleCommand {
    Mode(Option<AppMode>),
    Set { field: String, value: String },
    ShowInputs,
    Generate { cover: bool, no_images: bool },
    Trends,
    UseTrend(usize),
    Library,
    View(u64),
    Delete(u64),
    Download { id: u64, dir: Option<PathBuf> },
    Save(PathBuf),
    Clear,
    Help,
    Quit,
}

/// Execute the `quill console` command.
pub async fn cmd_console(mut studio: Studio) -> Result<()> {
    println!("quill console. Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("quill [{}]> ", studio.mode());
        let _ = std::io::stdout().flush();

        let line = lines
            .next_line()
            .await
            .map_err(|e| QuillError::UserError(format!("failed to read input: {}", e)))?;
        let Some(line) = line else {
            println!();
            break;
        };

        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(ConsoleCommand::Quit)) => break,
            Ok(Some(command)) => {
                if let Err(e) = execute(&mut studio, command).await {
                    eprintln!("Error: {}", e);
                }
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}

/// Parse one input line. Blank lines parse to `None`.
fn parse_line(line: &str) -> Result<Option<ConsoleCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "mode" if rest.is_empty() => ConsoleCommand::Mode(None),
        "mode" => ConsoleCommand::Mode(Some(parse_mode(rest)?)),
        "set" => {
            let (field, value) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| usage("set <field> <value>"))?;
            ConsoleCommand::Set {
                field: field.to_string(),
                value: value.trim().to_string(),
            }
        }
        "show-inputs" | "inputs" => ConsoleCommand::ShowInputs,
        "generate" | "gen" => {
            let mut cover = false;
            let mut no_images = false;
            for flag in rest.split_whitespace() {
                match flag {
                    "--cover" => cover = true,
                    "--no-images" => no_images = true,
                    _ => return Err(usage("generate [--cover] [--no-images]")),
                }
            }
            ConsoleCommand::Generate { cover, no_images }
        }
        "trends" => ConsoleCommand::Trends,
        "use-trend" => ConsoleCommand::UseTrend(parse_number(rest, "use-trend <n>")?),
        "library" | "ls" => ConsoleCommand::Library,
        "view" => ConsoleCommand::View(parse_number(rest, "view <id>")?),
        "delete" | "rm" => ConsoleCommand::Delete(parse_number(rest, "delete <id>")?),
        "download" => {
            let mut parts = rest.splitn(2, char::is_whitespace);
            let id = parse_number(parts.next().unwrap_or(""), "download <id> [dir]")?;
            let dir = parts
                .next()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(PathBuf::from);
            ConsoleCommand::Download { id, dir }
        }
        "save" if rest.is_empty() => return Err(usage("save <file>")),
        "save" => ConsoleCommand::Save(PathBuf::from(rest)),
        "clear" => ConsoleCommand::Clear,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" | "q" => ConsoleCommand::Quit,
        other => {
            return Err(QuillError::UserError(format!(
                "unknown command '{}'. Type `help` for commands.",
                other
            )));
        }
    };

    Ok(Some(command))
}

fn usage(text: &str) -> QuillError {
    QuillError::UserError(format!("usage: {}", text))
}

fn parse_number<T: std::str::FromStr>(value: &str, usage_text: &str) -> Result<T> {
    value.trim().parse().map_err(|_| usage(usage_text))
}

async fn execute(studio: &mut Studio, command: ConsoleCommand) -> Result<()> {
    match command {
        ConsoleCommand::Mode(None) => {
            for mode in AppMode::ALL {
                let marker = if mode == studio.mode() { "*" } else { " " };
                println!("{} {:<14} {}", marker, mode.cli_name(), mode.label());
            }
        }
        ConsoleCommand::Mode(Some(mode)) => {
            studio.set_mode(mode);
            println!("Mode: {}", mode.label());
        }
        ConsoleCommand::Set { field, value } => {
            studio.inputs.set_field(&field, &value)?;
        }
        ConsoleCommand::ShowInputs => print_inputs(&studio.inputs),
        ConsoleCommand::Generate { cover, no_images } => {
            let mut options = GenerateOptions::from_config(studio.config());
            options.images = options.images && !no_images;
            options.cover = cover;

            println!("Generating {} ...", studio.mode().label());
            let report = studio.generate(options).await?;
            println!("{}", report.content);
            println!();
            if let Some(images) = &report.images
                && images.requested > 0
            {
                println!(
                    "Images: {} generated, {} failed",
                    images.succeeded,
                    images.failed()
                );
            }
            if let Some(id) = report.history_id {
                println!("Saved to library as #{}", id);
            }
        }
        ConsoleCommand::Trends => {
            let trends = studio.search_trends().await?;
            if trends.is_empty() {
                println!("No trending topics found.");
            }
            for (i, trend) in trends.iter().enumerate() {
                println!("{}. {}", i + 1, trend);
            }
        }
        ConsoleCommand::UseTrend(index) => {
            let topic = studio.use_trend(index)?;
            println!("trend-topic = {}", topic);
        }
        ConsoleCommand::Library => {
            if studio.history().is_empty() {
                println!("Library is empty.");
            }
            for item in studio.history().list() {
                println!(
                    "#{}  {}  [{}]  {}",
                    item.id,
                    item.created_at.format("%Y-%m-%d %H:%M"),
                    item.category,
                    item.title
                );
                println!("    {}", item.preview().replace('\n', " "));
            }
        }
        ConsoleCommand::View(id) => println!("{}", studio.view(id)?),
        ConsoleCommand::Delete(id) => {
            if studio.delete(id) {
                println!("Deleted #{}", id);
            } else {
                println!("No library item #{}", id);
            }
        }
        ConsoleCommand::Download { id, dir } => {
            let dir = output_dir(dir, studio.config());
            let path = studio.download(id, &dir)?;
            println!("Saved {}", path.display());
        }
        ConsoleCommand::Save(path) => {
            let content = studio
                .last_result()
                .ok_or_else(|| QuillError::UserError("nothing to save yet".to_string()))?;
            save_markdown(&path, content)?;
            println!("Saved {}", path.display());
        }
        ConsoleCommand::Clear => studio.clear(),
        ConsoleCommand::Help => println!("{}", HELP),
        ConsoleCommand::Quit => {}
    }
    Ok(())
}

fn print_inputs(inputs: &GeneratorInputs) {
    println!("category      = {}", inputs.category);
    println!("topic         = {}", inputs.topic);
    println!("word-count    = {}", inputs.word_count);
    println!("quantity      = {}", inputs.quantity);
    println!("trend-topic   = {}", inputs.trend_topic);
    println!("brand-concept = {}", inputs.brand_concept);
    println!("hub-type      = {}", inputs.hub_type.cli_name());
}
