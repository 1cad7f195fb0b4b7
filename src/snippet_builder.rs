use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use crossterm::{
    queue,
    style::{Print, PrintStyledContent, Stylize},
};
use unicode_width::UnicodeWidthStr;

use crate::file_utils::write_snippet_file;
use crate::models::{SnippetBody, SnippetRecord};
use crate::prompt::Prompter;

pub const BANNER: &str = "🔹 VS Code Snippet Generator 🔹";

pub const NAME_QUESTION: &str = "Enter snippet name: ";
pub const PREFIX_QUESTION: &str = "Enter snippet prefix: ";
pub const DESCRIPTION_QUESTION: &str = "Enter snippet description: ";
pub const CODE_QUESTION: &str = "Enter the code snippet (use \\n for new lines): ";

/// Runs the four prompts, writes the snippet to `output_path` and returns the
/// JSON that was written. Nothing is written unless all four answers arrive.
/// `styled` adds colour and the banner rule; leave it off when the output is
/// not a terminal.
pub fn generate_snippet<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    output_path: &Path,
    styled: bool,
) -> Result<String> {
    print_banner(prompter.output(), styled)?;

    let name = prompter.ask(NAME_QUESTION)?;
    tracing::debug!(len = name.len(), "got snippet name");
    let prefix = prompter.ask(PREFIX_QUESTION)?;
    tracing::debug!(len = prefix.len(), "got snippet prefix");
    let description = prompter.ask(DESCRIPTION_QUESTION)?;
    tracing::debug!(len = description.len(), "got snippet description");
    let code = prompter.ask(CODE_QUESTION)?;
    tracing::debug!(len = code.len(), "got snippet code");

    let record = SnippetRecord::new(name, SnippetBody::new(prefix, &code, description));
    let json = record.to_json().context("Failed to serialize snippet")?;

    write_snippet_file(output_path, &json)?;
    tracing::info!(path = %output_path.display(), bytes = json.len(), "snippet written");

    let saved = format!("✅ Snippet saved in {}", output_path.display());
    if styled {
        queue!(prompter.output(), PrintStyledContent(saved.green()), Print("\n"))?;
    } else {
        queue!(prompter.output(), Print(saved), Print("\n"))?;
    }

    Ok(json)
}

fn print_banner<W: Write>(out: &mut W, styled: bool) -> Result<()> {
    if !styled {
        queue!(out, Print(BANNER), Print("\n"))?;
        return Ok(());
    }

    let rule = "─".repeat(BANNER.width());

    queue!(
        out,
        PrintStyledContent(BANNER.bold().cyan()),
        Print("\n"),
        PrintStyledContent(rule.dark_grey()),
        Print("\n")
    )?;

    Ok(())
}
