use std::io::{self, IsTerminal};

use anyhow::Result;
use arboard::Clipboard;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::file_utils::resolve_output_path;
use crate::prompt::Prompter;
use crate::snippet_builder::generate_snippet;

mod cli;
mod file_utils;
mod models;
mod prompt;
mod snippet_builder;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the prompts.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let output_path = resolve_output_path(args.output, args.user_snippets)?;

    let styled = io::stdout().is_terminal();
    let json = {
        let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
        generate_snippet(&mut prompter, &output_path, styled)?
    };

    if args.copy {
        copy_to_clipboard(&json);
    }

    Ok(())
}

/// The file is already written at this point, so failures are only logged.
fn copy_to_clipboard(json: &str) {
    match Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(json) {
            Ok(_) => tracing::info!("snippet copied to clipboard"),
            Err(error) => tracing::warn!(%error, "could not copy snippet to clipboard"),
        },
        Err(error) => tracing::warn!(%error, "clipboard unavailable"),
    }
}
