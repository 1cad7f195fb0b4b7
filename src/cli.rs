use std::path::PathBuf;

use clap::Parser;

/// Interactively build a VS Code snippet file
#[derive(Debug, Parser)]
#[command(name = "snipgen", version)]
pub struct Args {
    /// Write the snippet here instead of ./generated-snippet.code-snippets
    #[arg(short, long, value_name = "PATH", conflicts_with = "user_snippets")]
    pub output: Option<PathBuf>,

    /// Write into the VS Code user snippets folder
    #[arg(short, long)]
    pub user_snippets: bool,

    /// Also copy the generated JSON to the clipboard
    #[arg(short, long)]
    pub copy: bool,
}
