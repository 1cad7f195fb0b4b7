use std::fs;
use std::fs::DirBuilder;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const SNIPPET_FILE_NAME: &str = "generated-snippet.code-snippets";

/// `<config_dir>/Code/User/snippets`, where VS Code looks for user snippets.
pub fn user_snippets_dir() -> Result<PathBuf> {
    let app_config_path = dirs::config_dir().context("No app config dir")?;

    Ok(snippets_dir_in(&app_config_path))
}

fn snippets_dir_in(config_dir: &Path) -> PathBuf {
    config_dir.join("Code").join("User").join("snippets")
}

/// Creates the VS Code snippets folder under `config_dir` if needed and
/// returns the snippet file path inside it.
pub fn prepare_user_snippet_path(config_dir: &Path) -> Result<PathBuf> {
    let snippets_dir = snippets_dir_in(config_dir);

    DirBuilder::new()
        .recursive(true)
        .create(&snippets_dir)
        .with_context(|| format!("Failed to create {}", snippets_dir.display()))?;

    Ok(snippets_dir.join(SNIPPET_FILE_NAME))
}

/// Resolves where the snippet goes. Creates the user snippets folder when
/// that is the target.
pub fn resolve_output_path(output: Option<PathBuf>, user_snippets: bool) -> Result<PathBuf> {
    if let Some(output) = output {
        return Ok(output);
    }

    if !user_snippets {
        return Ok(PathBuf::from(SNIPPET_FILE_NAME));
    }

    let app_config_path = dirs::config_dir().context("No app config dir")?;

    prepare_user_snippet_path(&app_config_path)
}

/// Overwrites `path` with `data`.
pub fn write_snippet_file(path: &Path, data: &str) -> Result<()> {
    fs::write(path, data).with_context(|| format!("Failed to write {}", path.display()))
}
