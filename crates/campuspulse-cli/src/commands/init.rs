// Rust guideline compliant 2026-10-16

//! Implementation of the `cpulse init` command.

use crate::OutputFormatter;
use anyhow::Result;
use campuspulse_app::RepoContext;
use std::path::Path;

/// Initializes a CampusPulse repository.
///
/// Creates `.campuspulse/` with an empty `issues.jsonl` and a default
/// `config.toml`. Running it again leaves existing files alone.
///
/// # Arguments
///
/// * `root` - Optional repository root; defaults to the current directory
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if the directory or files cannot be created.
pub fn execute(root: Option<&Path>, formatter: &dyn OutputFormatter) -> Result<String> {
    let repo = RepoContext::initialize(root)?;

    Ok(formatter.format_message(&format!(
        "CampusPulse repository initialized at {}",
        repo.data_dir().display()
    )))
}
