// Rust guideline compliant 2026-10-16

//! Implementation of the `cpulse show` command.
//!
//! Displays detailed information about a specific issue,
//! supporting both full and partial ID resolution.

use crate::OutputFormatter;
use anyhow::Result;
use campuspulse_app::{show_issue, visible_to, RepoContext, Viewer};

/// Shows details of an issue by ID.
///
/// Supports partial ID resolution (minimum 3 characters).
///
/// # Arguments
///
/// * `repo` - Repository context
/// * `id` - The issue ID (full or partial)
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if:
/// - The issue ID is not found
/// - The issue ID is ambiguous (matches multiple issues)
/// - The file cannot be read
pub fn execute(repo: &RepoContext, id: &str, formatter: &dyn OutputFormatter) -> Result<String> {
    let storage = repo.open_storage()?;
    let issue = show_issue(&storage, id)?;

    let masked = visible_to(vec![issue], &Viewer::Admin);
    Ok(masked
        .iter()
        .map(|issue| formatter.format_issue(issue))
        .collect())
}
