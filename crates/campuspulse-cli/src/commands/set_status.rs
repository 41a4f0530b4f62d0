// Rust guideline compliant 2026-10-16

//! Implementation of the `cpulse set-status` command.

use crate::OutputFormatter;
use anyhow::Result;
use campuspulse_app::{update_status, visible_to, RepoContext, Viewer};
use campuspulse_core::Status;

/// Moves an issue to a new status.
///
/// # Arguments
///
/// * `repo` - Repository context
/// * `id` - The issue ID (full or partial)
/// * `status` - Target status
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if:
/// - The issue ID cannot be resolved
/// - The issue already has the target status
/// - The file cannot be written
pub fn execute(
    repo: &RepoContext,
    id: &str,
    status: Status,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let storage = repo.open_storage()?;
    let issue = update_status(&storage, id, status)?;
    let message = format!("{} is now {}", issue.id, issue.status);

    let masked = visible_to(vec![issue], &Viewer::Admin);
    Ok(masked
        .iter()
        .map(|issue| formatter.format_success(&message, issue))
        .collect())
}
