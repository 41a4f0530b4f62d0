// Rust guideline compliant 2026-10-16

//! Implementation of the `cpulse stats` command.

use crate::OutputFormatter;
use anyhow::Result;
use campuspulse_app::RepoContext;
use campuspulse_core::DashboardStats;

/// Shows dashboard statistics over all issues.
///
/// # Errors
///
/// Returns an error if the issues file cannot be read.
pub fn execute(repo: &RepoContext, formatter: &dyn OutputFormatter) -> Result<String> {
    let storage = repo.open_storage()?;
    let stats = DashboardStats::from_issues(&storage.load_all()?);

    Ok(formatter.format_stats(&stats))
}
