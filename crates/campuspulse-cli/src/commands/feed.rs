// Rust guideline compliant 2026-10-16

//! Implementation of the `cpulse feed` command.
//!
//! The administrator's view of every report. Anonymous reporters are masked
//! before filtering, so a student filter never reveals them.

use crate::OutputFormatter;
use anyhow::Result;
use campuspulse_app::{list_issues, visible_to, ListOptions, RepoContext, Viewer};

/// Lists all issues for administrators.
///
/// # Arguments
///
/// * `repo` - Repository context
/// * `options` - Filters, sort order and limit
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if the issues file cannot be read.
pub fn execute(
    repo: &RepoContext,
    options: &ListOptions,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let storage = repo.open_storage()?;
    let issues = visible_to(storage.load_all()?, &Viewer::Admin);

    Ok(formatter.format_list(&list_issues(issues, options)))
}
