// Rust guideline compliant 2026-10-16

//! ID resolution helpers for CampusPulse.

use crate::error::Result;
use campuspulse_core::{identity, Issue, Storage};

/// Resolves a partial issue ID to its canonical full ID.
///
/// # Arguments
///
/// * `partial` - Partial or full issue ID, with or without the `iss-` prefix
/// * `issues` - Issues to match against
///
/// # Errors
///
/// Returns an error if the partial ID is too short, ambiguous, or not found.
pub fn resolve_issue_id(partial: &str, issues: &[Issue]) -> Result<String> {
    Ok(identity::resolve_partial_id(partial, issues)?)
}

/// Loads one issue by full or partial ID.
///
/// # Errors
///
/// Returns an error if the ID cannot be resolved or the issues file cannot be read.
pub fn show_issue(storage: &Storage, partial: &str) -> Result<Issue> {
    let issues = storage.load_all()?;
    let id = resolve_issue_id(partial, &issues)?;
    issues
        .into_iter()
        .find(|issue| issue.id == id)
        .ok_or_else(|| campuspulse_core::Error::NotFound(id).into())
}
