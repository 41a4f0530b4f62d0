// Rust guideline compliant 2026-10-16

//! Status updates for administrators.

use crate::error::Result;
use crate::time::unix_timestamp;
use campuspulse_core::{fsm, identity, Error as CoreError, Issue, Status, Storage};
use tracing::info;

/// Moves an issue to a new status.
///
/// The priority assigned at submission is never touched.
///
/// # Arguments
///
/// * `storage` - Issue storage
/// * `partial_id` - Full or partial issue ID
/// * `new_status` - Target status
///
/// # Returns
///
/// The updated issue.
///
/// # Errors
///
/// Returns an error if:
/// - The ID is unknown, too short or ambiguous
/// - The issue already has the target status
/// - The issues file cannot be read or written
pub fn update_status(storage: &Storage, partial_id: &str, new_status: Status) -> Result<Issue> {
    update_status_at(storage, partial_id, new_status, unix_timestamp()?)
}

/// Moves an issue to a new status, recording `now` as `updated_at`.
///
/// # Errors
///
/// Same as [`update_status`].
pub fn update_status_at(
    storage: &Storage,
    partial_id: &str,
    new_status: Status,
    now: i64,
) -> Result<Issue> {
    let (issue, previous) = storage.with_lock(|| {
        let mut issues = storage.load_all()?;
        let id = identity::resolve_partial_id(partial_id, &issues)?;

        let issue = issues
            .iter_mut()
            .find(|issue| issue.id == id)
            .ok_or_else(|| CoreError::NotFound(id.clone()))?;
        let previous = issue.status;
        fsm::apply_transition(issue, new_status, now)?;
        let updated = issue.clone();

        storage.save_all(&issues)?;
        Ok((updated, previous))
    })?;

    info!(
        id = %issue.id,
        from = %previous,
        to = %issue.status,
        "status updated"
    );

    Ok(issue)
}
