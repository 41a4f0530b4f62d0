// Rust guideline compliant 2026-10-16

//! Status transition rules.
//!
//! Administrators may move an issue between any two distinct statuses:
//!
//! - Pending → InProgress | Resolved
//! - InProgress → Pending | Resolved
//! - Resolved → Pending | InProgress (reopen)
//!
//! Staying in the same status is rejected. Transitions never touch priority.

use crate::{Error, Issue, Result, Status};

impl Status {
    /// Checks if a transition to the target status is valid.
    ///
    /// # Arguments
    ///
    /// * `target` - The target status to transition to
    ///
    /// # Errors
    ///
    /// Returns an error if the target equals the current status.
    pub fn can_transition_to(&self, target: Status) -> Result<()> {
        if *self == target {
            return Err(Error::InvalidTransition(format!(
                "Issue is already {}",
                self
            )));
        }
        Ok(())
    }

    /// Returns the list of valid target states for the current status.
    pub fn valid_transitions(&self) -> Vec<Status> {
        Status::ALL
            .iter()
            .copied()
            .filter(|status| status != self)
            .collect()
    }
}

/// Applies a status transition to an issue.
///
/// # Arguments
///
/// * `issue` - The issue to transition
/// * `new_status` - The target status
/// * `now` - Unix timestamp recorded as `updated_at`
///
/// # Errors
///
/// Returns an error if the transition is not allowed; the issue is left untouched.
pub fn apply_transition(issue: &mut Issue, new_status: Status, now: i64) -> Result<()> {
    issue.status.can_transition_to(new_status)?;
    issue.status = new_status;
    issue.updated_at = now;
    Ok(())
}
