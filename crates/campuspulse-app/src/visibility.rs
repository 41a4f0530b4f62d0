// Rust guideline compliant 2026-10-16

//! Role-based views over the issue store.
//!
//! Students only ever see their own reports. Administrators see every report,
//! with the student ID replaced by a placeholder when the reporter asked to
//! stay anonymous.

use campuspulse_core::{Issue, ANONYMOUS_LABEL};

/// Who is looking at the issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    /// A student, identified by their student ID.
    Student(String),
    /// An administrator with the full triage view.
    Admin,
}

/// Restricts and masks issues for a viewer.
///
/// # Arguments
///
/// * `issues` - Issues to present
/// * `viewer` - The viewer the issues are presented to
///
/// # Returns
///
/// The issues the viewer may see, in input order.
pub fn visible_to(issues: Vec<Issue>, viewer: &Viewer) -> Vec<Issue> {
    match viewer {
        Viewer::Student(student_id) => issues
            .into_iter()
            .filter(|issue| issue.student_id == *student_id)
            .collect(),
        Viewer::Admin => issues.into_iter().map(mask_anonymous).collect(),
    }
}

fn mask_anonymous(mut issue: Issue) -> Issue {
    if issue.is_anonymous {
        issue.student_id = ANONYMOUS_LABEL.to_string();
    }
    issue
}
