// Rust guideline compliant 2026-10-16

//! Submission boundary for new reports.
//!
//! Every report passes through here exactly once: the request is validated,
//! the issue is classified while being built, and it is persisted under the
//! storage lock before being returned. Nothing reads an issue before it has
//! its tier.

use crate::error::{AppError, Result};
use crate::time::unix_timestamp;
use campuspulse_core::models::MAX_DESCRIPTION_BYTES;
use campuspulse_core::{identity, Category, Config, Issue, Storage, StressLevel};
use tracing::info;

/// A report as entered by a student.
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    /// Submitting student; falls back to the configured default.
    pub student_id: Option<String>,
    /// Issue category.
    pub category: Category,
    /// Free-form description; must not be blank.
    pub description: String,
    /// Self-reported stress level.
    pub stress_level: StressLevel,
    /// Hide the student ID in admin views.
    pub is_anonymous: bool,
    /// Responsible department; falls back to the configured default.
    pub department: Option<String>,
}

impl SubmitRequest {
    /// Creates a request with default student, department and visibility.
    pub fn new(description: impl Into<String>, category: Category, stress_level: StressLevel) -> Self {
        Self {
            student_id: None,
            category,
            description: description.into(),
            stress_level,
            is_anonymous: false,
            department: None,
        }
    }
}

/// Submits a report at the current time.
///
/// # Arguments
///
/// * `storage` - Issue storage
/// * `request` - The report to submit
/// * `config` - Repository configuration for defaults
///
/// # Returns
///
/// The persisted issue with its assigned priority.
///
/// # Errors
///
/// Returns an error if the request is invalid or the issue cannot be persisted.
pub fn submit(storage: &Storage, request: SubmitRequest, config: &Config) -> Result<Issue> {
    submit_at(storage, request, config, unix_timestamp()?)
}

/// Submits a report with an explicit creation timestamp.
///
/// # Errors
///
/// Same as [`submit`].
pub fn submit_at(
    storage: &Storage,
    request: SubmitRequest,
    config: &Config,
    now: i64,
) -> Result<Issue> {
    if request.description.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Description cannot be empty".to_string(),
        ));
    }

    if request.description.len() > MAX_DESCRIPTION_BYTES {
        return Err(AppError::InvalidInput(
            "Description exceeds 64KB limit".to_string(),
        ));
    }

    let student_id = non_blank(request.student_id, "Student ID")?
        .unwrap_or_else(|| config.default_student_id.clone());
    let department = non_blank(request.department, "Department")?
        .unwrap_or_else(|| config.default_department.clone());

    let (issue, classification) = storage.with_lock(|| {
        let mut issues = storage.load_all()?;

        let (mut issue, classification) = Issue::classified(
            student_id,
            request.category,
            request.description,
            request.stress_level,
            request.is_anonymous,
            department,
            now,
        );
        issue.id = identity::generate_unique_id(&issue.student_id, &issue.description, now, &issues);

        issues.push(issue.clone());
        storage.save_all(&issues)?;
        Ok((issue, classification))
    })?;

    info!(
        id = %issue.id,
        priority = %issue.priority,
        rule = %classification.rule,
        keyword = classification.keyword.unwrap_or(""),
        category = %issue.category,
        stress = %issue.stress_level,
        anonymous = issue.is_anonymous,
        "issue submitted"
    );

    Ok(issue)
}

fn non_blank(value: Option<String>, field: &str) -> Result<Option<String>> {
    match value {
        Some(value) if value.trim().is_empty() => Err(AppError::InvalidInput(format!(
            "{} cannot be empty",
            field
        ))),
        Some(value) => Ok(Some(value.trim().to_string())),
        None => Ok(None),
    }
}
