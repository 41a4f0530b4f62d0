// Rust guideline compliant 2026-10-16

//! Implementation of the `cpulse submit` command.

use crate::OutputFormatter;
use anyhow::Result;
use campuspulse_app::{RepoContext, SubmitRequest};
use campuspulse_core::{Category, StressLevel};

/// Arguments collected from the command line for a new report.
#[derive(Debug, Clone)]
pub struct SubmitArgs {
    /// Free-form description.
    pub description: String,
    /// Issue category.
    pub category: Category,
    /// Self-reported stress level.
    pub stress: StressLevel,
    /// Submitting student.
    pub student: Option<String>,
    /// Hide the student ID from administrators.
    pub anonymous: bool,
    /// Responsible department.
    pub department: Option<String>,
}

/// Submits a report and shows the tier it was assigned.
///
/// # Arguments
///
/// * `repo` - Repository context
/// * `args` - The report to submit
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if:
/// - The description, student or department is blank
/// - The configuration cannot be loaded
/// - The issues file cannot be written
pub fn execute(repo: &RepoContext, args: SubmitArgs, formatter: &dyn OutputFormatter) -> Result<String> {
    let config = repo.load_config()?;
    let storage = repo.open_storage()?;

    let request = SubmitRequest {
        student_id: args.student,
        category: args.category,
        description: args.description,
        stress_level: args.stress,
        is_anonymous: args.anonymous,
        department: args.department,
    };
    let issue = campuspulse_app::submit(&storage, request, &config)?;

    Ok(formatter.format_success(
        &format!("Submitted {} with priority {}", issue.id, issue.priority),
        &issue,
    ))
}
