// Rust guideline compliant 2026-10-16

//! Implementation of the `cpulse mine` command.
//!
//! Shows a student their own recent reports, newest first.

use crate::OutputFormatter;
use anyhow::Result;
use campuspulse_app::{
    list_issues, visible_to, AppError, ListOptions, RepoContext, SortField, Viewer,
};

/// Lists a student's most recent reports.
///
/// # Arguments
///
/// * `repo` - Repository context
/// * `student` - The student's ID, trimmed the same way `submit` trims it;
///   defaults to the configured student
/// * `limit` - Maximum rows; defaults to the configured `recent_limit`
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if the student ID is blank or the configuration or
/// issues file cannot be read.
pub fn execute(
    repo: &RepoContext,
    student: Option<String>,
    limit: Option<usize>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let config = repo.load_config()?;
    let storage = repo.open_storage()?;

    let student = match student {
        Some(student) if student.trim().is_empty() => {
            return Err(AppError::InvalidInput("Student ID cannot be empty".to_string()).into());
        }
        Some(student) => student.trim().to_string(),
        None => config.default_student_id.clone(),
    };
    let issues = visible_to(storage.load_all()?, &Viewer::Student(student));

    let options = ListOptions {
        sort: Some(SortField::Newest),
        limit: Some(limit.unwrap_or(config.recent_limit)),
        ..ListOptions::default()
    };

    Ok(formatter.format_list(&list_issues(issues, &options)))
}
