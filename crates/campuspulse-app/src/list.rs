// Rust guideline compliant 2026-10-16

//! Listing and filtering helpers for issues.

use crate::error::{AppError, Result};
use campuspulse_core::{Category, Issue, PriorityLevel, Status, StressLevel};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::str::FromStr;

/// Sort orders supported by issue listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    /// Newest first.
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
    /// Critical first, newest first within a tier.
    Priority,
    /// Workflow order: Pending, In Progress, Resolved.
    Status,
    /// Category name.
    Category,
    /// Issue ID.
    Id,
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "newest" | "created_at" | "created" => Ok(SortField::Newest),
            "oldest" => Ok(SortField::Oldest),
            "priority" => Ok(SortField::Priority),
            "status" => Ok(SortField::Status),
            "category" => Ok(SortField::Category),
            "id" => Ok(SortField::Id),
            _ => Err(AppError::InvalidInput(format!(
                "Invalid sort field: {}",
                value
            ))),
        }
    }
}

/// List options for filtering and sorting issues.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Filter by status.
    pub status: Option<Status>,
    /// Filter by priority tier.
    pub priority: Option<PriorityLevel>,
    /// Filter by category.
    pub category: Option<Category>,
    /// Filter by stress level.
    pub stress_level: Option<StressLevel>,
    /// Filter by department (case-insensitive).
    pub department: Option<String>,
    /// Filter by student ID (exact).
    pub student_id: Option<String>,
    /// Filter by created_at >= timestamp.
    pub created_after: Option<i64>,
    /// Filter by created_at <= timestamp.
    pub created_before: Option<i64>,
    /// Sort order; newest first when unset.
    pub sort: Option<SortField>,
    /// Maximum number of issues to return.
    pub limit: Option<usize>,
}

/// Filters, sorts and truncates a list of issues based on `ListOptions`.
///
/// # Arguments
///
/// * `issues` - Issues to filter and sort
/// * `options` - List options
///
/// # Returns
///
/// The filtered and sorted list of issues.
pub fn list_issues(issues: Vec<Issue>, options: &ListOptions) -> Vec<Issue> {
    let mut issues = apply_filters(issues, options);
    sort_issues(&mut issues, options.sort.unwrap_or_default());

    if let Some(limit) = options.limit {
        issues.truncate(limit);
    }

    issues
}

fn apply_filters(issues: Vec<Issue>, options: &ListOptions) -> Vec<Issue> {
    const PARALLEL_THRESHOLD: usize = 1_000;

    let predicate = |issue: &Issue| {
        if let Some(status) = options.status {
            if issue.status != status {
                return false;
            }
        }

        if let Some(priority) = options.priority {
            if issue.priority != priority {
                return false;
            }
        }

        if let Some(category) = options.category {
            if issue.category != category {
                return false;
            }
        }

        if let Some(stress) = options.stress_level {
            if issue.stress_level != stress {
                return false;
            }
        }

        if let Some(ref department) = options.department {
            if !issue.department.eq_ignore_ascii_case(department) {
                return false;
            }
        }

        if let Some(ref student_id) = options.student_id {
            if issue.student_id != *student_id {
                return false;
            }
        }

        if let Some(after) = options.created_after {
            if issue.created_at < after {
                return false;
            }
        }
        if let Some(before) = options.created_before {
            if issue.created_at > before {
                return false;
            }
        }

        true
    };

    if issues.len() >= PARALLEL_THRESHOLD {
        issues.into_par_iter().filter(|issue| predicate(issue)).collect()
    } else {
        issues.into_iter().filter(predicate).collect()
    }
}

fn newest_first(a: &Issue, b: &Issue) -> Ordering {
    b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id))
}

fn status_rank(status: Status) -> usize {
    Status::ALL
        .iter()
        .position(|candidate| *candidate == status)
        .unwrap_or(Status::ALL.len())
}

fn sort_issues(issues: &mut [Issue], field: SortField) {
    match field {
        SortField::Newest => issues.sort_by(newest_first),
        SortField::Oldest => issues.sort_by(|a, b| newest_first(b, a)),
        SortField::Priority => issues.sort_by(|a, b| {
            b.priority.cmp(&a.priority).then_with(|| newest_first(a, b))
        }),
        SortField::Status => issues.sort_by(|a, b| {
            status_rank(a.status)
                .cmp(&status_rank(b.status))
                .then_with(|| newest_first(a, b))
        }),
        SortField::Category => issues.sort_by(|a, b| {
            a.category
                .as_str()
                .cmp(b.category.as_str())
                .then_with(|| newest_first(a, b))
        }),
        SortField::Id => issues.sort_by(|a, b| a.id.cmp(&b.id)),
    }
}
