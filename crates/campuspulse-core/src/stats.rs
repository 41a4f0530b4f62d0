// Rust guideline compliant 2026-10-16

//! Aggregate statistics for the admin dashboard.

use crate::{Category, Issue, PriorityLevel, Status};
use serde::Serialize;

/// Number of issues in one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentCount {
    /// Department name.
    pub department: String,
    /// Issue count.
    pub count: usize,
}

/// Number of issues with one priority tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriorityCount {
    /// Priority tier.
    pub priority: PriorityLevel,
    /// Issue count.
    pub count: usize,
}

/// Number of issues in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// Category.
    pub category: Category,
    /// Issue count.
    pub count: usize,
}

/// Dashboard summary over a set of issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    /// Total number of issues.
    pub total: usize,
    /// Issues awaiting action.
    pub pending: usize,
    /// Issues being worked on.
    pub in_progress: usize,
    /// Resolved issues.
    pub resolved: usize,
    /// Issues classified as Critical.
    pub critical: usize,
    /// Resolved share of all issues as a rounded percentage; `None` when there are no issues.
    pub resolution_rate: Option<u8>,
    /// Counts per priority, Critical first. Always has one entry per tier.
    pub by_priority: Vec<PriorityCount>,
    /// Counts per department, in order of first appearance.
    pub by_department: Vec<DepartmentCount>,
    /// Counts per category, in category order. Always has one entry per category.
    pub by_category: Vec<CategoryCount>,
}

impl DashboardStats {
    /// Computes dashboard statistics.
    ///
    /// # Arguments
    ///
    /// * `issues` - Issues to aggregate
    ///
    /// # Returns
    ///
    /// The aggregated statistics.
    pub fn from_issues(issues: &[Issue]) -> Self {
        let count_status =
            |status: Status| issues.iter().filter(|issue| issue.status == status).count();

        let total = issues.len();
        let resolved = count_status(Status::Resolved);

        let by_priority: Vec<PriorityCount> = PriorityLevel::DESCENDING
            .iter()
            .map(|&priority| PriorityCount {
                priority,
                count: issues.iter().filter(|issue| issue.priority == priority).count(),
            })
            .collect();

        let by_category = Category::ALL
            .iter()
            .map(|&category| CategoryCount {
                category,
                count: issues.iter().filter(|issue| issue.category == category).count(),
            })
            .collect();

        let mut by_department: Vec<DepartmentCount> = Vec::new();
        for issue in issues {
            match by_department
                .iter_mut()
                .find(|entry| entry.department == issue.department)
            {
                Some(entry) => entry.count += 1,
                None => by_department.push(DepartmentCount {
                    department: issue.department.clone(),
                    count: 1,
                }),
            }
        }

        Self {
            total,
            pending: count_status(Status::Pending),
            in_progress: count_status(Status::InProgress),
            resolved,
            critical: issues
                .iter()
                .filter(|issue| issue.priority == PriorityLevel::Critical)
                .count(),
            resolution_rate: resolution_rate(resolved, total),
            by_priority,
            by_department,
            by_category,
        }
    }
}

fn resolution_rate(resolved: usize, total: usize) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let percent = (resolved as f64 / total as f64 * 100.0).round();
    Some(percent.clamp(0.0, 100.0) as u8)
}
