// Rust guideline compliant 2026-10-16

//! Output formatting module for the CampusPulse CLI.
//!
//! This module renders issues, dashboard statistics and classifier results
//! in various output formats (JSON, table, plain text). Formatters only
//! display the tier and status stored on an issue; they never classify.

use crate::terminal::{paint, truncate, wrap_text};
use campuspulse_app::{ErrorEnvelope, SuccessEnvelope};
use campuspulse_core::{
    Classification, DashboardStats, Issue, OutputFormat, PriorityLevel, Status,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use tabled::{builder::Builder, settings::Style};
use termcolor::Color;

const DESCRIPTION_COLUMN_WIDTH: usize = 48;

/// Output formatter trait.
///
/// Defines the interface for rendering command results in different output formats.
pub trait OutputFormatter {
    /// Formats a single issue for display.
    fn format_issue(&self, issue: &Issue) -> String;

    /// Formats a list of issues for display.
    fn format_list(&self, issues: &[Issue]) -> String;

    /// Formats dashboard statistics.
    fn format_stats(&self, stats: &DashboardStats) -> String;

    /// Formats a classifier dry run.
    fn format_classification(&self, classification: &Classification) -> String;

    /// Formats the outcome of a command that changed an issue.
    ///
    /// # Arguments
    /// * `message` - Human-readable summary of what happened
    /// * `issue` - The issue after the change
    fn format_success(&self, message: &str, issue: &Issue) -> String;

    /// Formats a message that has no issue attached.
    fn format_message(&self, message: &str) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &ErrorEnvelope) -> String;
}

/// Formats a Unix timestamp for display.
///
/// # Arguments
/// * `timestamp` - Unix seconds to format
/// * `absolute` - Always print the UTC date and time
/// * `now` - Reference time for relative output
///
/// # Returns
/// `2024-01-01 09:30 UTC` in absolute mode; otherwise `just now`, `5m ago`,
/// `3h ago` or `2d ago`, falling back to the absolute form for timestamps
/// older than a week or in the future.
pub fn format_timestamp(timestamp: i64, absolute: bool, now: i64) -> String {
    let elapsed = now.saturating_sub(timestamp);

    if !absolute && (0..7 * 86_400).contains(&elapsed) {
        return match elapsed {
            0..=59 => "just now".to_string(),
            60..=3_599 => format!("{}m ago", elapsed / 60),
            3_600..=86_399 => format!("{}h ago", elapsed / 3_600),
            _ => format!("{}d ago", elapsed / 86_400),
        };
    }

    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .map(|time| time.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

fn resolution_rate(stats: &DashboardStats) -> String {
    match stats.resolution_rate {
        Some(rate) => format!("{}%", rate),
        None => "n/a".to_string(),
    }
}

/// JSON output formatter.
///
/// Wraps every result in the `{"status": "ok", "result": ...}` envelope.
pub struct JsonFormatter;

impl JsonFormatter {
    fn envelope<T: Serialize>(result: T) -> String {
        serde_json::to_string_pretty(&SuccessEnvelope::new(result))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize result" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_issue(&self, issue: &Issue) -> String {
        Self::envelope(issue)
    }

    fn format_list(&self, issues: &[Issue]) -> String {
        Self::envelope(json!({
            "issues": issues,
            "total": issues.len(),
        }))
    }

    fn format_stats(&self, stats: &DashboardStats) -> String {
        Self::envelope(stats)
    }

    fn format_classification(&self, classification: &Classification) -> String {
        Self::envelope(classification)
    }

    fn format_success(&self, _message: &str, issue: &Issue) -> String {
        Self::envelope(issue)
    }

    fn format_message(&self, message: &str) -> String {
        Self::envelope(json!({ "message": message }))
    }

    fn format_error(&self, error: &ErrorEnvelope) -> String {
        serde_json::to_string_pretty(error)
            .unwrap_or_else(|_| json!({ "message": error.message }).to_string())
    }
}

/// Table output formatter.
///
/// Formats issues as human-readable tables with colored priority badges.
pub struct TableFormatter {
    use_color: bool,
    absolute_time: bool,
    now: i64,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    /// * `absolute_time` - Whether to print absolute timestamps
    ///
    /// # Returns
    /// A new TableFormatter instance
    pub fn new(use_color: bool, absolute_time: bool) -> Self {
        Self {
            use_color,
            absolute_time,
            now: Utc::now().timestamp(),
        }
    }

    fn priority_badge(&self, priority: PriorityLevel) -> String {
        if !self.use_color {
            return priority.to_string();
        }
        match priority {
            PriorityLevel::Critical => paint(priority.as_str(), Color::Red, true),
            PriorityLevel::Urgent => paint(priority.as_str(), Color::Yellow, true),
            PriorityLevel::Normal => paint(priority.as_str(), Color::Green, false),
        }
    }

    fn status_badge(&self, status: Status) -> String {
        if !self.use_color {
            return status.to_string();
        }
        match status {
            Status::Pending => paint(status.as_str(), Color::Yellow, false),
            Status::InProgress => paint(status.as_str(), Color::Blue, false),
            Status::Resolved => paint(status.as_str(), Color::Green, false),
        }
    }

    fn timestamp(&self, timestamp: i64) -> String {
        format_timestamp(timestamp, self.absolute_time, self.now)
    }
}

impl OutputFormatter for TableFormatter {
    fn format_issue(&self, issue: &Issue) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:          {}\n", issue.id));
        output.push_str(&format!("Priority:    {}\n", self.priority_badge(issue.priority)));
        output.push_str(&format!("Status:      {}\n", self.status_badge(issue.status)));
        output.push_str(&format!("Category:    {}\n", issue.category));
        output.push_str(&format!("Stress:      {}\n", issue.stress_level));
        output.push_str(&format!("Student:     {}\n", issue.student_id));
        output.push_str(&format!("Department:  {}\n", issue.department));
        output.push_str(&format!("Submitted:   {}\n", self.timestamp(issue.created_at)));
        if issue.updated_at != issue.created_at {
            output.push_str(&format!("Updated:     {}\n", self.timestamp(issue.updated_at)));
        }
        output.push_str(&format!("Description: {}\n", wrap_text(&issue.description, 13)));

        output
    }

    fn format_list(&self, issues: &[Issue]) -> String {
        if issues.is_empty() {
            return "No issues found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec![
            "ID",
            "Priority",
            "Status",
            "Category",
            "Stress",
            "Student",
            "Department",
            "Submitted",
            "Description",
        ]);

        for issue in issues {
            builder.push_record(vec![
                issue.id.clone(),
                issue.priority.to_string(),
                issue.status.to_string(),
                issue.category.to_string(),
                issue.stress_level.to_string(),
                issue.student_id.clone(),
                issue.department.clone(),
                self.timestamp(issue.created_at),
                truncate(&issue.description, DESCRIPTION_COLUMN_WIDTH),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_stats(&self, stats: &DashboardStats) -> String {
        let mut output = String::new();

        output.push_str(&format!("Total issues:     {}\n", stats.total));
        output.push_str(&format!("Pending:          {}\n", stats.pending));
        output.push_str(&format!("In progress:      {}\n", stats.in_progress));
        output.push_str(&format!("Resolved:         {}\n", stats.resolved));
        output.push_str(&format!(
            "Critical:         {}\n",
            if self.use_color && stats.critical > 0 {
                paint(&stats.critical.to_string(), Color::Red, true)
            } else {
                stats.critical.to_string()
            }
        ));
        output.push_str(&format!("Resolution rate:  {}\n", resolution_rate(stats)));

        let mut priorities = Builder::default();
        priorities.push_record(vec!["Priority".to_string(), "Issues".to_string()]);
        for entry in &stats.by_priority {
            priorities.push_record(vec![entry.priority.to_string(), entry.count.to_string()]);
        }
        let mut table = priorities.build();
        table.with(Style::modern());
        output.push('\n');
        output.push_str(&table.to_string());
        output.push('\n');

        let mut categories = Builder::default();
        categories.push_record(vec!["Category".to_string(), "Issues".to_string()]);
        for entry in &stats.by_category {
            categories.push_record(vec![entry.category.to_string(), entry.count.to_string()]);
        }
        let mut table = categories.build();
        table.with(Style::modern());
        output.push('\n');
        output.push_str(&table.to_string());
        output.push('\n');

        if !stats.by_department.is_empty() {
            let mut departments = Builder::default();
            departments.push_record(vec!["Department".to_string(), "Issues".to_string()]);
            for entry in &stats.by_department {
                departments.push_record(vec![entry.department.clone(), entry.count.to_string()]);
            }
            let mut table = departments.build();
            table.with(Style::modern());
            output.push('\n');
            output.push_str(&table.to_string());
            output.push('\n');
        }

        output
    }

    fn format_classification(&self, classification: &Classification) -> String {
        let mut output = format!(
            "Priority: {}\nRule:     {}\n",
            self.priority_badge(classification.priority),
            classification.rule
        );
        if let Some(keyword) = classification.keyword {
            output.push_str(&format!("Keyword:  {}\n", keyword));
        }
        output
    }

    fn format_success(&self, message: &str, issue: &Issue) -> String {
        let marker = if self.use_color {
            paint("✓", Color::Green, true)
        } else {
            "✓".to_string()
        };
        format!("{} {}\n\n{}", marker, message, self.format_issue(issue))
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &ErrorEnvelope) -> String {
        if self.use_color {
            format!("{} {}", paint("Error:", Color::Red, true), error.message)
        } else {
            format!("Error: {}", error.message)
        }
    }
}

/// Plain text output formatter.
///
/// Formats issues as tab-separated text without colors or tables.
pub struct PlainFormatter {
    absolute_time: bool,
    now: i64,
}

impl PlainFormatter {
    /// Creates a new plain formatter.
    pub fn new(absolute_time: bool) -> Self {
        Self {
            absolute_time,
            now: Utc::now().timestamp(),
        }
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_issue(&self, issue: &Issue) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", issue.id));
        output.push_str(&format!("{}\n", issue.priority));
        output.push_str(&format!("{}\n", issue.status));
        output.push_str(&format!("{}\n", issue.category));
        output.push_str(&format!("{}\n", issue.stress_level));
        output.push_str(&format!("{}\n", issue.student_id));
        output.push_str(&format!("{}\n", issue.department));
        output.push_str(&format!(
            "{}\n",
            format_timestamp(issue.created_at, self.absolute_time, self.now)
        ));
        output.push_str(&format!("{}\n", issue.description));

        output
    }

    fn format_list(&self, issues: &[Issue]) -> String {
        if issues.is_empty() {
            return "No issues found.".to_string();
        }

        let mut output = String::new();
        for issue in issues {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\n",
                issue.id,
                issue.priority,
                issue.status,
                issue.category,
                truncate(&issue.description, DESCRIPTION_COLUMN_WIDTH)
            ));
        }
        output
    }

    fn format_stats(&self, stats: &DashboardStats) -> String {
        let mut output = format!(
            "total\t{}\npending\t{}\nin_progress\t{}\nresolved\t{}\ncritical\t{}\nresolution_rate\t{}\n",
            stats.total,
            stats.pending,
            stats.in_progress,
            stats.resolved,
            stats.critical,
            resolution_rate(stats)
        );
        for entry in &stats.by_priority {
            output.push_str(&format!("priority\t{}\t{}\n", entry.priority, entry.count));
        }
        for entry in &stats.by_category {
            output.push_str(&format!("category\t{}\t{}\n", entry.category, entry.count));
        }
        for entry in &stats.by_department {
            output.push_str(&format!("department\t{}\t{}\n", entry.department, entry.count));
        }
        output
    }

    fn format_classification(&self, classification: &Classification) -> String {
        match classification.keyword {
            Some(keyword) => format!("{}\t{}\t{}\n", classification.priority, classification.rule, keyword),
            None => format!("{}\t{}\n", classification.priority, classification.rule),
        }
    }

    fn format_success(&self, _message: &str, issue: &Issue) -> String {
        format!("{}\t{}\t{}\n", issue.id, issue.priority, issue.status)
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &ErrorEnvelope) -> String {
        format!("Error: {}", error.message)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (table only)
/// * `absolute_time` - Whether to print absolute timestamps
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(
    format: OutputFormat,
    use_color: bool,
    absolute_time: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color, absolute_time)),
        OutputFormat::Plain => Box::new(PlainFormatter::new(absolute_time)),
    }
}
