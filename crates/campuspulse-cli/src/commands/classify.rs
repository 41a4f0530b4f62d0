// Rust guideline compliant 2026-10-16

//! Implementation of the `cpulse classify` command.

use crate::OutputFormatter;
use campuspulse_core::{explain, Category, StressLevel};

/// Runs the classifier without storing anything.
///
/// Works outside an initialized repository.
pub fn execute(
    description: &str,
    category: Category,
    stress: StressLevel,
    formatter: &dyn OutputFormatter,
) -> String {
    formatter.format_classification(&explain(description, stress, category))
}
