// Rust guideline compliant 2026-10-16

//! Rule-based priority classifier.
//!
//! Assigns a [`PriorityLevel`] to a report from its description, self-reported
//! stress level and category. Rules are evaluated in order and the first match
//! wins; they are never combined or scored:
//!
//! 1. High stress in the Mental Health category → Critical
//! 2. Any critical keyword in the description → Critical
//! 3. High stress, or any urgent keyword in the description → Urgent
//! 4. Medium stress → Urgent
//! 5. Otherwise → Normal
//!
//! Keywords match as case-insensitive substrings, so "painful" matches "pain"
//! and "firefly" matches "fire".

use crate::models::{Category, PriorityLevel, StressLevel};
use serde::Serialize;
use std::fmt;

/// Phrases that escalate a report straight to Critical.
pub const CRITICAL_KEYWORDS: [&str; 12] = [
    "safety",
    "emergency",
    "harassment",
    "suicide",
    "self-harm",
    "danger",
    "threat",
    "assault",
    "weapon",
    "collapsed",
    "fire",
    "electric shock",
];

/// Phrases that escalate a report to Urgent.
pub const URGENT_KEYWORDS: [&str; 12] = [
    "broken",
    "leak",
    "medical",
    "pain",
    "sick",
    "anxiety",
    "panic",
    "theft",
    "missing",
    "failed",
    "exam stress",
    "fever",
];

/// The rule that decided a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// High stress reported under Mental Health.
    HighStressMentalHealth,
    /// Description contains a critical keyword.
    CriticalKeyword,
    /// High stress reported outside Mental Health.
    HighStress,
    /// Description contains an urgent keyword.
    UrgentKeyword,
    /// Medium stress reported.
    MediumStress,
    /// No rule matched.
    Default,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Rule::HighStressMentalHealth => "high stress in Mental Health",
            Rule::CriticalKeyword => "critical keyword",
            Rule::HighStress => "high stress",
            Rule::UrgentKeyword => "urgent keyword",
            Rule::MediumStress => "medium stress",
            Rule::Default => "default",
        };
        f.write_str(text)
    }
}

/// Outcome of classifying a report, with the reason behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Assigned tier.
    pub priority: PriorityLevel,
    /// Rule that fired.
    pub rule: Rule,
    /// Keyword that triggered a keyword rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<&'static str>,
}

impl Classification {
    fn new(priority: PriorityLevel, rule: Rule) -> Self {
        Self {
            priority,
            rule,
            keyword: None,
        }
    }

    fn keyword(priority: PriorityLevel, rule: Rule, keyword: &'static str) -> Self {
        Self {
            priority,
            rule,
            keyword: Some(keyword),
        }
    }
}

/// Assigns a priority tier to a report.
///
/// Total over its inputs: never fails and holds no state between calls.
///
/// # Arguments
///
/// * `description` - Free-form report text
/// * `stress` - Self-reported stress level
/// * `category` - Report category
///
/// # Returns
///
/// The priority tier decided by the first matching rule.
pub fn classify(description: &str, stress: StressLevel, category: Category) -> PriorityLevel {
    explain(description, stress, category).priority
}

/// Classifies a report and reports which rule fired.
///
/// # Arguments
///
/// * `description` - Free-form report text
/// * `stress` - Self-reported stress level
/// * `category` - Report category
///
/// # Returns
///
/// The classification, agreeing with [`classify`] on the priority.
pub fn explain(description: &str, stress: StressLevel, category: Category) -> Classification {
    if stress == StressLevel::High && category == Category::MentalHealth {
        return Classification::new(PriorityLevel::Critical, Rule::HighStressMentalHealth);
    }

    let text = description.to_lowercase();

    if let Some(keyword) = find_keyword(&text, &CRITICAL_KEYWORDS) {
        return Classification::keyword(PriorityLevel::Critical, Rule::CriticalKeyword, keyword);
    }

    if stress == StressLevel::High {
        return Classification::new(PriorityLevel::Urgent, Rule::HighStress);
    }

    if let Some(keyword) = find_keyword(&text, &URGENT_KEYWORDS) {
        return Classification::keyword(PriorityLevel::Urgent, Rule::UrgentKeyword, keyword);
    }

    if stress == StressLevel::Medium {
        return Classification::new(PriorityLevel::Urgent, Rule::MediumStress);
    }

    Classification::new(PriorityLevel::Normal, Rule::Default)
}

fn find_keyword(text: &str, keywords: &[&'static str]) -> Option<&'static str> {
    keywords.iter().copied().find(|keyword| text.contains(keyword))
}
