// Rust guideline compliant 2026-10-16

//! Core data models for CampusPulse.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label shown instead of the student ID on anonymous reports.
pub const ANONYMOUS_LABEL: &str = "Anonymous";

/// Maximum description size in bytes.
pub const MAX_DESCRIPTION_BYTES: usize = 64 * 1024;

/// Subject-matter bucket of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Coursework, exams and other academic matters.
    Academic,
    /// Residence and accommodation problems.
    Hostel,
    /// Personal well-being and mental health.
    #[serde(rename = "Mental Health")]
    MentalHealth,
    /// Campus buildings, equipment and infrastructure.
    Facilities,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Academic,
        Category::Hostel,
        Category::MentalHealth,
        Category::Facilities,
    ];

    /// Returns the display name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Academic => "Academic",
            Category::Hostel => "Hostel",
            Category::MentalHealth => "Mental Health",
            Category::Facilities => "Facilities",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "academic" => Ok(Category::Academic),
            "hostel" => Ok(Category::Hostel),
            "mental health" | "mental-health" | "mental_health" => Ok(Category::MentalHealth),
            "facilities" => Ok(Category::Facilities),
            _ => Err(crate::Error::InvalidValue {
                kind: "category",
                value: s.to_string(),
            }),
        }
    }
}

/// Self-reported stress level, ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StressLevel {
    /// Low stress.
    Low,
    /// Medium stress.
    Medium,
    /// High stress.
    High,
}

impl StressLevel {
    /// All stress levels in ascending order.
    pub const ALL: [StressLevel; 3] = [StressLevel::Low, StressLevel::Medium, StressLevel::High];

    /// Returns the display name of the stress level.
    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Low => "Low",
            StressLevel::Medium => "Medium",
            StressLevel::High => "High",
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StressLevel {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(StressLevel::Low),
            "medium" => Ok(StressLevel::Medium),
            "high" => Ok(StressLevel::High),
            _ => Err(crate::Error::InvalidValue {
                kind: "stress level",
                value: s.to_string(),
            }),
        }
    }
}

/// Triage tier assigned by the classifier, ordered `Normal < Urgent < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriorityLevel {
    /// No escalation signal.
    Normal,
    /// Needs attention soon.
    Urgent,
    /// Needs immediate attention.
    Critical,
}

impl PriorityLevel {
    /// All priority levels from most to least severe.
    pub const DESCENDING: [PriorityLevel; 3] = [
        PriorityLevel::Critical,
        PriorityLevel::Urgent,
        PriorityLevel::Normal,
    ];

    /// Returns the display name of the priority level.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLevel::Normal => "Normal",
            PriorityLevel::Urgent => "Urgent",
            PriorityLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityLevel {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(PriorityLevel::Normal),
            "urgent" => Ok(PriorityLevel::Urgent),
            "critical" => Ok(PriorityLevel::Critical),
            _ => Err(crate::Error::InvalidValue {
                kind: "priority",
                value: s.to_string(),
            }),
        }
    }
}

/// Triage status of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Submitted and awaiting action.
    Pending,
    /// An administrator is working on it.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Closed out.
    Resolved,
}

impl Status {
    /// All statuses in workflow order.
    pub const ALL: [Status; 3] = [Status::Pending, Status::InProgress, Status::Resolved];

    /// Returns the display name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In Progress",
            Status::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "in progress" | "in_progress" | "in-progress" => Ok(Status::InProgress),
            "resolved" => Ok(Status::Resolved),
            _ => Err(crate::Error::InvalidValue {
                kind: "status",
                value: s.to_string(),
            }),
        }
    }
}

/// A submitted student report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique hash-based identifier (format: iss-XXXXXX).
    pub id: String,
    /// Identifier of the submitting student.
    pub student_id: String,
    /// Subject-matter bucket, fixed at submission.
    pub category: Category,
    /// Free-form description.
    pub description: String,
    /// Self-reported stress level, fixed at submission.
    pub stress_level: StressLevel,
    /// Whether the student asked to stay anonymous in admin views.
    #[serde(default)]
    pub is_anonymous: bool,
    /// Tier assigned by the classifier when the issue was created.
    pub priority: PriorityLevel,
    /// Current triage status.
    pub status: Status,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
    /// Department responsible for the issue.
    pub department: String,
}

impl Issue {
    /// Creates a new pending issue, classifying it on the way in.
    ///
    /// This is the only constructor that assigns a priority; the tier is
    /// computed once from the description, stress level and category and is
    /// never recomputed afterwards.
    ///
    /// # Arguments
    ///
    /// * `student_id` - Submitting student
    /// * `category` - Issue category
    /// * `description` - Free-form description
    /// * `stress_level` - Self-reported stress level
    /// * `is_anonymous` - Whether to hide the student in admin views
    /// * `department` - Responsible department
    /// * `created_at` - Unix timestamp of submission
    ///
    /// # Returns
    ///
    /// A new issue with a generated ID and status `Pending`.
    pub fn new(
        student_id: String,
        category: Category,
        description: String,
        stress_level: StressLevel,
        is_anonymous: bool,
        department: String,
        created_at: i64,
    ) -> Self {
        Self::classified(
            student_id,
            category,
            description,
            stress_level,
            is_anonymous,
            department,
            created_at,
        )
        .0
    }

    /// Creates a new pending issue and returns the classification that
    /// decided its priority alongside it.
    ///
    /// Takes the same arguments as [`Issue::new`].
    pub fn classified(
        student_id: String,
        category: Category,
        description: String,
        stress_level: StressLevel,
        is_anonymous: bool,
        department: String,
        created_at: i64,
    ) -> (Self, crate::Classification) {
        let classification = crate::classifier::explain(&description, stress_level, category);
        let id = crate::identity::generate_id(&student_id, &description, created_at, 0);

        let issue = Self {
            id,
            student_id,
            category,
            description,
            stress_level,
            is_anonymous,
            priority: classification.priority,
            status: Status::Pending,
            created_at,
            updated_at: created_at,
            department,
        };
        (issue, classification)
    }

    /// Returns the label to show as the reporter of this issue.
    pub fn reporter(&self) -> &str {
        if self.is_anonymous {
            ANONYMOUS_LABEL
        } else {
            &self.student_id
        }
    }

    /// Validates the issue data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The description is blank or larger than 64 KiB
    /// - The student ID or department is blank
    /// - The ID format is invalid
    pub fn validate(&self) -> crate::Result<()> {
        if self.description.trim().is_empty() {
            return Err(crate::Error::InvalidIssue(
                "Description cannot be empty".to_string(),
            ));
        }

        if self.description.len() > MAX_DESCRIPTION_BYTES {
            return Err(crate::Error::InvalidIssue(
                "Description exceeds 64KB limit".to_string(),
            ));
        }

        if self.student_id.trim().is_empty() {
            return Err(crate::Error::InvalidIssue(
                "Student ID cannot be empty".to_string(),
            ));
        }

        if self.department.trim().is_empty() {
            return Err(crate::Error::InvalidIssue(
                "Department cannot be empty".to_string(),
            ));
        }

        crate::identity::validate_id_format(&self.id)?;

        Ok(())
    }
}
