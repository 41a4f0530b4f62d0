// Rust guideline compliant 2026-10-16

//! CampusPulse Core Library
//!
//! This crate provides the foundational components for the CampusPulse
//! well-being reporting system:
//! - Data models (Issue, Category, StressLevel, PriorityLevel, Status)
//! - The rule-based priority classifier
//! - Status transition rules
//! - Storage engine (JSONL read/write, file locking)
//! - Hash ID generation and resolution
//! - Dashboard statistics
//! - Configuration and error types

pub mod classifier;
pub mod config;
pub mod error;
pub mod fsm;
pub mod identity;
pub mod models;
pub mod stats;
pub mod storage;

pub use classifier::{classify, explain, Classification, Rule, CRITICAL_KEYWORDS, URGENT_KEYWORDS};
pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use models::{Category, Issue, PriorityLevel, Status, StressLevel, ANONYMOUS_LABEL};
pub use stats::{CategoryCount, DashboardStats, DepartmentCount, PriorityCount};
pub use storage::Storage;
