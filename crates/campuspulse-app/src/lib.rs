// Rust guideline compliant 2026-10-16

//! Shared application services for CampusPulse.
//!
//! This crate is the issue store: it owns the submission boundary (validate,
//! classify once, persist), status updates, listing and filtering, role-based
//! visibility, and standardized response envelopes.

pub mod error;
pub mod fsm;
pub mod ids;
pub mod list;
pub mod repo;
pub mod response;
pub mod submit;
pub mod time;
pub mod visibility;

pub use error::{AppError, ErrorCode, Result};
pub use fsm::update_status;
pub use ids::{resolve_issue_id, show_issue};
pub use list::{list_issues, ListOptions, SortField};
pub use repo::RepoContext;
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use submit::{submit, SubmitRequest};
pub use time::unix_timestamp;
pub use visibility::{visible_to, Viewer};
