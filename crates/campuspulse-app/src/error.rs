// Rust guideline compliant 2026-10-16

//! Error handling for CampusPulse application services.

use campuspulse_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested issue was not found.
    NotFound,
    /// The provided identifier matched multiple issues.
    AmbiguousId,
    /// The requested status transition is invalid.
    InvalidTransition,
    /// Stored or submitted data failed validation.
    ValidationError,
    /// IO failure while reading or writing repository data.
    IoError,
    /// The repository has not been initialized.
    RepoNotInitialized,
    /// The request included invalid inputs.
    InvalidInput,
    /// JSON serialization or parsing failed.
    JsonError,
    /// The configuration is invalid.
    ConfigError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Repository is missing or not initialized.
    #[error("CampusPulse repository not initialized at {path}. Run 'cpulse init' first.")]
    RepoNotInitialized {
        /// Path where `.campuspulse` was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::RepoNotInitialized { .. } => ErrorCode::RepoNotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::AmbiguousId(_, _) => ErrorCode::AmbiguousId,
                CoreError::InvalidTransition(_) => ErrorCode::InvalidTransition,
                CoreError::InvalidIssue(_) => ErrorCode::ValidationError,
                CoreError::InvalidValue { .. } => ErrorCode::InvalidInput,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
                CoreError::Config(_) => ErrorCode::ConfigError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::RepoNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(CoreError::AmbiguousId(partial, matches)) => Some(serde_json::json!({
                "partial": partial,
                "matches": matches,
            })),
            AppError::Core(CoreError::InvalidValue { kind, value }) => Some(serde_json::json!({
                "kind": kind,
                "value": value,
            })),
            _ => None,
        }
    }
}
