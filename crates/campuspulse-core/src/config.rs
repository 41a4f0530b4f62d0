// Rust guideline compliant 2026-10-16

//! Configuration management for CampusPulse.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for CampusPulse behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Department recorded when a submission does not name one.
    #[serde(default = "default_department")]
    pub default_department: String,

    /// Student ID recorded when a submission does not name one.
    #[serde(default = "default_student_id")]
    pub default_student_id: String,

    /// Number of reports shown in a student's recent list.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_department() -> String {
    "Unassigned".to_string()
}

fn default_student_id() -> String {
    "DEMO-STUDENT".to_string()
}

fn default_recent_limit() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_department: default_department(),
            default_student_id: default_student_id(),
            recent_limit: default_recent_limit(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.campuspulse/config.toml`
    /// 3. Environment variables with `CAMPUSPULSE_` prefix
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the `.campuspulse` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(data_dir: &Path) -> Result<Self> {
        Self::load_with_env(data_dir, |key| std::env::var(key).ok())
    }

    /// Loads configuration using `lookup` in place of the process environment.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_with_env<F>(data_dir: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let config_path = data_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `CAMPUSPULSE_DEFAULT_DEPARTMENT` - Department for unrouted reports
    /// - `CAMPUSPULSE_DEFAULT_STUDENT_ID` - Submitter ID when none is given
    /// - `CAMPUSPULSE_RECENT_LIMIT` - Rows shown in a student's recent list
    /// - `CAMPUSPULSE_OUTPUT_FORMAT` - Output format (json/table/plain)
    fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("CAMPUSPULSE_DEFAULT_DEPARTMENT") {
            self.default_department = val;
        }

        if let Some(val) = lookup("CAMPUSPULSE_DEFAULT_STUDENT_ID") {
            self.default_student_id = val;
        }

        if let Some(val) = lookup("CAMPUSPULSE_RECENT_LIMIT") {
            self.recent_limit = val.parse().map_err(|_| {
                Error::Config("CAMPUSPULSE_RECENT_LIMIT must be a positive number".to_string())
            })?;
        }

        if let Some(val) = lookup("CAMPUSPULSE_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::Config(
                        "CAMPUSPULSE_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - default_department or default_student_id is blank
    /// - recent_limit is zero
    fn validate(&self) -> Result<()> {
        if self.default_department.trim().is_empty() {
            return Err(Error::Config(
                "default_department cannot be empty".to_string(),
            ));
        }

        if self.default_student_id.trim().is_empty() {
            return Err(Error::Config(
                "default_student_id cannot be empty".to_string(),
            ));
        }

        if self.recent_limit == 0 {
            return Err(Error::Config(
                "recent_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the `.campuspulse` directory
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let config_path = data_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
