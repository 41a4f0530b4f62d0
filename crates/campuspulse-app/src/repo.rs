// Rust guideline compliant 2026-10-16

//! Repository discovery and path management utilities.

use crate::error::{AppError, Result};
use campuspulse_core::{Config, Storage};
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the data directory created by `cpulse init`.
pub const DATA_DIR: &str = ".campuspulse";

/// Repository path metadata for a CampusPulse workspace.
#[derive(Debug, Clone)]
pub struct RepoContext {
    root: PathBuf,
    data_dir: PathBuf,
    issues_path: PathBuf,
    config_path: PathBuf,
}

impl RepoContext {
    fn at(root: PathBuf) -> Self {
        let data_dir = root.join(DATA_DIR);
        Self {
            root,
            issues_path: data_dir.join("issues.jsonl"),
            config_path: data_dir.join("config.toml"),
            data_dir,
        }
    }

    /// Discovers a CampusPulse repository starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `repo_root` - Optional repository root; defaults to the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - The `.campuspulse` directory is missing
    pub fn discover(repo_root: Option<&Path>) -> Result<Self> {
        let root = match repo_root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let context = Self::at(root);
        if !context.data_dir.exists() {
            return Err(AppError::RepoNotInitialized {
                path: context.data_dir,
            });
        }
        Ok(context)
    }

    /// Creates the `.campuspulse` directory, an empty issues file and a
    /// default config. Existing files are left untouched.
    ///
    /// # Arguments
    ///
    /// * `repo_root` - Optional repository root; defaults to the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if any of the files cannot be created.
    pub fn initialize(repo_root: Option<&Path>) -> Result<Self> {
        let root = match repo_root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let context = Self::at(root);

        if !context.data_dir.exists() {
            std::fs::create_dir_all(&context.data_dir)?;
        }

        if !context.issues_path.exists() {
            std::fs::File::create(&context.issues_path)?;
        }

        if !context.config_path.exists() {
            Config::default().save(&context.data_dir)?;
        }

        info!(path = %context.data_dir.display(), "initialized repository");
        Ok(context)
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.campuspulse` directory path.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.data_dir.as_path()
    }

    /// Returns the issues JSONL path.
    #[must_use]
    pub fn issues_path(&self) -> &Path {
        self.issues_path.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Opens storage for the issues file.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be initialized.
    pub fn open_storage(&self) -> Result<Storage> {
        Ok(Storage::new(self.issues_path.clone())?)
    }

    /// Loads repository configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.data_dir())?)
    }
}
