// Rust guideline compliant 2026-10-16

//! Storage module for JSONL file operations.
//!
//! Issues are stored one JSON object per line. Writes rewrite the whole file
//! through a temp file and an atomic rename; writers serialize on a sibling
//! `.lock` file.

use crate::{Error, Issue, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Storage engine for issues.
pub struct Storage {
    /// Path to the JSONL file.
    path: PathBuf,
}

impl Storage {
    /// Creates a new Storage instance.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSONL file
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self { path })
    }

    /// Returns a reference to the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage {
    /// Loads all issues from the JSONL file, in file order.
    ///
    /// Lines that do not parse, or parse but fail validation, are skipped with
    /// a warning so that one damaged record does not hide the rest of the queue.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load_all(&self) -> Result<Vec<Issue>> {
        use std::fs::File;
        use std::io::{BufRead, BufReader};

        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut issues = Vec::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let parsed = serde_json::from_str::<Issue>(&line)
                .map_err(Error::from)
                .and_then(|issue| issue.validate().map(|()| issue));

            match parsed {
                Ok(issue) => issues.push(issue),
                Err(e) => {
                    warn!(
                        path = %self.path.display(),
                        line = line_no + 1,
                        error = %e,
                        "skipping malformed issue line"
                    );
                }
            }
        }

        debug!(path = %self.path.display(), count = issues.len(), "loaded issues");
        Ok(issues)
    }
}

impl Storage {
    /// Replaces the file contents with `issues`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any issue fails validation
    /// - The file cannot be written
    /// - The atomic rename fails
    pub fn save_all(&self, issues: &[Issue]) -> Result<()> {
        use std::fs::File;
        use std::io::Write;

        for issue in issues {
            issue.validate()?;
        }

        let temp_path = self.path.with_extension("jsonl.tmp");

        {
            let mut file = File::create(&temp_path)?;

            for issue in issues {
                let json = serde_json::to_string(issue)?;
                file.write_all(json.as_bytes())?;
                file.write_all(b"\n")?;
            }

            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;
        debug!(path = %self.path.display(), count = issues.len(), "saved issues");

        Ok(())
    }
}

impl Storage {
    /// Executes a closure while holding an exclusive lock on the storage file.
    ///
    /// Blocks until the lock is available, so concurrent writers run one
    /// after another. The lock is released when the closure returns, whether
    /// it succeeded or not.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock file cannot be opened or locked, or if the
    /// closure fails.
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        lock_file.lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();

        let _ = lock_file.unlock();

        result
    }
}
