//! Path management for splitpot
//!
//! ## Path Resolution Order
//!
//! 1. `SPLIT_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `splitpot`
//!    (`~/.config/splitpot` on Linux, `~/Library/Application Support/splitpot`
//!    on macOS, `%APPDATA%\splitpot\config` on Windows)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::SplitError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "SPLIT_DATA_DIR";

/// Manages all paths used by splitpot
#[derive(Debug, Clone)]
pub struct SplitPaths {
    base_dir: PathBuf,
}

impl SplitPaths {
    /// Resolve the base directory from the environment or the platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SplitError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "splitpot")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    SplitError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create SplitPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SplitError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SplitError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if settings have been written (`split init`)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
