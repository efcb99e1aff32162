//! Path management for Spendwise
//!
//! Only the settings file lives on disk; expense and budget data is
//! memory-resident.
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDWISE_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/spendwise` on Linux,
//!    `~/Library/Application Support/spendwise` on macOS, `%APPDATA%` on Windows)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::SpendwiseError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "SPENDWISE_CONFIG_DIR";

/// Manages all paths used by Spendwise
#[derive(Debug, Clone)]
pub struct SpendwisePaths {
    base_dir: PathBuf,
}

impl SpendwisePaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SpendwiseError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "spendwise")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    SpendwiseError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom directory (useful for testing)
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

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), SpendwiseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpendwiseError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Whether a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
