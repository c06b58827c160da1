use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Filesystem,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
}

impl FixtureError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FixtureError::DirectoryCreation { .. }
            | FixtureError::FileWrite { .. }
            | FixtureError::FileRead { .. } => ErrorCategory::Filesystem,
            FixtureError::InvalidConfigValueError { .. }
            | FixtureError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FixtureError::FileRead { .. } => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    /// Path the error is about, when there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            FixtureError::DirectoryCreation { path, .. }
            | FixtureError::FileWrite { path, .. }
            | FixtureError::FileRead { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FixtureError::DirectoryCreation { .. } => {
                "Check that no regular file sits where the output directory should be and that you may create directories there"
            }
            FixtureError::FileWrite { .. } => {
                "Check write permissions and free disk space for the output directory"
            }
            FixtureError::FileRead { .. } => "Regenerate the fixtures, then verify again",
            FixtureError::InvalidConfigValueError { .. }
            | FixtureError::ConfigValidationError { .. } => {
                "Fix the command-line arguments or the TOML config file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FixtureError::DirectoryCreation { path, .. } => {
                format!("Could not create output directory {}", path.display())
            }
            FixtureError::FileWrite { path, .. } => {
                format!("Could not write fixture {}", path.display())
            }
            FixtureError::FileRead { path, .. } => {
                format!("Could not read fixture {}", path.display())
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;
