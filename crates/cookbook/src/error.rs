//! Error types for cookbook.
//!
//! This module defines all error types used throughout the cookbook crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cookbook operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Record Errors ===
    /// A recipe could not be constructed from the given input.
    #[error("invalid recipe: {message}")]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    // === Store Errors ===
    /// A record file exists but does not contain a parsable recipe.
    #[error("failed to parse record file {path}: {source}")]
    Parse {
        /// Path to the offending record file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to create the storage directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for cookbook operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Check if this error came from recipe validation.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this error came from parsing a record file.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<i32>("not valid json").unwrap_err()
    }

    #[test]
    fn test_validation_error_display() {
        let err = Error::validation("prep time must be a number");
        assert_eq!(
            err.to_string(),
            "invalid recipe: prep time must be a number"
        );
    }

    #[test]
    fn test_error_is_validation() {
        assert!(Error::validation("bad").is_validation());
        assert!(!Error::validation("bad").is_parse());
    }

    #[test]
    fn test_parse_error_display() {
        let err = Error::Parse {
            path: PathBuf::from("/data/recipes/abc.json"),
            source: json_error(),
        };
        assert!(err.is_parse());
        assert!(err.to_string().contains("/data/recipes/abc.json"));
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "blank tag".to_string(),
        };
        assert!(err.to_string().contains("blank tag"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let err: Error = json_error().into();
        assert!(matches!(err, Error::Json(_)));
        assert!(!err.is_parse());
    }
}
