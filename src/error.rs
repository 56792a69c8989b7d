//! Unified error types for FeedView
//!
//! Provides a consistent error handling approach across all modules.

use std::path::PathBuf;

/// Unified error type for FeedView operations
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// I/O errors (reading fixtures, log directory, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a fixture
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A startup resource could not be loaded
    #[error("Load error: {resource} - {reason}")]
    Load { resource: String, reason: String },

    /// Missing fixture file
    #[error("Path error: {path} - {reason}")]
    Path { path: PathBuf, reason: String },

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience Result type using FeedError
pub type Result<T> = std::result::Result<T, FeedError>;

impl FeedError {
    /// Create a Load error
    pub fn load(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Load {
            resource: resource.into(),
            reason: reason.into(),
        }
    }

    /// Create a Path error
    pub fn path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Path {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FeedError::load("users", "connection reset");
        assert_eq!(format!("{}", err), "Load error: users - connection reset");

        let err = FeedError::path("/data/tweets.json", "not found");
        assert_eq!(format!("{}", err), "Path error: /data/tweets.json - not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FeedError = io_err.into();
        assert!(matches!(err, FeedError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u32>>("[1,").unwrap_err();
        let err: FeedError = json_err.into();
        assert!(matches!(err, FeedError::Json(_)));
    }
}
