//! Error types for the Folio library core.
//!
//! Every remote operation surfaces failures as values from this module rather
//! than logging and swallowing them, so callers and tests can assert on
//! outcomes directly. Display strings are written for direct display to a
//! user and always name the failing stage.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Folio operations.
#[derive(Debug, Error)]
pub enum FolioError {
    // Network errors
    #[error("Network error: {message}")]
    Network {
        message: String,
        /// Optional cause description
        cause: Option<String>,
    },

    #[error("Request timeout after {0:?}")]
    Timeout(std::time::Duration),

    #[error("{operation} failed with status {status}")]
    UnexpectedStatus { operation: String, status: u16 },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("metadata save returned no created record")]
    EmptyCatalogReply,

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for Folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;

// Conversion implementations for common error types

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        FolioError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<reqwest::Error> for FolioError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FolioError::Timeout(crate::config::NetworkConfig::REQUEST_TIMEOUT)
        } else {
            FolioError::Network {
                message: err.to_string(),
                cause: Some(err.to_string()),
            }
        }
    }
}

impl FolioError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        FolioError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Shorthand for a non-success HTTP status on a named stage.
    pub fn status(operation: impl Into<String>, status: u16) -> Self {
        FolioError::UnexpectedStatus {
            operation: operation.into(),
            status,
        }
    }

    /// Check if this error could succeed on a manual re-trigger.
    ///
    /// No retry is attempted anywhere in this crate; the flag only informs
    /// callers whether telling the user to try again is reasonable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FolioError::Network { .. }
                | FolioError::Timeout(_)
                | FolioError::UnexpectedStatus { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_stage() {
        let err = FolioError::status("object upload", 500);
        assert_eq!(err.to_string(), "object upload failed with status 500");

        let err = FolioError::status("metadata save", 409);
        assert_eq!(err.to_string(), "metadata save failed with status 409");
    }

    #[test]
    fn test_file_not_found_display() {
        let err = FolioError::FileNotFound(PathBuf::from("/tmp/notes.pdf"));
        assert_eq!(err.to_string(), "File not found: /tmp/notes.pdf");
    }

    #[test]
    fn test_retryable_errors() {
        assert!(FolioError::Timeout(std::time::Duration::from_secs(5)).is_retryable());
        assert!(FolioError::status("catalog list", 503).is_retryable());
        assert!(!FolioError::EmptyCatalogReply.is_retryable());
        assert!(!FolioError::Config {
            message: "bad url".into()
        }
        .is_retryable());
    }
}
