//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum covering all error
//! cases in the library, following the single-error-enum pattern used by
//! crates like `reqwest`, `serde_json`, and `csv`.
//!
//! Errors are rare by design: per-line parsing is total (malformed lines are
//! diagnosed and dropped, see [`crate::parser`]) and the analytics functions
//! return well-defined empty results for empty inputs. The variants below
//! cover the outer boundary only: reading input files and writing reports.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Transcript;
///
/// fn my_function() -> Result<Transcript> {
///     // ... operations that may fail
///     Ok(Transcript::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript or stop-word file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing a report)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input doesn't match the expected structure.
    #[error("Invalid {what}: {message}")]
    InvalidFormat {
        /// What was being read (e.g., "transcript", "stop-word list")
        what: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatlensError {
    /// Creates an invalid format error.
    pub fn invalid_format(what: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            what,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatlensError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ChatlensError::invalid_format("transcript", "not valid UTF-8");
        assert!(err.to_string().contains("transcript"));
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatlensError::from(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_methods() {
        let io_err = ChatlensError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_invalid_format());

        let fmt_err = ChatlensError::invalid_format("transcript", "bad");
        assert!(fmt_err.is_invalid_format());
        assert!(!fmt_err.is_io());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatlensError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }
}
