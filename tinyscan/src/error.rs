//! Error handling module for the tinyscan CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the tinyscan CLI application.
#[derive(Error, Debug)]
pub enum TinyscanError {
    /// Error when a configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error raised by the scanner itself.
    #[error("Scan failed: {0}")]
    Scan(#[from] tinyc_lex::ScanError),

    /// Scanning finished but the source contained malformed tokens.
    #[error("{count} lexical error(s) in {file}")]
    LexicalErrors {
        /// Number of error tokens produced.
        count: usize,
        /// Source file that was scanned.
        file: String,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using TinyscanError.
pub type Result<T> = std::result::Result<T, TinyscanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = TinyscanError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_file_operation_error_display() {
        let err = TinyscanError::FileOperation("permission denied".to_string());
        assert_eq!(err.to_string(), "File operation failed: permission denied");
    }

    #[test]
    fn test_lexical_errors_display() {
        let err = TinyscanError::LexicalErrors {
            count: 2,
            file: "bad.tny".to_string(),
        };
        assert_eq!(err.to_string(), "2 lexical error(s) in bad.tny");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TinyscanError = io_err.into();
        assert!(matches!(err, TinyscanError::Io(_)));
    }

    #[test]
    fn test_scan_error_conversion() {
        let scan_err = tinyc_lex::ScanError::InvalidState(tinyc_lex::State::Done);
        let err: TinyscanError = scan_err.into();
        assert!(matches!(err, TinyscanError::Scan(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: TinyscanError = json_err.into();
        assert!(matches!(err, TinyscanError::Json(_)));
    }
}
