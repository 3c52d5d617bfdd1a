//! Error types for tinyc-lex.
//!
//! Bad input never produces an error here; it is reported as a
//! [`TokenKind::Error`](crate::TokenKind::Error) token. `ScanError` covers
//! only failures outside the token grammar.

use thiserror::Error;

use crate::scanner::State;

/// Failures that stop a call to [`Scanner::next_token`](crate::Scanner::next_token).
#[derive(Debug, Error)]
pub enum ScanError {
    /// Reading the source or writing the listing failed.
    #[error("I/O error while scanning: {0}")]
    Io(#[from] std::io::Error),

    /// The DFA observed a state it can never legally start an iteration in.
    /// This is a scanner defect, not a problem with the input.
    #[error("scanner bug: entered the loop in state {0:?}")]
    InvalidState(State),
}

/// Result type alias for scanner operations
pub type ScanResult<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated");
        let err: ScanError = io_err.into();
        assert!(matches!(err, ScanError::Io(_)));
        assert_eq!(err.to_string(), "I/O error while scanning: truncated");
    }

    #[test]
    fn test_invalid_state_display() {
        let err = ScanError::InvalidState(State::Done);
        assert_eq!(err.to_string(), "scanner bug: entered the loop in state Done");
    }
}
