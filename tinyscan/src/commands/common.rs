//! Common types and utilities for tinyscan commands.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use tinyc_lex::Token;

// ============================================================================
// Output Format
// ============================================================================

/// How the token stream is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Listing only (echo and trace as configured)
    #[default]
    Text,
    /// JSON array of tokens after the scan
    Json,
}

// ============================================================================
// Token Records
// ============================================================================

/// Serializable view of a token for JSON dumps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Upper-case kind name, e.g. `ID` or `ASSIGN`.
    pub kind: String,
    /// Source text of the token.
    pub lexeme: String,
    /// Line the token was completed on.
    pub line: u32,
}

impl From<&Token> for TokenRecord {
    fn from(token: &Token) -> Self {
        Self {
            kind: token.kind.name().to_string(),
            lexeme: token.lexeme.clone(),
            line: token.line,
        }
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when the input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when the input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when the config file already exists.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists (use --force):";
}
