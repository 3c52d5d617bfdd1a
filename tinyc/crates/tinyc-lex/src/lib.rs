//! tinyc-lex - Lexical Analyzer for the TINY Programming Language
//!
//! This crate turns TINY source text into tokens, one per call, for a
//! parser to consume. The scanner is a hand-written deterministic finite
//! automaton reading from a line buffer with one character of pushback.
//!
//! # Example Usage
//!
//! ```
//! use tinyc_lex::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::from_source("x := 34+22;");
//!
//! // Get tokens one at a time
//! loop {
//!     let token = scanner.next_token().unwrap();
//!     if token.kind == TokenKind::EndFile {
//!         break;
//!     }
//!     println!("{}: {}", token.line, token);
//! }
//!
//! // Or iterate; the iterator stops before end of file
//! let count = Scanner::from_source("if 3").count();
//! assert_eq!(count, 2);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`scanner`] - DFA driver
//! - [`line_buffer`] - Bounded line buffer with pushback
//! - [`lexeme`] - Lexeme accumulator
//! - [`reserved`] - Reserved-word classifier
//! - [`listing`] - Source echo and token trace output
//!
//! # Token Categories
//!
//! ## Reserved words
//!
//! `if`, `then`, `else`, `end`, `repeat`, `until`, `read`, `write`
//!
//! ## Identifiers and numbers
//!
//! Identifiers are runs of letters (`[a-zA-Z]+`), numbers are runs of
//! digits (`[0-9]+`). Mixed runs split into separate tokens.
//!
//! ## Operators and punctuation
//!
//! `:=`, `=`, `<`, `+`, `-`, `*`, `/`, `(`, `)`, `;`
//!
//! ## Comments
//!
//! `{ ... }`, spanning lines, not nested.
//!
//! ## Special
//!
//! - **EndFile**: End of input, returned on every call once reached
//! - **Error**: A lone `:` or an unrecognized character

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod lexeme;
pub mod line_buffer;
pub mod listing;
pub mod reserved;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::{ScanOptions, DEFAULT_LINE_CAPACITY};
pub use error::{ScanError, ScanResult};
pub use lexeme::Lexeme;
pub use line_buffer::LineBuffer;
pub use listing::Listing;
pub use reserved::{classify, RESERVED_WORDS};
pub use scanner::{Scanner, State};
pub use token::{Token, TokenKind};
