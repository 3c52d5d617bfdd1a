//! Identifier and reserved-word lexing.
//!
//! Identifiers are runs of ASCII letters only; a digit ends the run.

use std::io::{BufRead, Write};

use super::state::{State, Step};
use super::Scanner;
use crate::reserved::classify;

impl<R: BufRead, W: Write> Scanner<R, W> {
    /// IN_IDENTIFIER: accumulate letters. On the first non-letter, push it
    /// back and reclassify the finished run against the reserved words.
    pub(super) fn in_identifier(&mut self, c: Option<u8>) -> Step {
        match c {
            Some(b) if b.is_ascii_alphabetic() => Step::save(State::InIdentifier),
            _ => {
                self.buffer.unread();
                Step::done_unsaved(classify(self.lexeme.as_str()))
            },
        }
    }
}
