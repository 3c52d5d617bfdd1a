//! Comment skipping.
//!
//! Comments run from `{` to the next `}` and do not nest. A comment still
//! open at end of input ends the scan like a normal end of file.

use std::io::{BufRead, Write};

use tracing::warn;

use super::state::{State, Step};
use super::Scanner;
use crate::token::TokenKind;

impl<R: BufRead, W: Write> Scanner<R, W> {
    /// IN_COMMENT: drop everything up to and including `}`.
    pub(super) fn in_comment(&self, c: Option<u8>) -> Step {
        match c {
            Some(b'}') => Step::skip(State::Start),
            Some(_) => Step::skip(State::InComment),
            None => {
                warn!(line = self.line(), "comment still open at end of input");
                Step::done_unsaved(TokenKind::EndFile)
            },
        }
    }
}
