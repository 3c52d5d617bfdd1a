//! Operator and punctuation lexing.
//!
//! Everything but `:=` is a single character and resolves straight from
//! START. `:` must be followed by `=`; a lone `:` is an error.

use std::io::{BufRead, Write};

use super::state::Step;
use super::Scanner;
use crate::token::TokenKind;

/// Maps a character that START cannot otherwise handle to its token kind.
///
/// Unrecognized characters map to [`TokenKind::Error`].
pub fn operator_kind(c: u8) -> TokenKind {
    match c {
        b'=' => TokenKind::Eq,
        b'<' => TokenKind::Lt,
        b'+' => TokenKind::Plus,
        b'-' => TokenKind::Minus,
        b'*' => TokenKind::Times,
        b'/' => TokenKind::Over,
        b'(' => TokenKind::LParen,
        b')' => TokenKind::RParen,
        b';' => TokenKind::Semi,
        _ => TokenKind::Error,
    }
}

impl<R: BufRead, W: Write> Scanner<R, W> {
    /// IN_ASSIGN: `=` completes `:=`; anything else is pushed back and the
    /// `:` becomes an error token.
    pub(super) fn in_assign(&mut self, c: Option<u8>) -> Step {
        match c {
            Some(b'=') => Step::done(TokenKind::Assign),
            _ => {
                self.buffer.unread();
                Step::done_unsaved(TokenKind::Error)
            },
        }
    }
}
