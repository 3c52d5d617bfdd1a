//! DFA states and transitions.

use crate::token::TokenKind;

/// States of the scanner DFA.
///
/// Every call to [`Scanner::next_token`](super::Scanner::next_token) starts
/// in `Start` and returns on reaching `Done`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Between tokens: skipping whitespace and dispatching on the first char.
    Start,
    /// Seen `:`, expecting `=`.
    InAssign,
    /// Inside `{ ... }`.
    InComment,
    /// Inside a run of digits.
    InNumber,
    /// Inside a run of letters.
    InIdentifier,
    /// Token finished.
    Done,
}

/// Outcome of feeding one character to a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Step {
    /// State for the next character.
    pub next: State,
    /// Whether the character belongs to the lexeme.
    pub save: bool,
    /// Token kind, set when `next` is `Done`.
    pub kind: Option<TokenKind>,
}

impl Step {
    /// Saves the character and moves to `next`.
    pub fn save(next: State) -> Self {
        Self {
            next,
            save: true,
            kind: None,
        }
    }

    /// Drops the character and moves to `next`.
    pub fn skip(next: State) -> Self {
        Self {
            next,
            save: false,
            kind: None,
        }
    }

    /// Saves the character and finishes the token.
    pub fn done(kind: TokenKind) -> Self {
        Self {
            next: State::Done,
            save: true,
            kind: Some(kind),
        }
    }

    /// Finishes the token without saving the character.
    pub fn done_unsaved(kind: TokenKind) -> Self {
        Self {
            next: State::Done,
            save: false,
            kind: Some(kind),
        }
    }
}
