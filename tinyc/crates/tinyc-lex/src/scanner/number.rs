//! Number literal lexing.
//!
//! TINY numbers are plain runs of decimal digits. The value is left as text;
//! converting it is the parser's job.

use std::io::{BufRead, Write};

use super::state::{State, Step};
use super::Scanner;
use crate::token::TokenKind;

impl<R: BufRead, W: Write> Scanner<R, W> {
    /// IN_NUMBER: accumulate digits; the first non-digit is pushed back.
    pub(super) fn in_number(&mut self, c: Option<u8>) -> Step {
        match c {
            Some(b) if b.is_ascii_digit() => Step::save(State::InNumber),
            _ => {
                self.buffer.unread();
                Step::done_unsaved(TokenKind::Num)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Scanner, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        Scanner::from_source(source).map(|t| t.unwrap()).collect()
    }

    #[test]
    fn test_single_digit() {
        let tokens = lex_all("7");
        assert_eq!(tokens, vec![Token::new(TokenKind::Num, "7", 1)]);
    }

    #[test]
    fn test_digit_run() {
        let tokens = lex_all("0012345");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].lexeme, "0012345");
    }

    #[test]
    fn test_number_then_letters() {
        let tokens = lex_all("12abc");
        assert_eq!(tokens[0].kind, TokenKind::Num);
        assert_eq!(tokens[0].lexeme, "12");
        assert_eq!(tokens[1].kind, TokenKind::Id);
        assert_eq!(tokens[1].lexeme, "abc");
    }

    #[test]
    fn test_number_then_operator() {
        let tokens = lex_all("34+22");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Num, TokenKind::Plus, TokenKind::Num]);
    }

    #[test]
    fn test_number_at_end_of_line() {
        let tokens = lex_all("1\n2");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].lexeme, "2");
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_very_long_number() {
        let digits = "9".repeat(5000);
        let tokens = lex_all(&digits);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].lexeme, digits);
    }

    #[test]
    fn test_property_digit_runs() {
        use proptest::prelude::*;

        proptest!(|(digits in "[0-9]{1,60}", tail in "[ ;+)]")| {
            let source = format!("{}{}", digits, tail);
            let tokens = lex_all(&source);
            assert_eq!(tokens[0].kind, TokenKind::Num);
            assert_eq!(&tokens[0].lexeme, &digits);
            if tail != " " {
                assert_eq!(tokens.len(), 2);
                assert_eq!(tokens[1].lexeme, tail);
            } else {
                assert_eq!(tokens.len(), 1);
            }
        });
    }
}
