//! Core scanner implementation.
//!
//! This module contains the Scanner struct, the DFA loop and the START
//! state.

use std::io::{self, BufRead, Write};

use tracing::trace;

use super::operator::operator_kind;
use super::state::{State, Step};
use crate::config::ScanOptions;
use crate::error::{ScanError, ScanResult};
use crate::lexeme::Lexeme;
use crate::line_buffer::LineBuffer;
use crate::listing::Listing;
use crate::token::{Token, TokenKind};

/// Scanner for TINY source.
///
/// Produces one token per [`next_token`](Scanner::next_token) call. The line
/// buffer and lexeme accumulator persist between calls, so a parser can
/// pull tokens on demand.
///
/// # Example
///
/// ```
/// use tinyc_lex::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::from_source("x := 34+22;");
///
/// let token = scanner.next_token().unwrap();
/// assert_eq!(token.kind, TokenKind::Id);
/// assert_eq!(token.lexeme, "x");
/// assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Assign);
/// ```
pub struct Scanner<R, W = io::Sink> {
    /// Source characters with one character of pushback.
    pub(super) buffer: LineBuffer<R>,

    /// Characters of the token being recognized.
    pub(super) lexeme: Lexeme,

    /// Echo and trace destination.
    pub(super) listing: Listing<W>,

    /// Set once the iterator has yielded its last item.
    finished: bool,
}

impl<R: BufRead> Scanner<R> {
    /// Creates a scanner with default options and no listing.
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ScanOptions::default())
    }

    /// Creates a scanner whose listing output is discarded.
    pub fn with_options(reader: R, options: ScanOptions) -> Self {
        Scanner::with_listing(reader, io::sink(), options)
    }
}

impl<'a> Scanner<&'a [u8]> {
    /// Creates a scanner over an in-memory string.
    pub fn from_source(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }
}

impl<R: BufRead, W: Write> Scanner<R, W> {
    /// Creates a scanner that writes echo and trace lines to `listing`.
    pub fn with_listing(reader: R, listing: W, options: ScanOptions) -> Self {
        Self {
            buffer: LineBuffer::new(reader, options.line_capacity),
            lexeme: Lexeme::new(),
            listing: Listing::new(listing, options.echo_source, options.trace_scan),
            finished: false,
        }
    }

    /// Returns the next token.
    ///
    /// Bad input yields a [`TokenKind::Error`] token and scanning can go on.
    /// Once the input is exhausted every call returns
    /// [`TokenKind::EndFile`].
    ///
    /// # Errors
    ///
    /// Fails only when reading the source or writing the listing fails, or
    /// on an internal state defect.
    pub fn next_token(&mut self) -> ScanResult<Token> {
        self.lexeme.reset();

        let mut state = State::Start;
        let mut kind = TokenKind::Error;

        while state != State::Done {
            let c = self.buffer.next_char(&mut self.listing)?;

            let step = match state {
                State::Start => start(c),
                State::InComment => self.in_comment(c),
                State::InAssign => self.in_assign(c),
                State::InNumber => self.in_number(c),
                State::InIdentifier => self.in_identifier(c),
                State::Done => return Err(ScanError::InvalidState(state)),
            };

            if let (true, Some(c)) = (step.save, c) {
                self.lexeme.save(c);
            }
            if let Some(finished) = step.kind {
                kind = finished;
            }
            state = step.next;
        }

        let token = Token::new(kind, self.lexeme.finalize(), self.buffer.line_number());
        trace!(
            line = token.line,
            kind = %token.kind,
            lexeme = %token.lexeme,
            "scanned token"
        );
        self.listing.trace(&token)?;
        Ok(token)
    }

    /// Scans the rest of the input, end-of-file token included.
    pub fn scan_all(&mut self) -> ScanResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let eof = token.is_eof();
            tokens.push(token);
            if eof {
                return Ok(tokens);
            }
        }
    }

    /// Returns the number of the physical line most recently read.
    pub fn line(&self) -> u32 {
        self.buffer.line_number()
    }

    /// Returns true once the source has been exhausted.
    pub fn is_at_end(&self) -> bool {
        self.buffer.is_at_end()
    }

    /// Consumes the scanner and returns the listing writer.
    pub fn into_listing(self) -> W {
        self.listing.into_inner()
    }
}

/// START: skip whitespace and dispatch on the first character of a token.
fn start(c: Option<u8>) -> Step {
    match c {
        Some(b) if b.is_ascii_digit() => Step::save(State::InNumber),
        Some(b) if b.is_ascii_alphabetic() => Step::save(State::InIdentifier),
        Some(b':') => Step::save(State::InAssign),
        Some(b' ' | b'\t' | b'\n') => Step::skip(State::Start),
        Some(b'{') => Step::skip(State::InComment),
        Some(b) => Step::done(operator_kind(b)),
        None => Step::done_unsaved(TokenKind::EndFile),
    }
}

/// Yields tokens up to, but not including, end of file. Stops after the
/// first error.
impl<R: BufRead, W: Write> Iterator for Scanner<R, W> {
    type Item = ScanResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.finished = true;
                None
            },
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            },
            ok => Some(ok),
        }
    }
}
