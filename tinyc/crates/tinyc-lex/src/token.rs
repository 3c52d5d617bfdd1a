//! Token definitions for the TINY language.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact lexeme that produced it
//! and the source line it was finished on.

use std::fmt;

/// The closed set of token categories the scanner can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Returned on every call once the source is exhausted.
    EndFile,
    /// A malformed or unrecognized lexeme.
    Error,

    // Reserved words
    /// `if`
    If,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `end`
    End,
    /// `repeat`
    Repeat,
    /// `until`
    Until,
    /// `read`
    Read,
    /// `write`
    Write,

    /// A run of letters that is not a reserved word.
    Id,
    /// A run of decimal digits.
    Num,

    // Operators
    /// `:=`
    Assign,
    /// `=`
    Eq,
    /// `<`
    Lt,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Over,

    // Punctuation
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `;`
    Semi,
}

impl TokenKind {
    /// Returns true for the eight reserved words.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::End
                | TokenKind::Repeat
                | TokenKind::Until
                | TokenKind::Read
                | TokenKind::Write
        )
    }

    /// Returns the upper-case name used in listings and JSON dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::EndFile => "ENDFILE",
            TokenKind::Error => "ERROR",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::End => "END",
            TokenKind::Repeat => "REPEAT",
            TokenKind::Until => "UNTIL",
            TokenKind::Read => "READ",
            TokenKind::Write => "WRITE",
            TokenKind::Id => "ID",
            TokenKind::Num => "NUM",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Eq => "EQ",
            TokenKind::Lt => "LT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Over => "OVER",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Semi => "SEMI",
        }
    }

    /// Returns the fixed spelling of operators and punctuation.
    ///
    /// Reserved words, identifiers, numbers, errors and end of file have no
    /// fixed spelling and return `None`.
    pub fn symbol(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Assign => ":=",
            TokenKind::Eq => "=",
            TokenKind::Lt => "<",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Times => "*",
            TokenKind::Over => "/",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Semi => ";",
            _ => return None,
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single token produced by the scanner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token category.
    pub kind: TokenKind,

    /// Exact source text of the token. Empty for end of file.
    pub lexeme: String,

    /// Line on which the token was completed (1-based, 0 before any line
    /// has been read).
    pub line: u32,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    /// Returns true if this is the end-of-file token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndFile
    }

    /// Returns true if this is an error token.
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }
}

/// Formats the token the way a TINY listing describes it, e.g.
/// `reserved word: if`, `NUM, val= 34` or `:=`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            kind if kind.is_reserved() => write!(f, "reserved word: {}", self.lexeme),
            TokenKind::EndFile => f.write_str("EOF"),
            TokenKind::Num => write!(f, "NUM, val= {}", self.lexeme),
            TokenKind::Id => write!(f, "ID, name= {}", self.lexeme),
            TokenKind::Error => write!(f, "ERROR: {}", self.lexeme),
            kind => f.write_str(kind.symbol().unwrap_or_else(|| kind.name())),
        }
    }
}
