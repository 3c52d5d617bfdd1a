//! Reserved-word classification.

use crate::token::TokenKind;

/// Reserved words of TINY. Must stay sorted by spelling: [`classify`]
/// binary-searches it.
pub const RESERVED_WORDS: [(&str, TokenKind); 8] = [
    ("else", TokenKind::Else),
    ("end", TokenKind::End),
    ("if", TokenKind::If),
    ("read", TokenKind::Read),
    ("repeat", TokenKind::Repeat),
    ("then", TokenKind::Then),
    ("until", TokenKind::Until),
    ("write", TokenKind::Write),
];

/// Classifies a finished identifier lexeme.
///
/// Returns the reserved word's kind on an exact match and
/// [`TokenKind::Id`] otherwise.
///
/// # Example
///
/// ```
/// use tinyc_lex::{classify, TokenKind};
///
/// assert_eq!(classify("until"), TokenKind::Until);
/// assert_eq!(classify("untilx"), TokenKind::Id);
/// ```
pub fn classify(text: &str) -> TokenKind {
    classify_in(&RESERVED_WORDS, text)
}

/// Binary search over `table`, which must be sorted by spelling.
///
/// The interval `[lo, hi)` halves around its midpoint until the text
/// matches or the interval is empty.
pub fn classify_in(table: &[(&str, TokenKind)], text: &str) -> TokenKind {
    let mut lo = 0;
    let mut hi = table.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let (word, kind) = table[mid];
        match text.cmp(word) {
            std::cmp::Ordering::Equal => return kind,
            std::cmp::Ordering::Less => hi = mid,
            std::cmp::Ordering::Greater => lo = mid + 1,
        }
    }

    TokenKind::Id
}
