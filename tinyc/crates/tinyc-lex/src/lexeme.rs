//! Lexeme accumulator.
//!
//! Collects the characters saved while recognizing one token. Storage grows
//! freely during a token; between tokens any growth past
//! [`INLINE_CAPACITY`] is released so one huge identifier does not pin
//! memory for the rest of the scan.

/// Capacity kept between tokens. Matches the longest lexeme expected in
/// ordinary TINY source.
pub const INLINE_CAPACITY: usize = 40;

/// Growable buffer for the lexeme under construction.
#[derive(Debug)]
pub struct Lexeme {
    text: String,
}

impl Default for Lexeme {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexeme {
    /// Creates an empty accumulator with [`INLINE_CAPACITY`] reserved.
    pub fn new() -> Self {
        Self {
            text: String::with_capacity(INLINE_CAPACITY),
        }
    }

    /// Appends one source byte.
    ///
    /// Bytes are mapped one-to-one onto chars, so a stray non-ASCII byte is
    /// kept (as its Latin-1 char) rather than dropped.
    pub fn save(&mut self, c: u8) {
        self.text.push(char::from(c));
    }

    /// Returns the characters saved since the last reset.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the finished lexeme as an owned string.
    pub fn finalize(&self) -> String {
        self.text.clone()
    }

    /// Starts a new lexeme, releasing storage grown by the previous one.
    pub fn reset(&mut self) {
        self.text.clear();
        if self.text.capacity() > INLINE_CAPACITY {
            self.text.shrink_to(INLINE_CAPACITY);
        }
    }

    /// Number of characters saved, one per source byte.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns true if nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Currently allocated capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.text.capacity()
    }
}
