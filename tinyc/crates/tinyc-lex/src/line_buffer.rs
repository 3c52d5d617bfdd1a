//! Line-oriented input buffer with one character of pushback.
//!
//! The buffer holds at most `capacity` bytes of the current physical line,
//! refilling from the underlying reader when exhausted. It tracks the
//! physical line number for diagnostics and echoes each refill to the
//! listing when source echo is on.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::listing::Listing;

/// A bounded line buffer over a byte reader.
///
/// # Example
///
/// ```
/// use tinyc_lex::{LineBuffer, Listing};
///
/// let mut listing = Listing::new(std::io::sink(), false, false);
/// let mut buffer = LineBuffer::new("ab".as_bytes(), 256);
///
/// assert_eq!(buffer.next_char(&mut listing).unwrap(), Some(b'a'));
/// buffer.unread();
/// assert_eq!(buffer.next_char(&mut listing).unwrap(), Some(b'a'));
/// assert_eq!(buffer.next_char(&mut listing).unwrap(), Some(b'b'));
/// assert_eq!(buffer.next_char(&mut listing).unwrap(), None);
/// ```
pub struct LineBuffer<R> {
    /// Source of raw bytes.
    reader: R,

    /// Bytes of the current refill.
    line: Vec<u8>,

    /// Read position within `line`.
    position: usize,

    /// Maximum number of bytes per refill.
    capacity: usize,

    /// Number of the physical line most recently read (1-based, 0 before
    /// the first read).
    line_number: u32,

    /// Whether the next refill begins a new physical line.
    at_line_start: bool,

    /// Set once the reader is exhausted.
    eof: bool,

    /// Whether the last `next_char` can still be undone.
    can_unread: bool,
}

impl<R: BufRead> LineBuffer<R> {
    /// Creates an empty buffer; nothing is read until the first `next_char`.
    pub fn new(reader: R, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            reader,
            line: Vec::with_capacity(capacity),
            position: 0,
            capacity,
            line_number: 0,
            at_line_start: true,
            eof: false,
            can_unread: false,
        }
    }

    /// Returns the next byte, refilling from the reader when the current
    /// line is used up. Returns `None` at end of input, and on every call
    /// after that.
    pub fn next_char<W: Write>(&mut self, listing: &mut Listing<W>) -> io::Result<Option<u8>> {
        if self.position >= self.line.len() && !self.refill(listing)? {
            self.can_unread = false;
            return Ok(None);
        }

        let c = self.line[self.position];
        self.position += 1;
        self.can_unread = true;
        Ok(Some(c))
    }

    /// Undoes the most recent `next_char`.
    ///
    /// Only one read can be undone, and nothing happens if that read
    /// returned end of input.
    pub fn unread(&mut self) {
        if self.eof || !self.can_unread {
            return;
        }
        self.position -= 1;
        self.can_unread = false;
    }

    /// Returns the number of the physical line most recently read.
    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    /// Returns true once the reader has reported end of input.
    pub fn is_at_end(&self) -> bool {
        self.eof
    }

    /// Reads the next chunk of input into `line`: up to and including a
    /// newline, or `capacity` bytes, whichever comes first.
    ///
    /// Returns false when the reader is exhausted.
    fn refill<W: Write>(&mut self, listing: &mut Listing<W>) -> io::Result<bool> {
        if self.eof {
            return Ok(false);
        }

        self.line.clear();
        self.position = 0;

        let mut found_newline = false;
        while !found_newline && self.line.len() < self.capacity {
            let available = match self.reader.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                break;
            }

            let room = self.capacity - self.line.len();
            let window = &available[..available.len().min(room)];
            let used = match window.iter().position(|&b| b == b'\n') {
                Some(index) => {
                    found_newline = true;
                    index + 1
                },
                None => window.len(),
            };
            self.line.extend_from_slice(&window[..used]);
            self.reader.consume(used);
        }

        if self.line.is_empty() {
            self.eof = true;
            listing.end_of_input()?;
            return Ok(false);
        }

        let starts_line = self.at_line_start;
        if starts_line {
            self.line_number += 1;
        }
        self.at_line_start = found_newline;

        if !found_newline && self.line.len() == self.capacity {
            debug!(
                line = self.line_number,
                capacity = self.capacity,
                "line exceeds buffer capacity, continuing in next refill"
            );
        }

        listing.echo(self.line_number, &self.line, starts_line)?;
        Ok(true)
    }
}
