//! Listing side channel.
//!
//! The listing receives the optional source echo and token trace. It is
//! separate from `tracing` output: the listing is user-facing program output
//! in the classic TINY format, `tracing` is the developer log.

use std::io::{self, Write};

use crate::token::Token;

/// Destination for source echo and token trace lines.
///
/// A physical line longer than the line buffer is echoed over several
/// calls. Trace lines for tokens finished before the line is complete are
/// held back and written after it, so the echo stays whole and each line is
/// followed by its own tokens.
pub struct Listing<W> {
    out: W,
    echo_source: bool,
    trace_scan: bool,
    /// An echoed line has started but its newline has not been seen yet.
    line_open: bool,
    /// Trace lines waiting for the open line to finish.
    held: Vec<u8>,
}

impl<W: Write> Listing<W> {
    /// Wraps `out`; each side channel is written only when its flag is set.
    pub fn new(out: W, echo_source: bool, trace_scan: bool) -> Self {
        Self {
            out,
            echo_source,
            trace_scan,
            line_open: false,
            held: Vec::new(),
        }
    }

    /// Echoes one line buffer refill.
    ///
    /// The first chunk of a physical line gets the `"{line:>4}: "` prefix;
    /// continuation chunks are written as-is.
    pub fn echo(&mut self, line: u32, text: &[u8], starts_line: bool) -> io::Result<()> {
        if !self.echo_source {
            return Ok(());
        }
        if starts_line {
            write!(self.out, "{:>4}: ", line)?;
        }
        self.out.write_all(text)?;
        self.line_open = !text.ends_with(b"\n");
        if self.line_open {
            return Ok(());
        }
        self.flush_held()
    }

    /// Closes an echoed line left without a newline at end of input and
    /// writes any trace lines held for it.
    pub fn end_of_input(&mut self) -> io::Result<()> {
        if !self.line_open {
            return Ok(());
        }
        self.line_open = false;
        self.out.write_all(b"\n")?;
        self.flush_held()
    }

    /// Writes the trace line for a returned token.
    pub fn trace(&mut self, token: &Token) -> io::Result<()> {
        if !self.trace_scan {
            return Ok(());
        }
        if self.line_open {
            writeln!(self.held, "\t{}: {}", token.line, token)
        } else {
            writeln!(self.out, "\t{}: {}", token.line, token)
        }
    }

    /// Consumes the listing and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_held(&mut self) -> io::Result<()> {
        if self.held.is_empty() {
            return Ok(());
        }
        self.out.write_all(&self.held)?;
        self.held.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    #[test]
    fn test_echo_prefixes_first_chunk_only() {
        let mut listing = Listing::new(Vec::new(), true, false);
        listing.echo(3, b"abc", true).unwrap();
        listing.echo(3, b"def\n", false).unwrap();
        assert_eq!(String::from_utf8(listing.into_inner()).unwrap(), "   3: abcdef\n");
    }

    #[test]
    fn test_trace_format() {
        let mut listing = Listing::new(Vec::new(), false, true);
        listing.trace(&Token::new(TokenKind::Num, "34", 12)).unwrap();
        assert_eq!(
            String::from_utf8(listing.into_inner()).unwrap(),
            "\t12: NUM, val= 34\n"
        );
    }

    #[test]
    fn test_disabled_channels_write_nothing() {
        let mut listing = Listing::new(Vec::new(), false, false);
        listing.echo(1, b"x := 1;\n", true).unwrap();
        listing.trace(&Token::new(TokenKind::Id, "x", 1)).unwrap();
        listing.end_of_input().unwrap();
        assert!(listing.into_inner().is_empty());
    }

    #[test]
    fn test_trace_held_until_line_completes() {
        let mut listing = Listing::new(Vec::new(), true, true);
        listing.echo(1, b"ab", true).unwrap();
        listing.trace(&Token::new(TokenKind::Id, "ab", 1)).unwrap();
        listing.echo(1, b";\n", false).unwrap();
        listing.trace(&Token::new(TokenKind::Semi, ";", 1)).unwrap();
        assert_eq!(
            String::from_utf8(listing.into_inner()).unwrap(),
            "   1: ab;\n\t1: ID, name= ab\n\t1: ;\n"
        );
    }

    #[test]
    fn test_end_of_input_closes_open_line() {
        let mut listing = Listing::new(Vec::new(), true, true);
        listing.echo(2, b"write x", true).unwrap();
        listing.trace(&Token::new(TokenKind::Write, "write", 2)).unwrap();
        listing.end_of_input().unwrap();
        listing.trace(&Token::new(TokenKind::Id, "x", 2)).unwrap();
        assert_eq!(
            String::from_utf8(listing.into_inner()).unwrap(),
            "   2: write x\n\t2: reserved word: write\n\t2: ID, name= x\n"
        );
    }

    #[test]
    fn test_trace_only_is_never_held() {
        let mut listing = Listing::new(Vec::new(), false, true);
        listing.echo(1, b"ab", true).unwrap();
        listing.trace(&Token::new(TokenKind::Id, "ab", 1)).unwrap();
        assert_eq!(String::from_utf8(listing.into_inner()).unwrap(), "\t1: ID, name= ab\n");
    }
}
