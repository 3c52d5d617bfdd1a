//! Scanner configuration.

/// Default number of bytes read into the line buffer per refill.
pub const DEFAULT_LINE_CAPACITY: usize = 256;

/// Options controlling the scanner's side channels and buffering.
///
/// # Example
///
/// ```
/// use tinyc_lex::ScanOptions;
///
/// let options = ScanOptions::default().with_trace_scan(true);
/// assert!(options.trace_scan);
/// assert!(!options.echo_source);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Echo every physical source line to the listing as it is read.
    pub echo_source: bool,

    /// Write one trace line per returned token to the listing.
    pub trace_scan: bool,

    /// Maximum bytes held by one line buffer refill. Longer lines are
    /// delivered over several refills without losing characters.
    pub line_capacity: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            echo_source: false,
            trace_scan: false,
            line_capacity: DEFAULT_LINE_CAPACITY,
        }
    }
}

impl ScanOptions {
    /// Sets `echo_source`.
    pub fn with_echo_source(mut self, echo_source: bool) -> Self {
        self.echo_source = echo_source;
        self
    }

    /// Sets `trace_scan`.
    pub fn with_trace_scan(mut self, trace_scan: bool) -> Self {
        self.trace_scan = trace_scan;
        self
    }

    /// Sets `line_capacity`. Zero is clamped to one.
    pub fn with_line_capacity(mut self, line_capacity: usize) -> Self {
        self.line_capacity = line_capacity.max(1);
        self
    }

    /// Returns true if either listing channel is on.
    pub fn has_listing(&self) -> bool {
        self.echo_source || self.trace_scan
    }
}
