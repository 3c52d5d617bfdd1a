//! Scan command implementation.
//!
//! Opens a TINY source file, runs the scanner over it and writes the
//! listing (source echo and token trace) or a JSON token dump to stdout.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, warn};

use tinyc_lex::{ScanOptions, Scanner};

use crate::commands::common::{error_messages, OutputFormat, TokenRecord};
use crate::error::{Result, TinyscanError};

/// Arguments for the scan command.
#[derive(Debug, Clone)]
pub struct ScanArgs {
    /// Source file to scan.
    pub input: PathBuf,
    /// Scanner options (echo, trace, line capacity).
    pub options: ScanOptions,
    /// Output format.
    pub format: OutputFormat,
}

/// Counts gathered during one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Tokens returned before end of file.
    pub tokens: usize,
    /// Error tokens among them.
    pub errors: usize,
    /// Physical lines read.
    pub lines: u32,
}

/// Scan command handler.
pub struct ScanCommand {
    args: ScanArgs,
}

impl ScanCommand {
    /// Create a new ScanCommand.
    pub fn new(args: ScanArgs) -> Self {
        Self { args }
    }

    /// Scan the input, writing all output to `out`.
    pub fn run_with<W: Write>(&self, out: &mut W) -> Result<ScanSummary> {
        let start_time = Instant::now();
        self.validate_input(&self.args.input)?;

        let file = File::open(&self.args.input).map_err(|e| {
            TinyscanError::FileOperation(format!("{}: {}", self.args.input.display(), e))
        })?;
        let reader = BufReader::new(file);

        let options = self.args.options;
        if options.has_listing() {
            writeln!(out, "\nTINY COMPILATION: {}", self.args.input.display())?;
        }

        let json = self.args.format == OutputFormat::Json;
        let mut records = Vec::new();
        let mut summary = ScanSummary::default();

        let mut scanner = Scanner::with_listing(reader, &mut *out, options);
        loop {
            let token = scanner.next_token()?;
            if json {
                records.push(TokenRecord::from(&token));
            }
            if token.is_eof() {
                break;
            }
            if token.is_error() {
                summary.errors += 1;
                warn!(line = token.line, lexeme = %token.lexeme, "lexical error");
            }
            summary.tokens += 1;
        }
        summary.lines = scanner.line();
        let out = scanner.into_listing();

        if json {
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        }
        out.flush()?;

        info!(
            file = %self.args.input.display(),
            tokens = summary.tokens,
            errors = summary.errors,
            lines = summary.lines,
            "scan finished in {:.2}s",
            start_time.elapsed().as_secs_f64()
        );

        Ok(summary)
    }

    /// Check that the input exists and is a regular file.
    fn validate_input(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(TinyscanError::Validation(format!(
                "{} {}",
                error_messages::INPUT_PATH_NOT_EXIST,
                path.display()
            )));
        }
        if !path.is_file() {
            return Err(TinyscanError::Validation(format!(
                "{} {}",
                error_messages::INPUT_PATH_NOT_FILE,
                path.display()
            )));
        }
        debug!(path = %path.display(), "input validated");
        Ok(())
    }
}

/// Run the scan command against stdout.
///
/// Fails with [`TinyscanError::LexicalErrors`] after the whole file has been
/// scanned if any error token was produced.
pub fn run_scan(args: ScanArgs) -> Result<ScanSummary> {
    let input = args.input.display().to_string();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = ScanCommand::new(args).run_with(&mut out)?;
    if summary.errors > 0 {
        return Err(TinyscanError::LexicalErrors {
            count: summary.errors,
            file: input,
        });
    }
    Ok(summary)
}
