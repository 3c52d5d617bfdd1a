//! Tinyscan CLI - drives the TINY scanner over a source file.
//!
//! This is the main entry point for the tinyscan application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{common::OutputFormat, run_init, run_scan, InitArgs, ScanArgs};
use config::Config;
use error::{Result, TinyscanError};

/// Tinyscan - tokenize TINY source files
///
/// Prints the classic TINY scanner listing (source echo and token trace)
/// or dumps the token stream as JSON.
#[derive(Parser, Debug)]
#[command(name = "tinyscan")]
#[command(author = "Tiny Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize TINY source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "TINYSCAN_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TINYSCAN_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "TINYSCAN_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the tinyscan CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a source file
    ///
    /// Runs the scanner to end of file. Exits with an error if any
    /// malformed token was found.
    Scan(ScanCommand),

    /// Write a default tinyscan.toml
    Init(InitCommand),
}

/// Arguments for the scan subcommand.
#[derive(Parser, Debug)]
struct ScanCommand {
    /// TINY source file
    #[arg(required = true)]
    input: PathBuf,

    /// Echo each source line as it is read
    #[arg(short, long, env = "TINYSCAN_ECHO_SOURCE", overrides_with = "no_echo_source")]
    echo_source: bool,

    /// Turn source echo off even if the config file enables it
    #[arg(long, overrides_with = "echo_source")]
    no_echo_source: bool,

    /// Print one trace line per token
    #[arg(short, long, env = "TINYSCAN_TRACE_SCAN", overrides_with = "no_trace_scan")]
    trace_scan: bool,

    /// Turn the token trace off even if the config file enables it
    #[arg(long, overrides_with = "trace_scan")]
    no_trace_scan: bool,

    /// Bytes per line buffer refill
    #[arg(
        long,
        env = "TINYSCAN_LINE_CAPACITY",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    line_capacity: Option<u64>,

    /// Output format
    #[arg(short = 'F', long, value_enum, env = "TINYSCAN_FORMAT")]
    format: Option<OutputFormat>,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to write tinyscan.toml into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing tinyscan.toml
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the tinyscan CLI.
fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Parses arguments, loads configuration, initializes logging and runs the
/// selected command.
fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Log output goes to stderr so it never mixes with the listing on stdout.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| TinyscanError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Scan(args) => execute_scan(args, config),
        Commands::Init(args) => execute_init(args),
    }
}

/// Execute the scan command.
///
/// Command-line flags take precedence over the configuration file.
fn execute_scan(args: ScanCommand, config: Config) -> Result<()> {
    let scan_args = build_scan_args(args, &config);
    run_scan(scan_args)?;
    Ok(())
}

/// Merge the scan flags over the configuration file settings.
fn build_scan_args(args: ScanCommand, config: &Config) -> ScanArgs {
    let mut scan = config.scan.clone();
    scan.echo_source = switch(scan.echo_source, args.echo_source, args.no_echo_source);
    scan.trace_scan = switch(scan.trace_scan, args.trace_scan, args.no_trace_scan);
    if let Some(capacity) = args.line_capacity {
        scan.line_capacity = usize::try_from(capacity).unwrap_or(usize::MAX);
    }
    if let Some(format) = args.format {
        scan.format = format;
    }

    ScanArgs {
        input: args.input,
        options: scan.to_scan_options(),
        format: scan.format,
    }
}

/// Resolves an on/off flag pair over the config file value.
fn switch(config: bool, on: bool, off: bool) -> bool {
    if off {
        false
    } else {
        on || config
    }
}

/// Execute the init command.
fn execute_init(args: InitCommand) -> Result<()> {
    let target = run_init(InitArgs {
        force: args.force,
        path: args.path,
    })?;
    println!("Created {}", target.display());
    Ok(())
}
