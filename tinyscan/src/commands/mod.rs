//! Command modules for the tinyscan CLI.
//!
//! Each subcommand is implemented in its own file.

pub mod common;

pub mod init;
pub mod scan;

// Re-export command types and functions
pub use init::{run_init, InitArgs};
pub use scan::{run_scan, ScanArgs};
