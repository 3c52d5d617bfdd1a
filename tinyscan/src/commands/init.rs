//! Init command implementation.
//!
//! Writes a `tinyscan.toml` with default settings so they can be edited.

use std::path::PathBuf;

use tracing::info;

use crate::commands::common::error_messages;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{Result, TinyscanError};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to write into (default: current directory).
    pub path: Option<PathBuf>,
}

/// Write the default configuration file and return its path.
pub fn run_init(args: InitArgs) -> Result<PathBuf> {
    let dir = args.path.unwrap_or_else(|| PathBuf::from("."));
    let target = dir.join(CONFIG_FILE_NAME);

    if target.exists() && !args.force {
        return Err(TinyscanError::Validation(format!(
            "{} {}",
            error_messages::CONFIG_EXISTS,
            target.display()
        )));
    }

    Config::default().save_to_path(&target)?;
    info!(path = %target.display(), "wrote default configuration");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        let target = run_init(InitArgs {
            force: false,
            path: Some(dir.path().to_path_buf()),
        })
        .unwrap();

        assert_eq!(Config::load_from_path(&target).unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let args = InitArgs {
            force: false,
            path: Some(dir.path().to_path_buf()),
        };
        run_init(args.clone()).unwrap();

        let result = run_init(args);
        assert!(matches!(result, Err(TinyscanError::Validation(_))));
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "garbage").unwrap();

        let target = run_init(InitArgs {
            force: true,
            path: Some(dir.path().to_path_buf()),
        })
        .unwrap();
        assert!(Config::load_from_path(&target).is_ok());
    }
}
