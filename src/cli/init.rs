//! Init command implementation.
//!
//! Writes a default `avatar.yaml` into a directory.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, CONFIG_FILENAME};
use crate::error::{AvatarError, Result};
use crate::output::{display_path, Printer};

/// Write a default avatar.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing avatar.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(AvatarError::Io {
            path: config_path,
            message: format!("{} already exists", CONFIG_FILENAME),
        });
    }

    let yaml = Config::default().to_yaml()?;
    fs::write(&config_path, yaml).map_err(|e| AvatarError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.success("Created", &display_path(&config_path));

    Ok(())
}
