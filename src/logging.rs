//! Logger setup.
//!
//! stdout and stderr belong to the game screen, so records only go to a
//! file, and only when one is configured.

use std::fs::{File, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

use crate::config::Config;

/// Install the global logger. Without a log path this is a no-op and the
/// `log` macros stay silent. Filter comes from `RUST_LOG`, default `info`.
pub fn init(config: &Config) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = open_log_file(path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("installing logger")?;
    Ok(())
}

/// Open `path` for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}
