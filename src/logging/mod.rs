// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use log::LevelFilter;
use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialised: {0}")]
    AlreadyInitialised(String),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Send log records to the configured log file.
///
/// Logging goes to a file only, so prompts and password output on the
/// terminal stay clean. Passwords and raw keys are never passed to the
/// logger; key fingerprints are.
pub fn init(config: &Config) -> Result<()> {
    init_with(&config.log_file, config.log_level)
}

pub fn init_with(log_file: &Path, level: LevelFilter) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialised(e.to_string()))?;

    log::debug!("Logging to {} at {}", log_file.display(), level);
    Ok(())
}
