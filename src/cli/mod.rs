// src/cli/mod.rs
use std::path::PathBuf;

use clap::Parser;

use crate::crypto::Cipher;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate passwords and encrypt them, or any file, under a fresh key", long_about = None)]
pub struct Args {
    /// Print generated or decrypted passwords as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Cipher for new artifacts (chacha20poly1305 or aes256gcm)
    #[arg(long, global = true)]
    pub cipher: Option<Cipher>,

    /// Log file path
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Command to execute; omit for the interactive menu
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
