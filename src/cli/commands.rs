// src/cli/commands.rs
use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::models::{CharacterClass, PasswordLevel};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate passwords from custom settings
    Generate {
        /// Password length (defaults to DEFAULT_PASSWORD_LENGTH)
        #[arg(short, long)]
        length: Option<usize>,

        /// Character classes to draw from
        #[arg(long, value_enum, value_delimiter = ',', default_values_t = CharacterClass::ALL)]
        classes: Vec<CharacterClass>,

        /// Never use the same character twice
        #[arg(long)]
        no_repeat: bool,

        /// Literal text to embed somewhere in the password (repeatable)
        #[arg(long = "fragment")]
        fragments: Vec<String>,

        /// How many passwords to generate
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate passwords from a named preset
    Level {
        /// Preset to use
        #[arg(value_enum)]
        level: PasswordLevel,

        /// How many passwords to generate
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Rate a password with the strength heuristic
    Strength {
        /// Password to rate
        #[arg(required = true)]
        password: String,
    },

    /// Decrypt a saved password list
    DecryptList {
        /// Encrypted list file
        #[arg(long)]
        input: PathBuf,

        /// Key file written when the list was saved
        #[arg(long)]
        key: PathBuf,
    },

    /// Encrypt a file under a fresh key
    EncryptFile {
        /// File to encrypt
        #[arg(long)]
        input: PathBuf,

        /// Encrypted output (defaults to <input>.enc)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Key output (defaults to <input>.key)
        #[arg(long)]
        key: Option<PathBuf>,

        /// Replace the output or key file if it already exists
        #[arg(long)]
        force: bool,
    },

    /// Decrypt a file with its key
    DecryptFile {
        /// Encrypted file
        #[arg(long)]
        input: PathBuf,

        /// Key file
        #[arg(long)]
        key: PathBuf,

        /// Decrypted output (defaults to <input> without .enc)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Replace the decrypted output if it already exists
        #[arg(long)]
        force: bool,
    },
}

/// Where to persist what a generate command produced.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputArgs {
    /// Save the passwords encrypted, one per line, to this file
    #[arg(long, requires = "key")]
    pub save: Option<PathBuf>,

    /// Where to write the key for --save
    #[arg(long, requires = "save")]
    pub key: Option<PathBuf>,

    /// Also write an UNENCRYPTED listing to this file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Replace existing list, key, or export files
    #[arg(long)]
    pub force: bool,
}
