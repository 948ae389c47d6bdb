// src/core/config.rs
use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::crypto::Cipher;

// Configuration for the generator and its host
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub min_password_length: usize,
    pub max_password_length: usize,
    pub max_batch_count: usize,

    // Encryption
    pub cipher: Cipher,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,
            min_password_length: 4,
            max_password_length: 100,
            max_batch_count: 100,

            // Encryption
            cipher: Cipher::ChaCha20Poly1305,

            // Logging
            log_level: LevelFilter::Info,
            log_file: PathBuf::from("./logs/rust_passgen.log"),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Log next to the rest of the app's config when a config dir exists
        if let Some(dir) = crate::utils::get_app_config_dir() {
            config.log_file = dir.join("logs").join("rust_passgen.log");
        }

        config.apply_env(|name| env::var(name).ok());
        config
    }

    fn apply_env<F: Fn(&str) -> Option<String>>(&mut self, var: F) {
        // Password Generation
        if let Some(val) = var("DEFAULT_PASSWORD_LENGTH") {
            match val.parse() {
                Ok(length) => self.default_password_length = length,
                Err(_) => log::warn!("Ignoring invalid DEFAULT_PASSWORD_LENGTH '{}'", val),
            }
        }

        if let Some(val) = var("MIN_PASSWORD_LENGTH") {
            match val.parse() {
                Ok(length) => self.min_password_length = length,
                Err(_) => log::warn!("Ignoring invalid MIN_PASSWORD_LENGTH '{}'", val),
            }
        }

        if let Some(val) = var("MAX_PASSWORD_LENGTH") {
            match val.parse() {
                Ok(length) => self.max_password_length = length,
                Err(_) => log::warn!("Ignoring invalid MAX_PASSWORD_LENGTH '{}'", val),
            }
        }

        if let Some(val) = var("MAX_BATCH_COUNT") {
            match val.parse() {
                Ok(count) => self.max_batch_count = count,
                Err(_) => log::warn!("Ignoring invalid MAX_BATCH_COUNT '{}'", val),
            }
        }

        if self.min_password_length > self.max_password_length {
            log::warn!(
                "MIN_PASSWORD_LENGTH {} exceeds MAX_PASSWORD_LENGTH {}, using defaults",
                self.min_password_length,
                self.max_password_length
            );
            let defaults = Config::default();
            self.min_password_length = defaults.min_password_length;
            self.max_password_length = defaults.max_password_length;
        }

        // Encryption
        if let Some(val) = var("ENCRYPTION_CIPHER") {
            match val.parse() {
                Ok(cipher) => self.cipher = cipher,
                Err(e) => log::warn!("{}, using {}", e, self.cipher),
            }
        }

        // Logging
        if let Some(level) = var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => self.log_level = LevelFilter::Off,
                "error" => self.log_level = LevelFilter::Error,
                "warn" => self.log_level = LevelFilter::Warn,
                "info" => self.log_level = LevelFilter::Info,
                "debug" => self.log_level = LevelFilter::Debug,
                "trace" => self.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Some(file) = var("LOG_FILE") {
            self.log_file = PathBuf::from(file);
        }
    }

    /// Length accepted by the host for custom and batch generation.
    pub fn length_in_range(&self, length: usize) -> bool {
        (self.min_password_length..=self.max_password_length).contains(&length)
    }

    pub fn batch_in_range(&self, count: usize) -> bool {
        (1..=self.max_batch_count).contains(&count)
    }
}
