// src/cli/menu.rs
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use console::style;
use inquire::{Confirm, InquireError, MultiSelect, Select, Text};

use crate::cli::handlers;
use crate::core::artifacts;
use crate::core::config::Config;
use crate::core::PasswordSession;
use crate::generators::{evaluate_strength, PasswordGenerator};
use crate::models::{CharacterClass, GenerationRequest, PasswordLevel};
use crate::utils;

const GENERATE_LEVEL: &str = "🔐  Generate by level";
const GENERATE_CUSTOM: &str = "🛠️  Generate custom password";
const GENERATE_BATCH: &str = "📚  Generate several passwords";
const SHOW_SESSION: &str = "📋  Show session passwords";
const CHECK_STRENGTH: &str = "💪  Check a password's strength";
const SAVE_ENCRYPTED: &str = "💾  Save session (encrypted)";
const EXPORT_PLAINTEXT: &str = "📤  Export session (NOT encrypted)";
const DECRYPT_LIST: &str = "🔓  Decrypt a saved password list";
const ENCRYPT_FILE: &str = "🗄️  Encrypt a file";
const DECRYPT_FILE: &str = "📂  Decrypt a file";
const CLEAR_SESSION: &str = "🗑️  Clear session";
const EXIT: &str = "❌  Exit";

pub fn run_cli_menu(config: &Config, should_exit: Arc<AtomicBool>) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║      🦀 RUST PASSWORD GENERATOR      ║");
    println!("╚══════════════════════════════════════╝");

    let generator = PasswordGenerator::new();
    let mut session = PasswordSession::new();

    while !should_exit.load(Ordering::SeqCst) {
        let options = vec![
            GENERATE_LEVEL,
            GENERATE_CUSTOM,
            GENERATE_BATCH,
            SHOW_SESSION,
            CHECK_STRENGTH,
            SAVE_ENCRYPTED,
            EXPORT_PLAINTEXT,
            DECRYPT_LIST,
            ENCRYPT_FILE,
            DECRYPT_FILE,
            CLEAR_SESSION,
            EXIT,
        ];

        let selection = match Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select, Esc to exit.")
            .with_page_size(20)
            .prompt()
        {
            Ok(selection) => selection,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        if selection == EXIT {
            break;
        }

        let outcome = match selection {
            GENERATE_LEVEL => generate_by_level(&generator, &mut session),
            GENERATE_CUSTOM => generate_custom(config, &generator, &mut session),
            GENERATE_BATCH => generate_batch(config, &generator, &mut session),
            SHOW_SESSION => {
                show_session(&session);
                Ok(())
            }
            CHECK_STRENGTH => check_strength(),
            SAVE_ENCRYPTED => save_encrypted(config, &session),
            EXPORT_PLAINTEXT => export_plaintext(&session),
            DECRYPT_LIST => decrypt_list(),
            ENCRYPT_FILE => encrypt_file(config),
            DECRYPT_FILE => decrypt_file(),
            CLEAR_SESSION => clear_session(&mut session),
            _ => Ok(()),
        };

        match outcome {
            Ok(()) => {}
            Err(e) => match e.downcast_ref::<InquireError>() {
                Some(InquireError::OperationCanceled) => println!("↩️  Cancelled."),
                Some(InquireError::OperationInterrupted) => break,
                _ => {
                    log::error!("{}: {:#}", selection, e);
                    println!("❌ {:#}", e);
                }
            },
        }
    }

    if !session.is_empty() {
        log::info!("Exiting with {} unsaved passwords in session", session.len());
    }
    println!("👋 Goodbye!");
    Ok(())
}

fn prompt_number(message: &str, default: usize) -> Result<usize> {
    let value: usize = Text::new(message)
        .with_default(&default.to_string())
        .prompt()
        .and_then(|s| {
            s.trim()
                .parse()
                .map_err(|_| InquireError::Custom("Invalid number".into()))
        })?;
    Ok(value)
}

fn prompt_path(message: &str, default: Option<PathBuf>) -> Result<PathBuf> {
    let default = default.map(|p| p.display().to_string());
    let mut prompt = Text::new(message);
    if let Some(default) = default.as_deref() {
        prompt = prompt.with_default(default);
    }
    let value = prompt.prompt()?;
    if value.trim().is_empty() {
        anyhow::bail!("A path is required");
    }
    Ok(PathBuf::from(value.trim()))
}

/// Ask before replacing any of `paths` that already exist. `false` means the
/// user declined and nothing should be written.
fn confirm_overwrite(paths: &[&Path]) -> Result<bool> {
    for path in paths.iter().filter(|path| path.exists()) {
        let replace = Confirm::new(&format!("{} already exists. Replace it?", path.display()))
            .with_default(false)
            .prompt()?;
        if !replace {
            println!("↩️  Nothing was written.");
            return Ok(false);
        }
    }
    Ok(true)
}

fn generate_by_level(generator: &PasswordGenerator, session: &mut PasswordSession) -> Result<()> {
    let level = Select::new("Security level:", PasswordLevel::ALL.to_vec()).prompt()?;
    let password = generator.generate(&level.request())?;
    handlers::print_passwords(std::slice::from_ref(&password));
    session.record(password);
    Ok(())
}

fn generate_custom(config: &Config, generator: &PasswordGenerator, session: &mut PasswordSession) -> Result<()> {
    let length = prompt_number("Password length:", config.default_password_length)?;
    if !config.length_in_range(length) {
        anyhow::bail!(
            "Length must be between {} and {}",
            config.min_password_length,
            config.max_password_length
        );
    }

    let classes = MultiSelect::new("Character classes:", CharacterClass::ALL.to_vec())
        .with_default(&[0, 1, 2])
        .prompt()?;

    let allow_repetition = !Confirm::new("Avoid repeated characters?")
        .with_default(false)
        .prompt()?;

    let fragments = Text::new("Words to include (space separated, optional):")
        .with_default("")
        .prompt()?;

    let request = GenerationRequest {
        length,
        classes: classes.into_iter().collect(),
        allow_repetition,
        required_literal_fragments: fragments.split_whitespace().map(String::from).collect(),
    };

    let password = generator.generate(&request)?;
    handlers::print_passwords(std::slice::from_ref(&password));
    session.record(password);
    Ok(())
}

fn generate_batch(config: &Config, generator: &PasswordGenerator, session: &mut PasswordSession) -> Result<()> {
    let count = prompt_number("How many passwords?", 10)?;
    if !config.batch_in_range(count) {
        anyhow::bail!("Count must be between 1 and {}", config.max_batch_count);
    }

    let length = prompt_number("Password length:", config.default_password_length)?;
    if !config.length_in_range(length) {
        anyhow::bail!(
            "Length must be between {} and {}",
            config.min_password_length,
            config.max_password_length
        );
    }

    let level = Select::new("Character set:", PasswordLevel::ALL[..3].to_vec()).prompt()?;
    let mut request = level.request();
    request.length = length;

    let passwords = generator.generate_batch(&request, count)?;
    handlers::print_passwords(&passwords);
    session.extend(passwords);
    println!("✅ {} passwords generated", count);
    Ok(())
}

fn show_session(session: &PasswordSession) {
    if session.is_empty() {
        println!("The session has no passwords yet.");
        return;
    }

    for (i, entry) in session.entries().iter().enumerate() {
        println!(
            "{:>3}: {:<40} | {}",
            i + 1,
            utils::truncate_string(entry.value(), 40),
            utils::styled_strength(entry.strength())
        );
    }
}

fn check_strength() -> Result<()> {
    let password = Text::new("Password to rate:").prompt()?;
    println!("Strength: {}", utils::styled_strength(evaluate_strength(&password)));
    Ok(())
}

fn save_encrypted(config: &Config, session: &PasswordSession) -> Result<()> {
    if session.is_empty() {
        println!("⚠️  No passwords to save.");
        return Ok(());
    }

    let list_path = prompt_path("Save password list to:", Some(PathBuf::from("passwords.txt")))?;
    let key_path = prompt_path(
        "Save the KEY to (keep it somewhere separate):",
        Some(list_path.with_extension("key")),
    )?;

    if !confirm_overwrite(&[list_path.as_path(), key_path.as_path()])? {
        return Ok(());
    }

    let fingerprint = handlers::save_encrypted_list(session, &list_path, &key_path, config.cipher, true)?;
    println!("✅ Saved {} passwords to {}", session.len(), list_path.display());
    println!("🔑 Key {} saved to {}", fingerprint, key_path.display());
    println!(
        "{}",
        style("Store the key file in a SAFE place, apart from the list.").yellow().bold()
    );
    Ok(())
}

fn export_plaintext(session: &PasswordSession) -> Result<()> {
    if session.is_empty() {
        println!("⚠️  No passwords to export.");
        return Ok(());
    }

    let confirmed = Confirm::new("The export is NOT encrypted. Continue?")
        .with_default(false)
        .prompt()?;
    if !confirmed {
        return Ok(());
    }

    let path = prompt_path("Export to:", Some(PathBuf::from("passwords_plain.txt")))?;
    if !confirm_overwrite(&[path.as_path()])? {
        return Ok(());
    }
    handlers::export_plaintext(session, &path, true)?;
    println!("✅ Exported {} passwords to {}", session.len(), path.display());
    Ok(())
}

fn decrypt_list() -> Result<()> {
    let list_path = prompt_path("Encrypted password list:", None)?;
    let key_path = prompt_path("Key file:", Some(list_path.with_extension("key")))?;

    let (passwords, failures) = handlers::decrypt_list(&list_path, &key_path)?;
    if passwords.is_empty() && failures == 0 {
        println!("The password list is empty.");
    }
    for (i, password) in passwords.iter().enumerate() {
        println!("{:>3}: {}", i + 1, password);
    }
    if failures > 0 {
        println!(
            "❌ {} lines could not be decrypted. Check that the key matches the list.",
            failures
        );
    }
    Ok(())
}

fn encrypt_file(config: &Config) -> Result<()> {
    let input = prompt_path("File to encrypt:", None)?;
    let output = prompt_path("Save encrypted file as:", Some(artifacts::suggest_encrypted_path(&input)))?;
    let key_path = prompt_path("Save the KEY as:", Some(artifacts::suggest_key_path(&input)))?;
    if !confirm_overwrite(&[output.as_path(), key_path.as_path()])? {
        return Ok(());
    }
    handlers::handle_encrypt_file(config.cipher, &input, Some(&output), Some(&key_path), true)
}

fn decrypt_file() -> Result<()> {
    let input = prompt_path("Encrypted file:", None)?;
    let key_path = prompt_path("Key file:", None)?;
    let output = prompt_path(
        "Save decrypted file as:",
        Some(artifacts::suggest_decrypted_path(&input)),
    )?;
    if !confirm_overwrite(&[output.as_path()])? {
        return Ok(());
    }
    handlers::handle_decrypt_file(&input, &key_path, Some(&output), true)
}

fn clear_session(session: &mut PasswordSession) -> Result<()> {
    if session.is_empty() {
        println!("The session is already empty.");
        return Ok(());
    }

    let confirmed = Confirm::new("Forget every password in this session?")
        .with_default(false)
        .prompt()?;
    if confirmed {
        let dropped = session.clear();
        println!("✅ Cleared {} passwords", dropped);
    }
    Ok(())
}
