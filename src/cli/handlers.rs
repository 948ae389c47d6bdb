// src/cli/handlers.rs
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::cli::commands::{CliCommand, OutputArgs};
use crate::core::artifacts;
use crate::core::config::Config;
use crate::core::export::render_plaintext_export;
use crate::core::PasswordSession;
use crate::crypto::Cipher;
use crate::generators::{evaluate_strength, strength::strength_score, PasswordGenerator};
use crate::models::{GeneratedPassword, GenerationRequest, Strength};
use crate::utils;

// Handlers for one-shot CLI commands
pub fn run_command(command: CliCommand, config: &Config, json: bool) -> Result<()> {
    match command {
        CliCommand::Generate {
            length,
            classes,
            no_repeat,
            fragments,
            count,
            output,
        } => {
            let length = length.unwrap_or(config.default_password_length);
            if !config.length_in_range(length) {
                bail!(
                    "Length must be between {} and {}",
                    config.min_password_length,
                    config.max_password_length
                );
            }
            let request = GenerationRequest {
                length,
                classes: classes.into_iter().collect(),
                allow_repetition: !no_repeat,
                required_literal_fragments: fragments,
            };
            handle_generate(config, &request, count, &output, json)
        }
        CliCommand::Level { level, count, output } => {
            handle_generate(config, &level.request(), count, &output, json)
        }
        CliCommand::Strength { password } => handle_strength(&password, json),
        CliCommand::DecryptList { input, key } => handle_decrypt_list(&input, &key, json),
        CliCommand::EncryptFile {
            input,
            output,
            key,
            force,
        } => handle_encrypt_file(config.cipher, &input, output.as_deref(), key.as_deref(), force),
        CliCommand::DecryptFile {
            input,
            key,
            output,
            force,
        } => handle_decrypt_file(&input, &key, output.as_deref(), force),
    }
}

pub fn handle_generate(
    config: &Config,
    request: &GenerationRequest,
    count: usize,
    output: &OutputArgs,
    json: bool,
) -> Result<()> {
    if !config.batch_in_range(count) {
        bail!("Count must be between 1 and {}", config.max_batch_count);
    }
    if !output.force {
        let targets = [&output.save, &output.key, &output.export];
        if let Some(existing) = targets.into_iter().flatten().find(|path| path.exists()) {
            bail!("{} already exists; pass --force to replace it", existing.display());
        }
    }

    let generator = PasswordGenerator::new();
    let mut session = PasswordSession::new();
    session.extend(generator.generate_batch(request, count)?);
    log::info!("Generated {} passwords of length {}", session.len(), request.length);

    if json {
        println!("{}", serde_json::to_string_pretty(session.entries())?);
    } else {
        print_passwords(session.entries());
    }

    if let (Some(list_path), Some(key_path)) = (&output.save, &output.key) {
        let fingerprint = save_encrypted_list(&session, list_path, key_path, config.cipher, output.force)?;
        eprintln!(
            "🔐 Saved {} passwords to {} (key {} → {})",
            session.len(),
            list_path.display(),
            fingerprint,
            key_path.display()
        );
        eprintln!("⚠️  Keep the key file somewhere safe and separate from the list.");
    }

    if let Some(export_path) = &output.export {
        export_plaintext(&session, export_path, output.force)?;
        eprintln!("⚠️  Wrote an UNENCRYPTED listing to {}", export_path.display());
    }

    Ok(())
}

/// Seal every password in the session and write the list and its key.
/// Returns the key fingerprint.
pub fn save_encrypted_list(
    session: &PasswordSession,
    list_path: &Path,
    key_path: &Path,
    cipher: Cipher,
    overwrite: bool,
) -> Result<String> {
    artifacts::ensure_distinct(list_path, key_path)?;
    let list = artifacts::seal_password_list(session.values(), cipher)?;
    utils::write_artifact_pair(list_path, list.contents.as_bytes(), key_path, &list.key, overwrite)?;
    Ok(list.key.fingerprint())
}

pub fn export_plaintext(session: &PasswordSession, path: &Path, overwrite: bool) -> Result<()> {
    if session.is_empty() {
        bail!("Nothing to export: no passwords were generated");
    }
    utils::write_bytes(path, render_plaintext_export(session).as_bytes(), overwrite)?;
    log::warn!("Exported {} passwords unencrypted to {}", session.len(), path.display());
    Ok(())
}

#[derive(Serialize)]
struct StrengthReport<'a> {
    password: &'a str,
    score: u8,
    strength: Strength,
}

pub fn handle_strength(password: &str, json: bool) -> Result<()> {
    let report = StrengthReport {
        password,
        score: strength_score(password),
        strength: evaluate_strength(password),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} ({}/5)",
            utils::styled_strength(report.strength),
            report.score
        );
    }
    Ok(())
}

/// Decrypt each line of a saved list and print what could be recovered.
pub fn decrypt_list(list_path: &Path, key_path: &Path) -> Result<(Vec<String>, usize)> {
    let key = utils::read_key_file(key_path)?;
    let contents = utils::read_text(list_path)?;

    let mut passwords = Vec::new();
    let mut failures = 0;
    for (index, result) in artifacts::open_password_list(&key, &contents).into_iter().enumerate() {
        match result {
            Ok(password) => passwords.push(password),
            Err(e) => {
                failures += 1;
                log::warn!("{} line {}: {}", list_path.display(), index + 1, e);
            }
        }
    }

    Ok((passwords, failures))
}

pub fn handle_decrypt_list(list_path: &Path, key_path: &Path, json: bool) -> Result<()> {
    let (passwords, failures) = decrypt_list(list_path, key_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&passwords)?);
    } else if passwords.is_empty() && failures == 0 {
        println!("The password list is empty.");
    } else {
        for (i, password) in passwords.iter().enumerate() {
            println!("{:>3}: {}", i + 1, password);
        }
    }

    if failures > 0 {
        bail!(
            "{} of {} lines could not be decrypted; check that the key matches the list",
            failures,
            failures + passwords.len()
        );
    }
    Ok(())
}

pub fn handle_encrypt_file(
    cipher: Cipher,
    input: &Path,
    output: Option<&Path>,
    key_path: Option<&Path>,
    overwrite: bool,
) -> Result<()> {
    let output = output.map_or_else(|| artifacts::suggest_encrypted_path(input), Path::to_path_buf);
    let key_path = key_path.map_or_else(|| artifacts::suggest_key_path(input), Path::to_path_buf);
    artifacts::ensure_distinct(&output, &key_path)?;

    let contents = utils::read_bytes(input)?;
    let sealed = artifacts::seal_file(&contents, cipher)?;
    utils::write_artifact_pair(&output, &sealed.ciphertext, &key_path, &sealed.key, overwrite)?;

    println!("🔐 Encrypted {} → {}", input.display(), output.display());
    println!("🔑 Key {} → {}", sealed.key.fingerprint(), key_path.display());
    println!("⚠️  Without the key file the encrypted file cannot be recovered.");
    Ok(())
}

pub fn handle_decrypt_file(
    input: &Path,
    key_path: &Path,
    output: Option<&Path>,
    overwrite: bool,
) -> Result<()> {
    let output = output.map_or_else(|| artifacts::suggest_decrypted_path(input), Path::to_path_buf);

    let key = utils::read_key_file(key_path)?;
    let ciphertext = utils::read_bytes(input)?;
    let plaintext = artifacts::open_file(&key, &ciphertext)
        .with_context(|| format!("Could not decrypt {}; check that the key matches", input.display()))?;
    utils::write_bytes(&output, &plaintext, overwrite)?;

    log::info!("Decrypted {} with key {}", input.display(), key.fingerprint());
    println!("✅ Decrypted {} → {}", input.display(), output.display());
    Ok(())
}

pub fn print_passwords(passwords: &[GeneratedPassword]) {
    for password in passwords {
        println!(
            "{:<30} | {}",
            password.value(),
            utils::styled_strength(password.strength())
        );
    }
}
