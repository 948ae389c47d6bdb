// src/core/artifacts.rs
//! On-disk conventions for encrypted output.
//!
//! Every save produces two artifacts: the ciphertext and the raw key that
//! opens it. They always go to different paths and the key is never written
//! into the ciphertext. Nothing in this module touches the filesystem; the
//! host writes the bytes produced here.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use base64::{engine::general_purpose, Engine as _};
use thiserror::Error;

use crate::crypto::{self, Cipher, CryptoError, KeyMaterial};

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error("Line {line}: {source}")]
    Line { line: usize, source: CryptoError },

    #[error("The encrypted output and its key cannot share a path: {}", .0.display())]
    SamePath(PathBuf),

    #[error("Nothing to save: no passwords were given")]
    EmptyList,
}

pub type Result<T> = std::result::Result<T, ArtifactError>;

/// An encrypted password list ready to be written: `contents` goes to the
/// list file, `key` to its own key file.
#[derive(Debug)]
pub struct EncryptedList {
    pub key: KeyMaterial,
    pub contents: String,
}

/// A whole file sealed as one unit.
#[derive(Debug)]
pub struct SealedFile {
    pub key: KeyMaterial,
    pub ciphertext: Vec<u8>,
}

/// Encrypt each password on its own under one fresh key, one base64 token
/// per line. Order is preserved.
pub fn seal_password_list<'a, I>(passwords: I, cipher: Cipher) -> Result<EncryptedList>
where
    I: IntoIterator<Item = &'a str>,
{
    let key = KeyMaterial::generate();
    let mut contents = String::new();
    let mut count = 0;

    for password in passwords {
        let sealed = crypto::seal(&key, cipher, password.as_bytes())?;
        contents.push_str(&general_purpose::STANDARD.encode(sealed));
        contents.push('\n');
        count += 1;
    }

    if count == 0 {
        return Err(ArtifactError::EmptyList);
    }

    log::info!(
        "Sealed {} passwords with {} under key {}",
        count,
        cipher,
        key.fingerprint()
    );
    Ok(EncryptedList { key, contents })
}

/// Decrypt every non-blank line independently. A bad line produces an error
/// in its slot and does not stop the others.
pub fn open_password_list(key: &KeyMaterial, contents: &str) -> Vec<std::result::Result<String, CryptoError>> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| open_line(key, line))
        .collect()
}

/// Like [`open_password_list`] but fails on the first bad line, reporting
/// its 1-based position among the non-blank lines.
pub fn open_password_list_strict(key: &KeyMaterial, contents: &str) -> Result<Vec<String>> {
    open_password_list(key, contents)
        .into_iter()
        .enumerate()
        .map(|(index, result)| result.map_err(|source| ArtifactError::Line { line: index + 1, source }))
        .collect()
}

fn open_line(key: &KeyMaterial, line: &str) -> std::result::Result<String, CryptoError> {
    let sealed = general_purpose::STANDARD
        .decode(line)
        .map_err(|e| CryptoError::DecryptionFailed(format!("not a valid token: {}", e)))?;
    crypto::decrypt_to_string(key, &sealed)
}

pub fn seal_file(contents: &[u8], cipher: Cipher) -> Result<SealedFile> {
    let (key, ciphertext) = crypto::encrypt_with(cipher, contents)?;
    Ok(SealedFile { key, ciphertext })
}

pub fn open_file(key: &KeyMaterial, ciphertext: &[u8]) -> Result<Vec<u8>> {
    Ok(crypto::decrypt(key, ciphertext)?)
}

/// `report.pdf` -> `report.pdf.enc`
pub fn suggest_encrypted_path(original: &Path) -> PathBuf {
    append_extension(original, "enc")
}

/// `report.pdf` -> `report.pdf.key`
pub fn suggest_key_path(original: &Path) -> PathBuf {
    append_extension(original, "key")
}

/// `report.pdf.enc` -> `report.pdf`; anything else gets a `decrypted_` prefix.
pub fn suggest_decrypted_path(encrypted: &Path) -> PathBuf {
    if encrypted.extension().map_or(false, |ext| ext == "enc") {
        if let Some(stem) = encrypted.file_stem() {
            return encrypted.with_file_name(stem);
        }
    }

    let mut name = OsString::from("decrypted_");
    name.push(encrypted.file_name().unwrap_or_default());
    encrypted.with_file_name(name)
}

fn append_extension(path: &Path, extension: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Refuse to write a ciphertext and its key to the same place.
pub fn ensure_distinct(ciphertext_path: &Path, key_path: &Path) -> Result<()> {
    let a = resolve(ciphertext_path);
    let b = resolve(key_path);
    if a == b {
        return Err(ArtifactError::SamePath(a));
    }
    Ok(())
}

fn resolve(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|dir| dir.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
