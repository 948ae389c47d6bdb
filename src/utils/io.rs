// src/utils/io.rs
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::core::artifacts;
use crate::crypto::KeyMaterial;

/// Get the application config directory
pub fn get_app_config_dir() -> Option<PathBuf> {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "rustpassgen", "rust_passgen") {
        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            if let Err(e) = fs::create_dir_all(config_dir) {
                log::error!("Failed to create config directory: {}", e);
                return None;
            }
        }

        Some(config_dir.to_path_buf())
    } else {
        log::error!("Could not determine config directory");
        None
    }
}

/// Write a ciphertext and its key to two distinct files.
///
/// The key is written first. If the ciphertext then cannot be written the
/// key file is removed again, so a ciphertext never lands on disk without its
/// key. Unless `overwrite` is set, neither file may already exist.
pub fn write_artifact_pair(
    ciphertext_path: &Path,
    ciphertext: &[u8],
    key_path: &Path,
    key: &KeyMaterial,
    overwrite: bool,
) -> Result<()> {
    artifacts::ensure_distinct(ciphertext_path, key_path)?;
    if !overwrite {
        for path in [key_path, ciphertext_path] {
            if path.exists() {
                bail!("{} already exists; refusing to overwrite it", path.display());
            }
        }
    }

    write_file(key_path, key.as_bytes(), overwrite)
        .with_context(|| format!("Failed to write key file {}", key_path.display()))?;

    if let Err(e) = write_file(ciphertext_path, ciphertext, overwrite) {
        if let Err(cleanup) = fs::remove_file(key_path) {
            log::warn!("Could not remove key file {}: {}", key_path.display(), cleanup);
        }
        return Err(e.context(format!("Failed to write {}", ciphertext_path.display())));
    }

    log::info!(
        "Wrote {} ({} bytes) and key {} [{}]",
        ciphertext_path.display(),
        ciphertext.len(),
        key_path.display(),
        key.fingerprint()
    );
    Ok(())
}

fn write_file(path: &Path, contents: &[u8], overwrite: bool) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = match options.open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            bail!("{} already exists; refusing to overwrite it", path.display())
        }
        Err(e) => return Err(e.into()),
    };
    file.write_all(contents)?;
    file.sync_all()?;
    Ok(())
}

pub fn read_key_file(path: &Path) -> Result<KeyMaterial> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read key file {}", path.display()))?;
    let key = KeyMaterial::from_bytes(&bytes)
        .with_context(|| format!("{} is not a key file", path.display()))?;
    Ok(key)
}

pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Write a file, refusing to replace an existing one unless `overwrite` is set.
pub fn write_bytes(path: &Path, contents: &[u8], overwrite: bool) -> Result<()> {
    write_file(path, contents, overwrite).with_context(|| format!("Failed to write {}", path.display()))
}
