// src/crypto.rs
use std::fmt;
use std::str::FromStr;

use aes_gcm::Aes256Gcm;
use chacha20poly1305::{
    aead::{Aead, KeyInit, Payload},
    ChaCha20Poly1305,
};
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use thiserror::Error;

pub const KEY_LEN: usize = 32;
const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;
const HEADER_LEN: usize = 1 + NONCE_LEN;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Encryption error: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("UTF-8 encoding error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, CryptoError>;

/// AEAD used to seal an artifact. The choice is recorded in the first byte
/// of the artifact so decryption never needs to be told.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cipher {
    #[default]
    ChaCha20Poly1305,
    Aes256Gcm,
}

impl Cipher {
    fn tag(&self) -> u8 {
        match self {
            Cipher::ChaCha20Poly1305 => 0x01,
            Cipher::Aes256Gcm => 0x02,
        }
    }

    fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x01 => Some(Cipher::ChaCha20Poly1305),
            0x02 => Some(Cipher::Aes256Gcm),
            _ => None,
        }
    }
}

impl fmt::Display for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cipher::ChaCha20Poly1305 => write!(f, "chacha20poly1305"),
            Cipher::Aes256Gcm => write!(f, "aes256gcm"),
        }
    }
}

impl FromStr for Cipher {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "chacha20poly1305" | "chacha" => Ok(Cipher::ChaCha20Poly1305),
            "aes256gcm" | "aes" => Ok(Cipher::Aes256Gcm),
            other => Err(format!("unknown cipher '{}'", other)),
        }
    }
}

/// Symmetric key for exactly one saved artifact.
///
/// Always drawn from the OS RNG, never derived from a password. It is not
/// `Clone` so a key cannot quietly be reused for a second save.
pub struct KeyMaterial([u8; KEY_LEN]);

impl KeyMaterial {
    pub fn generate() -> Self {
        Self::generate_with(&mut OsRng)
    }

    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; KEY_LEN];
        rng.fill_bytes(&mut bytes);
        KeyMaterial(bytes)
    }

    /// Load a key from its persisted form: the raw bytes, no framing.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_LEN] = bytes.try_into().map_err(|_| {
            CryptoError::InvalidKey(format!(
                "expected {} bytes, found {}",
                KEY_LEN,
                bytes.len()
            ))
        })?;
        Ok(KeyMaterial(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Short identifier safe to show or log; reveals nothing usable about the key.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0);
        hex::encode(&digest[..8])
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("KeyMaterial").field(&self.fingerprint()).finish()
    }
}

/// Encrypt under a fresh key with the default cipher.
pub fn encrypt(plaintext: &[u8]) -> Result<(KeyMaterial, Vec<u8>)> {
    encrypt_with(Cipher::default(), plaintext)
}

pub fn encrypt_with(cipher: Cipher, plaintext: &[u8]) -> Result<(KeyMaterial, Vec<u8>)> {
    let key = KeyMaterial::generate();
    let ciphertext = seal(&key, cipher, plaintext)?;
    log::debug!(
        "Encrypted {} bytes with {} under key {}",
        plaintext.len(),
        cipher,
        key.fingerprint()
    );
    Ok((key, ciphertext))
}

/// Seal one unit under an existing key. Layout: `[tag][nonce][ciphertext+mac]`,
/// with the tag byte authenticated as associated data.
pub(crate) fn seal(key: &KeyMaterial, cipher: Cipher, plaintext: &[u8]) -> Result<Vec<u8>> {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);

    let header = [cipher.tag()];
    let payload = Payload {
        msg: plaintext,
        aad: &header,
    };

    let sealed = match cipher {
        Cipher::ChaCha20Poly1305 => ChaCha20Poly1305::new(chacha20poly1305::Key::from_slice(&key.0))
            .encrypt(chacha20poly1305::Nonce::from_slice(&nonce), payload),
        Cipher::Aes256Gcm => Aes256Gcm::new(aes_gcm::Key::<Aes256Gcm>::from_slice(&key.0))
            .encrypt(aes_gcm::Nonce::from_slice(&nonce), payload),
    }
    .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

    let mut result = Vec::with_capacity(HEADER_LEN + sealed.len());
    result.extend_from_slice(&header);
    result.extend_from_slice(&nonce);
    result.extend(sealed);

    Ok(result)
}

/// Decrypt an artifact. Any mismatch (wrong key, truncation, tampering)
/// yields `DecryptionFailed` and no plaintext.
pub fn decrypt(key: &KeyMaterial, data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < HEADER_LEN + TAG_LEN {
        return Err(CryptoError::DecryptionFailed("data too short".to_string()));
    }

    let (header, rest) = data.split_at(1);
    let (nonce, ciphertext) = rest.split_at(NONCE_LEN);
    let cipher = Cipher::from_tag(header[0]).ok_or_else(|| {
        CryptoError::DecryptionFailed(format!("unknown cipher tag {:#04x}", header[0]))
    })?;

    let payload = Payload {
        msg: ciphertext,
        aad: header,
    };

    let plaintext = match cipher {
        Cipher::ChaCha20Poly1305 => ChaCha20Poly1305::new(chacha20poly1305::Key::from_slice(&key.0))
            .decrypt(chacha20poly1305::Nonce::from_slice(nonce), payload),
        Cipher::Aes256Gcm => Aes256Gcm::new(aes_gcm::Key::<Aes256Gcm>::from_slice(&key.0))
            .decrypt(aes_gcm::Nonce::from_slice(nonce), payload),
    }
    .map_err(|_| CryptoError::DecryptionFailed("authentication failed".to_string()))?;

    Ok(plaintext)
}

/// Decrypt an artifact that is expected to hold UTF-8 text.
pub fn decrypt_to_string(key: &KeyMaterial, data: &[u8]) -> Result<String> {
    Ok(String::from_utf8(decrypt(key, data)?)?)
}
