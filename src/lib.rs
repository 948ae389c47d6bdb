// src/lib.rs
//! Password generation with a simple strength heuristic, and authenticated
//! encryption of password lists and files under a fresh key per save.

pub mod cli;
pub mod core;
pub mod crypto;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::core::PasswordSession;
pub use crate::crypto::{decrypt, encrypt, Cipher, CryptoError, KeyMaterial};
pub use crate::generators::{evaluate_strength, GeneratorError, PasswordGenerator};
pub use crate::models::{CharacterClass, GeneratedPassword, GenerationRequest, PasswordLevel, Strength};
