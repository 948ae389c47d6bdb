// src/core/mod.rs
pub mod artifacts;
pub mod config;
pub mod export;
pub mod session;

pub use artifacts::{ArtifactError, EncryptedList, SealedFile};
pub use session::PasswordSession;
