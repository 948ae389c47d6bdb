// src/core/session.rs
use serde::Serialize;

use crate::models::GeneratedPassword;

/// Passwords generated during one interactive session.
///
/// Owned by whoever runs the session and passed explicitly to the save and
/// export paths. Nothing here is global; dropping the session drops the
/// passwords.
#[derive(Debug, Default, Clone, Serialize)]
pub struct PasswordSession {
    entries: Vec<GeneratedPassword>,
}

impl PasswordSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, password: GeneratedPassword) {
        self.entries.push(password);
    }

    pub fn extend<I: IntoIterator<Item = GeneratedPassword>>(&mut self, passwords: I) {
        self.entries.extend(passwords);
    }

    pub fn entries(&self) -> &[GeneratedPassword] {
        &self.entries
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(GeneratedPassword::value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every password; returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        log::info!("Session cleared ({} passwords dropped)", count);
        count
    }
}
