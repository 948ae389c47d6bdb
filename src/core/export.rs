// src/core/export.rs
use chrono::{DateTime, Utc};

use crate::core::session::PasswordSession;

pub const PLAINTEXT_WARNING: &str = "WARNING: this file is NOT encrypted. Anyone who can read it can read every password below.";

/// Render the session as a numbered, unencrypted listing.
pub fn render_plaintext_export(session: &PasswordSession) -> String {
    render_plaintext_export_at(session, Utc::now())
}

pub fn render_plaintext_export_at(session: &PasswordSession, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str("--- Generated passwords (NOT ENCRYPTED) ---\n\n");
    out.push_str(PLAINTEXT_WARNING);
    out.push('\n');
    out.push_str(&format!("Generated at: {}\n\n", generated_at.to_rfc3339()));

    for (i, entry) in session.entries().iter().enumerate() {
        out.push_str(&format!("{}: {} (Strength: {})\n", i + 1, entry.value(), entry.strength()));
    }

    out
}
