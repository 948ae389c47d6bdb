// src/generators/mod.rs
mod password;
pub mod strength;

pub use password::{GeneratorError, PasswordGenerator};
pub use strength::evaluate_strength;
