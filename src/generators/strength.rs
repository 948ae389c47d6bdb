// src/generators/strength.rs
//! Password strength heuristic.
//!
//! A 5-point additive score, mapped onto [`Strength`]. This is a rule of
//! thumb for the user, not an entropy estimate, and makes no cryptographic
//! guarantee.

use crate::models::{CharacterClass, Strength};

/// Raw score in `0..=5`.
pub fn strength_score(password: &str) -> u8 {
    let length = password.chars().count();
    let mut score = 0;

    if length >= 8 {
        score += 1;
    }
    if length >= 12 {
        score += 1;
    }
    if password.chars().any(|c| CharacterClass::Digits.contains(c)) {
        score += 1;
    }
    if password.chars().any(|c| CharacterClass::Symbols.contains(c)) {
        score += 1;
    }
    if password.chars().any(char::is_lowercase) && password.chars().any(char::is_uppercase) {
        score += 1;
    }

    score
}

pub fn evaluate_strength(password: &str) -> Strength {
    Strength::from_score(strength_score(password))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_password_is_very_weak() {
        assert_eq!(evaluate_strength("ab"), Strength::VeryWeak);
        assert_eq!(evaluate_strength(""), Strength::VeryWeak);
    }

    #[test]
    fn length_thresholds_add_one_point_each() {
        assert_eq!(strength_score("abcdefgh"), 1);
        assert_eq!(evaluate_strength("abcdefgh"), Strength::VeryWeak);
        assert_eq!(evaluate_strength("abcdefghijkl"), Strength::Weak);
    }

    #[test]
    fn all_but_long_length_is_strong() {
        assert_eq!(strength_score("Abcdefg1!"), 4);
        assert_eq!(evaluate_strength("Abcdefg1!"), Strength::Strong);
    }

    #[test]
    fn twenty_mixed_characters_is_very_strong() {
        let password = "Xy7#kLm9!pQr2$tUv5&w";
        assert_eq!(password.chars().count(), 20);
        assert_eq!(evaluate_strength(password), Strength::VeryStrong);
    }

    #[test]
    fn medium_score() {
        // len >= 8, digit, mixed case
        assert_eq!(evaluate_strength("Abcdefg1"), Strength::Medium);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 4 characters, 8 bytes
        assert_eq!(strength_score("éééé"), 0);
    }

    #[test]
    fn symbols_only_count_from_symbol_alphabet() {
        assert_eq!(strength_score("ab§"), 0);
        assert_eq!(strength_score("ab\\"), 1);
    }
}
