// src/models.rs
use std::collections::BTreeSet;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:'\",.<>?/`~\\";

/// A category of characters a password may be drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Letters,
    Digits,
    Symbols,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 3] = [
        CharacterClass::Letters,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(&self) -> &'static str {
        match self {
            CharacterClass::Letters => LETTERS,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.alphabet().contains(c)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Letters => write!(f, "letters"),
            CharacterClass::Digits => write!(f, "digits"),
            CharacterClass::Symbols => write!(f, "symbols"),
        }
    }
}

// Password generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: BTreeSet<CharacterClass>,
    pub allow_repetition: bool,
    pub required_literal_fragments: Vec<String>,
}

impl GenerationRequest {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            classes: BTreeSet::new(),
            allow_repetition: true,
            required_literal_fragments: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: CharacterClass) -> Self {
        self.classes.insert(class);
        self
    }

    pub fn with_classes<I: IntoIterator<Item = CharacterClass>>(mut self, classes: I) -> Self {
        self.classes.extend(classes);
        self
    }

    pub fn allow_repetition(mut self, allow: bool) -> Self {
        self.allow_repetition = allow;
        self
    }

    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.required_literal_fragments.push(fragment.into());
        self
    }

    /// Union of the enabled classes' alphabets, in class order.
    pub fn alphabet(&self) -> Vec<char> {
        self.classes
            .iter()
            .flat_map(|class| class.alphabet().chars())
            .collect()
    }

    pub fn fragment_length(&self) -> usize {
        self.required_literal_fragments
            .iter()
            .map(|fragment| fragment.chars().count())
            .sum()
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        GenerationRequest::new(16).with_classes(CharacterClass::ALL)
    }
}

/// Qualitative label produced by the 5-point strength heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => Strength::VeryWeak,
            2 => Strength::Weak,
            3 => Strength::Medium,
            4 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPassword {
    value: String,
    strength: Strength,
}

impl GeneratedPassword {
    pub(crate) fn new(value: String, strength: Strength) -> Self {
        Self { value, strength }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Named presets for quick generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PasswordLevel {
    Basic,
    Medium,
    Advanced,
    Paranoid,
}

impl PasswordLevel {
    pub const ALL: [PasswordLevel; 4] = [
        PasswordLevel::Basic,
        PasswordLevel::Medium,
        PasswordLevel::Advanced,
        PasswordLevel::Paranoid,
    ];

    pub fn length(&self) -> usize {
        match self {
            PasswordLevel::Basic => 8,
            PasswordLevel::Medium => 10,
            PasswordLevel::Advanced => 14,
            PasswordLevel::Paranoid => 20,
        }
    }

    pub fn classes(&self) -> &'static [CharacterClass] {
        match self {
            PasswordLevel::Basic => &[CharacterClass::Letters],
            PasswordLevel::Medium => &[CharacterClass::Letters, CharacterClass::Digits],
            PasswordLevel::Advanced | PasswordLevel::Paranoid => &CharacterClass::ALL,
        }
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.length()).with_classes(self.classes().iter().copied())
    }
}

impl fmt::Display for PasswordLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordLevel::Basic => write!(f, "Basic ({} letters)", self.length()),
            PasswordLevel::Medium => write!(f, "Medium ({} letters and digits)", self.length()),
            PasswordLevel::Advanced => write!(f, "Advanced ({} mixed characters)", self.length()),
            PasswordLevel::Paranoid => write!(f, "Paranoid ({} mixed characters)", self.length()),
        }
    }
}
