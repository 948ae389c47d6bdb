// src/generators/password.rs
use std::collections::HashSet;

use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::generators::strength::evaluate_strength;
use crate::models::{GeneratedPassword, GenerationRequest};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid generation request: {0}")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Stateless password generator. Every call builds its alphabet from the
/// request, so one instance can be shared freely.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate(&self, request: &GenerationRequest) -> Result<GeneratedPassword> {
        self.generate_with_rng(request, &mut rand::thread_rng())
    }

    pub fn generate_batch(&self, request: &GenerationRequest, count: usize) -> Result<Vec<GeneratedPassword>> {
        if count == 0 {
            return Err(GeneratorError::InvalidRequest(
                "batch count must be at least 1".into(),
            ));
        }

        let mut rng = rand::thread_rng();
        (0..count)
            .map(|_| self.generate_with_rng(request, &mut rng))
            .collect()
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> Result<GeneratedPassword> {
        let alphabet = validate(request)?;

        let random_length = request.length - request.fragment_length();
        let mut chars: Vec<char> = if request.allow_repetition {
            draw_with_repetition(&alphabet, random_length, rng)
        } else {
            // Fragment characters are already spoken for.
            let taken: HashSet<char> = request
                .required_literal_fragments
                .iter()
                .flat_map(|fragment| fragment.chars())
                .collect();
            let mut pool: Vec<char> = alphabet.into_iter().filter(|c| !taken.contains(c)).collect();
            if random_length > pool.len() {
                return Err(GeneratorError::InvalidRequest(format!(
                    "cannot draw {} distinct characters: only {} remain after the fragments",
                    random_length,
                    pool.len()
                )));
            }
            let (chosen, _) = pool.partial_shuffle(rng, random_length);
            chosen.to_vec()
        };

        if !request.required_literal_fragments.is_empty() {
            chars.extend(request.required_literal_fragments.iter().flat_map(|f| f.chars()));
            chars.shuffle(rng);
        }

        let value: String = chars.into_iter().collect();
        let strength = evaluate_strength(&value);
        log::debug!(
            "Generated password of length {} ({} fragments, strength {})",
            request.length,
            request.required_literal_fragments.len(),
            strength
        );

        Ok(GeneratedPassword::new(value, strength))
    }
}

fn validate(request: &GenerationRequest) -> Result<Vec<char>> {
    if request.classes.is_empty() {
        return Err(GeneratorError::InvalidRequest(
            "at least one character class must be enabled".into(),
        ));
    }

    if request.length == 0 {
        return Err(GeneratorError::InvalidRequest(
            "length must be greater than zero".into(),
        ));
    }

    let fragment_length = request.fragment_length();
    if !request.required_literal_fragments.is_empty() && fragment_length >= request.length {
        return Err(GeneratorError::InvalidRequest(format!(
            "fragments take {} characters, which leaves no room in a password of length {}",
            fragment_length, request.length
        )));
    }

    let alphabet = request.alphabet();
    if !request.allow_repetition {
        if request.length > alphabet.len() {
            return Err(GeneratorError::InvalidRequest(format!(
                "cannot generate {} characters without repetition from an alphabet of {}",
                request.length,
                alphabet.len()
            )));
        }

        let mut seen = HashSet::new();
        let repeats = request
            .required_literal_fragments
            .iter()
            .flat_map(|fragment| fragment.chars())
            .any(|c| !seen.insert(c));
        if repeats {
            return Err(GeneratorError::InvalidRequest(
                "fragments repeat a character while repetition is disabled".into(),
            ));
        }
    }

    Ok(alphabet)
}

fn draw_with_repetition<R: Rng + ?Sized>(alphabet: &[char], count: usize, rng: &mut R) -> Vec<char> {
    let dist = Uniform::from(0..alphabet.len());
    (0..count).map(|_| alphabet[dist.sample(rng)]).collect()
}
