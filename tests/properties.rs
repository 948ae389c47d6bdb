use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use rust_passgen::core::artifacts;
use rust_passgen::{
    decrypt, encrypt, evaluate_strength, CharacterClass, CryptoError, GenerationRequest,
    GeneratorError, KeyMaterial, PasswordGenerator, PasswordLevel, Strength,
};

fn requests() -> Vec<GenerationRequest> {
    let mut requests = Vec::new();
    for length in [1, 5, 8, 12, 20, 40] {
        for classes in [
            vec![CharacterClass::Letters],
            vec![CharacterClass::Digits, CharacterClass::Symbols],
            CharacterClass::ALL.to_vec(),
        ] {
            let request = GenerationRequest::new(length).with_classes(classes);
            if request.alphabet().len() >= length {
                requests.push(request.clone().allow_repetition(false));
            }
            requests.push(request);
        }
    }
    requests
}

#[test]
fn generated_length_matches_request() {
    let generator = PasswordGenerator::new();
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    for request in requests() {
        let password = generator.generate_with_rng(&request, &mut rng).unwrap();
        assert_eq!(password.value().chars().count(), request.length);
        assert_eq!(password.strength(), evaluate_strength(password.value()));
    }
}

#[test]
fn no_repetition_means_no_repeated_character() {
    let generator = PasswordGenerator::new();
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    for request in requests().into_iter().filter(|r| !r.allow_repetition) {
        for _ in 0..20 {
            let password = generator.generate_with_rng(&request, &mut rng).unwrap();
            let unique: HashSet<char> = password.value().chars().collect();
            assert_eq!(unique.len(), request.length, "{} repeats", password.value());
        }
    }
}

#[test]
fn characters_come_from_enabled_classes_or_fragments() {
    let generator = PasswordGenerator::new();
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    let request = GenerationRequest::new(30)
        .with_class(CharacterClass::Digits)
        .with_fragment("key")
        .with_fragment("Z");

    for _ in 0..50 {
        let password = generator.generate_with_rng(&request, &mut rng).unwrap();
        let value = password.value();
        let others: String = value.chars().filter(|c| !c.is_ascii_digit()).collect();
        let mut others: Vec<char> = others.chars().collect();
        others.sort_unstable();
        // every fragment character present exactly once beyond the digits
        assert_eq!(others, vec!['Z', 'e', 'k', 'y']);
    }
}

#[test]
fn invalid_requests_are_rejected() {
    let generator = PasswordGenerator::new();
    let invalid = [
        GenerationRequest::new(0).with_classes(CharacterClass::ALL),
        GenerationRequest::new(12),
        GenerationRequest::new(5)
            .with_classes(CharacterClass::ALL)
            .with_fragment("hello"),
        GenerationRequest::new(53)
            .with_class(CharacterClass::Letters)
            .allow_repetition(false),
    ];

    for request in invalid {
        assert!(matches!(
            generator.generate(&request),
            Err(GeneratorError::InvalidRequest(_))
        ));
    }
}

#[test]
fn strength_examples() {
    assert_eq!(evaluate_strength("ab"), Strength::VeryWeak);
    assert_eq!(evaluate_strength("Abcdefg1!"), Strength::Strong);
    assert_eq!(evaluate_strength("aB3$aB3$aB3$aB3$aB3$"), Strength::VeryStrong);
}

#[test]
fn paranoid_preset_is_long_and_mixed() {
    let password = PasswordGenerator::new()
        .generate(&PasswordLevel::Paranoid.request())
        .unwrap();
    assert_eq!(password.value().chars().count(), 20);
}

#[test]
fn encrypt_decrypt_round_trip() {
    let inputs: [&[u8]; 4] = [b"", b"x", b"hunter2", &[0u8; 4096]];
    for input in inputs {
        let (key, ciphertext) = encrypt(input).unwrap();
        assert_eq!(decrypt(&key, &ciphertext).unwrap(), input);
    }
}

#[test]
fn independent_encryptions_never_collide() {
    let mut keys = HashSet::new();
    let mut ciphertexts = HashSet::new();
    for _ in 0..100 {
        let (key, ciphertext) = encrypt(b"same").unwrap();
        assert!(keys.insert(key.as_bytes().to_vec()));
        assert!(ciphertexts.insert(ciphertext));
    }
}

#[test]
fn wrong_key_never_decrypts() {
    let (_, ciphertext) = encrypt(b"top secret").unwrap();
    for _ in 0..20 {
        assert!(matches!(
            decrypt(&KeyMaterial::generate(), &ciphertext),
            Err(CryptoError::DecryptionFailed(_))
        ));
    }
}

#[test]
fn key_is_never_inside_the_ciphertext() {
    let list = artifacts::seal_password_list(["a", "b", "c"], Default::default()).unwrap();
    let key_b64 = base64::Engine::encode(
        &base64::engine::general_purpose::STANDARD,
        list.key.as_bytes(),
    );
    assert!(!list.contents.contains(&key_b64));

    let sealed = artifacts::seal_file(b"file body", Default::default()).unwrap();
    assert!(!sealed
        .ciphertext
        .windows(sealed.key.as_bytes().len())
        .any(|window| window == sealed.key.as_bytes()));
}
