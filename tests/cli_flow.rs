use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_rust_passgen"))
}

fn run(home: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .current_dir(home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("HOME", home)
        .env("LOG_FILE", home.join("passgen.log"))
        .env_remove("DEFAULT_PASSWORD_LENGTH")
        .env_remove("ENCRYPTION_CIPHER")
        .output()
        .expect("run rust_passgen")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn generate_save_and_decrypt_list() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path();

    let output = run(
        home,
        &[
            "--json", "generate", "--length", "12", "--count", "3", "--save", "list.txt", "--key",
            "list.key",
        ],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let generated: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let generated: Vec<String> = generated
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["value"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(generated.len(), 3);
    assert!(generated.iter().all(|p| p.chars().count() == 12));

    let list = fs::read_to_string(home.join("list.txt")).unwrap();
    assert_eq!(list.lines().count(), 3);
    assert_eq!(fs::read(home.join("list.key")).unwrap().len(), 32);
    for password in &generated {
        assert!(!list.contains(password.as_str()));
    }

    let output = run(home, &["--json", "decrypt-list", "--input", "list.txt", "--key", "list.key"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let decrypted: Vec<String> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(decrypted, generated);
}

#[test]
fn decrypt_list_with_wrong_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path();

    assert!(run(home, &["level", "basic", "--save", "a.txt", "--key", "a.key"]).status.success());
    assert!(run(home, &["level", "basic", "--save", "b.txt", "--key", "b.key"]).status.success());

    let output = run(home, &["decrypt-list", "--input", "a.txt", "--key", "b.key"]);
    assert!(!output.status.success());
}

#[test]
fn save_refuses_same_path_for_list_and_key() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path();

    let output = run(home, &["level", "medium", "--save", "same.txt", "--key", "./same.txt"]);
    assert!(!output.status.success());
    assert!(!home.join("same.txt").exists());
}

#[test]
fn encrypt_and_decrypt_file_with_default_names() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path();
    let original: Vec<u8> = (0..2048u32).map(|i| (i % 251) as u8).collect();
    fs::write(home.join("photo.bin"), &original).unwrap();

    let output = run(home, &["encrypt-file", "--input", "photo.bin"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(home.join("photo.bin.enc").exists());
    assert!(home.join("photo.bin.key").exists());

    fs::remove_file(home.join("photo.bin")).unwrap();
    let output = run(
        home,
        &["decrypt-file", "--input", "photo.bin.enc", "--key", "photo.bin.key"],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(fs::read(home.join("photo.bin")).unwrap(), original);
}

#[test]
fn tampered_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path();
    fs::write(home.join("doc.txt"), b"quarterly numbers").unwrap();

    assert!(run(home, &["--cipher", "aes256gcm", "encrypt-file", "--input", "doc.txt"]).status.success());

    let mut sealed = fs::read(home.join("doc.txt.enc")).unwrap();
    let last = sealed.len() - 1;
    sealed[last] ^= 0xff;
    fs::write(home.join("doc.txt.enc"), sealed).unwrap();

    let output = run(
        home,
        &["decrypt-file", "--input", "doc.txt.enc", "--key", "doc.txt.key", "--output", "out.txt"],
    );
    assert!(!output.status.success());
    assert!(!home.join("out.txt").exists());
}

#[test]
fn invalid_generation_requests_fail() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path();

    let output = run(home, &["generate", "--length", "20", "--classes", "digits", "--no-repeat"]);
    assert!(!output.status.success());

    let output = run(home, &["generate", "--length", "6", "--fragment", "secret"]);
    assert!(!output.status.success());

    let output = run(home, &["generate", "--length", "3"]);
    assert!(!output.status.success());

    let output = run(home, &["level", "advanced", "--count", "0"]);
    assert!(!output.status.success());
}

#[test]
fn fragments_and_plaintext_export() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path();

    let output = run(
        home,
        &[
            "--json", "generate", "--length", "16", "--fragment", "cat", "--count", "2", "--export",
            "plain.txt",
        ],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let export = fs::read_to_string(home.join("plain.txt")).unwrap();
    assert!(export.contains("NOT ENCRYPTED"));
    assert!(export.contains("1: "));
    assert!(export.contains("2: "));
}

#[test]
fn strength_command_reports_score() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["--json", "strength", "Abcdefg1!"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["score"], 4);
    assert_eq!(report["strength"], "Strong");
}

#[test]
fn second_save_does_not_replace_an_existing_key() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path();

    assert!(run(home, &["level", "basic", "--save", "a.txt", "--key", "shared.key"]).status.success());
    let first_key = fs::read(home.join("shared.key")).unwrap();

    let output = run(home, &["level", "basic", "--save", "b.txt", "--key", "shared.key"]);
    assert!(!output.status.success());
    assert!(!home.join("b.txt").exists());
    assert_eq!(fs::read(home.join("shared.key")).unwrap(), first_key);

    let output = run(home, &["decrypt-list", "--input", "a.txt", "--key", "shared.key"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let output = run(
        home,
        &["level", "basic", "--save", "b.txt", "--key", "shared.key", "--force"],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_ne!(fs::read(home.join("shared.key")).unwrap(), first_key);
}

#[test]
fn decrypt_file_keeps_an_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path();
    fs::write(home.join("doc.txt"), b"v2 edits").unwrap();
    assert!(run(home, &["encrypt-file", "--input", "doc.txt"]).status.success());
    fs::write(home.join("doc.txt"), b"newer unsaved work").unwrap();

    let output = run(home, &["decrypt-file", "--input", "doc.txt.enc", "--key", "doc.txt.key"]);
    assert!(!output.status.success());
    assert_eq!(fs::read(home.join("doc.txt")).unwrap(), b"newer unsaved work");

    let output = run(
        home,
        &["decrypt-file", "--input", "doc.txt.enc", "--key", "doc.txt.key", "--force"],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(fs::read(home.join("doc.txt")).unwrap(), b"v2 edits");
}

#[test]
fn encrypt_file_keeps_an_existing_key() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path();
    fs::write(home.join("notes.txt"), b"first draft").unwrap();
    assert!(run(home, &["encrypt-file", "--input", "notes.txt"]).status.success());
    let first_key = fs::read(home.join("notes.txt.key")).unwrap();

    let output = run(home, &["encrypt-file", "--input", "notes.txt"]);
    assert!(!output.status.success());
    assert_eq!(fs::read(home.join("notes.txt.key")).unwrap(), first_key);
}
