//! Reference data: common passwords and dictionary words.
//!
//! The built-in tables are compiled in. An extra newline-separated blacklist
//! file can be merged into the common-password set when a scorer is built.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an extra blacklist file.
pub const BLACKLIST_PATH_ENV: &str = "PWD_BLACKLIST_PATH";

/// Built-in common passwords, lowercase. Matched exactly.
pub const COMMON_PASSWORDS: &[&str] = &[
    "000000", "111111", "11111111", "121212", "123123", "123321", "1234", "12345",
    "123456", "123456789", "1234567890", "1qaz2wsx", "654321", "6543211", "696969",
    "aa123456", "aaaaaa", "abc123", "abc123456", "abcd1234", "access", "admin",
    "admin1", "admin123", "amanda", "andrea", "andrew", "angel", "angel1",
    "ashley", "asdf1234", "asdfgh", "asd123", "azerty", "banana", "banana1",
    "barney", "barney1", "baseball", "batman", "batman1", "biteme", "blessed",
    "brandon", "buster", "buster1", "butter", "butterfly", "charlie", "charlie1",
    "charlie123", "chelsea", "cheese", "chocolate", "computer", "cookie", "dallas",
    "daniel", "diamond", "donald", "donald1", "donald123", "dragon", "dragon1",
    "dragon123", "flower", "flower1", "football", "football1", "football123",
    "forever", "forever1", "friends", "freedom", "george", "george1", "ginger",
    "ginger1", "ginger2", "hannah", "happy", "happy1", "harley", "heaven", "hello",
    "hello1", "hello123", "hockey", "hottie", "hunter", "hunter1", "iloveu",
    "iloveu2", "iloveu123", "iloveyou", "iloveyou1", "iloveyou2", "iloveyou123",
    "jasper", "jennifer", "jennifer1", "jennifer123", "jesus", "jesus1",
    "jesus123", "john", "jordan", "jordan1", "jordan123", "jordan23", "joshua",
    "justin", "killer", "killer1", "letmein", "letmein!", "letmein1", "letmein123",
    "liverpool", "love", "love123", "love1234", "love12345", "lovely", "loveu",
    "master", "master1", "master123", "matthew", "matthew1", "matthew123",
    "mercedes", "michael", "michael1", "michael123", "michelle", "mickey",
    "monkey", "monkey1", "mylove", "mustang", "ninja", "nicole", "orange", "pass",
    "pass123", "pass1234", "pass12345", "password", "password1", "password123",
    "pa55word", "patrick", "peanut", "peanut1", "pepper", "pepper1", "pepper2",
    "pokemon", "princess", "princess1", "purple", "purple1", "qazwsx", "qwe123",
    "qwert", "qwert1", "qwert12", "qwert123", "qwerty", "qwerty1", "qwerty12",
    "qwerty123", "qwerty1234", "qwerty12345", "qwertyu", "qwertyuiop", "rockyou",
    "root", "root123", "root1234", "samsung", "secret", "shadow", "shadow1",
    "shadow123", "silver", "soccer", "spiderman", "star", "starwars", "summer",
    "sunshine", "sunshine1", "sunshine123", "superman", "superman!", "superman1",
    "superman123", "superstar", "taylor", "test", "test123", "thomas", "tigger",
    "tigger1", "tigger123", "trustme", "trustno1", "trustno1!", "welcome",
    "welcome1", "welcome123", "whatever", "yankes", "zxc123", "zxcvbnm",
];

/// Dictionary words matched as substrings, in this order.
pub const COMMON_WORDS: &[&str] = &[
    "password", "admin", "user", "login", "welcome", "hello", "world",
];

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the built-in common-password set.
pub fn builtin_common_passwords() -> HashSet<String> {
    COMMON_PASSWORDS.iter().map(|p| p.to_string()).collect()
}

/// Returns the blacklist path from `PWD_BLACKLIST_PATH`, if set.
pub fn blacklist_path_from_env() -> Option<PathBuf> {
    std::env::var_os(BLACKLIST_PATH_ENV).map(PathBuf::from)
}

/// Reads a blacklist file into a set of lowercase entries.
///
/// Lines are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File has no entries
pub fn load_blacklist_file<P: AsRef<Path>>(path: P) -> Result<HashSet<String>, BlacklistError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist load FAILED: file not found {}", path.display());
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    if set.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist load FAILED: empty file {}", path.display());
        return Err(BlacklistError::EmptyFile);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist loaded: {} passwords from {}", set.len(), path.display());

    Ok(set)
}
