//! Blacklist management module
//!
//! Holds the set of disallowed common passwords and answers case-insensitive
//! membership queries. A built-in list is active by default; applications may
//! replace it at startup with [`load_blacklist_from_path`].

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, RwLock};
use thiserror::Error;

/// Common passwords rejected outright. Entries are stored lowercase; lookups
/// lowercase the candidate first.
const DEFAULT_BLACKLIST: &[&str] = &[
    "password",
    "password123",
    "123456",
    "qwerty",
    "letmein",
    "admin",
    "welcome",
    "111111",
    "123123",
    "iloveyou",
    "master",
    "sunshine",
    "123456789",
    "football",
    "baseball",
    "monkey",
    "shadow",
    "password1",
    "12345678",
    "1234",
    "abc123",
    "1234567",
    "password!",
    "12345",
    "dragon",
    "qwerty123",
    "superman",
    "987654321",
    "mypass",
    "trustno1",
    "hello",
    "freedom",
    "princess",
    "qazwsx",
    "ninja",
    "azerty",
    "password12",
    "654321",
    "passw0rd",
    "qwertyuiop",
    "123321",
    "1234567890",
    "123456a",
    "letmein123",
    "666666",
    "123abc",
    "password1234",
    "qwerty1234",
    "123456789a",
    "123456789z",
    "123456789x",
];

static DEFAULT_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DEFAULT_BLACKLIST.iter().copied().collect());

// Written only by load_blacklist_from_path, at startup.
static CUSTOM_SET: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Replaces the built-in blacklist with entries from a newline-delimited file.
///
/// Entries are lowercased and blank lines are skipped. Intended to be called
/// once at startup; the active set is read-only afterwards.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, or contains
/// no entries.
pub fn load_blacklist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, BlacklistError> {
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

    let count = set.len();
    {
        let mut guard = CUSTOM_SET.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist loaded: {} passwords from {}", count, path.display());

    Ok(count)
}

/// Checks a password against the active blacklist, case-insensitively.
pub fn is_blacklisted(password: &str) -> bool {
    let needle = password.to_lowercase();
    let guard = CUSTOM_SET.read().unwrap();
    match guard.as_ref() {
        Some(custom) => custom.contains(&needle),
        None => DEFAULT_SET.contains(needle.as_str()),
    }
}

/// Returns a snapshot of the active blacklist.
pub fn blacklist() -> HashSet<String> {
    let guard = CUSTOM_SET.read().unwrap();
    match guard.as_ref() {
        Some(custom) => custom.clone(),
        None => DEFAULT_SET.iter().map(|s| (*s).to_string()).collect(),
    }
}

/// Restores the built-in blacklist for testing purposes.
#[cfg(test)]
pub(crate) fn reset_blacklist_for_testing() {
    let mut guard = CUSTOM_SET.write().unwrap();
    *guard = None;
}
