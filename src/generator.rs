//! Secure password generator.
//!
//! All randomness comes from the operating system CSPRNG (`OsRng`). A failing
//! entropy source aborts the process rather than degrade to a weaker
//! generator.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use secrecy::SecretString;

use crate::blacklist::is_blacklisted;
use crate::charset::{DIGITS, LOWERCASE, SPECIAL_CHARS, UPPERCASE};

/// Minimum length enforced on every request.
pub const MIN_LENGTH: usize = 8;

/// Length used when the caller has no preference.
pub const DEFAULT_LENGTH: usize = 12;

/// Generates a random password of the requested length, clamped to a minimum
/// of 8 characters.
///
/// The result always contains at least one uppercase letter, one lowercase
/// letter, one digit, and one character from [`SPECIAL_CHARS`], and is never
/// (case-insensitively) a blacklisted password.
pub fn generate(length: usize) -> SecretString {
    let length = length.max(MIN_LENGTH);

    let alphabet: Vec<u8> = UPPERCASE
        .iter()
        .chain(LOWERCASE)
        .chain(DIGITS)
        .chain(SPECIAL_CHARS.as_bytes())
        .copied()
        .collect();

    let mut rng = OsRng;

    // A blacklist collision at 8+ characters is astronomically unlikely, but
    // the never-blacklisted guarantee still needs the retry. Bounded loop
    // rather than recursion.
    loop {
        let mut chars: Vec<char> = Vec::with_capacity(length);

        // One guaranteed pick per required class; positions are randomized
        // by the shuffle below.
        chars.push(*UPPERCASE.choose(&mut rng).unwrap() as char);
        chars.push(*LOWERCASE.choose(&mut rng).unwrap() as char);
        chars.push(*DIGITS.choose(&mut rng).unwrap() as char);
        chars.push(*SPECIAL_CHARS.as_bytes().choose(&mut rng).unwrap() as char);

        while chars.len() < length {
            chars.push(*alphabet.choose(&mut rng).unwrap() as char);
        }

        chars.shuffle(&mut rng);

        let candidate: String = chars.into_iter().collect();
        if is_blacklisted(&candidate) {
            #[cfg(feature = "tracing")]
            tracing::warn!("generated password collided with blacklist, retrying");
            continue;
        }

        return SecretString::new(candidate.into());
    }
}
