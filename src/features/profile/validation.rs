use lazy_static::lazy_static;
use regex::Regex;
use unidecode::unidecode;

use crate::data::models::DisplayNameError;

pub const MIN_LEN: usize = 3;
pub const MAX_LEN: usize = 20;

// Checked against the normalized name, so spacing, case, accents and
// underscores cannot mask a hit.
const BLOCKED_WORDS: [&str; 8] = [
    "fuck", "shit", "bitch", "asshole", "bastard", "dick", "whore", "slut",
];

lazy_static! {
    static ref ALLOWED_RE: Regex = Regex::new(r"^[A-Za-z0-9_ ]+$").unwrap();
}

/// The same checks the client runs before submitting; the server is the
/// one that counts. Uniqueness is checked separately against the store.
pub fn check_display_name(name: &str) -> Result<(), DisplayNameError> {
    let trimmed = name.trim();
    let char_count = trimmed.chars().count();
    if char_count < MIN_LEN || char_count > MAX_LEN {
        return Err(DisplayNameError::InvalidLength);
    }

    if !ALLOWED_RE.is_match(trimmed) {
        return Err(DisplayNameError::InvalidCharacters);
    }

    let normalized = normalize(trimmed);
    if BLOCKED_WORDS.iter().any(|word| normalized.contains(word)) {
        return Err(DisplayNameError::Blocked);
    }

    Ok(())
}

fn normalize(name: &str) -> String {
    unidecode(name)
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}
