//! Character variety sections - case mix, digits, special characters.

use super::Verdict;
use crate::charset::is_special;

/// Awards a point when both uppercase and lowercase ASCII letters appear.
pub fn case_section(password: &str) -> Verdict {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    if has_upper && has_lower {
        Verdict::awarded(1)
    } else {
        Verdict::flagged("Use both uppercase and lowercase letters.")
    }
}

/// Awards a point for at least one decimal digit.
pub fn digit_section(password: &str) -> Verdict {
    if password.chars().any(|c| c.is_ascii_digit()) {
        Verdict::awarded(1)
    } else {
        Verdict::flagged("Include at least one numeric digit (0-9).")
    }
}

/// Awards a point for at least one character from the shared special set.
pub fn special_char_section(password: &str) -> Verdict {
    if password.chars().any(is_special) {
        Verdict::awarded(1)
    } else {
        Verdict::flagged("Add at least one special character (!@#$%^&*).")
    }
}
