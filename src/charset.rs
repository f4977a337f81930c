//! Character classes shared by the evaluator and the generator.
//!
//! Evaluation and generation must agree on the special set, otherwise the
//! evaluator could flag a character the generator just emitted.

pub(crate) const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub(crate) const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub(crate) const DIGITS: &[u8] = b"0123456789";

/// Special characters recognized by scoring and emitted by generation.
pub const SPECIAL_CHARS: &str = "!@#$%^&*";

pub(crate) fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_special_members() {
        for c in SPECIAL_CHARS.chars() {
            assert!(is_special(c), "'{}' should be special", c);
        }
    }

    #[test]
    fn test_is_special_excludes_other_punctuation() {
        for c in ['(', ')', '-', '_', '+', '=', '?', '.', ',', ' '] {
            assert!(!is_special(c), "'{}' should not be special", c);
        }
    }

    #[test]
    fn test_classes_are_disjoint() {
        for b in UPPERCASE {
            assert!(!LOWERCASE.contains(b));
            assert!(!DIGITS.contains(b));
        }
        for c in SPECIAL_CHARS.chars() {
            assert!(!c.is_ascii_alphanumeric());
        }
    }
}
