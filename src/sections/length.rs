//! Length sections - base length scoring and the very-long bonus.

use super::Verdict;

const MIN_LENGTH: usize = 8;
const GOOD_LENGTH: usize = 12;
const BONUS_LENGTH: usize = 16;

/// Scores password length: +2 for 12+ characters, +1 for 8-11, otherwise
/// feedback asking for at least 8. Lengths are counted in characters, not
/// bytes.
pub fn length_section(password: &str) -> Verdict {
    let len = password.chars().count();
    if len >= GOOD_LENGTH {
        Verdict::awarded(2)
    } else if len >= MIN_LENGTH {
        Verdict::awarded(1)
    } else {
        Verdict::flagged("Increase the length to at least 8 characters.")
    }
}

/// Awards one extra point for very long passwords (16+ characters), on top
/// of the base length score. Never produces feedback.
pub fn length_bonus_section(password: &str) -> Verdict {
    if password.chars().count() >= BONUS_LENGTH {
        Verdict::awarded(1)
    } else {
        Verdict::awarded(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let verdict = length_section("Short1!");
        assert_eq!(verdict.points, 0);
        assert_eq!(
            verdict.feedback,
            Some("Increase the length to at least 8 characters.")
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(length_section("eight8!!"), Verdict::awarded(1));
    }

    #[test]
    fn test_length_section_eleven_chars() {
        assert_eq!(length_section("elevenchars"), Verdict::awarded(1));
    }

    #[test]
    fn test_length_section_twelve_chars() {
        assert_eq!(length_section("twelve-chars"), Verdict::awarded(2));
    }

    #[test]
    fn test_length_section_counts_characters_not_bytes() {
        // Eight characters but sixteen bytes; byte counting would give +2.
        assert_eq!(length_section("ääääääää"), Verdict::awarded(1));
    }

    #[test]
    fn test_length_bonus_below_sixteen() {
        assert_eq!(length_bonus_section("fifteen-chars.."), Verdict::awarded(0));
    }

    #[test]
    fn test_length_bonus_at_sixteen() {
        assert_eq!(length_bonus_section("sixteen-chars..."), Verdict::awarded(1));
    }
}
