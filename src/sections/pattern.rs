//! Pattern sections - repeated characters and sequential runs.
//!
//! Both sections are advisory: they produce feedback but never change the
//! score.

use super::Verdict;

/// Flags any character appearing three times consecutively.
pub fn repetition_section(password: &str) -> Verdict {
    let chars: Vec<char> = password.chars().collect();
    if chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2]) {
        return Verdict::flagged("Avoid using the same character three times consecutively.");
    }
    Verdict::awarded(0)
}

/// Flags three consecutive letters or digits whose code points form a
/// strictly ascending or descending run of step one ("abc", "cba", "123",
/// "321"). The scan stops at the first match, so at most one warning is
/// ever produced.
pub fn sequential_section(password: &str) -> Verdict {
    let chars: Vec<char> = password.chars().collect();
    for w in chars.windows(3) {
        let all_alpha = w.iter().all(|c| c.is_alphabetic());
        let all_digit = w.iter().all(|c| c.is_ascii_digit());
        if !all_alpha && !all_digit {
            continue;
        }
        let (a, b, c) = (w[0] as i64, w[1] as i64, w[2] as i64);
        if (b == a + 1 && c == b + 1) || (b == a - 1 && c == b - 1) {
            return Verdict::flagged(
                "Avoid using sequential characters (e.g., 'abc', 'cba', '123', or '321'); they weaken your password.",
            );
        }
    }
    Verdict::awarded(0)
}
