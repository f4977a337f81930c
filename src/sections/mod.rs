//! Password evaluation sections
//!
//! Each section examines one aspect of a password and reports the points it
//! awards plus optional improvement feedback. The evaluator runs them in a
//! fixed order and sums the points.

mod length;
mod pattern;
mod variety;

pub use length::{length_bonus_section, length_section};
pub use pattern::{repetition_section, sequential_section};
pub use variety::{case_section, digit_section, special_char_section};

/// Outcome of a single evaluation section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Points the section contributes to the total score.
    pub points: u8,
    /// Improvement suggestion when the section found a problem.
    pub feedback: Option<&'static str>,
}

impl Verdict {
    pub fn awarded(points: u8) -> Self {
        Self {
            points,
            feedback: None,
        }
    }

    pub fn flagged(feedback: &'static str) -> Self {
        Self {
            points: 0,
            feedback: Some(feedback),
        }
    }
}
