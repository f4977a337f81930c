//! Result types for password evaluation.

use std::fmt;

/// Highest achievable score: +2 length, +1 case mix, +1 digit, +1 special
/// character, +1 very-long bonus.
pub const MAX_SCORE: u8 = 6;

/// Strength label derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    /// Maps a score to its label: 5+ is Strong, 3-4 is Moderate, below is Weak.
    pub fn from_score(score: u8) -> Self {
        if score >= 5 {
            Strength::Strong
        } else if score >= 3 {
            Strength::Moderate
        } else {
            Strength::Weak
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Weak => write!(f, "Weak"),
            Strength::Moderate => write!(f, "Moderate"),
            Strength::Strong => write!(f, "Strong"),
        }
    }
}

/// Outcome of evaluating one password: label, score, and improvement
/// feedback in the order the checks ran. Feedback may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub strength: Strength,
    pub score: u8,
    pub feedback: Vec<String>,
}

impl Evaluation {
    pub(crate) fn new(score: u8, feedback: Vec<String>) -> Self {
        Self {
            strength: Strength::from_score(score),
            score,
            feedback,
        }
    }
}
