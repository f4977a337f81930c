//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::blacklist::is_blacklisted;
use crate::sections::{
    Verdict, case_section, digit_section, length_bonus_section, length_section,
    repetition_section, sequential_section, special_char_section,
};
use crate::types::Evaluation;

const BLACKLIST_FEEDBACK: &str = "This password is too common. Please choose a different one.";

/// Evaluates password strength, returning the label, the 0-6 score, and
/// improvement feedback in the order the checks ran.
///
/// A blacklist hit (case-insensitive) short-circuits everything else: the
/// result is Weak with score 0 and only the common-password message.
pub fn evaluate(password: &SecretString) -> Evaluation {
    let pwd = password.expose_secret();

    if is_blacklisted(pwd) {
        #[cfg(feature = "tracing")]
        tracing::debug!("password rejected by blacklist");
        return Evaluation::new(0, vec![BLACKLIST_FEEDBACK.to_string()]);
    }

    // Scoring sections first, then the advisory pattern sections. Feedback
    // keeps this order.
    let sections: [fn(&str) -> Verdict; 7] = [
        length_section,
        case_section,
        digit_section,
        special_char_section,
        length_bonus_section,
        repetition_section,
        sequential_section,
    ];

    let mut score = 0u8;
    let mut feedback = Vec::new();
    for section in sections {
        let verdict = section(pwd);
        score += verdict.points;
        if let Some(msg) = verdict.feedback {
            feedback.push(msg.to_string());
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(score, "password evaluated");

    Evaluation::new(score, feedback)
}
