//! Answer matching and option-index parsing.

use crate::error::{FlashcardError, Result};
use serde::{Deserialize, Serialize};

/// Result of comparing a submitted answer to the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Submitted answer after trimming (for display).
    pub submitted: String,
    /// Stored answer after trimming (for display).
    pub expected: String,
}

/// Compare a submitted answer to the correct answer.
///
/// Both sides are trimmed and compared case-insensitively.
pub fn compare_answers(submitted: &str, correct: &str) -> MatchResult {
    let submitted = submitted.trim().to_string();
    let expected = correct.trim().to_string();
    let is_correct = submitted.to_lowercase() == expected.to_lowercase();

    MatchResult {
        is_correct,
        submitted,
        expected,
    }
}

/// Parse a 1-based option token against a list of `choice_count` choices.
///
/// Returns the zero-based index on success.
pub fn parse_option_index(token: &str, choice_count: usize) -> Result<usize> {
    let trimmed = token.trim();
    let index = trimmed
        .parse::<i64>()
        .map_err(|_| FlashcardError::AnswerNotInteger {
            value: trimmed.to_string(),
        })?;

    if index <= 0 || index as u64 > choice_count as u64 {
        return Err(FlashcardError::AnswerOutOfRange {
            index,
            choices: choice_count,
        });
    }

    Ok(index as usize - 1)
}
