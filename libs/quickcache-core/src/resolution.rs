//! Answer resolution for test attempts.

use crate::error::{FlashcardError, Result};
use crate::flashcard::Flashcard;
use crate::matching::compare_answers;
use crate::types::Question;
use serde::{Deserialize, Serialize};

/// A user's attempt at a flashcard.
///
/// Open-ended questions read `answer`; multiple-choice questions read
/// `option`, a 1-based index into the choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
}

impl TestSubmission {
    pub fn answer(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
            option: None,
        }
    }

    pub fn option(option: impl Into<String>) -> Self {
        Self {
            answer: None,
            option: Some(option.into()),
        }
    }
}

/// Outcome of a test attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestOutcome {
    pub is_correct: bool,
    /// The submitted answer text, after option resolution.
    pub submitted: String,
    /// The flashcard with its statistics updated.
    pub updated: Flashcard,
}

/// Evaluate `submission` against `flashcard`.
///
/// Pure: the caller replaces the flashcard in its collection.
pub fn resolve(flashcard: &Flashcard, submission: &TestSubmission) -> Result<TestOutcome> {
    let submitted = match flashcard.question() {
        Question::OpenEnded(_) => submission
            .answer
            .clone()
            .ok_or(FlashcardError::NoAnswerProvided)?,
        Question::MultipleChoice(mcq) => {
            let token = submission
                .option
                .as_deref()
                .ok_or(FlashcardError::NoOptionProvided)?;
            mcq.resolve_option(token)?.as_str().to_string()
        }
    };

    let result = compare_answers(&submitted, flashcard.answer().as_str());
    let updated = if result.is_correct {
        flashcard.after_test_success()
    } else {
        flashcard.after_test_failure()
    };

    Ok(TestOutcome {
        is_correct: result.is_correct,
        submitted: result.submitted,
        updated,
    })
}
