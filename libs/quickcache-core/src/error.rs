//! Error types for quickcache-core.

use thiserror::Error;

/// Result type alias using FlashcardError.
pub type Result<T> = std::result::Result<T, FlashcardError>;

/// Errors produced by the flashcard engine.
///
/// Every failure aborts the current command; the collection is never
/// partially updated when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlashcardError {
    #[error("this flashcard already exists in the collection")]
    DuplicateFlashcard,

    #[error("flashcard not found in the collection")]
    FlashcardNotFound,

    #[error("at least one field to edit must be provided")]
    NoFieldsEdited,

    #[error("an open-ended question cannot take choices")]
    TypeMismatch,

    #[error("answer must be an integer: {value}")]
    AnswerNotInteger { value: String },

    #[error("answer {index} is out of range for {choices} choices")]
    AnswerOutOfRange { index: i64, choices: usize },

    #[error("no answer provided for an open-ended question")]
    NoAnswerProvided,

    #[error("no option provided for a multiple-choice question")]
    NoOptionProvided,

    #[error("question cannot be blank")]
    EmptyQuestion,

    #[error("answer cannot be blank")]
    EmptyAnswer,

    #[error("choice cannot be blank")]
    EmptyChoice,

    #[error("tag cannot be blank")]
    EmptyTag,

    #[error("a multiple-choice question needs at least one choice")]
    NoChoices,

    #[error("answer {answer:?} must match exactly one choice")]
    AnswerNotInChoices { answer: String },

    #[error("times correct ({correct}) exceeds times tested ({tested})")]
    InvalidStatistics { tested: u32, correct: u32 },

    #[error("position {position} is outside the displayed list of {len} flashcards")]
    InvalidPosition { position: usize, len: usize },

    #[error("no flashcards match the given criteria")]
    NoMatchingFlashcards,
}

impl FlashcardError {
    /// Stable machine-readable code for this error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateFlashcard => "duplicate_flashcard",
            Self::FlashcardNotFound => "flashcard_not_found",
            Self::NoFieldsEdited => "no_fields_edited",
            Self::TypeMismatch => "type_mismatch",
            Self::AnswerNotInteger { .. } => "answer_not_integer",
            Self::AnswerOutOfRange { .. } => "answer_out_of_range",
            Self::NoAnswerProvided => "no_answer_provided",
            Self::NoOptionProvided => "no_option_provided",
            Self::EmptyQuestion => "empty_question",
            Self::EmptyAnswer => "empty_answer",
            Self::EmptyChoice => "empty_choice",
            Self::EmptyTag => "empty_tag",
            Self::NoChoices => "no_choices",
            Self::AnswerNotInChoices { .. } => "answer_not_in_choices",
            Self::InvalidStatistics { .. } => "invalid_statistics",
            Self::InvalidPosition { .. } => "invalid_position",
            Self::NoMatchingFlashcards => "no_matching_flashcards",
        }
    }
}
