//! Core flashcard engine for QuickCache.
//!
//! Provides:
//! - Validated value types (Choice, Answer, Tag, Statistics) and question variants
//! - The immutable Flashcard entity and its persistence record
//! - Edit reconciliation (partial edits against an existing flashcard)
//! - Answer resolution for test attempts
//! - A duplicate-free ordered flashcard collection and the model built on it
//! - Search criteria that narrow the displayed flashcards

pub mod collection;
pub mod error;
pub mod filter;
pub mod flashcard;
pub mod matching;
pub mod model;
pub mod reconcile;
pub mod resolution;
pub mod types;

pub use collection::UniqueFlashcardList;
pub use error::{FlashcardError, Result};
pub use filter::FlashcardFilter;
pub use flashcard::{Flashcard, FlashcardRecord};
pub use matching::{compare_answers, parse_option_index, MatchResult};
pub use model::{FlashcardPredicate, QuickCache, StatsReport};
pub use reconcile::{reconcile, EditDescriptor};
pub use resolution::{resolve, TestOutcome, TestSubmission};
pub use types::{
    Answer, Choice, MultipleChoiceQuestion, OpenEndedQuestion, Question, Statistics, Tag,
};
