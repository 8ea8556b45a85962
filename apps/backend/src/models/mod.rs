//! API request and response types

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// Re-export shared types from quickcache-core
pub use quickcache_core::{
    EditDescriptor, Flashcard, FlashcardError, FlashcardFilter, StatsReport, Tag, TestSubmission,
};

/// Validate raw tag strings into a tag set.
pub fn parse_tags(raw: Vec<String>) -> Result<BTreeSet<Tag>, FlashcardError> {
    raw.into_iter().map(Tag::new).collect()
}

// === Requests ===

/// POST /api/flashcards/open
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddOpenEndedRequest {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// POST /api/flashcards/mcq
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMultipleChoiceRequest {
    pub question: String,
    pub choices: Vec<String>,
    /// 1-based index of the correct choice.
    pub answer: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// POST /api/flashcards/delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteByTagsRequest {
    pub tags: Vec<String>,
}

/// POST /api/flashcards/find
///
/// Empty criteria show every flashcard again.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindRequest {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

// === Responses ===

#[derive(Debug, Clone, Serialize)]
pub struct FlashcardEntry {
    pub position: usize,
    pub flashcard: Flashcard,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlashcardListResponse {
    pub flashcards: Vec<FlashcardEntry>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlashcardResponse {
    pub flashcard: Flashcard,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub deleted: Vec<Flashcard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestResponse {
    pub is_correct: bool,
    pub submitted: String,
    pub expected: String,
    pub flashcard: Flashcard,
}
