//! Criteria for narrowing the displayed flashcards.

use crate::flashcard::Flashcard;
use crate::types::Tag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Search criteria for the display view.
///
/// A flashcard is shown when its question contains any of `keywords` as a
/// whole word (case-insensitive, surrounding punctuation ignored) and it
/// carries every tag in `tags`. An empty criterion always matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardFilter {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl FlashcardFilter {
    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.keywords.iter().all(|k| k.trim().is_empty()) && self.tags.is_empty()
    }

    pub fn matches(&self, flashcard: &Flashcard) -> bool {
        self.matches_keywords(flashcard.question().value())
            && self.tags.iter().all(|t| flashcard.matches_tag(t))
    }

    fn matches_keywords(&self, question: &str) -> bool {
        let keywords: Vec<String> = self
            .keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        if keywords.is_empty() {
            return true;
        }

        question
            .split_whitespace()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
            .any(|word| keywords.contains(&word))
    }
}
