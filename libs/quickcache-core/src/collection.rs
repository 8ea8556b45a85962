//! Ordered flashcard container that rejects duplicates.

use crate::error::{FlashcardError, Result};
use crate::flashcard::Flashcard;

/// Ordered list of flashcards in which no two entries are
/// [`Flashcard::is_same_flashcard`]-equal.
///
/// Insertion order is preserved and backs the 1-based positions used by
/// commands. Every operation checks before it mutates, so a failed call
/// leaves the list unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueFlashcardList {
    flashcards: Vec<Flashcard>,
}

impl UniqueFlashcardList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from `flashcards`, failing on the first duplicate.
    pub fn from_flashcards(flashcards: Vec<Flashcard>) -> Result<Self> {
        for (i, card) in flashcards.iter().enumerate() {
            if flashcards[..i].iter().any(|c| c.is_same_flashcard(card)) {
                return Err(FlashcardError::DuplicateFlashcard);
            }
        }
        Ok(Self { flashcards })
    }

    /// Whether an entry with the same identity as `flashcard` exists.
    pub fn contains(&self, flashcard: &Flashcard) -> bool {
        self.flashcards.iter().any(|c| c.is_same_flashcard(flashcard))
    }

    pub fn add(&mut self, flashcard: Flashcard) -> Result<()> {
        if self.contains(&flashcard) {
            return Err(FlashcardError::DuplicateFlashcard);
        }
        self.flashcards.push(flashcard);
        Ok(())
    }

    /// Swap `target` (matched by full equality) for `replacement` in place.
    pub fn replace(&mut self, target: &Flashcard, replacement: Flashcard) -> Result<()> {
        let idx = self
            .position_of(target)
            .ok_or(FlashcardError::FlashcardNotFound)?;

        let clashes = self
            .flashcards
            .iter()
            .enumerate()
            .any(|(i, c)| i != idx && c.is_same_flashcard(&replacement));
        if clashes {
            return Err(FlashcardError::DuplicateFlashcard);
        }

        self.flashcards[idx] = replacement;
        Ok(())
    }

    pub fn remove(&mut self, target: &Flashcard) -> Result<Flashcard> {
        let idx = self
            .position_of(target)
            .ok_or(FlashcardError::FlashcardNotFound)?;
        Ok(self.flashcards.remove(idx))
    }

    /// Remove every entry matching `predicate`, returning them in order.
    pub fn remove_matching<F>(&mut self, predicate: F) -> Vec<Flashcard>
    where
        F: Fn(&Flashcard) -> bool,
    {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.flashcards)
            .into_iter()
            .partition(|c| predicate(c));
        self.flashcards = kept;
        removed
    }

    /// Read-only ordered view.
    pub fn as_view(&self) -> &[Flashcard] {
        &self.flashcards
    }

    pub fn len(&self) -> usize {
        self.flashcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashcards.is_empty()
    }

    fn position_of(&self, target: &Flashcard) -> Option<usize> {
        self.flashcards.iter().position(|c| c == target)
    }
}
