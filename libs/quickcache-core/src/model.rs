//! The flashcard model: collection, display view and command operations.
//!
//! Commands address flashcards by 1-based position in the current view.
//! Each operation either installs its full result or returns an error and
//! leaves the model untouched.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::collection::UniqueFlashcardList;
use crate::error::{FlashcardError, Result};
use crate::filter::FlashcardFilter;
use crate::flashcard::{Flashcard, FlashcardRecord};
use crate::reconcile::{reconcile, EditDescriptor};
use crate::resolution::{resolve, TestOutcome, TestSubmission};

/// Predicate narrowing the displayed flashcards.
pub type FlashcardPredicate = Arc<dyn Fn(&Flashcard) -> bool + Send + Sync>;

/// Usage statistics of one flashcard, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub question: String,
    pub times_tested: u32,
    pub times_correct: u32,
    pub times_wrong: u32,
    /// Percentage of correct attempts, absent if never tested.
    pub correct_rate: Option<f64>,
}

impl StatsReport {
    pub fn for_flashcard(flashcard: &Flashcard) -> Self {
        let stats = flashcard.statistics();
        Self {
            question: flashcard.question().value().to_string(),
            times_tested: stats.times_tested(),
            times_correct: stats.times_correct(),
            times_wrong: stats.times_wrong(),
            correct_rate: stats.correct_rate(),
        }
    }
}

/// In-memory QuickCache state.
#[derive(Clone, Default)]
pub struct QuickCache {
    flashcards: UniqueFlashcardList,
    filter: Option<FlashcardPredicate>,
}

impl QuickCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from persisted records.
    pub fn from_records(records: Vec<FlashcardRecord>) -> Result<Self> {
        let mut model = Self::new();
        model.reset_data(records)?;
        Ok(model)
    }

    /// All flashcards in insertion order, ignoring the display filter.
    pub fn flashcards(&self) -> &[Flashcard] {
        self.flashcards.as_view()
    }

    /// Flashcards currently displayed, in order.
    pub fn view(&self) -> Vec<&Flashcard> {
        self.flashcards
            .as_view()
            .iter()
            .filter(|c| self.is_displayed(c))
            .collect()
    }

    fn is_displayed(&self, flashcard: &Flashcard) -> bool {
        self.filter.as_ref().map_or(true, |keep| keep(flashcard))
    }

    pub fn update_filter<F>(&mut self, predicate: F)
    where
        F: Fn(&Flashcard) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(predicate));
    }

    /// Narrow the view to flashcards matching `filter`; an empty filter
    /// shows everything.
    pub fn find(&mut self, filter: FlashcardFilter) {
        if filter.is_empty() {
            self.show_all();
        } else {
            self.update_filter(move |c| filter.matches(c));
        }
        debug!(shown = self.view().len(), "view filtered");
    }

    pub fn show_all(&mut self) {
        self.filter = None;
    }

    /// Flashcard at a 1-based position in the current view.
    pub fn flashcard_at(&self, position: usize) -> Result<&Flashcard> {
        let view = self.view();
        let len = view.len();
        position
            .checked_sub(1)
            .and_then(|idx| view.get(idx).copied())
            .ok_or(FlashcardError::InvalidPosition { position, len })
    }

    pub fn has_flashcard(&self, flashcard: &Flashcard) -> bool {
        self.flashcards.contains(flashcard)
    }

    pub fn add(&mut self, flashcard: Flashcard) -> Result<()> {
        self.flashcards.add(flashcard)?;
        debug!(total = self.flashcards.len(), "flashcard added");
        Ok(())
    }

    /// Apply `edit` to the flashcard at `position` and return the result.
    ///
    /// An edit that keeps the question and answer text is rejected as a
    /// duplicate, even if tags or choices changed. On success the view is
    /// reset to show every flashcard.
    pub fn edit(&mut self, position: usize, edit: &EditDescriptor) -> Result<Flashcard> {
        let target = self.flashcard_at(position)?.clone();
        let edited = reconcile(&target, edit)?;

        if edited.is_same_flashcard(&target) {
            return Err(FlashcardError::DuplicateFlashcard);
        }

        self.flashcards.replace(&target, edited.clone())?;
        self.show_all();
        debug!(position, "flashcard edited");
        Ok(edited)
    }

    pub fn delete(&mut self, position: usize) -> Result<Flashcard> {
        let target = self.flashcard_at(position)?.clone();
        let removed = self.flashcards.remove(&target)?;
        debug!(position, total = self.flashcards.len(), "flashcard deleted");
        Ok(removed)
    }

    /// Delete every flashcard matching `predicate`.
    pub fn delete_matching<F>(&mut self, predicate: F) -> Result<Vec<Flashcard>>
    where
        F: Fn(&Flashcard) -> bool,
    {
        if !self.flashcards.as_view().iter().any(|c| predicate(c)) {
            return Err(FlashcardError::NoMatchingFlashcards);
        }
        let removed = self.flashcards.remove_matching(predicate);
        debug!(
            removed = removed.len(),
            total = self.flashcards.len(),
            "flashcards deleted by predicate"
        );
        Ok(removed)
    }

    /// Test the flashcard at `position` and record the attempt.
    pub fn test(&mut self, position: usize, submission: &TestSubmission) -> Result<TestOutcome> {
        let target = self.flashcard_at(position)?.clone();
        let outcome = resolve(&target, submission)?;
        self.flashcards.replace(&target, outcome.updated.clone())?;
        debug!(position, correct = outcome.is_correct, "flashcard tested");
        Ok(outcome)
    }

    pub fn stats(&self, position: usize) -> Result<StatsReport> {
        self.flashcard_at(position).map(StatsReport::for_flashcard)
    }

    /// Replace all data with `records`.
    ///
    /// Every record is validated first; on error the current data stays.
    pub fn reset_data(&mut self, records: Vec<FlashcardRecord>) -> Result<()> {
        let flashcards = records
            .into_iter()
            .map(Flashcard::try_from)
            .collect::<Result<Vec<_>>>()?;
        self.flashcards = UniqueFlashcardList::from_flashcards(flashcards)?;
        self.show_all();
        debug!(total = self.flashcards.len(), "flashcard data reset");
        Ok(())
    }

    /// Plain ordered records of every flashcard.
    pub fn snapshot(&self) -> Vec<FlashcardRecord> {
        self.flashcards
            .as_view()
            .iter()
            .map(Flashcard::to_record)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.flashcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashcards.is_empty()
    }
}
