//! Edit reconciliation: applying a partial edit to an existing flashcard.
//!
//! # Rules
//! - Choices can only be edited on a multiple-choice question.
//! - For multiple-choice questions an explicit answer is a 1-based option
//!   token resolved against the post-edit choice list.
//! - When choices change without an explicit answer, the correct answer
//!   keeps its slot: the old answer's position in the previous choices
//!   selects the new answer from the new choices.
//! - Statistics are always carried over unchanged.

use crate::error::{FlashcardError, Result};
use crate::flashcard::Flashcard;
use crate::types::{Answer, Choice, MultipleChoiceQuestion, OpenEndedQuestion, Question, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Fields to change on a flashcard. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    /// Literal answer for open-ended questions, option index for MCQs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.question.is_some()
            || self.answer.is_some()
            || self.choices.is_some()
            || self.tags.is_some()
    }
}

/// Compute the flashcard that results from applying `edit` to `existing`.
///
/// Duplicate and no-op checks against the collection are left to the
/// caller.
pub fn reconcile(existing: &Flashcard, edit: &EditDescriptor) -> Result<Flashcard> {
    if !existing.question().is_multiple_choice() && edit.choices.is_some() {
        return Err(FlashcardError::TypeMismatch);
    }
    if !edit.is_any_field_edited() {
        return Err(FlashcardError::NoFieldsEdited);
    }

    let (question, answer) = match existing.question() {
        Question::MultipleChoice(mcq) => reconcile_multiple_choice(existing, mcq, edit)?,
        Question::OpenEnded(q) => reconcile_open_ended(existing, q, edit)?,
    };

    let tags = edit
        .tags
        .clone()
        .unwrap_or_else(|| existing.tags().clone());

    Flashcard::with_statistics(question, answer, tags, existing.statistics())
}

fn reconcile_multiple_choice(
    existing: &Flashcard,
    mcq: &MultipleChoiceQuestion,
    edit: &EditDescriptor,
) -> Result<(Question, Answer)> {
    let text = edit.question.as_deref().unwrap_or(mcq.value());
    let choices = match &edit.choices {
        Some(raw) => raw
            .iter()
            .map(|c| Choice::new(c.as_str()))
            .collect::<Result<Vec<_>>>()?,
        None => mcq.choices().to_vec(),
    };
    let updated = MultipleChoiceQuestion::new(text, choices)?;

    let answer = match (&edit.answer, &edit.choices) {
        (Some(token), _) => Answer::from(updated.resolve_option(token)?),
        (None, None) => existing.answer().clone(),
        (None, Some(_)) => carry_over_answer(existing.answer(), mcq.choices(), updated.choices())?,
    };

    Ok((Question::MultipleChoice(updated), answer))
}

/// Pick the choice occupying the old answer's slot in the new list.
fn carry_over_answer(previous: &Answer, old: &[Choice], new: &[Choice]) -> Result<Answer> {
    let wanted = previous.as_str().to_lowercase();
    let slot = old
        .iter()
        .position(|c| c.as_str().to_lowercase() == wanted)
        .ok_or_else(|| FlashcardError::AnswerNotInChoices {
            answer: previous.as_str().to_string(),
        })?;

    match new.get(slot) {
        Some(choice) => Ok(Answer::from(choice)),
        None => Err(FlashcardError::AnswerOutOfRange {
            index: slot as i64 + 1,
            choices: new.len(),
        }),
    }
}

fn reconcile_open_ended(
    existing: &Flashcard,
    question: &OpenEndedQuestion,
    edit: &EditDescriptor,
) -> Result<(Question, Answer)> {
    let text = edit.question.as_deref().unwrap_or(question.value());
    let answer = match &edit.answer {
        Some(raw) => Answer::new(raw.as_str())?,
        None => existing.answer().clone(),
    };
    Ok((Question::open_ended(text)?, answer))
}
