//! The flashcard entity and its plain persistence record.

use crate::error::{FlashcardError, Result};
use crate::types::{Answer, Choice, MultipleChoiceQuestion, Question, Statistics, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// An immutable question/answer pair with tags and usage statistics.
///
/// Every change produces a new `Flashcard`; fields are never mutated in
/// place. `PartialEq` is full equality (tags and statistics included),
/// while [`Flashcard::is_same_flashcard`] is the identity used for
/// duplicate detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    question: Question,
    answer: Answer,
    tags: BTreeSet<Tag>,
    statistics: Statistics,
}

impl Flashcard {
    /// Create a flashcard with fresh statistics.
    ///
    /// For multiple-choice questions the answer must equal the text of
    /// exactly one choice.
    pub fn new(question: Question, answer: Answer, tags: BTreeSet<Tag>) -> Result<Self> {
        if let Some(choices) = question.choices() {
            if count_matches(choices, &answer) != 1 {
                return Err(FlashcardError::AnswerNotInChoices {
                    answer: answer.as_str().to_string(),
                });
            }
        }
        Self::with_statistics(question, answer, tags, Statistics::default())
    }

    /// Rebuild a flashcard carrying existing statistics.
    ///
    /// Used by edits, test attempts and rehydration. A multiple-choice
    /// answer only has to be among the choices here; later edits may
    /// leave repeated choice texts.
    pub fn with_statistics(
        question: Question,
        answer: Answer,
        tags: BTreeSet<Tag>,
        statistics: Statistics,
    ) -> Result<Self> {
        if let Some(choices) = question.choices() {
            if count_matches(choices, &answer) == 0 {
                return Err(FlashcardError::AnswerNotInChoices {
                    answer: answer.as_str().to_string(),
                });
            }
        }

        Ok(Self {
            question,
            answer,
            tags,
            statistics,
        })
    }

    /// Create a multiple-choice flashcard whose answer is given as a
    /// 1-based option token, e.g. `"2"` for the second choice.
    pub fn multiple_choice(
        question: MultipleChoiceQuestion,
        answer_token: &str,
        tags: BTreeSet<Tag>,
    ) -> Result<Self> {
        let answer = Answer::from(question.resolve_option(answer_token)?);
        Self::new(Question::MultipleChoice(question), answer, tags)
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn answer(&self) -> &Answer {
        &self.answer
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn statistics(&self) -> Statistics {
        self.statistics
    }

    /// Identity comparison: question text and answer text only.
    pub fn is_same_flashcard(&self, other: &Flashcard) -> bool {
        self.question.value() == other.question.value()
            && self.answer.as_str() == other.answer.as_str()
    }

    pub fn matches_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    #[must_use]
    pub fn after_test_success(&self) -> Self {
        self.with_recorded_attempt(true)
    }

    #[must_use]
    pub fn after_test_failure(&self) -> Self {
        self.with_recorded_attempt(false)
    }

    fn with_recorded_attempt(&self, correct: bool) -> Self {
        Self {
            statistics: self.statistics.record(correct),
            ..self.clone()
        }
    }

    /// Plain record for snapshotting.
    pub fn to_record(&self) -> FlashcardRecord {
        FlashcardRecord {
            question: self.question.value().to_string(),
            choices: self
                .question
                .choices()
                .map(|choices| choices.iter().map(|c| c.as_str().to_string()).collect()),
            answer: self.answer.as_str().to_string(),
            tags: self.tags.iter().map(|t| t.as_str().to_string()).collect(),
            times_tested: self.statistics.times_tested(),
            times_correct: self.statistics.times_correct(),
        }
    }
}

fn count_matches(choices: &[Choice], answer: &Answer) -> usize {
    choices
        .iter()
        .filter(|c| c.as_str() == answer.as_str())
        .count()
}

impl fmt::Display for Flashcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Question:\n{}\nAnswer:\n{}", self.question, self.answer)
    }
}

/// Flashcard as stored outside the engine.
///
/// `choices` is present only for multiple-choice questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardRecord {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    pub answer: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub times_tested: u32,
    #[serde(default)]
    pub times_correct: u32,
}

impl TryFrom<FlashcardRecord> for Flashcard {
    type Error = FlashcardError;

    fn try_from(record: FlashcardRecord) -> Result<Self> {
        let question = match record.choices {
            Some(choices) => {
                let choices = choices
                    .into_iter()
                    .map(Choice::new)
                    .collect::<Result<Vec<_>>>()?;
                Question::multiple_choice(record.question, choices)?
            }
            None => Question::open_ended(record.question)?,
        };
        let tags = record
            .tags
            .into_iter()
            .map(Tag::new)
            .collect::<Result<BTreeSet<_>>>()?;
        let statistics = Statistics::new(record.times_tested, record.times_correct)?;

        Flashcard::with_statistics(question, Answer::new(record.answer)?, tags, statistics)
    }
}
