//! Value types shared by the flashcard engine.

use crate::error::{FlashcardError, Result};
use crate::matching::parse_option_index;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trim `value`, or fail with `err` when nothing is left.
fn non_blank(value: impl Into<String>, err: FlashcardError) -> Result<String> {
    let raw = value.into();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(err);
    }
    Ok(trimmed.to_string())
}

/// One option of a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Choice(String);

impl Choice {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        non_blank(value, FlashcardError::EmptyChoice).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Choice {
    type Error = FlashcardError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Choice> for String {
    fn from(choice: Choice) -> Self {
        choice.0
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored correct answer. Always literal text, never an option index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Answer(String);

impl Answer {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        non_blank(value, FlashcardError::EmptyAnswer).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Choice> for Answer {
    fn from(choice: &Choice) -> Self {
        Self(choice.0.clone())
    }
}

impl TryFrom<String> for Answer {
    type Error = FlashcardError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Answer> for String {
    fn from(answer: Answer) -> Self {
        answer.0
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque label attached to flashcards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        non_blank(value, FlashcardError::EmptyTag).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Tag {
    type Error = FlashcardError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Usage counters for a flashcard.
///
/// Immutable: every update returns a new value. `times_correct` never
/// exceeds `times_tested`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Statistics {
    times_tested: u32,
    times_correct: u32,
}

impl Statistics {
    pub fn new(times_tested: u32, times_correct: u32) -> Result<Self> {
        if times_correct > times_tested {
            return Err(FlashcardError::InvalidStatistics {
                tested: times_tested,
                correct: times_correct,
            });
        }
        Ok(Self {
            times_tested,
            times_correct,
        })
    }

    pub fn times_tested(&self) -> u32 {
        self.times_tested
    }

    pub fn times_correct(&self) -> u32 {
        self.times_correct
    }

    pub fn times_wrong(&self) -> u32 {
        self.times_tested - self.times_correct
    }

    /// Percentage of correct attempts, `None` if never tested.
    pub fn correct_rate(&self) -> Option<f64> {
        if self.times_tested == 0 {
            return None;
        }
        Some(f64::from(self.times_correct) * 100.0 / f64::from(self.times_tested))
    }

    /// Statistics after one more attempt.
    #[must_use]
    pub fn record(self, correct: bool) -> Self {
        Self {
            times_tested: self.times_tested.saturating_add(1),
            times_correct: if correct {
                self.times_correct.saturating_add(1)
            } else {
                self.times_correct
            },
        }
    }
}

/// Question without choices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OpenEndedQuestion {
    text: String,
}

impl OpenEndedQuestion {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        Ok(Self {
            text: non_blank(text, FlashcardError::EmptyQuestion)?,
        })
    }

    pub fn value(&self) -> &str {
        &self.text
    }
}

/// Question with an ordered, non-empty list of choices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MultipleChoiceQuestion {
    text: String,
    choices: Vec<Choice>,
}

impl MultipleChoiceQuestion {
    pub fn new(text: impl Into<String>, choices: Vec<Choice>) -> Result<Self> {
        let text = non_blank(text, FlashcardError::EmptyQuestion)?;
        if choices.is_empty() {
            return Err(FlashcardError::NoChoices);
        }
        Ok(Self { text, choices })
    }

    /// Build from raw choice strings, validating each one.
    pub fn from_strs<S: AsRef<str>>(text: impl Into<String>, choices: &[S]) -> Result<Self> {
        let choices = choices
            .iter()
            .map(|c| Choice::new(c.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(text, choices)
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Choice at a 1-based position.
    pub fn choice_at(&self, index: usize) -> Option<&Choice> {
        index.checked_sub(1).and_then(|i| self.choices.get(i))
    }

    /// Resolve a 1-based option token (e.g. `"3"`) to its choice.
    pub fn resolve_option(&self, token: &str) -> Result<&Choice> {
        let idx = parse_option_index(token, self.choices.len())?;
        Ok(&self.choices[idx])
    }
}

/// The shape of a flashcard's question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Question {
    OpenEnded(OpenEndedQuestion),
    MultipleChoice(MultipleChoiceQuestion),
}

impl Question {
    pub fn open_ended(text: impl Into<String>) -> Result<Self> {
        OpenEndedQuestion::new(text).map(Self::OpenEnded)
    }

    pub fn multiple_choice(text: impl Into<String>, choices: Vec<Choice>) -> Result<Self> {
        MultipleChoiceQuestion::new(text, choices).map(Self::MultipleChoice)
    }

    /// Question text.
    pub fn value(&self) -> &str {
        match self {
            Self::OpenEnded(q) => q.value(),
            Self::MultipleChoice(q) => q.value(),
        }
    }

    /// Ordered choices, `None` for open-ended questions.
    pub fn choices(&self) -> Option<&[Choice]> {
        match self {
            Self::OpenEnded(_) => None,
            Self::MultipleChoice(q) => Some(q.choices()),
        }
    }

    /// Choice at a 1-based position.
    pub fn choice_at(&self, index: usize) -> Option<&Choice> {
        match self {
            Self::OpenEnded(_) => None,
            Self::MultipleChoice(q) => q.choice_at(index),
        }
    }

    pub fn is_multiple_choice(&self) -> bool {
        matches!(self, Self::MultipleChoice(_))
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())?;
        if let Some(choices) = self.choices() {
            for (i, choice) in choices.iter().enumerate() {
                write!(f, "\n{}) {}", i + 1, choice)?;
            }
        }
        Ok(())
    }
}
