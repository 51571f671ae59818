//! Question records - static quiz data.
//!
//! A `Question` is immutable once loaded. Field names serialize the same
//! way as the JSON question files (`possibleAnswers`, `correctAnswer`).

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// Label shown when a question has no topic.
pub const NO_TOPIC_LABEL: &str = "—";

/// Answer list. Nearly every question has four choices.
pub type Answers = SmallVec<[String; 4]>;

/// A single multiple-choice question.
///
/// ## Example
///
/// ```
/// use trivia_quiz::questions::Question;
///
/// let q = Question::new("What is 2 + 2?", ["3", "4", "5"], "4")
///     .with_topic("arithmetic")
///     .with_difficulty("easy");
///
/// assert!(q.is_correct("4"));
/// assert!(!q.is_correct(" 4"));
/// assert!(q.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Category label. Required in data files, but may be an empty string.
    pub topic: String,

    /// Prompt text.
    pub question: String,

    /// Choices in display order.
    pub possible_answers: Answers,

    /// Must equal one element of `possible_answers`.
    pub correct_answer: String,

    /// Free-form difficulty label ("easy", "medium", ...).
    pub difficulty: String,
}

/// Why a question record cannot be played.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QuestionDefect {
    #[error("question text is empty")]
    EmptyPrompt,

    #[error("needs at least 2 possible answers, found {0}")]
    TooFewAnswers(usize),

    #[error("possible answer {0:?} is listed more than once")]
    DuplicateAnswer(String),

    #[error("correct answer {0:?} is not among the possible answers")]
    CorrectAnswerMissing(String),
}

impl Question {
    /// Create a question with no topic or difficulty.
    #[must_use]
    pub fn new<I, S>(question: impl Into<String>, answers: I, correct: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            topic: String::new(),
            question: question.into(),
            possible_answers: answers.into_iter().map(Into::into).collect(),
            correct_answer: correct.into(),
            difficulty: String::new(),
        }
    }

    /// Set the topic (builder pattern).
    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Set the difficulty (builder pattern).
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    /// Exact string match against the correct answer.
    #[must_use]
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_answer == choice
    }

    /// Topic for display, falling back to a dash.
    #[must_use]
    pub fn topic_label(&self) -> &str {
        if self.topic.trim().is_empty() {
            NO_TOPIC_LABEL
        } else {
            &self.topic
        }
    }

    /// Check that the record is playable.
    pub fn validate(&self) -> Result<(), QuestionDefect> {
        if self.question.trim().is_empty() {
            return Err(QuestionDefect::EmptyPrompt);
        }

        if self.possible_answers.len() < 2 {
            return Err(QuestionDefect::TooFewAnswers(self.possible_answers.len()));
        }

        let mut seen = FxHashSet::default();
        for answer in &self.possible_answers {
            if !seen.insert(answer.as_str()) {
                return Err(QuestionDefect::DuplicateAnswer(answer.clone()));
            }
        }

        if !seen.contains(self.correct_answer.as_str()) {
            return Err(QuestionDefect::CorrectAnswerMissing(self.correct_answer.clone()));
        }

        Ok(())
    }
}
