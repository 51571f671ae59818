//! Question bank and the provider seam.
//!
//! The engine reads its questions once, through `QuestionProvider`.
//! `QuestionBank` is the stock provider: it loads and validates JSON in the
//! shape of `data/questions.json` and ships that file as the built-in bank.

use tracing::{debug, error};

use super::question::Question;
use crate::error::QuizError;

const BUILTIN_QUESTIONS: &str = include_str!("../../data/questions.json");

/// Read-only source of question records.
pub trait QuestionProvider {
    /// All questions, in authoring order.
    fn questions(&self) -> &[Question];
}

impl QuestionProvider for Vec<Question> {
    fn questions(&self) -> &[Question] {
        self
    }
}

/// Validated collection of questions.
///
/// ## Example
///
/// ```
/// use trivia_quiz::questions::{QuestionBank, QuestionProvider};
///
/// let bank = QuestionBank::from_json(r#"[
///     {"topic": "math", "question": "1 + 1?", "possibleAnswers": ["1", "2"],
///      "correctAnswer": "2", "difficulty": "easy"}
/// ]"#).unwrap();
///
/// assert_eq!(bank.len(), 1);
/// assert_eq!(bank.questions()[0].correct_answer, "2");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Create an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bank, rejecting the first malformed question.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, QuizError> {
        validate_all(&questions)?;
        Ok(Self { questions })
    }

    /// Parse a JSON array of questions.
    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        debug!(count = questions.len(), "Parsed question file");
        Self::from_questions(questions)
    }

    /// The bank compiled into the crate.
    pub fn builtin() -> Result<Self, QuizError> {
        Self::from_json(BUILTIN_QUESTIONS)
    }

    /// Add a question after validating it.
    pub fn push(&mut self, question: Question) -> Result<(), QuizError> {
        let index = self.questions.len();
        check(index, &question)?;
        self.questions.push(question);
        Ok(())
    }

    /// Number of questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the bank is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Iterate over the questions.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Distinct topics in first-seen order.
    pub fn topics(&self) -> Vec<&str> {
        let mut topics: Vec<&str> = Vec::new();
        for q in &self.questions {
            if !topics.contains(&q.topic.as_str()) {
                topics.push(&q.topic);
            }
        }
        topics
    }
}

impl QuestionProvider for QuestionBank {
    fn questions(&self) -> &[Question] {
        &self.questions
    }
}

/// Validate every question, failing loudly on the first defect.
pub(crate) fn validate_all(questions: &[Question]) -> Result<(), QuizError> {
    questions
        .iter()
        .enumerate()
        .try_for_each(|(index, q)| check(index, q))
}

fn check(index: usize, question: &Question) -> Result<(), QuizError> {
    question.validate().map_err(|defect| {
        error!(index, question = %question.question, %defect, "Malformed question");
        QuizError::MalformedQuestion { index, defect }
    })
}
