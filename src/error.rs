//! Quiz error types

use thiserror::Error;

use crate::core::{ConfigError, Phase};
use crate::questions::QuestionDefect;

/// Errors raised by the quiz engine and question loading
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("The question bank is empty")]
    EmptyBank,

    #[error("No active question to answer (run is {phase})")]
    InvalidState { phase: Phase },

    #[error("Malformed question at index {index}: {defect}")]
    MalformedQuestion {
        index: usize,
        #[source]
        defect: QuestionDefect,
    },

    #[error("Invalid quiz config: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid question data: {0}")]
    Parse(#[from] serde_json::Error),
}

impl QuizError {
    /// Errors the UI recovers from by ignoring the input or showing a placeholder
    pub fn is_recoverable(&self) -> bool {
        matches!(self, QuizError::EmptyBank | QuizError::InvalidState { .. })
    }
}
