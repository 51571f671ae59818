//! A presenter that records every call.
//!
//! Used by the test suites and handy for headless front ends that want to
//! replay what the engine asked for.

use crate::core::Scoreboard;
use crate::questions::Question;

use super::traits::{Outcome, Presenter};

/// One recorded presenter call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresenterEvent {
    Start { total_questions: usize },
    Question { question: Question, index_display: usize, total: usize },
    Feedback { correct: bool },
    End { outcome: Outcome, message: String },
    Placeholder { message: String },
    Scoreboard(Scoreboard),
}

/// Presenter that stores calls in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    events: Vec<PresenterEvent>,
}

impl RecordingPresenter {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls.
    #[must_use]
    pub fn events(&self) -> &[PresenterEvent] {
        &self.events
    }

    /// Drain recorded calls.
    pub fn take(&mut self) -> Vec<PresenterEvent> {
        std::mem::take(&mut self.events)
    }

    /// Questions rendered so far, in order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.events.iter().filter_map(|e| match e {
            PresenterEvent::Question { question, .. } => Some(question),
            _ => None,
        })
    }

    /// The last question rendered.
    #[must_use]
    pub fn last_question(&self) -> Option<&Question> {
        self.questions().last()
    }

    /// Every end screen shown.
    pub fn outcomes(&self) -> impl Iterator<Item = Outcome> + '_ {
        self.events.iter().filter_map(|e| match e {
            PresenterEvent::End { outcome, .. } => Some(*outcome),
            _ => None,
        })
    }

    /// Feedback values shown, in order.
    pub fn feedback(&self) -> impl Iterator<Item = bool> + '_ {
        self.events.iter().filter_map(|e| match e {
            PresenterEvent::Feedback { correct } => Some(*correct),
            _ => None,
        })
    }
}

impl Presenter for RecordingPresenter {
    fn show_start(&mut self, total_questions: usize) {
        self.events.push(PresenterEvent::Start { total_questions });
    }

    fn show_question(&mut self, question: &Question, index_display: usize, total: usize) {
        self.events.push(PresenterEvent::Question {
            question: question.clone(),
            index_display,
            total,
        });
    }

    fn show_feedback(&mut self, correct: bool) {
        self.events.push(PresenterEvent::Feedback { correct });
    }

    fn show_end(&mut self, outcome: Outcome, message: &str) {
        self.events.push(PresenterEvent::End {
            outcome,
            message: message.to_string(),
        });
    }

    fn show_placeholder(&mut self, message: &str) {
        self.events.push(PresenterEvent::Placeholder {
            message: message.to_string(),
        });
    }

    fn show_scoreboard(&mut self, scoreboard: &Scoreboard) {
        self.events.push(PresenterEvent::Scoreboard(*scoreboard));
    }
}
