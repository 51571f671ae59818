//! Run state and engine phase.
//!
//! ## RunState
//!
//! Everything one run of the quiz needs:
//! - The shuffled deck
//! - Position of the current question
//! - Correct answer and strike tallies
//! - Run id and whether an advance is pending
//!
//! A fresh `RunState` is created by every `start()`. The deck is an
//! `im::Vector` of shared questions, so snapshots of a run are O(1).
//!
//! ## Phase
//!
//! `NotStarted → InProgress → {Won, Lost}`. Only `start()` enters
//! `InProgress`.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::questions::Question;

/// Where the engine is in its state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No run has started, or the last start failed.
    #[default]
    NotStarted,
    /// A run is active.
    InProgress,
    /// Terminal: the win target was reached.
    Won,
    /// Terminal: strikes ran out or the deck did.
    Lost,
}

impl Phase {
    /// Won or Lost.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::NotStarted => "not started",
            Phase::InProgress => "in progress",
            Phase::Won => "won",
            Phase::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// Heads-up display values for the current run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// 1-based number of the current question, 0 for an empty deck.
    pub question_number: usize,
    /// Deck length.
    pub total: usize,
    /// Correct answers so far.
    pub correct: u32,
    /// Strikes so far.
    pub strikes: u32,
}

/// State of a single run.
#[derive(Clone, Debug)]
pub struct RunState {
    deck: Vector<Arc<Question>>,
    position: usize,
    correct_count: u32,
    strike_count: u32,
    run_id: u64,
    awaiting_advance: bool,
}

impl RunState {
    /// Create a run over an already-shuffled deck.
    #[must_use]
    pub fn new(deck: Vector<Arc<Question>>, run_id: u64) -> Self {
        Self {
            deck,
            position: 0,
            correct_count: 0,
            strike_count: 0,
            run_id,
            awaiting_advance: false,
        }
    }

    /// The shuffled deck.
    #[must_use]
    pub fn deck(&self) -> &Vector<Arc<Question>> {
        &self.deck
    }

    /// Index of the current question.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Correct answers so far.
    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    /// Strikes so far.
    #[must_use]
    pub fn strike_count(&self) -> u32 {
        self.strike_count
    }

    /// Total answers submitted this run.
    #[must_use]
    pub fn answered(&self) -> usize {
        (self.correct_count + self.strike_count) as usize
    }

    /// Generation number of this run.
    #[must_use]
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// Feedback is showing and the next question has not rendered yet.
    #[must_use]
    pub fn is_awaiting_advance(&self) -> bool {
        self.awaiting_advance
    }

    /// Question at the current position.
    #[must_use]
    pub fn current_question(&self) -> Option<&Arc<Question>> {
        self.deck.get(self.position)
    }

    /// Questions after the current one.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.deck.len().saturating_sub(self.position + 1)
    }

    /// Is the current question the last one in the deck?
    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.position + 1 >= self.deck.len()
    }

    /// Current HUD values.
    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            question_number: if self.deck.is_empty() { 0 } else { self.position + 1 },
            total: self.deck.len(),
            correct: self.correct_count,
            strikes: self.strike_count,
        }
    }

    /// Tally an answer.
    pub(crate) fn record_answer(&mut self, correct: bool) {
        if correct {
            self.correct_count += 1;
        } else {
            self.strike_count += 1;
        }
    }

    pub(crate) fn set_awaiting_advance(&mut self, awaiting: bool) {
        self.awaiting_advance = awaiting;
    }

    /// Move to the next question. Never moves past the deck end.
    pub(crate) fn step(&mut self) {
        if self.position < self.deck.len() {
            self.position += 1;
        }
        self.awaiting_advance = false;
    }
}
