//! # trivia-quiz
//!
//! A multiple-choice trivia quiz engine. A bank of questions is shuffled
//! into a deck and asked one at a time; five correct answers win, three
//! strikes or an empty deck lose.
//!
//! ## Design Principles
//!
//! 1. **No ambient state**: Each `GameEngine` owns its run. Engines are
//!    independent and deterministic under a fixed seed.
//!
//! 2. **Presentation-free core**: The engine talks to the UI only through
//!    the `Presenter` trait and reads questions through `QuestionProvider`.
//!
//! 3. **The caller owns time**: The feedback delay is handed out as a
//!    `PendingAdvance` token. Restarting makes old tokens stale.
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG, run state
//! - `questions`: Question records, bank loading and validation
//! - `presenter`: UI callback trait, outcomes, recording presenter
//! - `engine`: The state machine
//! - `error`: Error type

pub mod core;
pub mod engine;
pub mod error;
pub mod presenter;
pub mod questions;

// Re-export commonly used types
pub use crate::core::{ConfigError, Phase, QuizConfig, QuizRng, RunState, Scoreboard, STRIKE_LIMIT, WIN_TARGET};

pub use crate::engine::{AnswerOutcome, GameEngine, Next, PendingAdvance};

pub use crate::error::QuizError;

pub use crate::presenter::{
    LossReason, Outcome, Presenter, PresenterEvent, RecordingPresenter, EMPTY_BANK_MESSAGE,
};

pub use crate::questions::{Question, QuestionBank, QuestionDefect, QuestionProvider};
