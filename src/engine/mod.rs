//! Game progression engine.
//!
//! `GameEngine` runs the quiz state machine:
//! - `start()` shuffles a fresh deck and shows the first question
//! - `submit_answer()` scores the answer and checks win, strikes, deck end
//! - `advance()` shows the next question once the feedback delay has passed

mod game;

pub use game::{AnswerOutcome, GameEngine, Next, PendingAdvance};
