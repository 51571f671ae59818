//! Presenter trait and run outcomes.
//!
//! The engine never renders anything itself. Every screen change goes
//! through a `Presenter`, so the same engine drives a terminal, a browser
//! bridge or a test recorder.

use serde::{Deserialize, Serialize};

use crate::core::{QuizConfig, Scoreboard};
use crate::questions::Question;

/// Shown instead of a question when the bank is empty.
pub const EMPTY_BANK_MESSAGE: &str = "No questions found. Check that the question bank loaded.";

/// Why a run was lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossReason {
    /// Strike limit reached.
    Strikes,
    /// Deck ran out before the win target.
    OutOfQuestions,
}

/// Terminal result of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose(LossReason),
}

impl Outcome {
    /// Check if the run was won.
    #[must_use]
    pub fn is_win(self) -> bool {
        matches!(self, Outcome::Win)
    }

    /// End screen heading.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Outcome::Win => "You Win!",
            Outcome::Lose(_) => "You Lose!",
        }
    }

    /// End screen message for the given rules.
    #[must_use]
    pub fn message(self, config: &QuizConfig) -> String {
        match self {
            Outcome::Win => format!(
                "You answered {} {} correctly. You have been granted the title of 'Lord of Waterdeep'!",
                config.win_target,
                if config.win_target == 1 { "question" } else { "questions" }
            ),
            Outcome::Lose(LossReason::Strikes) => format!(
                "{} {}! Your petition to join the Lords has failed.",
                config.strike_limit,
                if config.strike_limit == 1 { "strike" } else { "strikes" }
            ),
            Outcome::Lose(LossReason::OutOfQuestions) => {
                "Out of questions! Your petition to join the Lords has failed.".to_string()
            }
        }
    }
}

/// UI callbacks driven by the engine.
///
/// Calls arrive in a fixed order:
/// - `start()`: `show_scoreboard`, `show_question`
/// - `submit_answer()`: `show_feedback`, `show_scoreboard`, then `show_end` if terminal
/// - `advance()`: `show_scoreboard`, `show_question`
pub trait Presenter {
    /// Start screen, with the number of questions available.
    fn show_start(&mut self, total_questions: usize);

    /// Render a question. `index_display` is 1-based.
    fn show_question(&mut self, question: &Question, index_display: usize, total: usize);

    /// Immediate feedback for the last answer.
    fn show_feedback(&mut self, correct: bool);

    /// End screen.
    fn show_end(&mut self, outcome: Outcome, message: &str);

    /// Fallback text when there is nothing to ask.
    fn show_placeholder(&mut self, message: &str);

    /// HUD refresh. Presenters without a HUD can ignore it.
    fn show_scoreboard(&mut self, _scoreboard: &Scoreboard) {}
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn show_start(&mut self, total_questions: usize) {
        (**self).show_start(total_questions);
    }

    fn show_question(&mut self, question: &Question, index_display: usize, total: usize) {
        (**self).show_question(question, index_display, total);
    }

    fn show_feedback(&mut self, correct: bool) {
        (**self).show_feedback(correct);
    }

    fn show_end(&mut self, outcome: Outcome, message: &str) {
        (**self).show_end(outcome, message);
    }

    fn show_placeholder(&mut self, message: &str) {
        (**self).show_placeholder(message);
    }

    fn show_scoreboard(&mut self, scoreboard: &Scoreboard) {
        (**self).show_scoreboard(scoreboard);
    }
}
