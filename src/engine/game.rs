//! Quiz engine implementation.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::core::{Phase, QuizConfig, QuizRng, RunState, Scoreboard};
use crate::error::QuizError;
use crate::presenter::{LossReason, Outcome, Presenter, EMPTY_BANK_MESSAGE};
use crate::questions::bank::validate_all;
use crate::questions::{Question, QuestionProvider};

/// Deferred move to the next question.
///
/// Returned by `submit_answer` when the run continues. The UI waits
/// `delay()` while feedback is visible, then hands the token back to
/// `GameEngine::advance`. A `start()` in between makes the token stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingAdvance {
    run_id: u64,
    delay: Duration,
}

impl PendingAdvance {
    /// Run this token belongs to.
    #[must_use]
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// How long to keep feedback up before advancing.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// What happens after an answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Next {
    /// Run continues once the token is handed back.
    Advance(PendingAdvance),
    /// Run ended.
    Finished(Outcome),
}

/// Result of a single `submit_answer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Whether the choice matched the correct answer.
    pub correct: bool,
    /// Continue or finish.
    pub next: Next,
}

/// The quiz state machine.
///
/// Owns the question bank, the current `RunState` and the presenter it
/// reports to. Engines share nothing, so any number can run side by side.
///
/// ## Example
///
/// ```
/// use trivia_quiz::{GameEngine, Next, Question, QuizConfig, QuizRng, RecordingPresenter};
///
/// let bank = vec![
///     Question::new("1 + 1?", ["1", "2"], "2"),
///     Question::new("2 + 2?", ["4", "5"], "4"),
/// ];
///
/// let mut engine = GameEngine::new(&bank, RecordingPresenter::new(), QuizConfig::default(), QuizRng::new(7))
///     .unwrap();
/// engine.start().unwrap();
///
/// let answer = engine.current_question().unwrap().correct_answer.clone();
/// let outcome = engine.submit_answer(&answer).unwrap();
/// assert!(outcome.correct);
///
/// if let Next::Advance(pending) = outcome.next {
///     assert!(engine.advance(pending));
/// }
/// assert_eq!(engine.run().unwrap().position(), 1);
/// ```
pub struct GameEngine<P: Presenter> {
    bank: Vec<Arc<Question>>,
    presenter: P,
    config: QuizConfig,
    rng: QuizRng,
    phase: Phase,
    run: Option<RunState>,
    run_counter: u64,
}

impl<P: Presenter> GameEngine<P> {
    /// Create an engine over the provider's questions.
    ///
    /// Questions are copied once. A malformed question or a zero threshold
    /// fails construction; an empty bank is reported by `start()`.
    pub fn new<Q>(provider: &Q, presenter: P, config: QuizConfig, rng: QuizRng) -> Result<Self, QuizError>
    where
        Q: QuestionProvider + ?Sized,
    {
        if let Err(e) = config.validate() {
            error!(?config, "Rejected quiz config: {e}");
            return Err(e.into());
        }

        let questions = provider.questions();
        validate_all(questions)?;

        debug!(questions = questions.len(), seed = rng.seed(), "Engine created");

        Ok(Self {
            bank: questions.iter().cloned().map(Arc::new).collect(),
            presenter,
            config,
            rng,
            phase: Phase::NotStarted,
            run: None,
            run_counter: 0,
        })
    }

    /// Show the start screen.
    pub fn present_start(&mut self) {
        self.presenter.show_start(self.bank.len());
    }

    /// Begin a fresh run, discarding any current one.
    ///
    /// Works from every phase. Any `PendingAdvance` from an earlier run
    /// becomes stale.
    pub fn start(&mut self) -> Result<(), QuizError> {
        self.run_counter += 1;

        if self.bank.is_empty() {
            warn!("Cannot start: question bank is empty");
            self.run = None;
            self.phase = Phase::NotStarted;
            self.presenter.show_placeholder(EMPTY_BANK_MESSAGE);
            return Err(QuizError::EmptyBank);
        }

        let mut deck = self.bank.clone();
        self.rng.next_run().shuffle(&mut deck);

        let run = RunState::new(deck.into_iter().collect(), self.run_counter);
        info!(run_id = run.run_id(), deck = run.deck().len(), "Run started");

        self.run = Some(run);
        self.phase = Phase::InProgress;
        self.render_current();
        Ok(())
    }

    /// Answer the current question.
    ///
    /// Fails with `InvalidState` and changes nothing when there is no
    /// active question: before `start()`, after the run ended, or while
    /// feedback for the previous answer is still pending.
    pub fn submit_answer(&mut self, choice: &str) -> Result<AnswerOutcome, QuizError> {
        let phase = self.phase;
        let run = match self.run.as_mut() {
            Some(run) if phase == Phase::InProgress && !run.is_awaiting_advance() => run,
            _ => {
                warn!(%phase, "Answer ignored: no active question");
                return Err(QuizError::InvalidState { phase });
            }
        };

        let Some(correct) = run.current_question().map(|q| q.is_correct(choice)) else {
            warn!(position = run.position(), "Answer ignored: deck exhausted");
            return Err(QuizError::InvalidState { phase });
        };

        run.record_answer(correct);
        debug!(
            run_id = run.run_id(),
            position = run.position(),
            correct,
            correct_count = run.correct_count(),
            strike_count = run.strike_count(),
            "Answer recorded"
        );

        let outcome = if run.correct_count() >= self.config.win_target {
            Some(Outcome::Win)
        } else if run.strike_count() >= self.config.strike_limit {
            Some(Outcome::Lose(LossReason::Strikes))
        } else if run.is_last_question() {
            Some(Outcome::Lose(LossReason::OutOfQuestions))
        } else {
            None
        };

        let next = match outcome {
            Some(outcome) => Next::Finished(outcome),
            None => {
                run.set_awaiting_advance(true);
                Next::Advance(PendingAdvance {
                    run_id: run.run_id(),
                    delay: self.config.advance_delay,
                })
            }
        };
        let scoreboard = run.scoreboard();

        self.presenter.show_feedback(correct);
        self.presenter.show_scoreboard(&scoreboard);

        if let Next::Finished(outcome) = next {
            self.finish(outcome);
        }

        Ok(AnswerOutcome { correct, next })
    }

    /// Move to the next question after the feedback delay.
    ///
    /// Returns `false` without rendering anything if the token is stale
    /// (a newer run started) or was already used.
    pub fn advance(&mut self, pending: PendingAdvance) -> bool {
        let phase = self.phase;
        let run = match self.run.as_mut() {
            Some(run)
                if phase == Phase::InProgress
                    && run.run_id() == pending.run_id
                    && run.is_awaiting_advance() =>
            {
                run
            }
            _ => {
                debug!(run_id = pending.run_id, "Stale advance ignored");
                return false;
            }
        };

        run.step();
        debug!(run_id = run.run_id(), position = run.position(), "Advanced");
        self.render_current();
        true
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current or most recent run.
    #[must_use]
    pub fn run(&self) -> Option<&RunState> {
        self.run.as_ref()
    }

    /// HUD values for the current or most recent run.
    #[must_use]
    pub fn scoreboard(&self) -> Option<Scoreboard> {
        self.run.as_ref().map(RunState::scoreboard)
    }

    /// The question awaiting an answer, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.phase != Phase::InProgress {
            return None;
        }
        self.run
            .as_ref()
            .filter(|run| !run.is_awaiting_advance())
            .and_then(RunState::current_question)
            .map(Arc::as_ref)
    }

    /// Rules in effect.
    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Number of questions in the bank.
    #[must_use]
    pub fn bank_len(&self) -> usize {
        self.bank.len()
    }

    /// Seed of the engine RNG, for replaying a session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The presenter.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// The presenter, mutably.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Consume the engine, returning the presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    fn finish(&mut self, outcome: Outcome) {
        self.phase = if outcome.is_win() { Phase::Won } else { Phase::Lost };
        let message = outcome.message(&self.config);

        if let Some(run) = &self.run {
            info!(
                run_id = run.run_id(),
                ?outcome,
                correct = run.correct_count(),
                strikes = run.strike_count(),
                "Run finished"
            );
        }

        self.presenter.show_end(outcome, &message);
    }

    fn render_current(&mut self) {
        let Some(run) = &self.run else {
            return;
        };

        let scoreboard = run.scoreboard();
        self.presenter.show_scoreboard(&scoreboard);
        if let Some(question) = run.current_question() {
            self.presenter
                .show_question(question, scoreboard.question_number, scoreboard.total);
        }
    }
}
