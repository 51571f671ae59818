//! Core quiz types: configuration, RNG, run state.
//!
//! Nothing here knows how questions are rendered; the engine drives these
//! types and talks to the UI through `Presenter`.

pub mod config;
pub mod rng;
pub mod state;

pub use config::{ConfigError, QuizConfig, ADVANCE_DELAY, STRIKE_LIMIT, WIN_TARGET};
pub use rng::QuizRng;
pub use state::{Phase, RunState, Scoreboard};
