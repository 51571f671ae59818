//! Quiz configuration.
//!
//! `QuizConfig` carries the thresholds that decide a run's outcome and the
//! delay between answer feedback and the next question. The defaults are
//! the classic rules: five correct answers win, three strikes lose.
//!
//! Both thresholds must be at least 1. Deserialization goes through
//! `validate`, and `GameEngine::new` checks again for hand-built values.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Correct answers needed to win.
pub const WIN_TARGET: u32 = 5;

/// Wrong answers that end the run.
pub const STRIKE_LIMIT: u32 = 3;

/// Default pause between feedback and the next question.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(1100);

/// A threshold that would end runs before any real play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("win target must be at least 1")]
    ZeroWinTarget,

    #[error("strike limit must be at least 1")]
    ZeroStrikeLimit,
}

/// Complete quiz configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuizConfig")]
pub struct QuizConfig {
    /// Correct answers needed to win (at least 1).
    pub win_target: u32,

    /// Strikes that lose the run (at least 1).
    pub strike_limit: u32,

    /// How long feedback stays up before the next question renders.
    #[serde(serialize_with = "millis::serialize")]
    pub advance_delay: Duration,
}

/// Unchecked wire form of `QuizConfig`.
#[derive(Deserialize)]
struct RawQuizConfig {
    win_target: u32,
    strike_limit: u32,
    #[serde(deserialize_with = "millis::deserialize")]
    advance_delay: Duration,
}

impl TryFrom<RawQuizConfig> for QuizConfig {
    type Error = ConfigError;

    fn try_from(raw: RawQuizConfig) -> Result<Self, Self::Error> {
        let config = Self {
            win_target: raw.win_target,
            strike_limit: raw.strike_limit,
            advance_delay: raw.advance_delay,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            win_target: WIN_TARGET,
            strike_limit: STRIKE_LIMIT,
            advance_delay: ADVANCE_DELAY,
        }
    }
}

impl QuizConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the win target.
    #[must_use]
    pub fn with_win_target(mut self, target: u32) -> Self {
        assert!(target > 0, "Win target must be at least 1");
        self.win_target = target;
        self
    }

    /// Set the strike limit.
    #[must_use]
    pub fn with_strike_limit(mut self, limit: u32) -> Self {
        assert!(limit > 0, "Strike limit must be at least 1");
        self.strike_limit = limit;
        self
    }

    /// Check that both thresholds can be reached by play.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_target == 0 {
            return Err(ConfigError::ZeroWinTarget);
        }
        if self.strike_limit == 0 {
            return Err(ConfigError::ZeroStrikeLimit);
        }
        Ok(())
    }

    /// Set the feedback delay.
    #[must_use]
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(delay.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
