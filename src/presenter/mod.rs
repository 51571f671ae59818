//! Presenter seam between the engine and whatever draws the quiz.
//!
//! - `Presenter`: callbacks the engine emits
//! - `Outcome` / `LossReason`: how a run ended, with canonical end messages
//! - `RecordingPresenter`: records calls for tests and headless use

pub mod recorder;
pub mod traits;

pub use recorder::{PresenterEvent, RecordingPresenter};
pub use traits::{LossReason, Outcome, Presenter, EMPTY_BANK_MESSAGE};
