//! Question records and question providers.
//!
//! - `Question`: one immutable multiple-choice record
//! - `QuestionBank`: validated list, loadable from JSON
//! - `QuestionProvider`: the read-only seam the engine consumes

pub mod bank;
pub mod question;

pub use bank::{QuestionBank, QuestionProvider};
pub use question::{Answers, Question, QuestionDefect, NO_TOPIC_LABEL};
