//! Quiz engine integration tests.
//!
//! These tests drive complete runs through the public API:
//! - Win / strike / out-of-questions endings
//! - Restarts and stale advances
//! - Deck shuffling across runs

use std::collections::HashSet;

use trivia_quiz::{
    ConfigError, GameEngine, LossReason, Next, Outcome, Phase, PresenterEvent, Question, QuestionBank, QuizConfig,
    QuizError, QuizRng, RecordingPresenter,
};

fn distinct_bank(n: usize) -> Vec<Question> {
    (0..n)
        .map(|i| {
            Question::new(format!("Question {i}?"), [format!("right {i}"), format!("wrong {i}")], format!("right {i}"))
                .with_topic(format!("topic {}", i % 3))
        })
        .collect()
}

fn new_engine(n: usize, seed: u64) -> GameEngine<RecordingPresenter> {
    GameEngine::new(&distinct_bank(n), RecordingPresenter::new(), QuizConfig::default(), QuizRng::new(seed))
        .expect("bank is well formed")
}

/// Answer the current question right or wrong, advancing if the run continues.
fn play(engine: &mut GameEngine<RecordingPresenter>, correct: bool) -> Next {
    let question = engine.current_question().expect("active question").clone();
    let choice = if correct {
        question.correct_answer.clone()
    } else {
        question
            .possible_answers
            .iter()
            .find(|a| **a != question.correct_answer)
            .cloned()
            .expect("a wrong answer")
    };

    let outcome = engine.submit_answer(&choice).expect("answer accepted");
    assert_eq!(outcome.correct, correct);
    if let Next::Advance(pending) = outcome.next {
        assert!(engine.advance(pending));
    }
    outcome.next
}

fn deck_order(engine: &GameEngine<RecordingPresenter>) -> Vec<String> {
    engine
        .run()
        .expect("run started")
        .deck()
        .iter()
        .map(|q| q.question.clone())
        .collect()
}

// =============================================================================
// Endings
// =============================================================================

/// Five correct answers in a row win, no matter how much deck is left.
#[test]
fn test_five_correct_wins_with_deck_remaining() {
    let mut engine = new_engine(8, 42);
    engine.start().unwrap();

    for _ in 0..4 {
        assert!(matches!(play(&mut engine, true), Next::Advance(_)));
    }
    assert_eq!(play(&mut engine, true), Next::Finished(Outcome::Win));

    assert_eq!(engine.phase(), Phase::Won);
    assert_eq!(engine.run().unwrap().remaining(), 3);
}

/// The third strike loses, even with correct answers in between.
#[test]
fn test_third_strike_loses() {
    let mut engine = new_engine(8, 42);
    engine.start().unwrap();

    play(&mut engine, true);
    play(&mut engine, false);
    play(&mut engine, true);
    play(&mut engine, false);
    play(&mut engine, true);
    let last = play(&mut engine, false);

    assert_eq!(last, Next::Finished(Outcome::Lose(LossReason::Strikes)));
    let run = engine.run().unwrap();
    assert_eq!(run.correct_count(), 3);
    assert_eq!(run.strike_count(), 3);
}

/// A four-question bank can never reach five correct.
#[test]
fn test_small_bank_runs_out_of_questions() {
    let mut engine = new_engine(4, 42);
    engine.start().unwrap();

    for _ in 0..3 {
        assert!(matches!(play(&mut engine, true), Next::Advance(_)));
    }
    let last = play(&mut engine, true);

    assert_eq!(last, Next::Finished(Outcome::Lose(LossReason::OutOfQuestions)));
    assert_eq!(engine.phase(), Phase::Lost);
    assert_eq!(engine.run().unwrap().correct_count(), 4);
}

/// End screens carry the canonical messages.
#[test]
fn test_end_messages() {
    let mut engine = new_engine(8, 1);
    engine.start().unwrap();
    for _ in 0..5 {
        play(&mut engine, true);
    }

    let end = engine.presenter().events().last().cloned();
    assert_eq!(
        end,
        Some(PresenterEvent::End {
            outcome: Outcome::Win,
            message: "You answered 5 questions correctly. You have been granted the title of 'Lord of Waterdeep'!"
                .to_string(),
        })
    );

    engine.start().unwrap();
    for _ in 0..3 {
        play(&mut engine, false);
    }
    match engine.presenter().events().last() {
        Some(PresenterEvent::End { outcome, message }) => {
            assert_eq!(*outcome, Outcome::Lose(LossReason::Strikes));
            assert_eq!(message, "3 strikes! Your petition to join the Lords has failed.");
        }
        other => panic!("Expected end screen, got {other:?}"),
    }
}

// =============================================================================
// Input handling
// =============================================================================

/// Answers outside an active question are ignored.
#[test]
fn test_invalid_state_answers_are_ignored() {
    let mut engine = new_engine(3, 42);

    let err = engine.submit_answer("anything").unwrap_err();
    assert!(err.is_recoverable());
    assert!(matches!(err, QuizError::InvalidState { phase: Phase::NotStarted }));

    engine.start().unwrap();
    for _ in 0..3 {
        play(&mut engine, false);
    }
    assert_eq!(engine.phase(), Phase::Lost);

    let before = engine.presenter().events().len();
    assert!(engine.submit_answer("anything").is_err());
    assert_eq!(engine.presenter().events().len(), before);
}

/// Unknown choices count as strikes.
#[test]
fn test_unknown_choice_is_a_strike() {
    let mut engine = new_engine(5, 42);
    engine.start().unwrap();

    let outcome = engine.submit_answer("not one of the answers").unwrap();

    assert!(!outcome.correct);
    assert_eq!(engine.run().unwrap().strike_count(), 1);
}

/// Question numbers shown to the player count up from 1.
#[test]
fn test_question_numbers_count_up() {
    let mut engine = new_engine(6, 42);
    engine.start().unwrap();
    play(&mut engine, true);
    play(&mut engine, false);

    let numbers: Vec<_> = engine
        .presenter()
        .events()
        .iter()
        .filter_map(|e| match e {
            PresenterEvent::Question { index_display, total, .. } => Some((*index_display, *total)),
            _ => None,
        })
        .collect();

    assert_eq!(numbers, vec![(1, 6), (2, 6), (3, 6)]);
}

// =============================================================================
// Restarts
// =============================================================================

/// Starting again resets counters and deals a full deck.
#[test]
fn test_restart_resets_run() {
    let mut engine = new_engine(6, 42);
    engine.start().unwrap();
    play(&mut engine, true);
    play(&mut engine, false);

    engine.start().unwrap();

    let run = engine.run().unwrap();
    assert_eq!(run.position(), 0);
    assert_eq!(run.correct_count(), 0);
    assert_eq!(run.strike_count(), 0);
    assert_eq!(run.deck().len(), 6);
    assert_eq!(engine.scoreboard().unwrap().question_number, 1);
}

/// An advance scheduled before a restart never renders.
#[test]
fn test_stale_advance_after_restart() {
    let mut engine = new_engine(6, 42);
    engine.start().unwrap();

    let question = engine.current_question().unwrap().clone();
    let Next::Advance(pending) = engine.submit_answer(&question.correct_answer).unwrap().next else {
        panic!("Expected the run to continue");
    };

    engine.start().unwrap();
    let first = engine.current_question().unwrap().clone();
    engine.presenter_mut().take();

    assert!(!engine.advance(pending));
    assert!(engine.presenter().events().is_empty());
    assert_eq!(engine.current_question(), Some(&first));
}

/// An empty bank shows the placeholder on every start.
#[test]
fn test_empty_bank_placeholder() {
    let bank = QuestionBank::new();
    let mut engine =
        GameEngine::new(&bank, RecordingPresenter::new(), QuizConfig::default(), QuizRng::new(1)).unwrap();

    engine.present_start();
    assert!(matches!(engine.start(), Err(QuizError::EmptyBank)));
    assert!(matches!(engine.start(), Err(QuizError::EmptyBank)));

    let events = engine.presenter().events();
    assert_eq!(events[0], PresenterEvent::Start { total_questions: 0 });
    assert!(matches!(events[1], PresenterEvent::Placeholder { .. }));
    assert_eq!(events.len(), 3);
    assert!(engine.run().is_none());
}

// =============================================================================
// Shuffling
// =============================================================================

/// Every deck is a permutation of the bank.
#[test]
fn test_deck_is_permutation_of_bank() {
    let mut engine = new_engine(8, 42);
    let mut expected: Vec<String> = distinct_bank(8).into_iter().map(|q| q.question).collect();
    expected.sort();

    for _ in 0..5 {
        engine.start().unwrap();
        let mut deck = deck_order(&engine);
        deck.sort();
        assert_eq!(deck, expected);
    }
}

/// Repeated runs deal different orders.
#[test]
fn test_runs_produce_distinct_orders() {
    let mut engine = new_engine(6, 42);
    let mut orders = HashSet::new();

    for _ in 0..20 {
        engine.start().unwrap();
        orders.insert(deck_order(&engine));
    }

    assert!(orders.len() >= 2);
}

/// The same seed deals the same sequence of decks.
#[test]
fn test_same_seed_same_decks() {
    let mut a = new_engine(8, 1234);
    let mut b = new_engine(8, 1234);

    for _ in 0..3 {
        a.start().unwrap();
        b.start().unwrap();
        assert_eq!(deck_order(&a), deck_order(&b));
    }
}

/// Independent engines do not share state.
#[test]
fn test_engines_are_independent() {
    let mut a = new_engine(8, 1);
    let mut b = new_engine(8, 1);
    a.start().unwrap();
    b.start().unwrap();

    play(&mut a, true);
    play(&mut a, true);

    assert_eq!(a.run().unwrap().correct_count(), 2);
    assert_eq!(b.run().unwrap().correct_count(), 0);
    assert_eq!(b.run().unwrap().position(), 0);
}

/// The built-in bank plays end to end.
#[test]
fn test_builtin_bank_plays() {
    let bank = QuestionBank::builtin().unwrap();
    let mut engine =
        GameEngine::new(&bank, RecordingPresenter::new(), QuizConfig::default(), QuizRng::new(99)).unwrap();

    engine.start().unwrap();
    let mut last = play(&mut engine, true);
    while let Next::Advance(_) = last {
        last = play(&mut engine, true);
    }

    assert_eq!(last, Next::Finished(Outcome::Win));
    assert_eq!(engine.presenter().questions().count(), 5);
}

// =============================================================================
// Configuration
// =============================================================================

/// A config file with a zero win target never reaches an engine.
#[test]
fn test_zero_threshold_config_is_rejected() {
    let json = r#"{"win_target":0,"strike_limit":3,"advance_delay":0}"#;
    assert!(serde_json::from_str::<QuizConfig>(json).is_err());

    let config = QuizConfig { win_target: 0, ..QuizConfig::default() };
    let result = GameEngine::new(&distinct_bank(3), RecordingPresenter::new(), config, QuizRng::new(1));
    assert!(matches!(result, Err(QuizError::Config(ConfigError::ZeroWinTarget))));
}

/// A loaded config that passes validation plays by its own thresholds.
#[test]
fn test_loaded_config_thresholds() {
    let config: QuizConfig = serde_json::from_str(r#"{"win_target":1,"strike_limit":1,"advance_delay":0}"#).unwrap();
    let mut engine = GameEngine::new(&distinct_bank(3), RecordingPresenter::new(), config, QuizRng::new(1)).unwrap();

    engine.start().unwrap();
    assert_eq!(play(&mut engine, false), Next::Finished(Outcome::Lose(LossReason::Strikes)));

    engine.start().unwrap();
    assert_eq!(play(&mut engine, true), Next::Finished(Outcome::Win));
}
