//! Terminal front end for the trivia quiz.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use trivia_quiz::{
    GameEngine, Next, Outcome, Phase, Presenter, Question, QuestionBank, QuizConfig, QuizError, QuizRng,
    Scoreboard,
};

#[derive(Parser, Debug)]
#[command(name = "trivia", about = "Multiple-choice trivia in the terminal")]
struct Cli {
    /// RNG seed, for replaying a deck order
    #[arg(long)]
    seed: Option<u64>,

    /// JSON question file (defaults to the built-in bank)
    #[arg(long)]
    questions: Option<PathBuf>,

    /// Pause after feedback, in milliseconds
    #[arg(long, default_value_t = 1100)]
    delay_ms: u64,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Writes every presenter call to stdout.
struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    fn line(&mut self, text: &str) {
        // A closed stdout just ends the session output
        let _ = writeln!(self.out, "{text}");
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn show_start(&mut self, total_questions: usize) {
        self.line("=== Lords of Waterdeep Trivia ===");
        self.line(&format!("{total_questions} questions available."));
    }

    fn show_question(&mut self, question: &Question, index_display: usize, total: usize) {
        self.line("");
        self.line(&format!(
            "Question {index_display}/{total} [{}] ({})",
            question.topic_label(),
            question.difficulty
        ));
        self.line(&question.question);
        for (i, answer) in question.possible_answers.iter().enumerate() {
            self.line(&format!("  {}) {answer}", i + 1));
        }
    }

    fn show_feedback(&mut self, correct: bool) {
        self.line(if correct { "Correct!" } else { "Wrong!" });
    }

    fn show_end(&mut self, outcome: Outcome, message: &str) {
        self.line("");
        self.line(outcome.title());
        self.line(message);
    }

    fn show_placeholder(&mut self, message: &str) {
        self.line(message);
    }

    fn show_scoreboard(&mut self, scoreboard: &Scoreboard) {
        self.line(&format!(
            "Correct: {}  Strikes: {}",
            scoreboard.correct, scoreboard.strikes
        ));
    }
}

fn load_bank(path: Option<&PathBuf>) -> Result<QuestionBank> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            QuestionBank::from_json(&json).with_context(|| format!("loading {}", path.display()))
        }
        None => QuestionBank::builtin().context("loading built-in questions"),
    }
}

/// Map a typed 1-based choice number onto the answer list.
fn pick_answer<'a>(input: &str, answers: &'a [String]) -> Option<&'a str> {
    let n = input.trim().parse::<usize>().ok()?;
    answers.get(n.checked_sub(1)?).map(String::as_str)
}

fn prompt(text: &str) -> Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{text}")?;
    stdout.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let bank = load_bank(cli.questions.as_ref())?;
    let rng = cli.seed.map_or_else(QuizRng::from_random_seed, QuizRng::new);
    let config = QuizConfig::new().with_advance_delay(Duration::from_millis(cli.delay_ms));
    let presenter = TerminalPresenter { out: io::stdout() };

    let mut engine = GameEngine::new(&bank, presenter, config, rng)?;
    info!(seed = engine.seed(), questions = engine.bank_len(), "Starting trivia");

    engine.present_start();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if engine.phase() != Phase::InProgress {
            prompt("\nPress Enter to play, q to quit: ")?;
            let Some(line) = lines.next() else { break };
            if line?.trim().eq_ignore_ascii_case("q") {
                break;
            }
            match engine.start() {
                Ok(()) => continue,
                Err(QuizError::EmptyBank) => break,
                Err(e) => return Err(e.into()),
            }
        }

        let Some(question) = engine.current_question() else {
            break;
        };
        let answers = question.possible_answers.clone();

        prompt("> ")?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            break;
        }

        let Some(choice) = pick_answer(input, &answers) else {
            println!("Pick a number from 1 to {}.", answers.len());
            continue;
        };

        if let Next::Advance(pending) = engine.submit_answer(choice)?.next {
            thread::sleep(pending.delay());
            engine.advance(pending);
        }
    }

    Ok(())
}
