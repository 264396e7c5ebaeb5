mod narrator;
mod prompt;

use std::io::{BufRead, Write};

use minicasino_execution::Session;
use minicasino_types::casino::{PayoutTable, SessionConfig, SessionConfigError, SessionSummary};
use rand::Rng;
use thiserror::Error;
use tracing::info;

pub use narrator::{describe_outcome, Narrator, BANNER};
pub use prompt::{read_non_negative, PromptError, INVALID_NUMBER, NEGATIVE_NUMBER};

/// Prompt shown when asking for the starting money.
pub const MONEY_PROMPT: &str = "Enter amount of money to start with (Php): ";

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("prompt failed: {0}")]
    Prompt(#[from] PromptError),
    #[error("invalid session: {0}")]
    Config(#[from] SessionConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main engine for running one narrated session
pub struct Engine<I, W, R> {
    input: I,
    narrator: Narrator<W>,
    rng: R,
    table: PayoutTable,
}

impl<I: BufRead, W: Write, R: Rng> Engine<I, W, R> {
    pub fn new(input: I, output: W, rng: R) -> Self {
        Self {
            input,
            narrator: Narrator::new(output),
            rng,
            table: PayoutTable::fixed(),
        }
    }

    /// Ask for the starting money, then play and narrate the session.
    pub fn run(mut self) -> Result<SessionSummary, EngineError> {
        self.narrator.banner()?;
        let starting_money =
            read_non_negative(&mut self.input, self.narrator.get_mut(), MONEY_PROMPT)?;
        info!(starting_money, "Starting session");

        let mut session = Session::new(SessionConfig::new(starting_money), self.table)?;
        self.narrator.session_start(&session)?;

        let narrator = &mut self.narrator;
        let summary = session.play_until_stopped(&mut self.rng, |report| narrator.round(report))?;
        narrator.summary(&summary)?;
        Ok(summary)
    }
}
