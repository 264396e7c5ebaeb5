use anyhow::{Context, Result};
use clap::Parser;
use minicasino_agent::{Engine, EngineError, PromptError};
use minicasino_types::casino::SessionSummary;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::io::{self, BufRead, Write};
use tracing::{info, warn, Level};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Reflex agent playing two slot machines for a fixed 90 seconds."
)]
struct Args {}

/// Play one session. `None` means input closed before a starting amount was read.
fn play<I, W, R>(input: I, output: W, rng: R) -> Result<Option<SessionSummary>>
where
    I: BufRead,
    W: Write,
    R: Rng,
{
    match Engine::new(input, output, rng).run() {
        Ok(summary) => Ok(Some(summary)),
        Err(EngineError::Prompt(PromptError::InputClosed)) => Ok(None),
        Err(err) => Err(err).context("session failed"),
    }
}

/// Run the session and log how it ended. Never fails, so the process always exits 0.
fn run_cli<I, W, R>(input: I, output: W, rng: R)
where
    I: BufRead,
    W: Write,
    R: Rng,
{
    match play(input, output, rng) {
        Ok(Some(summary)) => info!(
            plays = summary.plays,
            net_change = summary.net_change(),
            "Session complete"
        ),
        Ok(None) => warn!("Input closed before a starting amount was entered"),
        Err(err) => warn!(error = ?err, "Session aborted"),
    }
}

fn main() {
    let _args = Args::parse();

    // Narration owns stdout
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .init();

    let rng = ChaCha20Rng::from_entropy();
    run_cli(io::stdin().lock(), io::stdout().lock(), rng);
}
