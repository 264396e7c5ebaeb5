//! Agent point-of-view narration of a session.

use std::borrow::Cow;
use std::io::{self, Write};

use minicasino_execution::Session;
use minicasino_types::casino::{Machine, RoundReport, SessionSummary};

pub const BANNER: &str = "=== MINI-CASINO WORLD ===";

/// How the agent feels about a payout.
pub fn describe_outcome(payout: u64) -> Cow<'static, str> {
    match payout {
        0 => Cow::Borrowed("I lost this round."),
        1 => Cow::Borrowed("I broke even on this round."),
        won => Cow::Owned(format!("I won Php {won} this round!")),
    }
}

pub struct Narrator<W> {
    out: W,
}

impl<W: Write> Narrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "{BANNER}")
    }

    pub fn session_start(&mut self, session: &Session) -> io::Result<()> {
        let config = session.config();
        writeln!(self.out, "\n=== Simulation Start ===")?;
        writeln!(self.out, "Starting money: Php {}", config.starting_money)?;
        writeln!(
            self.out,
            "Total play time: {} seconds (fixed)",
            config.total_play_time
        )?;
        writeln!(
            self.out,
            "Fixed chances per machine: {}",
            session.table(Machine::A)
        )?;
        writeln!(
            self.out,
            "Maximum possible plays by time: {}",
            session.max_plays()
        )
    }

    pub fn round(&mut self, report: &RoundReport) -> io::Result<()> {
        let machine = report.machine();
        writeln!(
            self.out,
            "\nRound {} (Time used: {}s)",
            report.round, report.time_used
        )?;
        writeln!(self.out, "Agent POV: {}", report.decision.reason)?;
        writeln!(self.out, "Agent POV: I bet Php {} on {machine}.", report.bet)?;
        writeln!(
            self.out,
            "Agent POV: After paying the bet, my money is now Php {}.",
            report.money_after_bet
        )?;
        writeln!(
            self.out,
            "Agent POV: {machine} gave payout Php {}.",
            report.payout
        )?;
        writeln!(self.out, "Agent POV: {}", describe_outcome(report.payout))?;
        writeln!(
            self.out,
            "Agent POV: I now have Php {}.",
            report.money_after_payout
        )
    }

    pub fn summary(&mut self, summary: &SessionSummary) -> io::Result<()> {
        writeln!(self.out, "\n=== Simulation End ===")?;
        writeln!(self.out, "Plays completed: {}", summary.plays)?;
        writeln!(self.out, "Money at end: Php {}", summary.final_money)?;
        writeln!(self.out, "Net change: Php {}", summary.net_change())?;
        for machine in Machine::ALL {
            writeln!(
                self.out,
                "Machine {} plays: {}",
                machine.number(),
                summary.plays_on(machine)
            )?;
        }
        writeln!(self.out, "Reason for stop: {}", summary.stop_reason)?;
        self.out.flush()
    }
}
