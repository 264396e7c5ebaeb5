//! Session loop.
//!
//! A session plays at most `total_play_time / seconds_per_play` rounds. Affordability is checked
//! before every round, so the bet is only deducted when the agent can cover it.

use minicasino_types::casino::{
    Machine, MachineMemory, MachineStats, PayoutTable, RoundReport, SessionConfig, SessionConfigError,
    SessionSummary, StopReason, MACHINE_COUNT,
};
use rand::Rng;
use tracing::{debug, info};

use super::policy::decide;
use super::sampler::sample_payout;

/// Running state of one agent's visit to the machines.
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    max_plays: u64,
    tables: [PayoutTable; MACHINE_COUNT],
    money: u64,
    round: u64,
    memory: MachineMemory,
    current: Option<Machine>,
}

impl Session {
    /// Create a session where every machine pays according to `table`.
    pub fn new(config: SessionConfig, table: PayoutTable) -> Result<Self, SessionConfigError> {
        config.validate()?;
        Ok(Self {
            max_plays: config.max_plays(),
            money: config.starting_money,
            tables: [table.clone(), table],
            round: 0,
            memory: [MachineStats::default(); MACHINE_COUNT],
            current: None,
            config,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn max_plays(&self) -> u64 {
        self.max_plays
    }

    pub fn money(&self) -> u64 {
        self.money
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn memory(&self) -> &MachineMemory {
        &self.memory
    }

    pub fn current(&self) -> Option<Machine> {
        self.current
    }

    pub fn table(&self, machine: Machine) -> &PayoutTable {
        &self.tables[machine.index()]
    }

    /// Why the session can no longer continue, or `None` while another round is possible.
    ///
    /// Running out of money only counts while time remains; once the round limit is hit the
    /// session reports the time limit.
    pub fn stop_reason(&self) -> Option<StopReason> {
        if self.money < self.config.cost_per_play && self.round < self.max_plays {
            Some(StopReason::NotEnoughMoney)
        } else if self.round >= self.max_plays {
            Some(StopReason::TimeLimit)
        } else {
            None
        }
    }

    /// Play a single round, or return `None` if the session has stopped.
    pub fn play_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<RoundReport> {
        if self.stop_reason().is_some() {
            return None;
        }

        let decision = decide(&self.memory, self.current);
        let machine = decision.machine;
        self.round += 1;

        // Affordability was checked by `stop_reason`
        let bet = self.config.cost_per_play;
        self.money -= bet;
        let money_after_bet = self.money;

        let payout = sample_payout(&self.tables[machine.index()], rng);
        self.money = self.money.saturating_add(payout);

        let stats = &mut self.memory[machine.index()];
        stats.plays += 1;
        stats.last_payout = Some(payout);
        self.current = Some(machine);

        debug!(
            round = self.round,
            machine = %machine,
            payout,
            money = self.money,
            "played round"
        );

        Some(RoundReport {
            round: self.round,
            time_used: self.round * self.config.seconds_per_play,
            decision,
            bet,
            money_after_bet,
            payout,
            money_after_payout: self.money,
        })
    }

    /// Play rounds until the session stops, handing each report to `on_round`.
    pub fn play_until_stopped<R, E, F>(
        &mut self,
        rng: &mut R,
        mut on_round: F,
    ) -> Result<SessionSummary, E>
    where
        R: Rng + ?Sized,
        F: FnMut(&RoundReport) -> Result<(), E>,
    {
        loop {
            if let Some(stop_reason) = self.stop_reason() {
                let summary = self.summarize(stop_reason);
                info!(
                    plays = summary.plays,
                    final_money = summary.final_money,
                    net_change = summary.net_change(),
                    ?stop_reason,
                    "session finished"
                );
                return Ok(summary);
            }
            if let Some(report) = self.play_round(rng) {
                on_round(&report)?;
            }
        }
    }

    /// Play the whole session, collecting every round.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> (Vec<RoundReport>, SessionSummary) {
        let mut rounds = Vec::new();
        let summary = match self.play_until_stopped(rng, |report| {
            rounds.push(*report);
            Ok::<(), std::convert::Infallible>(())
        }) {
            Ok(summary) => summary,
            Err(never) => match never {},
        };
        (rounds, summary)
    }

    fn summarize(&self, stop_reason: StopReason) -> SessionSummary {
        SessionSummary {
            plays: self.round,
            starting_money: self.config.starting_money,
            final_money: self.money,
            plays_per_machine: self.memory.map(|stats| stats.plays),
            stop_reason,
        }
    }
}
