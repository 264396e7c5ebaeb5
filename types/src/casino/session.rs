use std::fmt;

use thiserror::Error as ThisError;

use super::{Decision, Machine, COST_PER_PLAY, MACHINE_COUNT, SECONDS_PER_PLAY, TOTAL_PLAY_TIME};

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum SessionConfigError {
    #[error("seconds_per_play must be positive")]
    ZeroSecondsPerPlay,
    #[error("cost_per_play must be positive")]
    ZeroCostPerPlay,
}

/// Parameters of one session. Only the starting money comes from the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub starting_money: u64,
    pub total_play_time: u64,
    pub seconds_per_play: u64,
    pub cost_per_play: u64,
}

impl SessionConfig {
    pub fn new(starting_money: u64) -> Self {
        Self {
            starting_money,
            total_play_time: TOTAL_PLAY_TIME,
            seconds_per_play: SECONDS_PER_PLAY,
            cost_per_play: COST_PER_PLAY,
        }
    }

    pub fn validate(&self) -> Result<(), SessionConfigError> {
        if self.seconds_per_play == 0 {
            return Err(SessionConfigError::ZeroSecondsPerPlay);
        }
        if self.cost_per_play == 0 {
            return Err(SessionConfigError::ZeroCostPerPlay);
        }
        Ok(())
    }

    /// Maximum plays the time budget allows (truncating).
    pub fn max_plays(&self) -> u64 {
        self.total_play_time
            .checked_div(self.seconds_per_play)
            .unwrap_or(0)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

/// What the agent remembers about a single machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MachineStats {
    pub plays: u64,
    /// `None` until the machine has been played.
    pub last_payout: Option<u64>,
}

impl MachineStats {
    pub fn played(&self) -> bool {
        self.plays > 0
    }
}

/// Per-machine memory indexed by `Machine::index`.
pub type MachineMemory = [MachineStats; MACHINE_COUNT];

/// Narration-ready record of one completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u64,
    pub time_used: u64,
    pub decision: Decision,
    pub bet: u64,
    pub money_after_bet: u64,
    pub payout: u64,
    pub money_after_payout: u64,
}

impl RoundReport {
    pub fn machine(&self) -> Machine {
        self.decision.machine
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    NotEnoughMoney,
    TimeLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::NotEnoughMoney => f.write_str("Not enough money to continue."),
            StopReason::TimeLimit => f.write_str("Time limit reached."),
        }
    }
}

/// Outcome of a finished session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub plays: u64,
    pub starting_money: u64,
    pub final_money: u64,
    pub plays_per_machine: [u64; MACHINE_COUNT],
    pub stop_reason: StopReason,
}

impl SessionSummary {
    pub fn net_change(&self) -> i128 {
        self.final_money as i128 - self.starting_money as i128
    }

    pub fn plays_on(&self, machine: Machine) -> u64 {
        self.plays_per_machine[machine.index()]
    }
}
