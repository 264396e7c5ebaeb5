use std::fmt;

use super::{Machine, STAY_THRESHOLD};

/// Why the reflex agent picked its next machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reason {
    /// Machine A has never been played.
    TryFirst,
    /// Machine B has never been played.
    TrySecond,
    /// Both were played but no machine is current.
    NoCurrent,
    /// The current machine paid at least `STAY_THRESHOLD` last time.
    Stay { current: Machine, last_payout: u64 },
    /// The current machine paid less than `STAY_THRESHOLD` last time.
    Switch {
        current: Machine,
        last_payout: Option<u64>,
    },
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::TryFirst => write!(
                f,
                "I will try {} first because I have not tested it yet.",
                Machine::A
            ),
            Reason::TrySecond => write!(
                f,
                "I will try {} now because I have not tested it yet.",
                Machine::B
            ),
            Reason::NoCurrent => write!(
                f,
                "I do not have a current machine yet, so I will start with {}.",
                Machine::A
            ),
            Reason::Stay { current, .. } => write!(
                f,
                "My last payout on {} was good (>= {}), so I will stay.",
                current, STAY_THRESHOLD
            ),
            Reason::Switch { current, .. } => write!(
                f,
                "My last payout on {} was low (< {}), so I will switch.",
                current, STAY_THRESHOLD
            ),
        }
    }
}

/// A machine choice together with its justification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub machine: Machine,
    pub reason: Reason,
}
