//! Reflex policy.
//!
//! Rules, first match wins:
//! 1. Play machine A if it has never been played.
//! 2. Play machine B if it has never been played.
//! 3. Start with machine A if no machine is current.
//! 4. Stay on the current machine if its last payout was at least `STAY_THRESHOLD`.
//! 5. Otherwise switch to the other machine.

use minicasino_types::casino::{Decision, Machine, MachineMemory, Reason, STAY_THRESHOLD};

/// Pick the next machine from the agent's memory and current machine.
pub fn decide(memory: &MachineMemory, current: Option<Machine>) -> Decision {
    if !memory[Machine::A.index()].played() {
        return Decision {
            machine: Machine::A,
            reason: Reason::TryFirst,
        };
    }
    if !memory[Machine::B.index()].played() {
        return Decision {
            machine: Machine::B,
            reason: Reason::TrySecond,
        };
    }
    let Some(current) = current else {
        return Decision {
            machine: Machine::A,
            reason: Reason::NoCurrent,
        };
    };

    match memory[current.index()].last_payout {
        Some(last_payout) if last_payout >= STAY_THRESHOLD => Decision {
            machine: current,
            reason: Reason::Stay {
                current,
                last_payout,
            },
        },
        last_payout => Decision {
            machine: current.other(),
            reason: Reason::Switch {
                current,
                last_payout,
            },
        },
    }
}
