use std::fmt;

use super::MACHINE_COUNT;

/// One of the two slot machines.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Machine {
    A = 0,
    B = 1,
}

impl Machine {
    /// Every machine, in index order.
    pub const ALL: [Machine; MACHINE_COUNT] = [Machine::A, Machine::B];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The machine the agent switches to.
    pub fn other(self) -> Self {
        match self {
            Machine::A => Machine::B,
            Machine::B => Machine::A,
        }
    }

    /// Letter used in round narration.
    pub fn label(self) -> char {
        match self {
            Machine::A => 'A',
            Machine::B => 'B',
        }
    }

    /// One-based number used in the session summary.
    pub fn number(self) -> usize {
        self.index() + 1
    }
}

impl TryFrom<usize> for Machine {
    type Error = usize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Machine::A),
            1 => Ok(Machine::B),
            other => Err(other),
        }
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Machine {}", self.label())
    }
}
