use std::fmt;

use thiserror::Error as ThisError;

use super::{FIXED_CHANCES, PAYOUTS, PROBABILITY_TOLERANCE};

#[derive(Debug, ThisError, PartialEq)]
pub enum PayoutTableError {
    #[error("payout table is empty")]
    Empty,
    #[error("chances and payouts differ in length (chances={chances}, payouts={payouts})")]
    LengthMismatch { chances: usize, payouts: usize },
    #[error("chance out of range (index={index}, chance={chance})")]
    InvalidChance { index: usize, chance: f64 },
    #[error("chances do not sum to 1.0 (total={total})")]
    BadTotal { total: f64 },
}

/// Discrete payout distribution of a machine.
///
/// Chances are aligned 1:1 with payouts and walked in order when sampling, so
/// the last payout doubles as the fallback bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct PayoutTable {
    chances: Vec<f64>,
    payouts: Vec<u64>,
}

impl PayoutTable {
    pub fn new(chances: Vec<f64>, payouts: Vec<u64>) -> Result<Self, PayoutTableError> {
        if chances.len() != payouts.len() {
            return Err(PayoutTableError::LengthMismatch {
                chances: chances.len(),
                payouts: payouts.len(),
            });
        }
        if chances.is_empty() {
            return Err(PayoutTableError::Empty);
        }
        for (index, &chance) in chances.iter().enumerate() {
            if !chance.is_finite() || !(0.0..=1.0).contains(&chance) {
                return Err(PayoutTableError::InvalidChance { index, chance });
            }
        }
        let total: f64 = chances.iter().sum();
        if (total - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(PayoutTableError::BadTotal { total });
        }
        Ok(Self { chances, payouts })
    }

    /// The table every machine on the floor uses.
    pub fn fixed() -> Self {
        Self {
            chances: FIXED_CHANCES.to_vec(),
            payouts: PAYOUTS.to_vec(),
        }
    }

    pub fn chances(&self) -> &[f64] {
        &self.chances
    }

    pub fn payouts(&self) -> &[u64] {
        &self.payouts
    }

    /// Iterate `(chance, payout)` buckets in sampling order.
    pub fn buckets(&self) -> impl Iterator<Item = (f64, u64)> + '_ {
        self.chances.iter().copied().zip(self.payouts.iter().copied())
    }

    /// Payout returned when a roll falls past the cumulative total.
    pub fn fallback_payout(&self) -> u64 {
        // Construction rejects empty tables
        self.payouts[self.payouts.len() - 1]
    }
}

impl Default for PayoutTable {
    fn default() -> Self {
        Self::fixed()
    }
}

impl fmt::Display for PayoutTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, (chance, payout)) in self.buckets().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}->{:.0}%", payout, chance * 100.0)?;
        }
        f.write_str("]")
    }
}
