/// Number of slot machines on the floor
pub const MACHINE_COUNT: usize = 2;

/// Possible payouts per play, in ascending order
pub const PAYOUTS: [u64; 4] = [0, 1, 5, 100];

/// Chance of each payout in `PAYOUTS` (50%, 30%, 15%, 5%)
pub const FIXED_CHANCES: [f64; 4] = [0.50, 0.30, 0.15, 0.05];

/// Cost to play one round
pub const COST_PER_PLAY: u64 = 1;

/// One play always consumes 10 seconds
pub const SECONDS_PER_PLAY: u64 = 10;

/// Total play time of a session in seconds (90 / 10 = 9 rounds)
pub const TOTAL_PLAY_TIME: u64 = 90;

/// A payout at or above this keeps the agent on the same machine
pub const STAY_THRESHOLD: u64 = 5;

/// Allowed drift of a payout table's total probability from 1.0
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;
