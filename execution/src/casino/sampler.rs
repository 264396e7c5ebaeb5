//! Payout sampling.
//!
//! A roll in [0, 1) is matched against the running sum of the table's chances; the first bucket
//! whose cumulative chance reaches the roll wins. If rounding leaves the total short of the roll,
//! the table's last payout is returned.

use minicasino_types::casino::PayoutTable;
use rand::Rng;

/// Resolve a roll against a payout table.
pub fn payout_for_roll(table: &PayoutTable, roll: f64) -> u64 {
    let mut cumulative = 0.0;
    for (chance, payout) in table.buckets() {
        cumulative += chance;
        if roll <= cumulative {
            return payout;
        }
    }

    // Rounding left the walk short of the roll
    table.fallback_payout()
}

/// Draw one roll from `rng` and resolve it.
pub fn sample_payout<R: Rng + ?Sized>(table: &PayoutTable, rng: &mut R) -> u64 {
    let roll: f64 = rng.gen();
    payout_for_roll(table, roll)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minicasino_types::casino::{FIXED_CHANCES, PAYOUTS};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    const TRIALS: usize = 200_000;

    #[test]
    fn test_roll_buckets() {
        let table = PayoutTable::fixed();
        assert_eq!(payout_for_roll(&table, 0.0), 0);
        assert_eq!(payout_for_roll(&table, 0.25), 0);
        assert_eq!(payout_for_roll(&table, 0.5), 0); // boundary stays in the lower bucket
        assert_eq!(payout_for_roll(&table, 0.51), 1);
        assert_eq!(payout_for_roll(&table, 0.79), 1);
        assert_eq!(payout_for_roll(&table, 0.81), 5);
        assert_eq!(payout_for_roll(&table, 0.94), 5);
        assert_eq!(payout_for_roll(&table, 0.96), 100);
    }

    #[test]
    fn test_roll_just_below_one() {
        let table = PayoutTable::fixed();
        let roll = 1.0 - f64::EPSILON / 2.0;
        assert!(roll < 1.0);
        assert_eq!(payout_for_roll(&table, roll), 100);
    }

    #[test]
    fn test_fallback_returns_last_payout() {
        // Sums to 0.9999999, inside the construction tolerance
        let table = PayoutTable::new(vec![0.5, 0.4999999], vec![7, 3]).unwrap();
        assert_eq!(payout_for_roll(&table, 0.9), 3);
        assert_eq!(payout_for_roll(&table, 0.99999999), 3);

        let table = PayoutTable::new(vec![0.9999995, 0.0], vec![42, 9]).unwrap();
        assert_eq!(payout_for_roll(&table, 0.5), 42);
        assert_eq!(payout_for_roll(&table, 0.9999999), 9);
    }

    #[test]
    fn test_certain_bucket() {
        let table = PayoutTable::new(vec![0.0, 1.0], vec![0, 100]).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        for _ in 0..1_000 {
            assert_eq!(sample_payout(&table, &mut rng), 100);
        }
    }

    #[test]
    fn test_frequencies_converge() {
        let table = PayoutTable::fixed();
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let mut counts = [0usize; PAYOUTS.len()];
        for _ in 0..TRIALS {
            let payout = sample_payout(&table, &mut rng);
            let idx = PAYOUTS
                .iter()
                .position(|p| *p == payout)
                .expect("payout from table");
            counts[idx] += 1;
        }
        for (count, expected) in counts.iter().zip(FIXED_CHANCES) {
            let observed = *count as f64 / TRIALS as f64;
            assert!(
                (observed - expected).abs() < 0.01,
                "observed {observed}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_one_draw_per_sample() {
        let table = PayoutTable::fixed();
        let mut sampled = ChaCha20Rng::seed_from_u64(9);
        let mut reference = ChaCha20Rng::seed_from_u64(9);
        for _ in 0..100 {
            let payout = sample_payout(&table, &mut sampled);
            let roll: f64 = reference.gen();
            assert_eq!(payout, payout_for_roll(&table, roll));
        }
    }

    proptest! {
        #[test]
        fn any_roll_lands_in_table(roll in 0.0f64..1.0) {
            let payout = payout_for_roll(&PayoutTable::fixed(), roll);
            prop_assert!(PAYOUTS.contains(&payout));
        }

        #[test]
        fn payouts_never_decrease_with_roll(a in 0.0f64..1.0, b in 0.0f64..1.0) {
            let table = PayoutTable::fixed();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(payout_for_roll(&table, lo) <= payout_for_roll(&table, hi));
        }
    }
}
