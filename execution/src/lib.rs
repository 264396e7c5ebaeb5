//! Minicasino execution layer.
//!
//! This crate contains the reflex policy, the payout sampler and the session loop that ties them
//! together. Narration and input handling live in the agent crate.
//!
//! ## Determinism requirements
//! - The policy is a pure function of the agent's memory and current machine.
//! - All randomness comes from the caller's RNG; the sampler consumes exactly one draw per play.
//!
//! ## Minimal session (example)
//! ```rust
//! use minicasino_execution::Session;
//! use minicasino_types::casino::{PayoutTable, SessionConfig, StopReason};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut session = Session::new(SessionConfig::new(100), PayoutTable::fixed()).unwrap();
//! let (rounds, summary) = session.run(&mut rng);
//! assert_eq!(rounds.len(), 9);
//! assert_eq!(summary.stop_reason, StopReason::TimeLimit);
//! ```

pub mod casino;

pub use casino::policy::decide;
pub use casino::sampler::{payout_for_roll, sample_payout};
pub use casino::session::Session;
