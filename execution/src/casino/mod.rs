//! Slot machine play: the reflex policy, payout sampling and the session loop.

pub mod policy;
pub mod sampler;
pub mod session;
