//! Casino domain types.
//!
//! Defines machines, payout tables, session config/state and constants used by the execution
//! layer and the agent.

mod constants;
mod decision;
mod machine;
mod payout;
mod session;

pub use constants::*;
pub use decision::*;
pub use machine::*;
pub use payout::*;
pub use session::*;
