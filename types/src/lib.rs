//! Common types used throughout minicasino.

pub mod casino;
