//! State structures for the tier-stake program.
//!
//! This module defines all account structures used to store program state.

pub mod pool_config;
pub mod staking_position;

pub use pool_config::*;
pub use staking_position::*;
