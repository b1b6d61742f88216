//! Instruction handlers for the tier-stake program.
//!
//! This module contains all instruction implementations.

pub mod admin;
pub mod initialize;
pub mod stake;
pub mod unstake;

pub use admin::*;
pub use initialize::*;
pub use stake::*;
pub use unstake::*;
