//! Program constants for the tier-stake vault.
//!
//! Defines the PDA seed tags, time conversions, and policy bounds used
//! throughout the program. Seed tags are part of the program's identity
//! contract: changing any of them re-derives every custody address.

use anchor_lang::prelude::*;

/// Seed for deriving the pool config PDA (one per admin + deposit mint)
pub const POOL_CONFIG_SEED: &[u8] = b"pool_config";

/// Seed for deriving staking position PDAs (one per pool + user)
pub const POSITION_SEED: &[u8] = b"position";

/// Seed for deriving a position's custody vault PDA
pub const VAULT_SEED: &[u8] = b"vault";

/// Number of seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Number of seconds in a year (365 days)
pub const SECONDS_PER_YEAR: u64 = 365 * 86_400;

/// Number of days used to annualize tier bonuses
pub const DAYS_PER_YEAR: u64 = 365;

/// Basis points denominator (100% = 10000 basis points)
pub const BASIS_POINTS_DENOMINATOR: u64 = 10_000;

/// Maximum base yield rate (100% = 10000 basis points per year)
pub const MAX_BASE_RATE: u64 = 10_000;

/// Maximum number of lock tiers a pool may declare
pub const MAX_LOCK_TIERS: usize = 8;

/// Maximum lock duration in days (10 years)
pub const MAX_LOCK_DAYS: u64 = 3_650;

/// Maximum byte length of the reward token display name
pub const MAX_REWARD_NAME_LEN: usize = 32;

/// Maximum byte length of the reward token symbol
pub const MAX_REWARD_SYMBOL_LEN: usize = 10;
