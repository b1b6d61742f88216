use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;

/// Pool configuration record, one per (admin, deposit mint) pair.
///
/// Lives at PDA `["pool_config", admin, deposit_mint]`. The PDA is also the
/// mint authority for `reward_mint` and the token authority for every
/// position vault, so this record doubles as the program's custody identity.
/// Policy fields are written once at initialization; only the running totals
/// (and the base rate, through the admin instruction) change afterwards.
#[account]
pub struct PoolConfig {
    pub admin: Pubkey,
    pub deposit_mint: Pubkey,
    pub reward_mint: Pubkey,

    /// Annualized base yield in basis points; applies to future positions only
    pub base_yield_rate: u64,
    /// Allowed lock durations in days, strictly increasing
    pub lock_tiers: Vec<u64>,

    /// Sum of principal across all live positions
    pub total_staked: u64,
    /// Count of live (non-withdrawn) positions
    pub total_positions: u64,

    pub reward_name: String,
    pub reward_symbol: String,

    pub bump: u8,
}

impl PoolConfig {
    pub const LEN: usize = 8
        + (32 * 3)
        + 8
        + (4 + 8 * MAX_LOCK_TIERS)
        + (8 * 2)
        + (4 + MAX_REWARD_NAME_LEN)
        + (4 + MAX_REWARD_SYMBOL_LEN)
        + 1;

    pub fn allows_tier(&self, lock_duration: u64) -> bool {
        self.lock_tiers.contains(&lock_duration)
    }

    /// Fold a newly opened position into the running totals.
    pub fn record_open(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        self.total_positions = self
            .total_positions
            .checked_add(1)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    /// Remove a fully withdrawn position from the running totals.
    pub fn record_withdraw(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(StakingError::MathOverflow)?;
        self.total_positions = self
            .total_positions
            .checked_sub(1)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }
}
