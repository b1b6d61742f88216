//! # Tier-Stake Vault Program
//!
//! A lock-tiered token staking vault. An admin configures a pool for one
//! deposit token and one program-minted reward token; users lock deposit
//! tokens for one of the pool's duration tiers and receive yield, minted at
//! withdrawal, at a rate fixed when they staked.
//!
//! ## Features
//! - One pool per (admin, deposit mint) pair, one position per (pool, user)
//! - Tier-scaled yield: longer locks resolve to a rate at least as high as
//!   any shorter tier
//! - Rate lock-in: a position's effective rate never changes after staking,
//!   even if the admin later adjusts the pool's base rate
//! - Program-exclusive custody: position vaults and the reward mint are
//!   controlled by the pool config PDA, never a user or admin key
//! - Safe math with overflow protection throughout

use anchor_lang::prelude::*;

declare_id!("CjWBUfq4DmgyJ7Kr9uTYSPKXFmKzRDy7kdFG1Vr3Xfzr");

pub mod constants;
pub mod error;
pub mod instructions;
pub mod policy;
pub mod state;

use instructions::*;

#[program]
pub mod tier_stake {
    use super::*;

    /// Initializes a staking pool and creates its reward mint.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for initialization
    /// * `params` - Display metadata and decimals for the reward token
    /// * `base_yield_rate` - Annualized base yield in basis points
    /// * `lock_tiers` - Allowed lock durations in days, strictly increasing
    ///
    /// # Errors
    /// Returns an error if the tier set is invalid, the base rate exceeds
    /// its cap, or a pool already exists for this admin + deposit mint.
    pub fn initialize(
        ctx: Context<Initialize>,
        params: RewardTokenParams,
        base_yield_rate: u64,
        lock_tiers: Vec<u64>,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, params, base_yield_rate, lock_tiers)
    }

    /// Stakes deposit tokens under a chosen lock tier.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for staking
    /// * `amount` - Amount of deposit tokens to lock
    /// * `lock_duration` - Lock tier in days, must be one of the pool's tiers
    ///
    /// # Errors
    /// Returns an error if:
    /// - Amount is zero
    /// - The duration is not an allowed tier
    /// - The position already holds a locked stake
    /// - The user's balance is insufficient
    pub fn stake_tokens(
        ctx: Context<StakeTokens>,
        amount: u64,
        lock_duration: u64,
    ) -> Result<()> {
        instructions::stake::handler(ctx, amount, lock_duration)
    }

    /// Withdraws a position once its lock has elapsed.
    ///
    /// Mints the accrued yield, returns the principal, and closes the vault.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The lock period has not elapsed
    /// - The position was already withdrawn
    /// - The signer is not the position owner
    pub fn unstake(ctx: Context<Unstake>) -> Result<()> {
        instructions::unstake::handler(ctx)
    }

    /// Admin function to update the base yield rate for future positions.
    ///
    /// # Arguments
    /// * `ctx` - The context containing admin accounts
    /// * `new_rate` - New base yield rate in basis points
    ///
    /// # Errors
    /// Returns an error if the caller is not the admin or the rate exceeds
    /// its cap.
    pub fn update_base_rate(ctx: Context<AdminControl>, new_rate: u64) -> Result<()> {
        instructions::admin::update_base_rate_handler(ctx, new_rate)
    }
}
