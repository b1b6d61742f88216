//! Initialize instruction handler.
//!
//! Creates a staking pool for one (admin, deposit mint) pair together with
//! its reward mint, in one atomic instruction.
//!
//! ## Custody Notes
//! - The pool config PDA is the mint and freeze authority of the reward
//!   mint from the moment it exists; no human key ever holds it
//! - Re-initialization of the same (admin, deposit mint) pair fails on the
//!   `init` constraint and leaves the existing record untouched

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::constants::*;
use crate::error::StakingError;
use crate::policy;
use crate::state::PoolConfig;

/// Display metadata for the reward token created at initialization.
#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct RewardTokenParams {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Accounts required for pool initialization.
///
/// The reward mint is a fresh keypair account (the "mint creation key"
/// co-signer); its authorities are assigned to the pool config PDA at
/// creation, so the program is the only party able to mint yield.
#[derive(Accounts)]
#[instruction(params: RewardTokenParams)]
pub struct Initialize<'info> {
    /// The admin creating the pool; becomes the immutable `PoolConfig.admin`.
    #[account(mut)]
    pub admin: Signer<'info>,

    /// The token type users will deposit. Locked into pool state permanently.
    pub deposit_mint: Account<'info, Mint>,

    /// The pool configuration record.
    /// PDA from (admin, deposit mint) guarantees one pool per pair; `init`
    /// rejects a second initialization outright.
    #[account(
        init,
        payer = admin,
        space = PoolConfig::LEN,
        seeds = [POOL_CONFIG_SEED, admin.key().as_ref(), deposit_mint.key().as_ref()],
        bump
    )]
    pub pool_config: Account<'info, PoolConfig>,

    /// The reward mint, created here with the pool config PDA as its mint
    /// and freeze authority.
    #[account(
        init,
        payer = admin,
        mint::decimals = params.decimals,
        mint::authority = pool_config,
        mint::freeze_authority = pool_config
    )]
    pub reward_mint: Account<'info, Mint>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,

    /// Token program for mint creation.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar for rent-exempt calculations.
    pub rent: Sysvar<'info, Rent>,
}

/// Initialize a new staking pool.
///
/// # Arguments
/// * `ctx` - Initialize accounts context
/// * `params` - Reward token display metadata
/// * `base_yield_rate` - Annualized base yield in basis points
/// * `lock_tiers` - Allowed lock durations in days, strictly increasing
///
/// # Errors
/// * `InvalidPolicy` - empty, unsorted, duplicated, zero, or oversized tiers,
///   or metadata exceeding the stored bounds
/// * `BaseRateTooHigh` - base rate above `MAX_BASE_RATE`
pub fn handler(
    ctx: Context<Initialize>,
    params: RewardTokenParams,
    base_yield_rate: u64,
    lock_tiers: Vec<u64>,
) -> Result<()> {
    policy::validate_lock_tiers(&lock_tiers)?;
    require!(base_yield_rate <= MAX_BASE_RATE, StakingError::BaseRateTooHigh);
    require!(
        params.name.len() <= MAX_REWARD_NAME_LEN,
        StakingError::InvalidPolicy
    );
    require!(
        params.symbol.len() <= MAX_REWARD_SYMBOL_LEN,
        StakingError::InvalidPolicy
    );

    let pool_config = &mut ctx.accounts.pool_config;

    pool_config.admin = ctx.accounts.admin.key();
    pool_config.deposit_mint = ctx.accounts.deposit_mint.key();
    pool_config.reward_mint = ctx.accounts.reward_mint.key();
    pool_config.base_yield_rate = base_yield_rate;
    pool_config.lock_tiers = lock_tiers;
    pool_config.total_staked = 0;
    pool_config.total_positions = 0;
    pool_config.reward_name = params.name;
    pool_config.reward_symbol = params.symbol;
    pool_config.bump = ctx.bumps.pool_config;

    msg!("Staking pool initialized");
    msg!("Admin: {}", pool_config.admin);
    msg!("Deposit mint: {}", pool_config.deposit_mint);
    msg!("Reward mint: {}", pool_config.reward_mint);
    msg!("Base yield rate: {}bp", base_yield_rate);
    msg!("Lock tiers (days): {:?}", pool_config.lock_tiers);

    Ok(())
}
