//! Stake instruction handler.
//!
//! Locks deposit tokens into a position's custody vault for a chosen tier.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::policy;
use crate::state::{PoolConfig, StakingPosition};

/// Accounts required for staking.
///
/// The position and its vault are created lazily on first stake
/// (`init_if_needed` also covers reopening a withdrawn tombstone, whose
/// vault was closed at withdrawal). The vault's token authority is the pool
/// config PDA, never the user.
#[derive(Accounts)]
pub struct StakeTokens<'info> {
    /// The user staking tokens.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The pool being staked into.
    #[account(
        mut,
        seeds = [
            POOL_CONFIG_SEED,
            pool_config.admin.as_ref(),
            pool_config.deposit_mint.as_ref()
        ],
        bump = pool_config.bump,
        has_one = deposit_mint
    )]
    pub pool_config: Account<'info, PoolConfig>,

    /// The deposit token mint.
    pub deposit_mint: Account<'info, Mint>,

    /// The user's position in this pool, unique per (pool, user).
    #[account(
        init_if_needed,
        payer = user,
        space = StakingPosition::LEN,
        seeds = [POSITION_SEED, pool_config.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub position: Account<'info, StakingPosition>,

    /// The position's custody vault, authority = pool config PDA.
    #[account(
        init_if_needed,
        payer = user,
        seeds = [VAULT_SEED, position.key().as_ref()],
        bump,
        token::mint = deposit_mint,
        token::authority = pool_config
    )]
    pub vault: Account<'info, TokenAccount>,

    /// User's token account holding the deposit tokens.
    #[account(
        mut,
        constraint = user_token_account.mint == deposit_mint.key(),
        constraint = user_token_account.owner == user.key()
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar.
    pub rent: Sysvar<'info, Rent>,
}

/// Stake tokens into the pool under a lock tier.
///
/// Validates policy and balance, moves the principal into the vault, then
/// opens the position and updates pool totals. The whole instruction is one
/// atomic unit: a failure at any point leaves no transfer and no record.
///
/// # Arguments
/// * `ctx` - StakeTokens accounts context
/// * `amount` - Amount of deposit tokens to lock
/// * `lock_duration` - Chosen lock tier in days; must be one of the pool's
///   tiers
///
/// # Errors
/// * `ZeroAmount` - amount is zero
/// * `InvalidLockTier` - duration not in the pool's tier set
/// * `PositionStillActive` - the position already holds locked principal
/// * `InsufficientFunds` - user balance below `amount`
pub fn handler(ctx: Context<StakeTokens>, amount: u64, lock_duration: u64) -> Result<()> {
    let pool_config = &ctx.accounts.pool_config;
    let position = &ctx.accounts.position;

    require!(amount > 0, StakingError::ZeroAmount);
    require!(
        pool_config.allows_tier(lock_duration),
        StakingError::InvalidLockTier
    );
    require!(
        position.amount_staked == 0,
        StakingError::PositionStillActive
    );
    require!(
        ctx.accounts.user_token_account.amount >= amount,
        StakingError::InsufficientFunds
    );

    // Rate lock-in: resolved against the current base rate, fixed for the
    // lifetime of this lock
    let effective_yield_rate = policy::resolve_rate(pool_config.base_yield_rate, lock_duration)?;

    let clock = Clock::get()?;

    // Move principal into custody before recording it
    let cpi_accounts = Transfer {
        from: ctx.accounts.user_token_account.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    let owner = ctx.accounts.user.key();
    let pool_key = ctx.accounts.pool_config.key();

    let position = &mut ctx.accounts.position;
    position.open(
        owner,
        pool_key,
        amount,
        lock_duration,
        effective_yield_rate,
        clock.unix_timestamp,
        ctx.bumps.position,
    )?;

    let pool_config = &mut ctx.accounts.pool_config;
    pool_config.record_open(amount)?;

    msg!("Staked {} tokens for {} days", amount, lock_duration);
    msg!("Effective yield rate: {}bp", effective_yield_rate);
    msg!("Pool total staked: {}", pool_config.total_staked);

    Ok(())
}
