//! Admin instruction handlers.
//!
//! The admin surface is deliberately narrow: the admin can adjust the base
//! yield rate for future positions, nothing else. Pool identity fields and
//! the tier set are immutable after initialization.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::state::PoolConfig;

/// Accounts required for admin operations.
#[derive(Accounts)]
pub struct AdminControl<'info> {
    /// The pool admin. Must be signer and match `pool_config.admin`.
    pub admin: Signer<'info>,

    /// The pool to modify.
    #[account(
        mut,
        seeds = [
            POOL_CONFIG_SEED,
            pool_config.admin.as_ref(),
            pool_config.deposit_mint.as_ref()
        ],
        bump = pool_config.bump,
        has_one = admin @ StakingError::Unauthorized
    )]
    pub pool_config: Account<'info, PoolConfig>,
}

/// Update the pool's base yield rate.
///
/// Affects only positions opened after this call: every existing position
/// keeps the effective rate resolved when it was staked.
///
/// # Errors
/// * `Unauthorized` - signer is not the pool admin
/// * `BaseRateTooHigh` - new rate above `MAX_BASE_RATE`
pub fn update_base_rate_handler(ctx: Context<AdminControl>, new_rate: u64) -> Result<()> {
    require!(new_rate <= MAX_BASE_RATE, StakingError::BaseRateTooHigh);

    let pool_config = &mut ctx.accounts.pool_config;
    let old_rate = pool_config.base_yield_rate;
    pool_config.base_yield_rate = new_rate;

    msg!("Base yield rate updated: {}bp -> {}bp", old_rate, new_rate);
    msg!("Admin: {}", ctx.accounts.admin.key());

    Ok(())
}
