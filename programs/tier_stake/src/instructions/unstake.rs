//! Unstake instruction handler.
//!
//! Releases a position's principal and mints its accrued yield once the lock
//! has elapsed. Terminal: the position becomes a withdrawn tombstone and its
//! vault is closed.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, CloseAccount, Mint, MintTo, Token, TokenAccount, Transfer},
};

use crate::constants::*;
use crate::error::StakingError;
use crate::policy;
use crate::state::{PoolConfig, StakingPosition};

/// Accounts required for unstaking.
///
/// All outbound movement (reward mint, principal release, vault close) is
/// signed by the pool config PDA; the owner's signature only authorizes the
/// request, never the custody debit itself.
#[derive(Accounts)]
pub struct Unstake<'info> {
    /// The position owner withdrawing their stake.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The pool the position belongs to.
    #[account(
        mut,
        seeds = [
            POOL_CONFIG_SEED,
            pool_config.admin.as_ref(),
            pool_config.deposit_mint.as_ref()
        ],
        bump = pool_config.bump,
        has_one = deposit_mint,
        has_one = reward_mint
    )]
    pub pool_config: Account<'info, PoolConfig>,

    /// The deposit token mint.
    pub deposit_mint: Account<'info, Mint>,

    /// The reward mint; its mint authority is the pool config PDA.
    #[account(mut)]
    pub reward_mint: Account<'info, Mint>,

    /// The owner's position.
    ///
    /// Ownership is enforced by the PDA derivation itself: the seeds bind
    /// the signer's key, so a non-owner caller fails the address check
    /// before the `has_one` backstop is ever evaluated.
    #[account(
        mut,
        seeds = [POSITION_SEED, pool_config.key().as_ref(), owner.key().as_ref()],
        bump = position.bump,
        has_one = owner @ StakingError::NotOwner,
        constraint = position.pool == pool_config.key()
    )]
    pub position: Account<'info, StakingPosition>,

    /// The position's custody vault holding the locked principal.
    #[account(
        mut,
        seeds = [VAULT_SEED, position.key().as_ref()],
        bump,
        token::mint = deposit_mint,
        token::authority = pool_config
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Owner's token account receiving the released principal.
    #[account(
        mut,
        constraint = user_deposit_account.mint == deposit_mint.key(),
        constraint = user_deposit_account.owner == owner.key()
    )]
    pub user_deposit_account: Account<'info, TokenAccount>,

    /// Owner's reward token account, created on the fly if absent.
    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = reward_mint,
        associated_token::authority = owner
    )]
    pub user_reward_account: Account<'info, TokenAccount>,

    /// Associated token program.
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// Token program.
    pub token_program: Program<'info, Token>,

    /// System program.
    pub system_program: Program<'info, System>,
}

/// Withdraw a position: mint accrued yield, release principal, close vault.
///
/// # Errors
/// * `PositionAlreadyWithdrawn` - the position is terminal
/// * `StillLocked` - `now < start_timestamp + lock_duration`
/// * `NotOwner` - signer does not own the position (account constraint)
pub fn handler(ctx: Context<Unstake>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    // Accrual is computed over the full locked interval before the position
    // is mutated; floor rounding is guaranteed by the policy engine
    let position = &ctx.accounts.position;
    let elapsed = position.elapsed_locked(now);
    let accrued = policy::compute_accrued(
        position.amount_staked,
        position.effective_yield_rate,
        elapsed,
    )?;

    // State machine transition; rejects terminal and still-locked positions
    // before any token movement
    let principal = ctx.accounts.position.withdraw(now)?;

    let admin_key = ctx.accounts.pool_config.admin;
    let deposit_mint_key = ctx.accounts.pool_config.deposit_mint;
    let seeds = &[
        POOL_CONFIG_SEED,
        admin_key.as_ref(),
        deposit_mint_key.as_ref(),
        &[ctx.accounts.pool_config.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    // Mint accrued yield to the owner with the pool PDA as mint authority
    if accrued > 0 {
        let cpi_accounts = MintTo {
            mint: ctx.accounts.reward_mint.to_account_info(),
            to: ctx.accounts.user_reward_account.to_account_info(),
            authority: ctx.accounts.pool_config.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        token::mint_to(cpi_ctx, accrued)?;
    }

    // Release principal from custody
    let cpi_accounts = Transfer {
        from: ctx.accounts.vault.to_account_info(),
        to: ctx.accounts.user_deposit_account.to_account_info(),
        authority: ctx.accounts.pool_config.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, principal)?;

    // The vault lives exactly as long as the position is non-terminal; rent
    // goes back to the owner
    let cpi_accounts = CloseAccount {
        account: ctx.accounts.vault.to_account_info(),
        destination: ctx.accounts.owner.to_account_info(),
        authority: ctx.accounts.pool_config.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::close_account(cpi_ctx)?;

    let pool_config = &mut ctx.accounts.pool_config;
    pool_config.record_withdraw(principal)?;

    msg!("Withdrew {} principal after {} seconds locked", principal, elapsed);
    msg!("Minted {} reward tokens", accrued);
    msg!("Pool total staked: {}", pool_config.total_staked);

    Ok(())
}
