//! Error types for the tier-stake program.
//!
//! Variants are grouped by recovery class:
//! - Policy violations: bad inputs, recoverable by retrying with corrected
//!   arguments
//! - Authorization failures: wrong signer, never recoverable without the
//!   right credentials
//! - State conflicts: the operation is valid but the record is in the wrong
//!   state; the caller must wait or correct the call
//! - Resource failures: the caller lacks the balance the operation needs
//! - Math: checked-arithmetic overflow, indicates inputs outside the
//!   supported range
//!
//! Every error is raised before any state mutation; instructions are
//! all-or-nothing.

use anchor_lang::prelude::*;

/// Custom error codes for the tier-stake program.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum StakingError {
    // ========== Policy Violations ==========

    /// Lock tier set is empty, unsorted, or contains duplicate/zero entries.
    #[msg("Lock tier set must be non-empty, strictly increasing, and positive")]
    InvalidPolicy,

    /// The requested lock duration is not one of the pool's tiers.
    #[msg("Lock duration is not an allowed tier for this pool")]
    InvalidLockTier,

    /// Cannot stake a zero amount.
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    /// Base yield rate exceeds the maximum allowed value.
    #[msg("Base yield rate exceeds 10000 basis points (100%)")]
    BaseRateTooHigh,

    // ========== Authorization Failures ==========

    /// Signer does not own the staking position.
    ///
    /// In practice a non-owner caller is rejected by the position's PDA
    /// derivation (the seeds bind the signer's key), so this variant backs
    /// the `has_one = owner` constraint rather than surfacing on its own.
    #[msg("Signer is not the owner of this position")]
    NotOwner,

    /// Signer is not the pool admin.
    #[msg("Signer is not the pool admin")]
    Unauthorized,

    // ========== State Conflicts ==========

    /// The position's lock period has not elapsed yet.
    #[msg("Lock period has not elapsed - cannot unstake yet")]
    StillLocked,

    /// The position was already fully withdrawn.
    #[msg("Position has already been withdrawn")]
    PositionAlreadyWithdrawn,

    /// The position already holds a locked stake.
    #[msg("Position already holds an active stake - withdraw it first")]
    PositionStillActive,

    // ========== Resource Failures ==========

    /// User's deposit-token balance is below the requested stake amount.
    #[msg("Insufficient deposit-token balance")]
    InsufficientFunds,

    // ========== Math ==========

    /// Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,
}
