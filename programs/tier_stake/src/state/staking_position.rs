use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::policy;

/// Lifecycle of a staking position.
///
/// `Unopened` is implicit (the account does not exist, or exists zeroed with
/// no principal); `Unlockable` is derived from elapsed time rather than
/// stored, so only the two persisted states appear here.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PositionState {
    /// Principal is held in the vault under an active lock
    Locked,
    /// Terminal: principal released, yield minted, vault closed
    Withdrawn,
}

/// A single user's locked stake within a pool.
///
/// Lives at PDA `["position", pool_config, owner]`, which enforces one
/// position per (pool, user) pair. Withdrawn records persist as tombstones;
/// reopening one is a fresh lock on the same address.
#[account]
pub struct StakingPosition {
    pub owner: Pubkey,
    pub pool: Pubkey,

    /// Locked principal; positive while `Locked`, zero once `Withdrawn`
    pub amount_staked: u64,
    /// Lock tier in days, fixed when the position is opened
    pub lock_duration: u64,
    /// Rate resolved at stake time; immune to later base-rate changes
    pub effective_yield_rate: u64,
    /// Ledger time at stake
    pub start_timestamp: i64,

    pub state: PositionState,
    pub bump: u8,
}

impl StakingPosition {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 8 + 8 + 1 + 1;

    /// Open (or reopen) the position with a fresh lock.
    ///
    /// Rejects when principal is already locked; a withdrawn tombstone or a
    /// freshly created zeroed account both count as openable.
    #[allow(clippy::too_many_arguments)]
    pub fn open(
        &mut self,
        owner: Pubkey,
        pool: Pubkey,
        amount: u64,
        lock_duration: u64,
        effective_yield_rate: u64,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        require!(self.amount_staked == 0, StakingError::PositionStillActive);

        self.owner = owner;
        self.pool = pool;
        self.amount_staked = amount;
        self.lock_duration = lock_duration;
        self.effective_yield_rate = effective_yield_rate;
        self.start_timestamp = now;
        self.state = PositionState::Locked;
        self.bump = bump;

        Ok(())
    }

    /// Transition to `Withdrawn`, returning the principal to release.
    ///
    /// Fails on a terminal position and while the lock has not elapsed; on
    /// success the record becomes a tombstone with zero principal.
    pub fn withdraw(&mut self, now: i64) -> Result<u64> {
        require!(
            self.state != PositionState::Withdrawn,
            StakingError::PositionAlreadyWithdrawn
        );
        require!(
            policy::is_unlockable(self.start_timestamp, self.lock_duration, now)?,
            StakingError::StillLocked
        );

        let principal = self.amount_staked;
        self.amount_staked = 0;
        self.state = PositionState::Withdrawn;

        Ok(principal)
    }

    /// Seconds the principal has been locked, for yield accrual.
    ///
    /// Clamped at zero: a clock reading before `start_timestamp` accrues
    /// nothing rather than wrapping negative into a huge unsigned interval.
    pub fn elapsed_locked(&self, now: i64) -> u64 {
        now.saturating_sub(self.start_timestamp).max(0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;

    fn locked_position(amount: u64, lock_days: u64, start: i64) -> StakingPosition {
        let mut position = StakingPosition {
            owner: Pubkey::new_unique(),
            pool: Pubkey::new_unique(),
            amount_staked: 0,
            lock_duration: 0,
            effective_yield_rate: 0,
            start_timestamp: 0,
            state: PositionState::Locked,
            bump: 255,
        };
        position
            .open(position.owner, position.pool, amount, lock_days, 150, start, 255)
            .unwrap();
        position
    }

    #[test]
    fn open_stamps_lock_metadata() {
        let position = locked_position(1_000, 30, 1_700_000_000);
        assert_eq!(position.amount_staked, 1_000);
        assert_eq!(position.lock_duration, 30);
        assert_eq!(position.effective_yield_rate, 150);
        assert_eq!(position.start_timestamp, 1_700_000_000);
        assert_eq!(position.state, PositionState::Locked);
    }

    #[test]
    fn second_open_on_locked_position_is_rejected() {
        let mut position = locked_position(1_000, 30, 1_700_000_000);
        let result = position.open(
            position.owner,
            position.pool,
            500,
            15,
            120,
            1_700_000_100,
            255,
        );
        assert_eq!(result, Err(StakingError::PositionStillActive.into()));
        // Rejection mutates nothing
        assert_eq!(position.amount_staked, 1_000);
        assert_eq!(position.lock_duration, 30);
    }

    #[test]
    fn early_withdrawal_is_rejected_without_mutation() {
        let start = 1_700_000_000;
        let mut position = locked_position(1_000, 30, start);
        let just_before = start + 30 * SECONDS_PER_DAY - 1;

        assert_eq!(
            position.withdraw(just_before),
            Err(StakingError::StillLocked.into())
        );
        assert_eq!(position.amount_staked, 1_000);
        assert_eq!(position.state, PositionState::Locked);
    }

    #[test]
    fn withdrawal_at_unlock_boundary_succeeds() {
        let start = 1_700_000_000;
        let mut position = locked_position(1_000, 30, start);
        let unlock_at = start + 30 * SECONDS_PER_DAY;

        assert_eq!(position.withdraw(unlock_at).unwrap(), 1_000);
        assert_eq!(position.amount_staked, 0);
        assert_eq!(position.state, PositionState::Withdrawn);
    }

    #[test]
    fn terminal_rewithdrawal_is_rejected() {
        let start = 1_700_000_000;
        let mut position = locked_position(1_000, 15, start);
        let after_unlock = start + 20 * SECONDS_PER_DAY;

        position.withdraw(after_unlock).unwrap();
        assert_eq!(
            position.withdraw(after_unlock),
            Err(StakingError::PositionAlreadyWithdrawn.into())
        );
    }

    #[test]
    fn tombstone_can_be_reopened_with_fresh_lock() {
        let start = 1_700_000_000;
        let mut position = locked_position(1_000, 15, start);
        let after_unlock = start + 15 * SECONDS_PER_DAY;
        position.withdraw(after_unlock).unwrap();

        position
            .open(position.owner, position.pool, 2_000, 90, 124, after_unlock, 255)
            .unwrap();
        assert_eq!(position.amount_staked, 2_000);
        assert_eq!(position.lock_duration, 90);
        assert_eq!(position.start_timestamp, after_unlock);
        assert_eq!(position.state, PositionState::Locked);
    }

    #[test]
    fn elapsed_locked_saturates_before_start() {
        let position = locked_position(1_000, 15, 1_700_000_000);
        assert_eq!(position.elapsed_locked(1_600_000_000), 0);
        assert_eq!(position.elapsed_locked(1_700_000_010), 10);
    }

    #[test]
    fn elapsed_locked_clamps_instead_of_wrapping_negative() {
        let start = 1_700_000_000;
        let position = locked_position(1_000, 15, start);

        // A negative difference must clamp to zero, not cast to a huge
        // unsigned interval
        assert_eq!(position.elapsed_locked(start - 100_000_000), 0);
        assert_eq!(position.elapsed_locked(i64::MIN), 0);
        assert_eq!(position.elapsed_locked(start), 0);
    }
}
