//! Yield/lock policy engine.
//!
//! Pure functions only: tier-set validation, tier-to-rate resolution, yield
//! accrual, and unlock checks. No account access and no clock reads happen
//! here; handlers pass in the ledger timestamp they observed.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;

/// Validate an admin-supplied lock tier set.
///
/// Tiers must be non-empty, bounded in count and length, and strictly
/// increasing (which also rules out duplicates and zero entries).
pub fn validate_lock_tiers(tiers: &[u64]) -> Result<()> {
    require!(!tiers.is_empty(), StakingError::InvalidPolicy);
    require!(tiers.len() <= MAX_LOCK_TIERS, StakingError::InvalidPolicy);

    let mut previous = 0u64;
    for &tier in tiers {
        require!(tier > previous, StakingError::InvalidPolicy);
        require!(tier <= MAX_LOCK_DAYS, StakingError::InvalidPolicy);
        previous = tier;
    }

    Ok(())
}

/// Resolve the effective yield rate for a lock tier.
///
/// `effective = base + floor(base * tier_days / 365)`: the base rate plus an
/// annualized bonus proportional to the lock length, so a full-year lock
/// doubles the base rate. Monotone non-decreasing in `tier_days`, which keeps
/// longer locks at least as attractive as shorter ones.
pub fn resolve_rate(base_rate: u64, tier_days: u64) -> Result<u64> {
    let bonus = (base_rate as u128)
        .checked_mul(tier_days as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_div(DAYS_PER_YEAR as u128)
        .ok_or(StakingError::MathOverflow)?;

    let effective = (base_rate as u128)
        .checked_add(bonus)
        .ok_or(StakingError::MathOverflow)?;

    u64::try_from(effective).map_err(|_| StakingError::MathOverflow.into())
}

/// Compute the reward amount accrued over a locked interval.
///
/// `floor(amount * rate_bps * elapsed_secs / (10000 * SECONDS_PER_YEAR))`,
/// computed in u128. Floor rounding means repeated stake/unstake cycles can
/// only ever mint less than the continuous-rate ideal, never more.
pub fn compute_accrued(amount: u64, rate_bps: u64, elapsed_secs: u64) -> Result<u64> {
    let denominator = (BASIS_POINTS_DENOMINATOR as u128)
        .checked_mul(SECONDS_PER_YEAR as u128)
        .ok_or(StakingError::MathOverflow)?;

    let accrued = (amount as u128)
        .checked_mul(rate_bps as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_mul(elapsed_secs as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_div(denominator)
        .ok_or(StakingError::MathOverflow)?;

    u64::try_from(accrued).map_err(|_| StakingError::MathOverflow.into())
}

/// Convert a lock tier in days to seconds.
pub fn lock_tier_seconds(tier_days: u64) -> Result<i64> {
    let seconds = (tier_days as i64)
        .checked_mul(SECONDS_PER_DAY)
        .ok_or(StakingError::MathOverflow)?;
    Ok(seconds)
}

/// Whether a position's lock period has elapsed.
///
/// Strict threshold: unlockable exactly when
/// `now >= start_timestamp + lock_days * SECONDS_PER_DAY`.
pub fn is_unlockable(start_timestamp: i64, lock_days: u64, now: i64) -> Result<bool> {
    let lock_seconds = lock_tier_seconds(lock_days)?;
    Ok(now.saturating_sub(start_timestamp) >= lock_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_strictly_increasing_tiers() {
        assert!(validate_lock_tiers(&[15, 30, 90]).is_ok());
        assert!(validate_lock_tiers(&[1]).is_ok());
    }

    #[test]
    fn rejects_empty_tier_set() {
        assert_eq!(
            validate_lock_tiers(&[]),
            Err(StakingError::InvalidPolicy.into())
        );
    }

    #[test]
    fn rejects_duplicate_and_unsorted_tiers() {
        assert_eq!(
            validate_lock_tiers(&[15, 15, 30]),
            Err(StakingError::InvalidPolicy.into())
        );
        assert_eq!(
            validate_lock_tiers(&[30, 15]),
            Err(StakingError::InvalidPolicy.into())
        );
    }

    #[test]
    fn rejects_zero_and_oversized_tiers() {
        assert_eq!(
            validate_lock_tiers(&[0, 30]),
            Err(StakingError::InvalidPolicy.into())
        );
        assert_eq!(
            validate_lock_tiers(&[15, MAX_LOCK_DAYS + 1]),
            Err(StakingError::InvalidPolicy.into())
        );
    }

    #[test]
    fn rejects_too_many_tiers() {
        let tiers: Vec<u64> = (1..=(MAX_LOCK_TIERS as u64 + 1)).collect();
        assert_eq!(
            validate_lock_tiers(&tiers),
            Err(StakingError::InvalidPolicy.into())
        );
    }

    #[test]
    fn rate_is_monotone_in_tier_length() {
        let base = 100;
        let tiers = [15u64, 30, 90, 365, 730];
        let mut last = 0;
        for tier in tiers {
            let rate = resolve_rate(base, tier).unwrap();
            assert!(rate >= last, "rate decreased at tier {}", tier);
            last = rate;
        }
    }

    #[test]
    fn full_year_lock_doubles_base_rate() {
        assert_eq!(resolve_rate(100, 365).unwrap(), 200);
    }

    #[test]
    fn rate_bonus_floors() {
        // 100 * 1 / 365 == 0 after floor division
        assert_eq!(resolve_rate(100, 1).unwrap(), 100);
        // 100 * 3 / 365 == 0; 100 * 4 / 365 == 1
        assert_eq!(resolve_rate(100, 3).unwrap(), 100);
        assert_eq!(resolve_rate(100, 4).unwrap(), 101);
    }

    #[test]
    fn accrual_over_one_year_matches_rate() {
        // 1% of 1_000_000_000 over exactly one year
        let accrued = compute_accrued(1_000_000_000, 100, SECONDS_PER_YEAR).unwrap();
        assert_eq!(accrued, 10_000_000);
    }

    #[test]
    fn accrual_floors_instead_of_rounding_up() {
        // One second of accrual on a tiny stake floors to zero
        assert_eq!(compute_accrued(1_000, 100, 1).unwrap(), 0);
    }

    #[test]
    fn zero_elapsed_accrues_nothing() {
        assert_eq!(compute_accrued(u64::MAX, MAX_BASE_RATE, 0).unwrap(), 0);
    }

    #[test]
    fn unlock_boundary_is_strict() {
        let start = 1_700_000_000;
        let lock_days = 30;
        let unlock_at = start + lock_days as i64 * SECONDS_PER_DAY;

        assert!(!is_unlockable(start, lock_days, unlock_at - 1).unwrap());
        assert!(is_unlockable(start, lock_days, unlock_at).unwrap());
        assert!(is_unlockable(start, lock_days, unlock_at + 1).unwrap());
    }

    #[test]
    fn clock_before_start_is_locked() {
        assert!(!is_unlockable(1_700_000_000, 15, 1_600_000_000).unwrap());
    }
}
