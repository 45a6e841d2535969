//! Discretely compounded reward computation.
//!
//! `reward = floor(amount * (100 + r)^n / 100^n) - amount` where
//! `n = floor(elapsed / award_frequency)`. Pure: no storage access.
//!
//! Intermediate growth factors are unbounded; apart from a zero frequency or a
//! negative amount, the only failure is a gross payout beyond `i128`.

use crate::math;
use crate::types::{Package, Stake};
use staking_errors::ContractError;

const PERCENT: u128 = 100;

/// Reward accrued by `stake` after `elapsed_secs` under `package` terms.
pub fn compute_reward(
    stake: &Stake,
    package: &Package,
    elapsed_secs: u64,
) -> Result<i128, ContractError> {
    let periods = math::periods_elapsed(elapsed_secs, package.award_frequency)?;
    if periods == 0 {
        return Ok(0);
    }

    let amount =
        u128::try_from(stake.token_amount).map_err(|_| ContractError::AmountMustBePositive)?;
    if amount == 0 || package.reward_percentage == 0 {
        return Ok(0);
    }

    let rate = PERCENT + u128::from(package.reward_percentage);
    let common = math::gcd(rate, PERCENT);
    let gross = math::compound_floor(amount, rate / common, PERCENT / common, periods)?;
    math::sub_i128(gross, stake.token_amount)
}

/// Reward for the whole lock period; this is what a withdrawal pays out.
#[inline]
pub fn compute_full_reward(stake: &Stake, package: &Package) -> Result<i128, ContractError> {
    compute_reward(stake, package, package.lock_time)
}
