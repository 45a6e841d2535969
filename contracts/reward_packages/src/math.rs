//! Overflow-safe integer helpers for reward calculations.
//!
//! Nothing here touches floating point. Checked helpers return
//! `ArithmeticOverflow` / `DivisionByZero` instead of wrapping.

use num_bigint::BigUint;
use staking_errors::ContractError;

/// A value `v` fits in `i128` iff `v < 2^127`.
const I128_VALUE_BITS: u32 = 127;

/// Greatest common divisor (Euclid).
pub fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// `floor(amount * numerator^periods / denominator^periods)`.
///
/// Compounds one period at a time over arbitrary-precision integers and fails
/// with `ArithmeticOverflow` as soon as the running floor no longer fits in
/// `i128`. A ratio of exactly one skips the loop.
pub fn compound_floor(
    amount: u128,
    numerator: u128,
    denominator: u128,
    periods: u64,
) -> Result<i128, ContractError> {
    if denominator == 0 {
        return Err(ContractError::DivisionByZero);
    }
    let factor = BigUint::from(numerator);
    let divisor_factor = BigUint::from(denominator);
    let mut scaled = BigUint::from(amount);
    let mut divisor = BigUint::from(1_u8);

    if numerator != denominator {
        for _ in 0..periods {
            scaled *= &factor;
            divisor *= &divisor_factor;
            if scaled >= (&divisor << I128_VALUE_BITS) {
                return Err(ContractError::ArithmeticOverflow);
            }
        }
    }

    let gross = scaled / divisor;
    i128::try_from(&gross).map_err(|_| ContractError::ArithmeticOverflow)
}

/// Number of whole compounding periods in `period_secs`.
#[inline]
pub fn periods_elapsed(period_secs: u64, frequency_secs: u64) -> Result<u64, ContractError> {
    period_secs
        .checked_div(frequency_secs)
        .ok_or(ContractError::DivisionByZero)
}

/// Checked `i128` addition.
#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::ArithmeticOverflow)
}

/// Checked `i128` subtraction.
#[inline]
pub fn sub_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_sub(b).ok_or(ContractError::ArithmeticOverflow)
}

/// Checked `u64` addition, used for unlock timestamps.
#[inline]
pub fn add_u64(a: u64, b: u64) -> Result<u64, ContractError> {
    a.checked_add(b).ok_or(ContractError::ArithmeticOverflow)
}
