//! Reward reserve accounting.
//!
//! The reserve counts reward tokens that were funded but are not yet promised
//! to any stake. A deposit moves its projected full reward out of the
//! reserve; the tokens themselves stay in the contract until withdrawal.

use crate::math;
use crate::types::DataKey;
use soroban_sdk::Env;
use staking_errors::ContractError;

pub fn available(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::RewardReserve)
        .unwrap_or(0)
}

pub fn fund(e: &Env, amount: i128) -> Result<i128, ContractError> {
    let reserve = math::add_i128(available(e), amount)?;
    set(e, reserve);
    Ok(reserve)
}

/// Promise `reward` to a new stake, failing if the reserve cannot cover it.
pub fn reserve(e: &Env, reward: i128) -> Result<(), ContractError> {
    let current = available(e);
    if current < reward {
        return Err(ContractError::InsufficientRewardPool);
    }
    set(e, math::sub_i128(current, reward)?);
    Ok(())
}

/// Undo a `reserve` whose deposit did not go through.
pub fn release(e: &Env, reward: i128) -> Result<(), ContractError> {
    set(e, math::add_i128(available(e), reward)?);
    Ok(())
}

fn set(e: &Env, reserve: i128) {
    e.storage().instance().set(&DataKey::RewardReserve, &reserve);
}
