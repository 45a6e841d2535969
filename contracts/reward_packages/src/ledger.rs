//! Per-(holder, package) stake slots.
//!
//! A slot is occupied exactly when its storage key is present. Deposits never
//! write a zero amount, so a present key always holds a non-zero stake.

use crate::types::{DataKey, Stake};
use crate::{BUMP_TARGET, BUMP_THRESHOLD};
use soroban_sdk::{Address, Env};
use staking_errors::ContractError;

pub fn load(e: &Env, holder: &Address, package_id: u32) -> Option<Stake> {
    let key = DataKey::Stake(holder.clone(), package_id);
    let storage = e.storage().persistent();
    let stake: Stake = storage.get(&key)?;
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    Some(stake)
}

/// Stake in the slot, or the zero-valued record when empty.
pub fn get_stake(e: &Env, holder: &Address, package_id: u32) -> Stake {
    load(e, holder, package_id).unwrap_or_default()
}

pub fn is_occupied(e: &Env, holder: &Address, package_id: u32) -> bool {
    e.storage()
        .persistent()
        .has(&DataKey::Stake(holder.clone(), package_id))
}

pub fn open_stake(
    e: &Env,
    holder: &Address,
    package_id: u32,
    amount: i128,
    timestamp: u64,
) -> Result<Stake, ContractError> {
    if is_occupied(e, holder, package_id) {
        return Err(ContractError::SlotOccupied);
    }
    let stake = Stake {
        package_id,
        token_amount: amount,
        lock_timestamp: timestamp,
    };
    save(e, holder, &stake);
    Ok(stake)
}

/// Empty the slot and hand back what it held.
pub fn close_stake(e: &Env, holder: &Address, package_id: u32) -> Result<Stake, ContractError> {
    let stake = load(e, holder, package_id).ok_or(ContractError::NoActiveStake)?;
    e.storage()
        .persistent()
        .remove(&DataKey::Stake(holder.clone(), package_id));
    Ok(stake)
}

/// Put back a stake removed by `close_stake` when its payout failed.
pub fn restore_stake(e: &Env, holder: &Address, stake: &Stake) {
    save(e, holder, stake);
}

fn save(e: &Env, holder: &Address, stake: &Stake) {
    let key = DataKey::Stake(holder.clone(), stake.package_id);
    e.storage().persistent().set(&key, stake);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}
