//! Admin capability checks.
//!
//! The caller is passed explicitly and compared with the stored admin, so any
//! address can be substituted as caller in tests.

use crate::types::DataKey;
use soroban_sdk::{Address, Env};
use staking_errors::ContractError;

pub fn get_admin(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
}

/// `caller` must authorize the invocation and be the stored admin.
pub fn require_admin(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if get_admin(e)? != *caller {
        return Err(ContractError::NotAuthorized);
    }
    Ok(())
}
