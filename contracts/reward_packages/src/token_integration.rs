//! Token contract integration helpers.
//! Centralizes token configuration and transfer operations. Every transfer
//! goes through the `try_` client so a rejected transfer surfaces as
//! `TransferFailed` instead of aborting the invocation.

use crate::types::DataKey;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};
use staking_errors::ContractError;

pub fn set_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::Token, token);
}

/// @notice Returns the configured token address.
pub fn get_token(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(ContractError::NotInitialized)
}

fn token_client(e: &Env) -> Result<TokenClient<'_>, ContractError> {
    let token = get_token(e)?;
    Ok(TokenClient::new(e, &token))
}

/// @notice Pulls `amount` from `owner` into the contract.
/// @dev Requires prior approval with the contract as spender.
pub fn transfer_into_contract(e: &Env, owner: &Address, amount: i128) -> Result<(), ContractError> {
    let contract = e.current_contract_address();
    match token_client(e)?.try_transfer_from(&contract, owner, &contract, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::TransferFailed),
    }
}

/// @notice Pushes `amount` from the contract to `recipient`.
pub fn transfer_from_contract(
    e: &Env,
    recipient: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let contract = e.current_contract_address();
    match token_client(e)?.try_transfer(&contract, recipient, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::TransferFailed),
    }
}

/// @notice Token balance held by the contract (principal plus rewards).
pub fn contract_balance(e: &Env) -> Result<i128, ContractError> {
    let contract = e.current_contract_address();
    Ok(token_client(e)?.balance(&contract))
}
