//! Contract events. Topics lead with the event name; data carries amounts.

use crate::types::Stake;
use soroban_sdk::{Address, Env, Symbol};

pub fn emit_package_created(e: &Env, package_id: u32) {
    e.events()
        .publish((Symbol::new(e, "package_created"),), package_id);
}

pub fn emit_package_disabled(e: &Env, package_id: u32) {
    e.events()
        .publish((Symbol::new(e, "package_disabled"),), package_id);
}

pub fn emit_reward_pool_funded(e: &Env, admin: &Address, amount: i128, reserve: i128) {
    e.events().publish(
        (Symbol::new(e, "reward_pool_funded"), admin.clone()),
        (amount, reserve),
    );
}

pub fn emit_tokens_deposited(e: &Env, holder: &Address, stake: &Stake, projected_reward: i128) {
    e.events().publish(
        (
            Symbol::new(e, "tokens_deposited"),
            holder.clone(),
            stake.package_id,
        ),
        (stake.token_amount, projected_reward, stake.lock_timestamp),
    );
}

pub fn emit_tokens_withdrawn(e: &Env, holder: &Address, package_id: u32, amount: i128, reward: i128) {
    e.events().publish(
        (Symbol::new(e, "tokens_withdrawn"), holder.clone(), package_id),
        (amount, reward),
    );
}

pub fn emit_admin_transferred(e: &Env, previous: &Address, new_admin: &Address) {
    e.events().publish(
        (Symbol::new(e, "admin_transferred"),),
        (previous.clone(), new_admin.clone()),
    );
}
