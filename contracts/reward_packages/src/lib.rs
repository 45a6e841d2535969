//! Reward Packages Contract
//!
//! Time-locked token staking with admin-defined reward packages. A holder
//! deposits principal into a package, the principal compounds once per
//! `award_frequency` at `reward_percentage` for the package's `lock_time`, and
//! after the lock the holder withdraws principal plus reward in one transfer.
//!
//! ## Storage Layout
//!
//! | Key                         | Tier           | Lifecycle        |
//! |-----------------------------|----------------|------------------|
//! | `DataKey::Admin`            | `instance()`   | Entire contract  |
//! | `DataKey::Token`            | `instance()`   | Entire contract  |
//! | `DataKey::PackageCount`     | `instance()`   | Entire contract  |
//! | `DataKey::RewardReserve`    | `instance()`   | Entire contract  |
//! | `DataKey::Package(id)`      | `persistent()` | Entire contract  |
//! | `DataKey::Stake(addr, id)`  | `persistent()` | Deposit→withdraw |
//!
//! ## Key design decisions
//!
//! - **One stake per (holder, package)**: a second deposit into an occupied
//!   slot is rejected, never merged.
//! - **Solvency before admission**: a deposit must find its full projected
//!   reward in the reserve, and that reward is set aside at deposit time.
//! - **All-or-nothing**: if a token transfer fails, ledger and reserve writes
//!   made by the same call are undone before `TransferFailed` is returned.
//! - **Integer-only rewards**: see `reward.rs`.

#![no_std]

mod access_control;
mod events;
mod ledger;
pub mod math;
mod pool;
mod registry;
pub mod reward;
mod token_integration;
pub mod types;

pub use staking_errors::{ContractError, ErrorCategory, ErrorExt};
pub use types::{Package, Stake, UserInfo};

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};


#[cfg(test)]
mod test_create_package;

// ─── TTL constants ────────────────────────────────────────────────────────────

/// Minimum ledger sequence TTL before a bump is requested (~1 day at 5 s/ledger).
pub(crate) const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
pub(crate) const BUMP_TARGET: u32 = 518_400;

// ─── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct RewardPackages;

#[contractimpl]
impl RewardPackages {
    // ── Admin setup ──────────────────────────────────────────────────────────

    /// One-time initialization. Stores `admin` and the staked `token`.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - called a second time
    pub fn initialize(e: Env, admin: Address, token: Address) -> Result<(), ContractError> {
        if access_control::get_admin(&e).is_ok() {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();
        access_control::set_admin(&e, &admin);
        token_integration::set_token(&e, &token);
        Ok(())
    }

    /// Hand administration over to `new_admin`.
    pub fn transfer_admin(e: Env, admin: Address, new_admin: Address) -> Result<(), ContractError> {
        access_control::require_admin(&e, &admin)?;
        access_control::set_admin(&e, &new_admin);
        events::emit_admin_transferred(&e, &admin, &new_admin);
        Ok(())
    }

    pub fn get_admin(e: Env) -> Result<Address, ContractError> {
        access_control::get_admin(&e)
    }

    pub fn get_token(e: Env) -> Result<Address, ContractError> {
        token_integration::get_token(&e)
    }

    // ── Package registry ─────────────────────────────────────────────────────

    /// Append a new package and return its index.
    ///
    /// Terms are stored as given; bounds are only enforced at deposit time.
    ///
    /// # Errors
    /// * `NotAuthorized` - `admin` is not the stored admin
    pub fn create_package(e: Env, admin: Address, package: Package) -> Result<u32, ContractError> {
        access_control::require_admin(&e, &admin)?;
        let id = registry::create(&e, &package);
        events::emit_package_created(&e, id);
        Ok(id)
    }

    /// Stop accepting deposits into `package_id`.
    ///
    /// Disabling an inactive or never-created package is a no-op.
    ///
    /// # Errors
    /// * `NotAuthorized` - `admin` is not the stored admin
    pub fn disable_package(e: Env, admin: Address, package_id: u32) -> Result<(), ContractError> {
        access_control::require_admin(&e, &admin)?;
        if registry::disable(&e, package_id) {
            events::emit_package_disabled(&e, package_id);
        }
        Ok(())
    }

    /// Package terms, or the zero-valued record for an unknown id.
    pub fn get_package(e: Env, package_id: u32) -> Package {
        registry::get(&e, package_id)
    }

    pub fn get_packages(e: Env) -> Vec<Package> {
        registry::all(&e)
    }

    pub fn package_count(e: Env) -> u32 {
        registry::count(&e)
    }

    // ── Reward pool ──────────────────────────────────────────────────────────

    /// Pull `amount` reward tokens from `admin` into the reserve.
    /// Returns the reserve after funding.
    ///
    /// # Errors
    /// * `NotAuthorized` - `admin` is not the stored admin
    /// * `AmountMustBePositive` - `amount <= 0`
    /// * `TransferFailed` - the token contract rejected the pull
    pub fn fund_reward_pool(e: Env, admin: Address, amount: i128) -> Result<i128, ContractError> {
        access_control::require_admin(&e, &admin)?;
        if amount <= 0 {
            return Err(ContractError::AmountMustBePositive);
        }
        token_integration::transfer_into_contract(&e, &admin, amount)?;
        let reserve = pool::fund(&e, amount)?;
        events::emit_reward_pool_funded(&e, &admin, amount, reserve);
        Ok(reserve)
    }

    /// Reward tokens still free to back new stakes.
    pub fn get_reward_reserve(e: Env) -> i128 {
        pool::available(&e)
    }

    /// Tokens held by the contract: staked principal plus all funded rewards.
    pub fn get_pool_balance(e: Env) -> Result<i128, ContractError> {
        token_integration::contract_balance(&e)
    }

    // ── Stake lifecycle ──────────────────────────────────────────────────────

    /// Stake `amount` into `package_id`.
    ///
    /// A zero amount is refused even when the package allows
    /// `min_deposit == 0`, so a stored stake is never empty.
    ///
    /// # Errors
    /// * `PackageNotActive` - package disabled or never created
    /// * `DepositTooSmall` / `DepositTooBig` - outside `[min_deposit, max_deposit]`
    /// * `AmountMustBePositive` - `amount <= 0`
    /// * `InsufficientRewardPool` - reserve below the projected full reward
    /// * `SlotOccupied` - `holder` already staked in this package
    /// * `TransferFailed` - principal could not be pulled from `holder`
    pub fn deposit(
        e: Env,
        holder: Address,
        package_id: u32,
        amount: i128,
    ) -> Result<Stake, ContractError> {
        holder.require_auth();

        let package = registry::get(&e, package_id);
        if !package.is_active {
            return Err(ContractError::PackageNotActive);
        }
        if amount < package.min_deposit {
            return Err(ContractError::DepositTooSmall);
        }
        if amount > package.max_deposit {
            return Err(ContractError::DepositTooBig);
        }
        if amount <= 0 {
            return Err(ContractError::AmountMustBePositive);
        }

        let now = e.ledger().timestamp();
        let projected = reward::compute_full_reward(
            &Stake {
                package_id,
                token_amount: amount,
                lock_timestamp: now,
            },
            &package,
        )?;
        if pool::available(&e) < projected {
            return Err(ContractError::InsufficientRewardPool);
        }

        let stake = ledger::open_stake(&e, &holder, package_id, amount, now)?;
        pool::reserve(&e, projected)?;

        if let Err(err) = token_integration::transfer_into_contract(&e, &holder, amount) {
            ledger::close_stake(&e, &holder, package_id)?;
            pool::release(&e, projected)?;
            return Err(err);
        }

        events::emit_tokens_deposited(&e, &holder, &stake, projected);
        Ok(stake)
    }

    /// Withdraw principal plus full reward once the lock has elapsed.
    /// Returns the total paid out.
    ///
    /// # Errors
    /// * `InvalidPackageId` - `package_id >= package_count`
    /// * `NoActiveStake` - `holder` has no stake in this package
    /// * `StillLocked` - `now < lock_timestamp + lock_time`
    /// * `TransferFailed` - payout rejected by the token contract
    pub fn withdraw(e: Env, holder: Address, package_id: u32) -> Result<i128, ContractError> {
        holder.require_auth();

        if package_id >= registry::count(&e) {
            return Err(ContractError::InvalidPackageId);
        }
        let stake = ledger::load(&e, &holder, package_id).ok_or(ContractError::NoActiveStake)?;
        let package = registry::get(&e, package_id);

        let unlock = math::add_u64(stake.lock_timestamp, package.lock_time)?;
        if e.ledger().timestamp() < unlock {
            return Err(ContractError::StillLocked);
        }

        let reward = reward::compute_full_reward(&stake, &package)?;
        let payout = math::add_i128(stake.token_amount, reward)?;

        // Clear the slot before the outgoing transfer.
        let closed = ledger::close_stake(&e, &holder, package_id)?;
        if let Err(err) = token_integration::transfer_from_contract(&e, &holder, payout) {
            ledger::restore_stake(&e, &holder, &closed);
            return Err(err);
        }

        events::emit_tokens_withdrawn(&e, &holder, package_id, stake.token_amount, reward);
        Ok(payout)
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// Stake held by `holder` in `package_id`; zero-valued when empty.
    pub fn get_stake(e: Env, holder: Address, package_id: u32) -> Stake {
        ledger::get_stake(&e, &holder, package_id)
    }

    /// Staked amount, reward accrued so far and unlock time.
    ///
    /// # Errors
    /// * `InvalidPackageId` - `package_id >= package_count`
    pub fn get_user_info(
        e: Env,
        holder: Address,
        package_id: u32,
    ) -> Result<UserInfo, ContractError> {
        if package_id >= registry::count(&e) {
            return Err(ContractError::InvalidPackageId);
        }
        let package = registry::get(&e, package_id);
        let (stake, current_reward) = match ledger::load(&e, &holder, package_id) {
            Some(stake) => {
                let elapsed = e.ledger().timestamp().saturating_sub(stake.lock_timestamp);
                let current_reward = reward::compute_reward(&stake, &package, elapsed)?;
                (stake, current_reward)
            }
            None => (Stake::default(), 0),
        };

        Ok(UserInfo {
            token_amount: stake.token_amount,
            current_reward,
            unlock_timestamp: math::add_u64(stake.lock_timestamp, package.lock_time)?,
        })
    }

    /// Full-lock reward for an arbitrary stake record under its package.
    pub fn calculate_reward(e: Env, stake: Stake) -> Result<i128, ContractError> {
        let package = registry::get(&e, stake.package_id);
        reward::compute_full_reward(&stake, &package)
    }

    /// Reward an arbitrary stake record would accrue over `period_secs`.
    pub fn calculate_reward_for_period(
        e: Env,
        stake: Stake,
        period_secs: u64,
    ) -> Result<i128, ContractError> {
        let package = registry::get(&e, stake.package_id);
        reward::compute_reward(&stake, &package, period_secs)
    }
}
