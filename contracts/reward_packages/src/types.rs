use soroban_sdk::{contracttype, Address, Env, String};

// ─── Package terms ─────────────────────────────────────────────────────────

/// An admin-defined reward tier.
///
/// Field order is the stable order consumers of `get_package` expect.
/// Economic terms never change after creation; only `is_active` does.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Package {
    /// Display name. Not required to be unique.
    pub name: String,
    /// Deposits are rejected while false. Existing stakes are unaffected.
    pub is_active: bool,
    /// Seconds the principal stays locked after deposit.
    pub lock_time: u64,
    /// Seconds per compounding period.
    pub award_frequency: u64,
    /// Percentage added per period (1 = 1 %).
    pub reward_percentage: u32,
    /// Inclusive lower deposit bound.
    pub min_deposit: i128,
    /// Inclusive upper deposit bound.
    pub max_deposit: i128,
}

impl Package {
    /// Record returned for ids that were never created.
    pub fn zero(e: &Env) -> Self {
        Package {
            name: String::from_str(e, ""),
            is_active: false,
            lock_time: 0,
            award_frequency: 0,
            reward_percentage: 0,
            min_deposit: 0,
            max_deposit: 0,
        }
    }
}

// ─── Stake state ───────────────────────────────────────────────────────────

/// A holder's single deposit into one package.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Stake {
    pub package_id: u32,
    /// Principal currently staked.
    pub token_amount: i128,
    /// Ledger timestamp at deposit.
    pub lock_timestamp: u64,
}

/// Live view of a stake returned by `get_user_info`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserInfo {
    pub token_amount: i128,
    /// Reward accrued so far by whole compounding periods.
    pub current_reward: i128,
    pub unlock_timestamp: u64,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Contract admin address. Stored in `instance()`.
    Admin,
    /// Staked / rewarded token contract. Stored in `instance()`.
    Token,
    /// Number of packages ever created. Stored in `instance()`.
    PackageCount,
    /// Reward tokens funded but not yet promised to a stake. Stored in `instance()`.
    RewardReserve,
    /// Package terms by index. Stored in `persistent()`.
    Package(u32),
    /// Stake slot per (holder, package). Stored in `persistent()`.
    Stake(Address, u32),
}
