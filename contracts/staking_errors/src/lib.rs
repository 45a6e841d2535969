#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring and off-chain display.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `ContractError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup errors (codes 1-99).
    Initialization,
    /// Caller permission errors (codes 100-199).
    Authorization,
    /// Package lookup and deposit-term errors (codes 200-299).
    Package,
    /// Stake slot lifecycle errors (codes 300-399).
    Stake,
    /// Reward reserve errors (codes 400-499).
    RewardPool,
    /// Token collaborator errors (codes 500-599).
    Transfer,
    /// Integer math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum shared by the staking contracts.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Package
///   300 - 399 : Stake
///   400 - 499 : RewardPool
///   500 - 599 : Transfer
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller is not the designated administrator.
    NotAuthorized = 100,

    // --- Package (200-299) ---
    /// Package is disabled (or was never created) and takes no deposits.
    PackageNotActive = 200,

    /// Package id is not below the current package count.
    InvalidPackageId = 201,

    /// Deposit is below the package minimum.
    DepositTooSmall = 202,

    /// Deposit is above the package maximum.
    DepositTooBig = 203,

    /// Amount argument must be strictly positive (> 0).
    AmountMustBePositive = 204,

    // --- Stake (300-399) ---
    /// Holder already has a stake in this package.
    SlotOccupied = 300,

    /// Holder has no stake in this package.
    NoActiveStake = 301,

    /// Lock period of the stake has not yet elapsed.
    StillLocked = 302,

    // --- RewardPool (400-499) ---
    /// Reward reserve cannot cover the projected reward of a new stake.
    InsufficientRewardPool = 400,

    // --- Transfer (500-599) ---
    /// The token contract rejected a transfer.
    TransferFailed = 500,

    // --- Arithmetic (700-799) ---
    /// Result does not fit the numeric domain.
    ArithmeticOverflow = 700,

    /// Division by a zero divisor (e.g. a zero award frequency).
    DivisionByZero = 701,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }
            ContractError::NotAuthorized => ErrorCategory::Authorization,

            ContractError::PackageNotActive
            | ContractError::InvalidPackageId
            | ContractError::DepositTooSmall
            | ContractError::DepositTooBig
            | ContractError::AmountMustBePositive => ErrorCategory::Package,

            ContractError::SlotOccupied
            | ContractError::NoActiveStake
            | ContractError::StillLocked => ErrorCategory::Stake,

            ContractError::InsufficientRewardPool => ErrorCategory::RewardPool,

            ContractError::TransferFailed => ErrorCategory::Transfer,

            ContractError::ArithmeticOverflow | ContractError::DivisionByZero => {
                ErrorCategory::Arithmetic
            }
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract has already been initialized",
            ContractError::NotAuthorized => "Caller is not the owner",
            ContractError::PackageNotActive => "Package not active",
            ContractError::InvalidPackageId => "Id too high",
            ContractError::DepositTooSmall => "Deposit too small",
            ContractError::DepositTooBig => "Deposit too big",
            ContractError::AmountMustBePositive => "Amount must be strictly positive (> 0)",
            ContractError::SlotOccupied => "Package already in use by this address",
            ContractError::NoActiveStake => "Package not in use by this address",
            ContractError::StillLocked => "Stake still locked",
            ContractError::InsufficientRewardPool => "Not enough rewards on contract",
            ContractError::TransferFailed => "Token transfer failed",
            ContractError::ArithmeticOverflow => "Integer overflow in checked arithmetic",
            ContractError::DivisionByZero => "Division by zero",
        }
    }
}
