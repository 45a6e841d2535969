//! Tests for package creation, lookup and contract setup.

#![cfg(test)]

use crate::test_helpers::*;
use crate::types::Package;
use crate::{ContractError, RewardPackages, RewardPackagesClient};
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{Address, Env, FromVal, String, Symbol};

// ═══════════════════════════════════════════════════════════════════
// 1. Initialization
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_initialize_success() {
    let e = Env::default();
    e.mock_all_auths();
    let contract_id = e.register(RewardPackages, ());
    let client = RewardPackagesClient::new(&e, &contract_id);
    let admin = Address::generate(&e);
    let token = Address::generate(&e);
    client.initialize(&admin, &token);

    assert_eq!(client.get_admin(), admin);
    assert_eq!(client.get_token(), token);
    assert_eq!(client.package_count(), 0);
    assert_eq!(client.get_reward_reserve(), 0);
}

#[test]
fn test_initialize_twice_fails() {
    let e = Env::default();
    let s = setup(&e);
    let other = Address::generate(&e);
    assert_eq!(
        s.client.try_initialize(&other, &other),
        Err(Ok(ContractError::AlreadyInitialized))
    );
    assert_eq!(s.client.get_admin(), s.admin);
}

#[test]
fn test_queries_before_initialize_fail() {
    let e = Env::default();
    let contract_id = e.register(RewardPackages, ());
    let client = RewardPackagesClient::new(&e, &contract_id);
    assert_eq!(client.try_get_admin(), Err(Ok(ContractError::NotInitialized)));
    assert_eq!(client.try_get_token(), Err(Ok(ContractError::NotInitialized)));
}

#[test]
fn test_create_package_before_initialize_fails() {
    let e = Env::default();
    e.mock_all_auths();
    let contract_id = e.register(RewardPackages, ());
    let client = RewardPackagesClient::new(&e, &contract_id);
    let caller = Address::generate(&e);
    assert_eq!(
        client.try_create_package(&caller, &package1(&e)),
        Err(Ok(ContractError::NotInitialized))
    );
}

// ═══════════════════════════════════════════════════════════════════
// 2. Package creation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_create_packages_in_order() {
    let e = Env::default();
    let s = setup(&e);

    assert_eq!(s.client.create_package(&s.admin, &package1(&e)), 0);
    assert_eq!(s.client.create_package(&s.admin, &package2(&e)), 1);
    assert_eq!(s.client.package_count(), 2);

    assert_eq!(s.client.get_package(&0), package1(&e));
    assert_eq!(s.client.get_package(&1), package2(&e));
}

#[test]
fn test_get_nonexistent_package_is_zero_record() {
    let e = Env::default();
    let s = setup(&e);
    s.client.create_package(&s.admin, &package1(&e));
    s.client.create_package(&s.admin, &package2(&e));

    let missing = s.client.get_package(&2);
    assert_eq!(missing.name, String::from_str(&e, ""));
    assert_eq!(missing, Package::zero(&e));
    assert!(!missing.is_active);
    assert_eq!(s.client.get_package(&u32::MAX), Package::zero(&e));
}

#[test]
fn test_create_package_accepts_any_terms() {
    let e = Env::default();
    let s = setup(&e);
    let odd = Package {
        name: String::from_str(&e, "odd"),
        is_active: false,
        lock_time: 0,
        award_frequency: 0,
        reward_percentage: 0,
        min_deposit: 10,
        max_deposit: 1,
    };
    let id = s.client.create_package(&s.admin, &odd);
    assert_eq!(s.client.get_package(&id), odd);
}

#[test]
fn test_duplicate_names_allowed() {
    let e = Env::default();
    let s = setup(&e);
    s.client.create_package(&s.admin, &package1(&e));
    s.client.create_package(&s.admin, &package1(&e));
    assert_eq!(s.client.package_count(), 2);
    assert_eq!(s.client.get_package(&0).name, s.client.get_package(&1).name);
}

#[test]
fn test_get_packages_lists_all() {
    let e = Env::default();
    let s = setup(&e);
    assert_eq!(s.client.get_packages().len(), 0);
    s.client.create_package(&s.admin, &package1(&e));
    s.client.create_package(&s.admin, &package2(&e));

    let all = s.client.get_packages();
    assert_eq!(all.len(), 2);
    assert_eq!(all.get(1).unwrap(), package2(&e));
}

#[test]
fn test_create_package_not_owner_fails() {
    let e = Env::default();
    let s = setup(&e);
    let user1 = Address::generate(&e);
    assert_eq!(
        s.client.try_create_package(&user1, &package1(&e)),
        Err(Ok(ContractError::NotAuthorized))
    );
    assert_eq!(s.client.package_count(), 0);
}

#[test]
fn test_create_package_emits_event() {
    let e = Env::default();
    let s = setup(&e);
    s.client.create_package(&s.admin, &package1(&e));

    let events = e.events().all();
    let created = events
        .into_iter()
        .rev()
        .find(|ev| ev.0 == s.contract_id)
        .unwrap();

    let topic_name = Symbol::from_val(&e, &created.1.get(0).unwrap());
    assert_eq!(topic_name, Symbol::new(&e, "package_created"));
    assert_eq!(u32::from_val(&e, &created.2), 0);
}

// ═══════════════════════════════════════════════════════════════════
// 3. Admin hand-over
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_transfer_admin() {
    let e = Env::default();
    let s = setup(&e);
    let new_admin = Address::generate(&e);

    s.client.transfer_admin(&s.admin, &new_admin);
    assert_eq!(s.client.get_admin(), new_admin);

    assert_eq!(
        s.client.try_create_package(&s.admin, &package1(&e)),
        Err(Ok(ContractError::NotAuthorized))
    );
    assert_eq!(s.client.create_package(&new_admin, &package1(&e)), 0);
}

#[test]
fn test_transfer_admin_not_owner_fails() {
    let e = Env::default();
    let s = setup(&e);
    let intruder = Address::generate(&e);
    assert_eq!(
        s.client.try_transfer_admin(&intruder, &intruder),
        Err(Ok(ContractError::NotAuthorized))
    );
    assert_eq!(s.client.get_admin(), s.admin);
}
