//! Append-only package registry.
//!
//! Packages are indexed from 0 in creation order and never removed. Reads of
//! an index that was never created yield `Package::zero` instead of an error;
//! existing consumers of `get_package` depend on that.

use crate::types::{DataKey, Package};
use crate::{BUMP_TARGET, BUMP_THRESHOLD};
use soroban_sdk::{Env, Vec};

pub fn count(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::PackageCount)
        .unwrap_or(0)
}

/// Append `package` and return its index.
pub fn create(e: &Env, package: &Package) -> u32 {
    let id = count(e);
    save(e, id, package);
    e.storage()
        .instance()
        .set(&DataKey::PackageCount, &(id + 1));
    id
}

/// Load `id` if it was ever created.
pub fn load(e: &Env, id: u32) -> Option<Package> {
    let key = DataKey::Package(id);
    let storage = e.storage().persistent();
    let package: Package = storage.get(&key)?;
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    Some(package)
}

/// Load `id`, falling back to the zero record.
pub fn get(e: &Env, id: u32) -> Package {
    load(e, id).unwrap_or_else(|| Package::zero(e))
}

/// Clear the activation flag. Returns `true` when a stored package changed.
pub fn disable(e: &Env, id: u32) -> bool {
    match load(e, id) {
        Some(mut package) if package.is_active => {
            package.is_active = false;
            save(e, id, &package);
            true
        }
        _ => false,
    }
}

pub fn all(e: &Env) -> Vec<Package> {
    let mut packages = Vec::new(e);
    for id in 0..count(e) {
        packages.push_back(get(e, id));
    }
    packages
}

fn save(e: &Env, id: u32, package: &Package) {
    let key = DataKey::Package(id);
    e.storage().persistent().set(&key, package);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}
