//! # Contribution Ledger
//!
//! Per-campaign map of contributor to cumulative contribution, stored under
//! `DataKey::Contribution(campaign_id, contributor)`. Records are only
//! reachable through a campaign id.

use soroban_sdk::{panic_with_error, Address, Env};

use crate::storage::{bump_persistent, DataKey};
use crate::Error;

fn record_key(campaign_id: u64, contributor: &Address) -> DataKey {
    DataKey::Contribution(campaign_id, contributor.clone())
}

/// Cumulative amount `contributor` has in `campaign_id`; 0 if no record.
pub fn get(env: &Env, campaign_id: u64, contributor: &Address) -> i128 {
    let key = record_key(campaign_id, contributor);
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(amount) => {
            bump_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

/// Increase the record by `amount` and return the new cumulative amount.
pub fn add(env: &Env, campaign_id: u64, contributor: &Address, amount: i128) -> i128 {
    let updated = get(env, campaign_id, contributor)
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(env, Error::ArithmeticOverflow));
    let key = record_key(campaign_id, contributor);
    env.storage().persistent().set(&key, &updated);
    bump_persistent(env, &key);
    updated
}

/// Zero the record and return what it held. Clearing an empty record is a no-op.
pub fn clear(env: &Env, campaign_id: u64, contributor: &Address) -> i128 {
    let previous = get(env, campaign_id, contributor);
    if previous != 0 {
        let key = record_key(campaign_id, contributor);
        env.storage().persistent().set(&key, &0i128);
        bump_persistent(env, &key);
    }
    previous
}
