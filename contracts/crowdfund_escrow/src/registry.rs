//! # Campaign Registry
//!
//! Owns every campaign record for its full lifetime. Ids are handed out
//! sequentially from 0 and records are never deleted.

use soroban_sdk::{panic_with_error, Address, Env, String};

use crate::storage::{bump_instance, bump_persistent, DataKey};
use crate::types::{Campaign, CampaignConfig, CampaignState};
use crate::Error;

/// Atomically read and increment the campaign counter.
/// Returns the ID that should be used for the next campaign.
fn get_and_increment_campaign_id(env: &Env) -> u64 {
    bump_instance(env);
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&DataKey::CampaignCount, &(current + 1));
    current
}

/// Number of campaigns created so far.
pub fn count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

/// Validate and store a new campaign, returning its configuration.
///
/// The deadline is the current ledger timestamp plus `duration`.
pub fn create(env: &Env, creator: &Address, title: String, goal: i128, duration: u64) -> CampaignConfig {
    if goal <= 0 {
        panic_with_error!(env, Error::InvalidGoal);
    }
    if duration == 0 {
        panic_with_error!(env, Error::InvalidDuration);
    }
    let deadline = env
        .ledger()
        .timestamp()
        .checked_add(duration)
        .unwrap_or_else(|| panic_with_error!(env, Error::ArithmeticOverflow));

    let config = CampaignConfig {
        id: get_and_increment_campaign_id(env),
        creator: creator.clone(),
        title,
        goal,
        deadline,
    };

    let config_key = DataKey::CampConfig(config.id);
    env.storage().persistent().set(&config_key, &config);
    bump_persistent(env, &config_key);
    save_state(env, config.id, &CampaignState::default());

    config
}

/// Load only the immutable campaign configuration.
/// Panics with `Error::CampaignNotFound` for an unassigned id.
pub fn load_config(env: &Env, id: u64) -> CampaignConfig {
    let key = DataKey::CampConfig(id);
    let config: CampaignConfig = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::CampaignNotFound));
    bump_persistent(env, &key);
    config
}

/// Load only the mutable campaign state.
pub fn load_state(env: &Env, id: u64) -> CampaignState {
    let key = DataKey::CampState(id);
    let state: CampaignState = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::CampaignNotFound));
    bump_persistent(env, &key);
    state
}

/// Read config and state together. Every entry point that acts on a
/// campaign goes through here, so an unknown id fails before anything else.
pub fn load_pair(env: &Env, id: u64) -> (CampaignConfig, CampaignState) {
    let config = load_config(env, id);
    let state = load_state(env, id);
    (config, state)
}

/// Persist only the mutable state entry.
pub fn save_state(env: &Env, id: u64, state: &CampaignState) {
    let key = DataKey::CampState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

/// Reconstruct the public snapshot of a campaign.
pub fn get(env: &Env, id: u64) -> Campaign {
    let (config, state) = load_pair(env, id);
    Campaign::from_parts(config, state)
}

/// Add `amount` to the campaign's historical total and return the new total.
pub fn record_contribution(env: &Env, id: u64, state: &mut CampaignState, amount: i128) -> i128 {
    state.total_raised = state
        .total_raised
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(env, Error::ArithmeticOverflow));
    save_state(env, id, state);
    state.total_raised
}
