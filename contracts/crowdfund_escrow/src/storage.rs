//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the escrow.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type             | Description                      |
//! |-----------------|------------------|----------------------------------|
//! | `Config`        | `ProtocolConfig` | Admin, custody token, rewards    |
//! | `Paused`        | `bool`           | Intake pause switch              |
//! | `CampaignCount` | `u64`            | Auto-increment campaign counter  |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                    | Type             | Description               |
//! |------------------------|------------------|---------------------------|
//! | `CampConfig(id)`       | `CampaignConfig` | Immutable configuration   |
//! | `CampState(id)`        | `CampaignState`  | Totals and phase flags    |
//! | `Contribution(id, a)`  | `i128`           | Cumulative contribution   |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! Campaign records are managed by [`crate::registry`] and contribution
//! records by [`crate::ledger`]; this module only owns keys and lifetimes.

use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::types::ProtocolConfig;
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Protocol wiring written by `init` (Instance).
    Config,
    /// Intake pause switch (Instance).
    Paused,
    /// Global auto-increment counter for campaign IDs (Instance).
    CampaignCount,
    /// Immutable campaign configuration keyed by ID (Persistent).
    CampConfig(u64),
    /// Mutable campaign state keyed by ID (Persistent).
    CampState(u64),
    /// Cumulative contribution of an address to a campaign (Persistent).
    Contribution(u64, Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

/// Load the protocol config. Panics with `Error::NotInitialized` before `init`.
pub fn load_config(env: &Env) -> ProtocolConfig {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn save_config(env: &Env, config: &ProtocolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key that is known to exist.
pub fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
