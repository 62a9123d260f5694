//! # Access control
//!
//! Two kinds of authority exist in the escrow:
//!
//! ```text
//! Admin    ── pause / unpause intake, hand over administration
//! Creator  ── withdraw a successful campaign (per campaign)
//! ```
//!
//! Finalization is permissionless and refunds are gated only by the
//! contributor's own ledger record, so neither appears here.
//!
//! ## Threat model notes
//!
//! - The admin has no path to campaign funds. Pausing stops new campaigns
//!   and contributions but never finalization, withdrawal or refund.
//! - `init` can run once; there is no way to rebind the custody token or the
//!   reward contract afterwards.

use soroban_sdk::{panic_with_error, symbol_short, Address, Env};

use crate::storage;
use crate::types::{CampaignConfig, ProtocolConfig};
use crate::Error;

/// Write the protocol config. Panics with `Error::AlreadyInitialized` if
/// called again.
pub fn init(env: &Env, admin: &Address, token: &Address, rewards: &Address) {
    if storage::has_config(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
    storage::save_config(
        env,
        &ProtocolConfig {
            admin: admin.clone(),
            token: token.clone(),
            rewards: rewards.clone(),
        },
    );
    emit_admin_set(env, admin, None);
}

/// Hand administration from `current` to `new`.
///
/// - `current` must authorize and must be the admin.
/// - The previous admin loses every privilege immediately.
pub fn transfer_admin(env: &Env, current: &Address, new: &Address) {
    current.require_auth();
    let mut config = storage::load_config(env);
    require_admin(env, &config, current);

    config.admin = new.clone();
    storage::save_config(env, &config);
    emit_admin_set(env, new, Some(current.clone()));
}

// ─────────────────────────────────────────────────────────
// Access guards (called from lib.rs handlers)
// ─────────────────────────────────────────────────────────

/// Assert that `address` is the protocol admin.
#[inline]
pub fn require_admin(env: &Env, config: &ProtocolConfig, address: &Address) {
    if &config.admin != address {
        panic_with_error!(env, Error::Unauthorized);
    }
}

/// Assert that `address` created the campaign.
#[inline]
pub fn require_creator(env: &Env, campaign: &CampaignConfig, address: &Address) {
    if &campaign.creator != address {
        panic_with_error!(env, Error::Unauthorized);
    }
}

/// Topic: `(admin, new_admin)`. Data: `Option<previous_admin>`.
fn emit_admin_set(env: &Env, admin: &Address, previous: Option<Address>) {
    env.events()
        .publish((symbol_short!("admin"), admin.clone()), previous);
}
