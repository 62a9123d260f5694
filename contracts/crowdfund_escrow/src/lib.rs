//! # Crowdfund Escrow Contract
//!
//! Deadline-based crowdfunding with escrowed funds. Contributions are held
//! in custody until the campaign deadline passes; afterwards the campaign is
//! finalized once and exactly one payout path opens:
//!
//! | Outcome                 | Payout path                                    |
//! |-------------------------|------------------------------------------------|
//! | `total_raised >= goal`  | [`CrowdfundEscrow::withdraw_funds`] by creator |
//! | `total_raised < goal`   | [`CrowdfundEscrow::refund`] per contributor    |
//!
//! Every contribution also credits the contributor with reward units on the
//! reward contract, at [`REWARD_RATE`] units per token unit. Rewards are not
//! clawed back when a failed campaign refunds.
//!
//! | Phase        | Entry Point(s)                                           |
//! |--------------|----------------------------------------------------------|
//! | Bootstrap    | [`CrowdfundEscrow::init`]                                |
//! | Admin        | `transfer_admin`, `pause`, `unpause`                     |
//! | Registration | [`CrowdfundEscrow::create_campaign`]                     |
//! | Funding      | [`CrowdfundEscrow::contribute`]                          |
//! | Settlement   | `finalize_campaign`, `withdraw_funds`, `refund`          |
//! | Queries      | `get_campaign`, `get_user_contribution`, `get_campaign_status`, `campaign_count`, `custody_balance`, `get_config`, `is_paused` |
//!
//! ## Architecture
//!
//! Campaign records live in [`registry`], contribution records in [`ledger`],
//! token movement in [`custody`] and reward issuance in [`rewards`]. This
//! file holds the lifecycle rules that tie them together.
//!
//! ## Payout ordering
//!
//! Both payout paths commit their guard (`withdrawn`, or the cleared ledger
//! record) before the outbound transfer. A failed transfer is escalated as
//! `Error::TransferFailed` and is never retried by the contract. The host
//! reverts the whole invocation on that error, committed guard included, so
//! the payout stays claimable and a later call may pay it exactly once.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, Address, Env, String};

pub mod events;
mod access;
mod custody;
mod ledger;
mod registry;
mod rewards;
mod storage;
mod types;

#[cfg(test)]
mod test_events;

pub use rewards::{RewardIssuer, RewardIssuerClient};
pub use types::{Campaign, CampaignStatus, ProtocolConfig, REWARD_RATE};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    CampaignNotFound = 1,
    InvalidGoal = 2,
    InvalidDuration = 3,
    InvalidAmount = 4,
    CampaignEnded = 5,
    CampaignStillOpen = 6,
    AlreadyFinalized = 7,
    NotFinalized = 8,
    Unauthorized = 9,
    CampaignFailed = 10,
    CampaignSucceeded = 11,
    AlreadyWithdrawn = 12,
    NoContribution = 13,
    ArithmeticOverflow = 14,
    AlreadyInitialized = 15,
    NotInitialized = 16,
    TransferFailed = 17,
    ProtocolPaused = 18,
}

#[contract]
pub struct CrowdfundEscrow;

#[contractimpl]
impl CrowdfundEscrow {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Wire the contract to its custody token and reward contract.
    ///
    /// Must be called exactly once immediately after deployment. The reward
    /// contract must bind this contract's address as its minter.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    pub fn init(env: Env, admin: Address, token: Address, rewards: Address) {
        admin.require_auth();
        access::init(&env, &admin, &token, &rewards);
    }

    pub fn get_config(env: Env) -> ProtocolConfig {
        storage::load_config(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Administration
    // ─────────────────────────────────────────────────────────

    /// Hand administration to `new_admin`. `current_admin` must authorize.
    pub fn transfer_admin(env: Env, current_admin: Address, new_admin: Address) {
        access::transfer_admin(&env, &current_admin, &new_admin);
    }

    /// Stop new campaigns and contributions.
    ///
    /// Finalization, withdrawal and refunds stay available while paused.
    pub fn pause(env: Env, caller: Address) {
        caller.require_auth();
        let config = storage::load_config(&env);
        access::require_admin(&env, &config, &caller);
        storage::set_paused(&env, true);
        events::emit_protocol_paused(&env, caller);
    }

    pub fn unpause(env: Env, caller: Address) {
        caller.require_auth();
        let config = storage::load_config(&env);
        access::require_admin(&env, &config, &caller);
        storage::set_paused(&env, false);
        events::emit_protocol_unpaused(&env, caller);
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Campaign lifecycle
    // ─────────────────────────────────────────────────────────

    /// Open a campaign that accepts contributions for `duration` seconds.
    ///
    /// Returns the new campaign id. Ids are sequential from 0.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        title: String,
        goal: i128,
        duration: u64,
    ) -> u64 {
        Self::require_accepting(&env);
        creator.require_auth();

        let campaign = registry::create(&env, &creator, title, goal, duration);

        events::emit_campaign_created(&env, campaign.id, creator, goal, campaign.deadline);

        campaign.id
    }

    /// Contribute `amount` of the custody token to an open campaign.
    ///
    /// Returns the campaign's updated `total_raised`. The contributor is
    /// credited `amount * REWARD_RATE` reward units.
    pub fn contribute(env: Env, campaign_id: u64, contributor: Address, amount: i128) -> i128 {
        let config = Self::require_accepting(&env);
        contributor.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let (campaign, mut state) = registry::load_pair(&env, campaign_id);

        if env.ledger().timestamp() >= campaign.deadline {
            panic_with_error!(&env, Error::CampaignEnded);
        }

        // Custody first: a failed pull leaves nothing to undo.
        custody::pull(&env, &config.token, &contributor, amount);

        let total_raised = registry::record_contribution(&env, campaign_id, &mut state, amount);
        ledger::add(&env, campaign_id, &contributor, amount);

        let reward = rewards::issue_for_contribution(&env, &config.rewards, &contributor, amount);

        events::emit_contribution_made(&env, campaign_id, contributor, amount, reward);

        total_raised
    }

    /// Settle the outcome of a campaign whose deadline has passed.
    ///
    /// Callable by anyone. Returns `true` when the goal was reached. The
    /// outcome is fixed here and never recomputed.
    pub fn finalize_campaign(env: Env, campaign_id: u64) -> bool {
        let (campaign, mut state) = registry::load_pair(&env, campaign_id);

        if env.ledger().timestamp() < campaign.deadline {
            panic_with_error!(&env, Error::CampaignStillOpen);
        }
        if state.finalized {
            panic_with_error!(&env, Error::AlreadyFinalized);
        }

        state.finalized = true;
        state.successful = state.total_raised >= campaign.goal;
        registry::save_state(&env, campaign_id, &state);

        events::emit_campaign_finalized(&env, campaign_id, state.total_raised, state.successful);

        state.successful
    }

    /// Pay the full `total_raised` of a successful campaign to its creator.
    ///
    /// Returns the amount paid. Succeeds at most once per campaign.
    pub fn withdraw_funds(env: Env, campaign_id: u64, caller: Address) -> i128 {
        caller.require_auth();

        let (campaign, mut state) = registry::load_pair(&env, campaign_id);

        if !state.finalized {
            panic_with_error!(&env, Error::NotFinalized);
        }
        access::require_creator(&env, &campaign, &caller);
        if !state.successful {
            panic_with_error!(&env, Error::CampaignFailed);
        }
        if state.withdrawn {
            panic_with_error!(&env, Error::AlreadyWithdrawn);
        }

        state.withdrawn = true;
        registry::save_state(&env, campaign_id, &state);

        let config = storage::load_config(&env);
        let amount = state.total_raised;
        custody::pay_out(&env, &config.token, &campaign.creator, amount);

        events::emit_funds_withdrawn(&env, campaign_id, campaign.creator, amount);

        amount
    }

    /// Return the caller's full contribution to a failed campaign.
    ///
    /// Returns the amount refunded. A second call by the same contributor
    /// fails with `Error::NoContribution`.
    pub fn refund(env: Env, campaign_id: u64, contributor: Address) -> i128 {
        contributor.require_auth();

        let (_, mut state) = registry::load_pair(&env, campaign_id);

        if !state.finalized {
            panic_with_error!(&env, Error::NotFinalized);
        }
        if state.successful {
            panic_with_error!(&env, Error::CampaignSucceeded);
        }

        let amount = ledger::clear(&env, campaign_id, &contributor);
        if amount == 0 {
            panic_with_error!(&env, Error::NoContribution);
        }

        state.total_refunded = state
            .total_refunded
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, Error::ArithmeticOverflow));
        registry::save_state(&env, campaign_id, &state);

        let config = storage::load_config(&env);
        custody::pay_out(&env, &config.token, &contributor, amount);

        events::emit_contribution_refunded(&env, campaign_id, contributor, amount);

        amount
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn get_campaign(env: Env, campaign_id: u64) -> Campaign {
        registry::get(&env, campaign_id)
    }

    /// Cumulative contribution of `contributor`; 0 when there is none.
    pub fn get_user_contribution(env: Env, campaign_id: u64, contributor: Address) -> i128 {
        ledger::get(&env, campaign_id, &contributor)
    }

    pub fn get_campaign_status(env: Env, campaign_id: u64) -> CampaignStatus {
        let (campaign, state) = registry::load_pair(&env, campaign_id);
        CampaignStatus::derive(campaign.deadline, &state, env.ledger().timestamp())
    }

    pub fn campaign_count(env: Env) -> u64 {
        registry::count(&env)
    }

    /// Custody-token balance held by the contract across all campaigns.
    pub fn custody_balance(env: Env) -> i128 {
        let config = storage::load_config(&env);
        custody::held(&env, &config.token)
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    /// Load the config for an intake entry point, rejecting it while paused.
    fn require_accepting(env: &Env) -> ProtocolConfig {
        let config = storage::load_config(env);
        if storage::is_paused(env) {
            panic_with_error!(env, Error::ProtocolPaused);
        }
        config
    }
}
