//! Client side of the reward contract.
//!
//! The reward contract binds this contract as its only minter, so issuance
//! is authorised by the contract invoking it directly.

use soroban_sdk::{contractclient, Address, Env};

use crate::types::REWARD_RATE;

#[allow(dead_code)]
#[contractclient(name = "RewardIssuerClient")]
pub trait RewardIssuer {
    fn issue(env: Env, minter: Address, to: Address, base_amount: i128, rate: i128) -> i128;
}

/// Credit `to` for contributing `amount` and return the units minted.
pub fn issue_for_contribution(env: &Env, rewards: &Address, to: &Address, amount: i128) -> i128 {
    RewardIssuerClient::new(env, rewards).issue(
        &env.current_contract_address(),
        to,
        &amount,
        &REWARD_RATE,
    )
}
