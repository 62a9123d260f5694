//! # Reward Token
//!
//! Non-transferable reward credit ledger. Credits are issued to contributors by
//! exactly one minter, normally the `crowdfund_escrow` contract, at a fixed
//! rate per unit contributed.
//!
//! | Phase     | Entry Point(s)                          |
//! |-----------|-----------------------------------------|
//! | Bootstrap | [`RewardToken::init`]                   |
//! | Issuance  | [`RewardToken::issue`]                  |
//! | Queries   | `balance`, `total_supply`, `minter`     |
//!
//! ## Minter capability
//!
//! The minter is written once by `init` and there is no entry point that
//! rebinds it. A redeploy is the only way to change who may issue credits.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, symbol_short, Address,
    Env,
};


const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    ArithmeticOverflow = 5,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// The single address allowed to issue credits (Instance).
    Minter,
    /// Sum of all issued credits (Instance).
    TotalSupply,
    /// Credit balance of an owner (Persistent).
    Balance(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardIssued {
    pub to: Address,
    pub base_amount: i128,
    pub minted: i128,
}

#[contract]
pub struct RewardToken;

#[contractimpl]
impl RewardToken {
    /// Bind the minter. Panics with `Error::AlreadyInitialized` on a second call.
    pub fn init(env: Env, minter: Address) {
        if env.storage().instance().has(&DataKey::Minter) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Minter, &minter);
        env.storage().instance().set(&DataKey::TotalSupply, &0i128);
        bump_instance(&env);
    }

    /// Credit `to` with `base_amount * rate` reward units and return the
    /// number of units minted.
    ///
    /// - `minter` must authorize and must be the address bound by `init`.
    /// - Overflow of the product, the balance or the supply fails closed.
    pub fn issue(env: Env, minter: Address, to: Address, base_amount: i128, rate: i128) -> i128 {
        minter.require_auth();

        let bound: Address = env
            .storage()
            .instance()
            .get(&DataKey::Minter)
            .unwrap_or_else(|| panic_with_error!(&env, Error::NotInitialized));
        if minter != bound {
            panic_with_error!(&env, Error::Unauthorized);
        }

        if base_amount <= 0 || rate <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let minted = base_amount
            .checked_mul(rate)
            .unwrap_or_else(|| panic_with_error!(&env, Error::ArithmeticOverflow));

        let balance = read_balance(&env, &to)
            .checked_add(minted)
            .unwrap_or_else(|| panic_with_error!(&env, Error::ArithmeticOverflow));
        let supply = read_total_supply(&env)
            .checked_add(minted)
            .unwrap_or_else(|| panic_with_error!(&env, Error::ArithmeticOverflow));

        write_balance(&env, &to, balance);
        env.storage().instance().set(&DataKey::TotalSupply, &supply);
        bump_instance(&env);

        env.events().publish(
            (symbol_short!("issued"), to.clone()),
            RewardIssued {
                to,
                base_amount,
                minted,
            },
        );

        minted
    }

    pub fn balance(env: Env, owner: Address) -> i128 {
        read_balance(&env, &owner)
    }

    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    /// The bound minter, or `None` before `init`.
    pub fn minter(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Minter)
    }
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

fn read_balance(env: &Env, owner: &Address) -> i128 {
    let key = DataKey::Balance(owner.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            env.storage().persistent().extend_ttl(
                &key,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
            balance
        }
        None => 0,
    }
}

fn write_balance(env: &Env, owner: &Address, balance: i128) {
    let key = DataKey::Balance(owner.clone());
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
