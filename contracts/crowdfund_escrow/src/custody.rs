//! # Custody
//!
//! Moves the custody token in and out of this contract through the Stellar
//! Asset Contract interface. Transfers are atomic on the host: they either
//! fully apply or fail the enclosing invocation.

use soroban_sdk::{log, panic_with_error, token, Address, Env};

use crate::Error;

/// Pull `amount` from `from` into the contract. Any failure (missing auth,
/// insufficient balance) aborts the invocation before the caller mutates state.
pub fn pull(env: &Env, token: &Address, from: &Address, amount: i128) {
    token::Client::new(env, token).transfer(from, &env.current_contract_address(), &amount);
}

/// Pay `amount` out of custody to `to`.
///
/// Callers commit their payout guard before calling this. A failed transfer
/// at this point is not retried: it is logged and surfaced as
/// `Error::TransferFailed` for manual reconciliation.
pub fn pay_out(env: &Env, token: &Address, to: &Address, amount: i128) {
    let client = token::Client::new(env, token);
    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => {}
        _ => {
            log!(env, "payout transfer failed", to.clone(), amount);
            panic_with_error!(env, Error::TransferFailed);
        }
    }
}

/// Balance of the custody token currently held by the contract.
pub fn held(env: &Env, token: &Address) -> i128 {
    token::Client::new(env, token).balance(&env.current_contract_address())
}
