// ============================================================================
// INVESTMENT LEDGER SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. invest moves only the native reserve
// 2. claim and retract zero the record, so at most one of them succeeds
// 3. retract never touches the token reserve
//
// ============================================================================

use soroban_sdk::{Address, Env};

use cvlr_soroban_derive::rule;

use cvlr::asserts::{cvlr_assert, cvlr_assume};

use crate::KucoCoin;

/// RULE: invest credits the receiver and grows only the native reserve
#[rule]
pub fn invest_grows_native_reserve(env: Env, investor: Address, receiver: Address, amount: i128) {
    cvlr_assume!(amount > 0);

    let before = KucoCoin::get_pool_reserves(env.clone());
    let record_before = KucoCoin::get_invested_nat_of(env.clone(), receiver.clone());

    if KucoCoin::invest(env.clone(), investor, receiver.clone(), amount).is_ok() {
        let after = KucoCoin::get_pool_reserves(env.clone());
        let record_after = KucoCoin::get_invested_nat_of(env.clone(), receiver);
        cvlr_assert!(after.reserve_token == before.reserve_token);
        cvlr_assert!(after.reserve_native == before.reserve_native + amount);
        cvlr_assert!(record_after == record_before + amount);
    }
}

/// RULE: claim zeroes the record and a second claim fails
#[rule]
pub fn claim_only_once(env: Env, investor: Address, receiver: Address) {
    if KucoCoin::claim(env.clone(), investor.clone(), receiver.clone()).is_ok() {
        cvlr_assert!(KucoCoin::get_invested_nat_of(env.clone(), investor.clone()) == 0);
        cvlr_assert!(KucoCoin::claim(env.clone(), investor.clone(), receiver.clone()).is_err());
        cvlr_assert!(KucoCoin::retract(env.clone(), investor, receiver).is_err());
    }
}

/// RULE: retract zeroes the record, keeps the token reserve and blocks claim
#[rule]
pub fn retract_excludes_claim(env: Env, investor: Address, receiver: Address) {
    let before = KucoCoin::get_pool_reserves(env.clone());

    if let Ok(refund) = KucoCoin::retract(env.clone(), investor.clone(), receiver.clone()) {
        let after = KucoCoin::get_pool_reserves(env.clone());
        cvlr_assert!(after.reserve_token == before.reserve_token);
        cvlr_assert!(after.reserve_native == before.reserve_native - refund);
        cvlr_assert!(KucoCoin::get_invested_nat_of(env.clone(), investor.clone()) == 0);
        cvlr_assert!(KucoCoin::claim(env.clone(), investor, receiver).is_err());
    }
}
