// ============================================================================
// POOL STATE SPECIFICATIONS
// ============================================================================
//
// Calls the contract entry points and checks reserves before and after.
//
// ============================================================================

use soroban_sdk::{Address, Env};

use cvlr_soroban_derive::rule;

use cvlr::asserts::{cvlr_assert, cvlr_assume};

use crate::invariants::{product_non_decreasing, reserves_non_negative};
use crate::KucoCoin;

/// RULE: A successful buy keeps k and pays exactly the quote
#[rule]
pub fn buy_preserves_product(env: Env, buyer: Address, amount_in: i128, deadline: u64) {
    cvlr_assume!(amount_in > 0);

    let before = KucoCoin::get_pool_reserves(env.clone());
    cvlr_assume!(before.has_liquidity());
    let quoted = KucoCoin::quote_buy(env.clone(), amount_in);

    if let Ok(out) = KucoCoin::buy(env.clone(), buyer.clone(), amount_in, 0, buyer, deadline) {
        let after = KucoCoin::get_pool_reserves(env.clone());
        cvlr_assert!(quoted == Ok(out));
        cvlr_assert!(reserves_non_negative(&after));
        cvlr_assert!(product_non_decreasing(&env, &before, &after));
    }
}

/// RULE: A successful sell keeps k
#[rule]
pub fn sell_preserves_product(env: Env, seller: Address, amount_in: i128, deadline: u64) {
    cvlr_assume!(amount_in > 0);

    let before = KucoCoin::get_pool_reserves(env.clone());
    cvlr_assume!(before.has_liquidity());

    if KucoCoin::sell(env.clone(), seller.clone(), amount_in, 0, seller, deadline).is_ok() {
        let after = KucoCoin::get_pool_reserves(env.clone());
        cvlr_assert!(reserves_non_negative(&after));
        cvlr_assert!(product_non_decreasing(&env, &before, &after));
    }
}

/// RULE: Sync leaves the token reserve equal to the contract's balance
#[rule]
pub fn sync_matches_balance(env: Env) {
    if let Ok(reserves) = KucoCoin::sync(env.clone()) {
        let held = KucoCoin::balance(env.clone(), env.current_contract_address());
        cvlr_assert!(reserves.reserve_token == held);
    }
}
