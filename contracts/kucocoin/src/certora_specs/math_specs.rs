// ============================================================================
// MATH INVARIANT SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Swap output is below the spot price and keeps k
// 2. Rewards and refunds are monotonic in the invested amount
// 3. A retract never refunds more than was invested
//
// ============================================================================

use soroban_sdk::Env;

use cvlr_soroban_derive::rule;

use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

use kuco_types::{PoolReserves, BIPS};

use crate::invariants::{output_below_spot, product_non_decreasing};

/// RULE: Sanity check - swap_output is reachable
#[rule]
pub fn sanity_swap_output(env: Env, reserve_in: i128, reserve_out: i128, amount_in: i128) {
    cvlr_assume!(reserve_in > 0 && reserve_out > 0 && amount_in > 0);
    let _out = kuco_math::swap_output(&env, reserve_in, reserve_out, amount_in);
    cvlr_satisfy!(true);
}

/// RULE: Swap pays strictly less than spot and never shrinks k
#[rule]
pub fn swap_output_bounded(env: Env, reserve_token: i128, reserve_native: i128, amount_in: i128) {
    cvlr_assume!(reserve_token > 0 && reserve_native > 0 && amount_in > 0);
    cvlr_assume!(reserve_native <= i128::MAX - amount_in);

    if let Ok(out) = kuco_math::swap_output(&env, reserve_native, reserve_token, amount_in) {
        cvlr_assert!(out < reserve_token);
        cvlr_assert!(output_below_spot(
            &env,
            reserve_native,
            reserve_token,
            amount_in,
            out
        ));

        let before = PoolReserves::new(reserve_token, reserve_native);
        let after = PoolReserves::new(reserve_token - out, reserve_native + amount_in);
        cvlr_assert!(product_non_decreasing(&env, &before, &after));
    }
}

/// RULE: Larger investments never earn a smaller reward
#[rule]
pub fn reward_monotonic(
    env: Env,
    small: i128,
    large: i128,
    reserve_token: i128,
    reserve_native: i128,
    factor_bips: u32,
) {
    cvlr_assume!(small >= 0 && small <= large);
    cvlr_assume!(reserve_token >= 0 && reserve_native > 0);
    cvlr_assume!(factor_bips > 0);

    let r_small =
        kuco_math::reward_from_invested(&env, small, reserve_token, reserve_native, factor_bips);
    let r_large =
        kuco_math::reward_from_invested(&env, large, reserve_token, reserve_native, factor_bips);
    if let (Ok(a), Ok(b)) = (r_small, r_large) {
        cvlr_assert!(a <= b);
    }
}

/// RULE: Retract refund is bounded by the investment
#[rule]
pub fn retract_refund_bounded(invested: i128, fee_bips: u32) {
    cvlr_assume!(invested >= 0);
    cvlr_assume!(fee_bips <= BIPS);

    if let Ok(refund) = kuco_math::retracted_from_invested(invested, fee_bips) {
        cvlr_assert!(refund >= 0);
        cvlr_assert!(refund <= invested);
    }
}
