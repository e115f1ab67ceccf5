// ============================================================================
// INVARIANTS MODULE
// ============================================================================
//
// Predicates over pool state that must hold around every mutation. Swaps and
// deposits assert them in debug builds; the certora rules reuse them.
//
// INVARIANT CATEGORIES:
//
// 1. RESERVE INVARIANTS
//    - Reserves never go negative
//    - reserve_token * reserve_native never decreases across a swap
//
// 2. PRICE INVARIANTS
//    - A swap pays out strictly less than the spot price
//    - A deposit keeps the reserve ratio (up to one unit of rounding)
//
// 3. CONSERVATION INVARIANTS
//    - Shares exist iff the pool holds both assets
//
// ============================================================================

use kuco_types::PoolReserves;
use soroban_sdk::{Env, I256};

// ============================================================================
// RESERVE INVARIANTS
// ============================================================================

/// Invariant: reserves are non-negative
///
/// Property:
///   reserve_token >= 0 && reserve_native >= 0
pub fn reserves_non_negative(reserves: &PoolReserves) -> bool {
    reserves.reserve_token >= 0 && reserves.reserve_native >= 0
}

/// Invariant: constant product never decreases across a swap
///
/// Property:
///   after.reserve_token * after.reserve_native >= before.reserve_token * before.reserve_native
///
/// The fee stays in the pool, so k grows slightly with every trade.
pub fn product_non_decreasing(env: &Env, before: &PoolReserves, after: &PoolReserves) -> bool {
    let k_before = I256::from_i128(env, before.reserve_token)
        .mul(&I256::from_i128(env, before.reserve_native));
    let k_after = I256::from_i128(env, after.reserve_token)
        .mul(&I256::from_i128(env, after.reserve_native));
    k_after >= k_before
}

// ============================================================================
// PRICE INVARIANTS
// ============================================================================

/// Invariant: swap output is strictly below the spot price
///
/// Property:
///   amount_out * reserve_in < amount_in * reserve_out
pub fn output_below_spot(
    env: &Env,
    reserve_in: i128,
    reserve_out: i128,
    amount_in: i128,
    amount_out: i128,
) -> bool {
    let paid = I256::from_i128(env, amount_out).mul(&I256::from_i128(env, reserve_in));
    let spot = I256::from_i128(env, amount_in).mul(&I256::from_i128(env, reserve_out));
    paid < spot
}

/// Invariant: a deposit preserves the reserve ratio
///
/// Property:
///   |after.token * before.native - after.native * before.token| < max(before.token, before.native)
///
/// The bound is the rounding of the floored optimal amount.
pub fn deposit_ratio_preserved(env: &Env, before: &PoolReserves, after: &PoolReserves) -> bool {
    let lhs = I256::from_i128(env, after.reserve_token)
        .mul(&I256::from_i128(env, before.reserve_native));
    let rhs = I256::from_i128(env, after.reserve_native)
        .mul(&I256::from_i128(env, before.reserve_token));
    let diff = if lhs >= rhs { lhs.sub(&rhs) } else { rhs.sub(&lhs) };
    let bound = before.reserve_token.max(before.reserve_native);
    diff < I256::from_i128(env, bound)
}

// ============================================================================
// CONSERVATION INVARIANTS
// ============================================================================

/// Invariant: liquidity shares are backed by both reserves
///
/// Property:
///   total_shares > 0  =>  reserve_token > 0 && reserve_native > 0
pub fn shares_backed(reserves: &PoolReserves, total_shares: i128) -> bool {
    total_shares == 0 || reserves.has_liquidity()
}
