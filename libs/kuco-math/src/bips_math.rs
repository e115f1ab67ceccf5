use crate::full_math::i128_from_i256;
use kuco_types::{KucoError, BIPS};
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{Env, I256};

/// floor(value * bips / 10000)
pub fn apply_bips(value: i128, bips: u32) -> Result<i128, KucoError> {
    if value < 0 {
        return Err(KucoError::InvalidAmount);
    }
    value
        .fixed_mul_floor(bips as i128, BIPS as i128)
        .ok_or(KucoError::ArithmeticOverflow)
}

/// Token reward for an investment, priced at the given reserves.
///
/// reward = floor(invested * reserve_token * factor_bips / reserve_native / 10000)
///
/// Evaluated as a single 256-bit quotient, which equals the two-step floor.
pub fn reward_from_invested(
    env: &Env,
    invested: i128,
    reserve_token: i128,
    reserve_native: i128,
    factor_bips: u32,
) -> Result<i128, KucoError> {
    if invested < 0 || reserve_token < 0 {
        return Err(KucoError::InvalidAmount);
    }
    if reserve_native <= 0 {
        return Err(KucoError::ZeroLiquidity);
    }

    let numerator = I256::from_i128(env, invested)
        .mul(&I256::from_i128(env, reserve_token))
        .mul(&I256::from_i128(env, factor_bips as i128));
    let denominator =
        I256::from_i128(env, reserve_native).mul(&I256::from_i128(env, BIPS as i128));

    i128_from_i256(&numerator.div(&denominator))
}

/// Native amount refunded when retracting an investment.
///
/// refund = floor(invested * (10000 - retract_fee_bips) / 10000)
pub fn retracted_from_invested(invested: i128, retract_fee_bips: u32) -> Result<i128, KucoError> {
    if retract_fee_bips > BIPS {
        return Err(KucoError::InvalidConfig);
    }
    apply_bips(invested, BIPS - retract_fee_bips)
}
