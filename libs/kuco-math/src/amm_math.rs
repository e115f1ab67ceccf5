use crate::full_math::{i128_from_i256, mul_div, sqrt_product};
use kuco_types::{KucoError, SWAP_FEE_DENOMINATOR, SWAP_FEE_NUMERATOR};
use soroban_sdk::{Env, I256};

/// Output amount for an exact-input swap against a constant-product pool.
///
/// amount_in_with_fee = amount_in * 997
/// amount_out = floor(amount_in_with_fee * reserve_out / (reserve_in * 1000 + amount_in_with_fee))
///
/// Always rounds down so the pool never pays out more than the curve allows.
///
/// # Arguments
/// * `reserve_in` - Reserve of the asset paid into the pool
/// * `reserve_out` - Reserve of the asset paid out
/// * `amount_in` - Exact input amount (must be positive)
pub fn swap_output(
    env: &Env,
    reserve_in: i128,
    reserve_out: i128,
    amount_in: i128,
) -> Result<i128, KucoError> {
    if amount_in <= 0 {
        return Err(KucoError::InvalidAmount);
    }
    if reserve_in <= 0 || reserve_out <= 0 {
        return Err(KucoError::ZeroLiquidity);
    }

    let amount_in_with_fee =
        I256::from_i128(env, amount_in).mul(&I256::from_i128(env, SWAP_FEE_NUMERATOR));
    let numerator = amount_in_with_fee.mul(&I256::from_i128(env, reserve_out));
    let denominator = I256::from_i128(env, reserve_in)
        .mul(&I256::from_i128(env, SWAP_FEE_DENOMINATOR))
        .add(&amount_in_with_fee);

    i128_from_i256(&numerator.div(&denominator))
}

/// Ratio-preserving deposit for the desired amounts.
///
/// If `desired_b` at the current price needs no more than `desired_a`, all of
/// `desired_b` is used; otherwise all of `desired_a` is used. An empty pool
/// takes the desired pair as-is.
///
/// # Returns
/// (used_a, used_b)
pub fn optimal_added_liquidity(
    env: &Env,
    desired_a: i128,
    desired_b: i128,
    reserve_a: i128,
    reserve_b: i128,
) -> Result<(i128, i128), KucoError> {
    if desired_a < 0 || desired_b < 0 {
        return Err(KucoError::InvalidAmount);
    }
    if reserve_a == 0 && reserve_b == 0 {
        return Ok((desired_a, desired_b));
    }
    if reserve_a <= 0 || reserve_b <= 0 {
        return Err(KucoError::ZeroLiquidity);
    }

    let exact_a = mul_div(env, desired_b, reserve_a, reserve_b)?;
    if exact_a <= desired_a {
        Ok((exact_a, desired_b))
    } else {
        let exact_b = mul_div(env, desired_a, reserve_b, reserve_a)?;
        Ok((desired_a, exact_b))
    }
}

/// Liquidity shares minted for a deposit of (added_a, added_b).
///
/// First deposit (no shares outstanding): floor(sqrt(added_a * added_b)).
/// Otherwise: min(added_a * total / reserve_a, added_b * total / reserve_b).
pub fn liquidity_to_mint(
    env: &Env,
    added_a: i128,
    added_b: i128,
    reserve_a: i128,
    reserve_b: i128,
    total_shares: i128,
) -> Result<i128, KucoError> {
    let shares = if total_shares == 0 {
        sqrt_product(env, added_a, added_b)?
    } else {
        if reserve_a <= 0 || reserve_b <= 0 {
            return Err(KucoError::ZeroLiquidity);
        }
        let shares_a = mul_div(env, added_a, total_shares, reserve_a)?;
        let shares_b = mul_div(env, added_b, total_shares, reserve_b)?;
        shares_a.min(shares_b)
    };

    if shares <= 0 {
        return Err(KucoError::InsufficientLiquidity);
    }
    Ok(shares)
}

/// Reserve amounts owed for burning `shares` out of `total_shares`.
///
/// # Returns
/// (amount_a, amount_b)
pub fn liquidity_amounts(
    env: &Env,
    shares: i128,
    reserve_a: i128,
    reserve_b: i128,
    total_shares: i128,
) -> Result<(i128, i128), KucoError> {
    if shares <= 0 || shares > total_shares {
        return Err(KucoError::InsufficientLiquidity);
    }
    let amount_a = mul_div(env, shares, reserve_a, total_shares)?;
    let amount_b = mul_div(env, shares, reserve_b, total_shares)?;
    Ok((amount_a, amount_b))
}
