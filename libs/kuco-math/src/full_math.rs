use kuco_types::KucoError;
use soroban_sdk::{Env, I256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator
pub fn mul_div(env: &Env, a: i128, b: i128, denominator: i128) -> Result<i128, KucoError> {
    if a < 0 || b < 0 || denominator < 0 {
        return Err(KucoError::InvalidAmount);
    }
    if denominator == 0 {
        return Err(KucoError::DivisionByZero);
    }

    let product = I256::from_i128(env, a).mul(&I256::from_i128(env, b));
    let result = product.div(&I256::from_i128(env, denominator));

    i128_from_i256(&result)
}

/// Floor square root of a non-negative 256-bit value.
///
/// Newton (Babylonian) iteration started at the value itself. The estimate
/// decreases monotonically and the first non-decreasing step is
/// `floor(sqrt(value))`.
pub fn sqrt(env: &Env, value: &I256) -> Result<I256, KucoError> {
    let zero = I256::from_i32(env, 0);
    let one = I256::from_i32(env, 1);
    let two = I256::from_i32(env, 2);

    if *value < zero {
        return Err(KucoError::InvalidAmount);
    }
    if *value <= one {
        return Ok(value.clone());
    }

    let mut x = value.clone();
    let mut y = x.add(&one).div(&two);
    while y < x {
        x = y;
        y = x.add(&value.div(&x)).div(&two);
    }
    Ok(x)
}

/// floor(sqrt(a * b)) - geometric mean of two amounts
pub fn sqrt_product(env: &Env, a: i128, b: i128) -> Result<i128, KucoError> {
    if a < 0 || b < 0 {
        return Err(KucoError::InvalidAmount);
    }
    let product = I256::from_i128(env, a).mul(&I256::from_i128(env, b));
    i128_from_i256(&sqrt(env, &product)?)
}

/// Convert I256 to i128, erroring on overflow
pub fn i128_from_i256(value: &I256) -> Result<i128, KucoError> {
    value.to_i128().ok_or(KucoError::ArithmeticOverflow)
}
