use crate::calendar::require_open_day;
use crate::invariants::{
    deposit_ratio_preserved, output_below_spot, product_non_decreasing, reserves_non_negative,
    shares_backed,
};
use crate::phase::require_trading_started;
use crate::storage::{
    get_admin, get_balance, get_native_token, get_reserves, get_shares, get_total_shares,
    has_reserves, set_reserves, set_shares, set_total_shares,
};
use crate::token::{mint, move_balance};
use kuco_math::{
    liquidity_amounts, liquidity_to_mint, optimal_added_liquidity, sqrt_product, swap_output,
};
use kuco_types::{KucoError, LiquidityAdded, LiquidityRemoved, PoolReserves};
use soroban_sdk::{token, Address, Env, Symbol};

/// Fails with `DeadlineExpired` once the ledger time is past `deadline`
pub fn check_deadline(env: &Env, deadline: u64) -> Result<(), KucoError> {
    if env.ledger().timestamp() > deadline {
        return Err(KucoError::DeadlineExpired);
    }
    Ok(())
}

/// Move native currency through the native asset contract
pub fn transfer_native(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), KucoError> {
    if amount > 0 {
        let native = get_native_token(env)?;
        token::Client::new(env, &native).transfer(from, to, &amount);
    }
    Ok(())
}

fn checked_add(a: i128, b: i128) -> Result<i128, KucoError> {
    a.checked_add(b).ok_or(KucoError::ArithmeticOverflow)
}

/// Seed the pool. The token side is minted to the contract itself; the
/// native side is pulled from the admin. Bootstrap shares
/// floor(sqrt(token * native)) stay with the contract and cannot be withdrawn.
///
/// # Returns
/// Bootstrap shares minted
pub fn initialize(
    env: &Env,
    initial_liquidity_token: i128,
    initial_liquidity_native: i128,
) -> Result<i128, KucoError> {
    if has_reserves(env) {
        return Err(KucoError::AlreadyInitialized);
    }
    let admin = get_admin(env)?;
    admin.require_auth();

    if initial_liquidity_token <= 0 || initial_liquidity_native <= 0 {
        return Err(KucoError::InvalidAmount);
    }

    let pool = env.current_contract_address();
    let shares = sqrt_product(env, initial_liquidity_token, initial_liquidity_native)?;
    if shares <= 0 {
        return Err(KucoError::InsufficientLiquidity);
    }

    mint(env, &pool, initial_liquidity_token)?;
    set_reserves(
        env,
        &PoolReserves::new(initial_liquidity_token, initial_liquidity_native),
    );
    set_shares(env, &pool, shares);
    set_total_shares(env, shares);

    env.events().publish(
        (Symbol::new(env, "init"), admin.clone()),
        (initial_liquidity_token, initial_liquidity_native, shares),
    );

    transfer_native(env, &admin, &pool, initial_liquidity_native)?;
    Ok(shares)
}

/// Exact-input swap of native currency for tokens
///
/// # Returns
/// Tokens paid to `receiver`
pub fn buy(
    env: &Env,
    buyer: &Address,
    amount_in: i128,
    min_out: i128,
    receiver: &Address,
    deadline: u64,
) -> Result<i128, KucoError> {
    require_trading_started(env)?;
    require_open_day(env)?;
    check_deadline(env, deadline)?;

    let before = get_reserves(env)?;
    let amount_out = swap_output(env, before.reserve_native, before.reserve_token, amount_in)?;
    if amount_out < min_out {
        return Err(KucoError::SlippageExceeded);
    }
    if amount_out == 0 {
        return Err(KucoError::InsufficientLiquidity);
    }

    let after = PoolReserves::new(
        before.reserve_token - amount_out,
        checked_add(before.reserve_native, amount_in)?,
    );
    debug_assert!(output_below_spot(
        env,
        before.reserve_native,
        before.reserve_token,
        amount_in,
        amount_out
    ));
    debug_assert!(product_non_decreasing(env, &before, &after));
    set_reserves(env, &after);

    let pool = env.current_contract_address();
    move_balance(env, &pool, receiver, amount_out)?;

    env.events().publish(
        (Symbol::new(env, "buy"), buyer.clone(), receiver.clone()),
        (amount_in, amount_out),
    );

    transfer_native(env, buyer, &pool, amount_in)?;
    Ok(amount_out)
}

/// Exact-input swap of tokens for native currency
///
/// # Returns
/// Native currency paid to `receiver`
pub fn sell(
    env: &Env,
    seller: &Address,
    amount_in: i128,
    min_out: i128,
    receiver: &Address,
    deadline: u64,
) -> Result<i128, KucoError> {
    require_trading_started(env)?;
    require_open_day(env)?;
    check_deadline(env, deadline)?;

    let before = get_reserves(env)?;
    let amount_out = swap_output(env, before.reserve_token, before.reserve_native, amount_in)?;
    if amount_out < min_out {
        return Err(KucoError::SlippageExceeded);
    }
    if amount_out == 0 {
        return Err(KucoError::InsufficientLiquidity);
    }

    let after = PoolReserves::new(
        checked_add(before.reserve_token, amount_in)?,
        before.reserve_native - amount_out,
    );
    debug_assert!(output_below_spot(
        env,
        before.reserve_token,
        before.reserve_native,
        amount_in,
        amount_out
    ));
    debug_assert!(product_non_decreasing(env, &before, &after));

    let pool = env.current_contract_address();
    move_balance(env, seller, &pool, amount_in)?;
    set_reserves(env, &after);

    env.events().publish(
        (Symbol::new(env, "sell"), seller.clone(), receiver.clone()),
        (amount_in, amount_out),
    );

    transfer_native(env, &pool, receiver, amount_out)?;
    Ok(amount_out)
}

/// Ratio-preserving deposit. Only the used amounts leave the provider.
#[allow(clippy::too_many_arguments)]
pub fn add_liquidity(
    env: &Env,
    provider: &Address,
    desired_token: i128,
    desired_native: i128,
    min_token: i128,
    min_native: i128,
    receiver: &Address,
    deadline: u64,
) -> Result<LiquidityAdded, KucoError> {
    require_trading_started(env)?;
    check_deadline(env, deadline)?;

    let before = get_reserves(env)?;
    let (amount_token, amount_native) = optimal_added_liquidity(
        env,
        desired_token,
        desired_native,
        before.reserve_token,
        before.reserve_native,
    )?;
    if amount_token < min_token || amount_native < min_native {
        return Err(KucoError::SlippageExceeded);
    }

    let total_shares = get_total_shares(env);
    let shares = liquidity_to_mint(
        env,
        amount_token,
        amount_native,
        before.reserve_token,
        before.reserve_native,
        total_shares,
    )?;

    let pool = env.current_contract_address();
    move_balance(env, provider, &pool, amount_token)?;

    let after = PoolReserves::new(
        checked_add(before.reserve_token, amount_token)?,
        checked_add(before.reserve_native, amount_native)?,
    );
    debug_assert!(deposit_ratio_preserved(env, &before, &after));
    set_reserves(env, &after);
    set_shares(env, receiver, checked_add(get_shares(env, receiver), shares)?);
    set_total_shares(env, checked_add(total_shares, shares)?);

    env.events().publish(
        (Symbol::new(env, "add_liq"), provider.clone(), receiver.clone()),
        (amount_token, amount_native, shares),
    );

    transfer_native(env, provider, &pool, amount_native)?;
    Ok(LiquidityAdded {
        amount_token,
        amount_native,
        shares,
    })
}

/// Burn `shares` of `provider` and pay the proportional reserves to `receiver`
pub fn remove_liquidity(
    env: &Env,
    provider: &Address,
    shares: i128,
    min_token: i128,
    min_native: i128,
    receiver: &Address,
    deadline: u64,
) -> Result<LiquidityRemoved, KucoError> {
    require_trading_started(env)?;
    check_deadline(env, deadline)?;

    let provider_shares = get_shares(env, provider);
    if shares <= 0 || shares > provider_shares {
        return Err(KucoError::InsufficientLiquidity);
    }

    let before = get_reserves(env)?;
    let total_shares = get_total_shares(env);
    let (amount_token, amount_native) = liquidity_amounts(
        env,
        shares,
        before.reserve_token,
        before.reserve_native,
        total_shares,
    )?;
    if amount_token < min_token || amount_native < min_native {
        return Err(KucoError::SlippageExceeded);
    }

    let after = PoolReserves::new(
        before.reserve_token - amount_token,
        before.reserve_native - amount_native,
    );
    debug_assert!(reserves_non_negative(&after));
    debug_assert!(shares_backed(&after, total_shares - shares));

    set_shares(env, provider, provider_shares - shares);
    set_total_shares(env, total_shares - shares);
    set_reserves(env, &after);

    let pool = env.current_contract_address();
    move_balance(env, &pool, receiver, amount_token)?;

    env.events().publish(
        (Symbol::new(env, "rm_liq"), provider.clone(), receiver.clone()),
        (shares, amount_token, amount_native),
    );

    transfer_native(env, &pool, receiver, amount_native)?;
    Ok(LiquidityRemoved {
        amount_token,
        amount_native,
    })
}

/// Reconcile the reserve counters with what the contract actually holds
pub fn sync(env: &Env) -> Result<PoolReserves, KucoError> {
    if !has_reserves(env) {
        return Err(KucoError::NotInitialized);
    }
    let pool = env.current_contract_address();
    let native = get_native_token(env)?;

    let reserves = PoolReserves::new(
        get_balance(env, &pool),
        token::Client::new(env, &native).balance(&pool),
    );
    set_reserves(env, &reserves);

    env.events().publish(
        (Symbol::new(env, "sync"),),
        (reserves.reserve_token, reserves.reserve_native),
    );
    Ok(reserves)
}

/// Tokens a buy of `amount_in` native would return right now
pub fn quote_buy(env: &Env, amount_in: i128) -> Result<i128, KucoError> {
    let reserves = get_reserves(env)?;
    swap_output(env, reserves.reserve_native, reserves.reserve_token, amount_in)
}

/// Native currency a sell of `amount_in` tokens would return right now
pub fn quote_sell(env: &Env, amount_in: i128) -> Result<i128, KucoError> {
    let reserves = get_reserves(env)?;
    swap_output(env, reserves.reserve_token, reserves.reserve_native, amount_in)
}
