#![no_std]

mod calendar;
mod investment;
mod invariants;
mod period;
mod phase;
mod pool;
mod storage;
mod token;

#[cfg(feature = "certora")]
mod certora_specs;

use kuco_types::{
    KucoConfig, KucoError, LiquidityAdded, LiquidityRemoved, Phase, PoolReserves, TOKEN_DECIMALS,
    TOKEN_NAME, TOKEN_SYMBOL,
};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String, Vec};
use storage::{
    get_admin, get_config, get_invested, get_native_token, get_reserves, get_shares,
    get_total_shares, get_total_supply, set_construction,
};

#[contract]
pub struct KucoCoin;

#[contractimpl]
impl KucoCoin {
    /// Store the immutable deployment parameters
    ///
    /// # Arguments
    /// * `admin` - Account that seeds the pool with `initialize`
    /// * `native_token` - Asset contract of the native currency
    /// * `config` - Phase boundaries, investment factor and fees
    pub fn __constructor(env: Env, admin: Address, native_token: Address, config: KucoConfig) {
        if !config.is_valid() {
            panic_with_error!(&env, KucoError::InvalidConfig);
        }
        set_construction(&env, &admin, &native_token, &config);
    }

    // === Pool ===

    /// Seed the reserves; moves the contract from Uninitialized to Investment
    ///
    /// # Returns
    /// Protocol-owned bootstrap shares
    pub fn initialize(
        env: Env,
        initial_liquidity_token: i128,
        initial_liquidity_native: i128,
    ) -> Result<i128, KucoError> {
        pool::initialize(&env, initial_liquidity_token, initial_liquidity_native)
    }

    /// Swap exactly `amount_in` native for tokens paid to `receiver`
    pub fn buy(
        env: Env,
        buyer: Address,
        amount_in: i128,
        min_out: i128,
        receiver: Address,
        deadline: u64,
    ) -> Result<i128, KucoError> {
        buyer.require_auth();
        pool::buy(&env, &buyer, amount_in, min_out, &receiver, deadline)
    }

    /// Swap exactly `amount_in` tokens for native paid to `receiver`
    pub fn sell(
        env: Env,
        seller: Address,
        amount_in: i128,
        min_out: i128,
        receiver: Address,
        deadline: u64,
    ) -> Result<i128, KucoError> {
        seller.require_auth();
        pool::sell(&env, &seller, amount_in, min_out, &receiver, deadline)
    }

    /// Deposit both assets at the current ratio; shares go to `receiver`
    #[allow(clippy::too_many_arguments)]
    pub fn add_liquidity(
        env: Env,
        provider: Address,
        desired_token: i128,
        desired_native: i128,
        min_token: i128,
        min_native: i128,
        receiver: Address,
        deadline: u64,
    ) -> Result<LiquidityAdded, KucoError> {
        provider.require_auth();
        pool::add_liquidity(
            &env,
            &provider,
            desired_token,
            desired_native,
            min_token,
            min_native,
            &receiver,
            deadline,
        )
    }

    pub fn remove_liquidity(
        env: Env,
        provider: Address,
        shares: i128,
        min_token: i128,
        min_native: i128,
        receiver: Address,
        deadline: u64,
    ) -> Result<LiquidityRemoved, KucoError> {
        provider.require_auth();
        pool::remove_liquidity(
            &env, &provider, shares, min_token, min_native, &receiver, deadline,
        )
    }

    /// Reset the reserve counters to the balances the contract holds
    pub fn sync(env: Env) -> Result<PoolReserves, KucoError> {
        pool::sync(&env)
    }

    pub fn quote_buy(env: Env, amount_in: i128) -> Result<i128, KucoError> {
        pool::quote_buy(&env, amount_in)
    }

    pub fn quote_sell(env: Env, amount_in: i128) -> Result<i128, KucoError> {
        pool::quote_sell(&env, amount_in)
    }

    /// Zero reserves until the pool is initialized
    pub fn get_pool_reserves(env: Env) -> PoolReserves {
        get_reserves(&env).unwrap_or_default()
    }

    pub fn liquidity_of(env: Env, provider: Address) -> i128 {
        get_shares(&env, &provider)
    }

    pub fn total_liquidity(env: Env) -> i128 {
        get_total_shares(&env)
    }

    // === Investment ===

    /// Invest native currency on behalf of `receiver` (Investment phase)
    ///
    /// The record belongs to `receiver`: only `receiver` can later `claim` or `retract` it.
    pub fn invest(
        env: Env,
        investor: Address,
        receiver: Address,
        amount: i128,
    ) -> Result<(), KucoError> {
        investor.require_auth();
        investment::invest(&env, &investor, &receiver, amount)
    }

    /// Mint the investment reward of `investor` to `receiver` (Trading phase)
    pub fn claim(env: Env, investor: Address, receiver: Address) -> Result<i128, KucoError> {
        investor.require_auth();
        investment::claim(&env, &investor, &receiver)
    }

    /// Refund the investment of `investor`, less the retract fee (Retract phase)
    pub fn retract(env: Env, investor: Address, receiver: Address) -> Result<i128, KucoError> {
        investor.require_auth();
        investment::retract(&env, &investor, &receiver)
    }

    pub fn get_invested_nat_of(env: Env, account: Address) -> i128 {
        get_invested(&env, &account)
    }

    pub fn quote_claim(env: Env, account: Address) -> Result<i128, KucoError> {
        investment::quote_claim(&env, &account)
    }

    // === Feature meter ===

    /// Log the start of a period; charged the feature fee once trading is final
    pub fn report_period(env: Env, account: Address) -> Result<i128, KucoError> {
        account.require_auth();
        period::report_period(&env, &account)
    }

    /// Reported timestamps in report order, up to `limit` (max 50) from `start_index`
    pub fn get_period_history(
        env: Env,
        account: Address,
        start_index: u32,
        limit: u32,
    ) -> Vec<u64> {
        storage::get_periods_paginated(&env, &account, start_index, limit)
    }

    pub fn period_count(env: Env, account: Address) -> u32 {
        storage::get_period_count(&env, &account)
    }

    pub fn get_period_at(env: Env, account: Address, index: u32) -> Option<u64> {
        storage::get_period_at(&env, &account, index)
    }

    pub fn next_period(env: Env, account: Address) -> Option<u64> {
        period::forecast_next_period(&env, &account)
    }

    /// Transfer `amount` and burn the feature fee from `from`
    pub fn make_trans_action(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), KucoError> {
        from.require_auth();
        period::make_trans_action(&env, &from, &to, amount)
    }

    // === Token ===

    pub fn name(env: Env) -> String {
        String::from_str(&env, TOKEN_NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, TOKEN_SYMBOL)
    }

    pub fn decimals(_env: Env) -> u32 {
        TOKEN_DECIMALS
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::get_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), KucoError> {
        from.require_auth();
        token::transfer(&env, &from, &to, amount)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), KucoError> {
        from.require_auth();
        token::approve(&env, &from, &spender, amount, expiration_ledger)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        token::allowance(&env, &from, &spender)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), KucoError> {
        spender.require_auth();
        token::transfer_from(&env, &spender, &from, &to, amount)
    }

    // === View Functions ===

    pub fn get_config(env: Env) -> Result<KucoConfig, KucoError> {
        get_config(&env)
    }

    pub fn get_phase(env: Env) -> Result<Phase, KucoError> {
        phase::current_phase(&env)
    }

    pub fn admin(env: Env) -> Result<Address, KucoError> {
        get_admin(&env)
    }

    pub fn native_token(env: Env) -> Result<Address, KucoError> {
        get_native_token(&env)
    }

    pub fn trading_phase_start(env: Env) -> Result<u64, KucoError> {
        Ok(get_config(&env)?.trading_phase_start)
    }

    pub fn retract_phase_end(env: Env) -> Result<u64, KucoError> {
        Ok(get_config(&env)?.retract_phase_end)
    }

    pub fn investment_factor_bips(env: Env) -> Result<u32, KucoError> {
        Ok(get_config(&env)?.investment_factor_bips)
    }

    pub fn retract_fee_bips(env: Env) -> Result<u32, KucoError> {
        Ok(get_config(&env)?.retract_fee_bips)
    }

    pub fn feature_fee(env: Env) -> Result<i128, KucoError> {
        Ok(get_config(&env)?.feature_fee)
    }

    /// Whether the current ledger time falls on the restricted weekday
    pub fn is_restricted_day(env: Env) -> bool {
        calendar::is_restricted_day(env.ledger().timestamp())
    }
}
