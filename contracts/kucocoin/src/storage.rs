use kuco_types::{KucoConfig, KucoError, PoolReserves};
use soroban_sdk::{contracttype, Address, Env, Vec};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// Instance storage (shared TTL with the contract):
// - Admin, NativeToken, Config   written once by the constructor
// - Reserves                     present iff the pool has been initialized
// - TotalSupply, TotalShares     running totals of the two ledgers
//
// Persistent storage (one entry per account, removed when empty):
// - Balance, Shares, Invested
// - PeriodCount, PeriodAt       indexed period log (count + one entry per
//                               report), O(1) append, paginated reads
//
// Temporary storage:
// - Allowance                   expires with its `expiration_ledger`
// ============================================================================

/// Storage keys for the KucoCoin contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Account allowed to seed the pool (Instance storage)
    Admin,
    /// Native asset contract (Instance storage)
    NativeToken,
    /// Immutable construction parameters (Instance storage)
    Config,
    /// Pool reserves (Instance storage)
    Reserves,
    /// Sum of all token balances (Instance storage)
    TotalSupply,
    /// Sum of all liquidity shares (Instance storage)
    TotalShares,
    /// Token balance: account -> i128 (Persistent storage)
    Balance(Address),
    /// Liquidity shares: provider -> i128 (Persistent storage)
    Shares(Address),
    /// Invested native amount: account -> i128 (Persistent storage)
    Invested(Address),
    /// Number of periods reported by an account (Persistent storage)
    PeriodCount(Address),
    /// Period timestamp at index: (account, index) -> u64 (Persistent storage)
    PeriodAt(Address, u32),
    /// Allowance: (from, spender) -> AllowanceValue (Temporary storage)
    Allowance(AllowanceKey),
}

#[contracttype]
#[derive(Clone)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

fn get_persistent_amount(env: &Env, key: &DataKey) -> i128 {
    env.storage().persistent().get(key).unwrap_or(0)
}

fn set_persistent_amount(env: &Env, key: &DataKey, amount: i128) {
    if amount == 0 {
        // Remove empty entry
        env.storage().persistent().remove(key);
    } else {
        env.storage().persistent().set(key, &amount);
        extend_persistent_ttl(env, key);
    }
}

// === Construction parameters ===

pub fn get_admin(env: &Env) -> Result<Address, KucoError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(KucoError::NotInitialized)
}

pub fn get_native_token(env: &Env) -> Result<Address, KucoError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::NativeToken)
        .ok_or(KucoError::NotInitialized)
}

pub fn get_config(env: &Env) -> Result<KucoConfig, KucoError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(KucoError::NotInitialized)
}

pub fn set_construction(env: &Env, admin: &Address, native_token: &Address, config: &KucoConfig) {
    env.storage().instance().set(&DataKey::Admin, admin);
    env.storage().instance().set(&DataKey::NativeToken, native_token);
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Reserves ===

pub fn has_reserves(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Reserves)
}

pub fn get_reserves(env: &Env) -> Result<PoolReserves, KucoError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Reserves)
        .ok_or(KucoError::NotInitialized)
}

pub fn set_reserves(env: &Env, reserves: &PoolReserves) {
    env.storage().instance().set(&DataKey::Reserves, reserves);
    extend_instance_ttl(env);
}

// === Totals ===

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &total);
}

pub fn get_total_shares(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalShares)
        .unwrap_or(0)
}

pub fn set_total_shares(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalShares, &total);
}

// === Per-account amounts ===

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    get_persistent_amount(env, &DataKey::Balance(id.clone()))
}

pub fn set_balance(env: &Env, id: &Address, amount: i128) {
    set_persistent_amount(env, &DataKey::Balance(id.clone()), amount);
}

pub fn get_shares(env: &Env, provider: &Address) -> i128 {
    get_persistent_amount(env, &DataKey::Shares(provider.clone()))
}

pub fn set_shares(env: &Env, provider: &Address, shares: i128) {
    set_persistent_amount(env, &DataKey::Shares(provider.clone()), shares);
}

pub fn get_invested(env: &Env, account: &Address) -> i128 {
    get_persistent_amount(env, &DataKey::Invested(account.clone()))
}

pub fn set_invested(env: &Env, account: &Address, amount: i128) {
    set_persistent_amount(env, &DataKey::Invested(account.clone()), amount);
}

// === Period history ===

/// Maximum entries returned by one paginated read
pub const MAX_PERIOD_PAGE: u32 = 50;

pub fn get_period_count(env: &Env, account: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::PeriodCount(account.clone()))
        .unwrap_or(0)
}

pub fn get_period_at(env: &Env, account: &Address, index: u32) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::PeriodAt(account.clone(), index))
}

/// Append a period timestamp (O(1))
///
/// # Returns
/// New number of periods on record
pub fn push_period(env: &Env, account: &Address, timestamp: u64) -> u32 {
    let count = get_period_count(env, account);

    let at_key = DataKey::PeriodAt(account.clone(), count);
    env.storage().persistent().set(&at_key, &timestamp);
    extend_persistent_ttl(env, &at_key);

    let count_key = DataKey::PeriodCount(account.clone());
    env.storage().persistent().set(&count_key, &(count + 1));
    extend_persistent_ttl(env, &count_key);

    count + 1
}

/// Up to `limit` period timestamps starting at `start_index`, in report order.
/// `limit` is capped at MAX_PERIOD_PAGE to stay within read entry limits.
pub fn get_periods_paginated(env: &Env, account: &Address, start_index: u32, limit: u32) -> Vec<u64> {
    let safe_limit = limit.min(MAX_PERIOD_PAGE);
    let count = get_period_count(env, account);
    let end_index = start_index.saturating_add(safe_limit).min(count);

    let mut periods = Vec::new(env);
    for i in start_index..end_index {
        if let Some(timestamp) = get_period_at(env, account, i) {
            periods.push_back(timestamp);
        }
    }
    periods
}

// === Allowances ===

pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match env.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn set_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) {
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    let allowance = AllowanceValue {
        amount,
        expiration_ledger,
    };
    env.storage().temporary().set(&key, &allowance);

    if amount > 0 {
        let live_for = expiration_ledger.saturating_sub(env.ledger().sequence());
        env.storage()
            .temporary()
            .extend_ttl(&key, live_for, live_for);
    }
}
