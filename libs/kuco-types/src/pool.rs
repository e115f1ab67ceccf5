use soroban_sdk::contracttype;

/// Pool reserves - stored in Instance storage for frequent access
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolReserves {
    /// KUCO held by the pool (part of the contract's own balance)
    pub reserve_token: i128,
    /// Native currency held by the pool
    pub reserve_native: i128,
}

impl PoolReserves {
    pub fn new(reserve_token: i128, reserve_native: i128) -> Self {
        Self {
            reserve_token,
            reserve_native,
        }
    }

    pub fn has_liquidity(&self) -> bool {
        self.reserve_token > 0 && self.reserve_native > 0
    }
}

/// Result of a liquidity deposit
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityAdded {
    pub amount_token: i128,
    pub amount_native: i128,
    pub shares: i128,
}

/// Result of a liquidity withdrawal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityRemoved {
    pub amount_token: i128,
    pub amount_native: i128,
}
