#![no_std]

mod config;
mod error;
mod phase;
mod pool;

pub use config::*;
pub use error::*;
pub use phase::*;
pub use pool::*;

/// Basis-point denominator (1 bip = 1/10000)
pub const BIPS: u32 = 10_000;

/// Swap fee applied to the input amount: 0.3% (997/1000 is kept)
pub const SWAP_FEE_NUMERATOR: i128 = 997;
pub const SWAP_FEE_DENOMINATOR: i128 = 1000;

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;
pub const SECONDS_PER_WEEK: u64 = 7 * SECONDS_PER_DAY;

/// A timestamp that falls on the restricted weekday.
/// 1970-01-07 00:00:00 UTC, a Wednesday.
pub const RESTRICTED_DAY_ANCHOR: u64 = 6 * SECONDS_PER_DAY;

/// Cycle length assumed when an account has a single period on record
pub const DEFAULT_CYCLE_LENGTH: u64 = 28 * SECONDS_PER_DAY;

pub const TOKEN_NAME: &str = "KucoCoin";
pub const TOKEN_SYMBOL: &str = "KUCO";
pub const TOKEN_DECIMALS: u32 = 18;
