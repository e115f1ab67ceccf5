use soroban_sdk::contracterror;

/// Every failure a KucoCoin entry point can report.
///
/// Codes are part of the public interface and must stay stable.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum KucoError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Operation is not legal in the current phase
    PhaseViolation = 3,
    /// Balance cannot cover the amount (plus fee, where one applies)
    InsufficientFunds = 4,
    /// Investment record is empty: never invested, already claimed or retracted
    NothingToClaim = 5,
    /// Quoted minimum output was not met
    SlippageExceeded = 6,
    DeadlineExpired = 7,
    /// Operation is blocked on the restricted weekday
    WeekdayRestricted = 8,
    /// One of the pool reserves is zero
    ZeroLiquidity = 9,
    InvalidAmount = 10,
    ArithmeticOverflow = 11,
    DivisionByZero = 12,
    /// Share amount is zero, exceeds the holder's shares, or the pool cannot pay out
    InsufficientLiquidity = 13,
    InsufficientAllowance = 14,
    InvalidConfig = 15,
}
