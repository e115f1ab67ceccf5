use crate::calendar::require_open_day_for_investing;
use crate::phase::current_phase;
use crate::storage::{get_balance, get_config, get_period_at, get_period_count, push_period};
use crate::token::{burn, move_balance};
use kuco_types::{KucoError, Phase, DEFAULT_CYCLE_LENGTH};
use soroban_sdk::{Address, Env, Symbol};

/// Record the current ledger time as the start of a period for `account`.
/// Once trading is final every report burns the feature fee.
///
/// # Returns
/// Fee charged
pub fn report_period(env: &Env, account: &Address) -> Result<i128, KucoError> {
    let config = get_config(env)?;
    require_open_day_for_investing(env, &config)?;

    let fee = if current_phase(env)? == Phase::Trading {
        config.feature_fee
    } else {
        0
    };
    burn(env, account, fee)?;

    let now = env.ledger().timestamp();
    push_period(env, account, now);

    env.events()
        .publish((Symbol::new(env, "period"), account.clone()), (now, fee));
    Ok(fee)
}

/// Estimated start of the next period from the first and last report.
///
/// No history -> None; one entry -> last + DEFAULT_CYCLE_LENGTH;
/// otherwise last + floor((last - first) / (count - 1)), the average gap
/// between consecutive entries.
pub fn next_period(count: u32, first: u64, last: u64) -> Option<u64> {
    match count {
        0 => None,
        1 => Some(last.saturating_add(DEFAULT_CYCLE_LENGTH)),
        _ => {
            let average_gap = last.saturating_sub(first) / (count as u64 - 1);
            Some(last.saturating_add(average_gap))
        }
    }
}

/// `next_period` for `account`, reading only the count and the two ends
pub fn forecast_next_period(env: &Env, account: &Address) -> Option<u64> {
    let count = get_period_count(env, account);
    if count == 0 {
        return None;
    }
    let first = get_period_at(env, account, 0)?;
    let last = get_period_at(env, account, count - 1)?;
    next_period(count, first, last)
}

/// Transfer that burns the feature fee on top of `amount`
pub fn make_trans_action(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), KucoError> {
    if amount < 0 {
        return Err(KucoError::InvalidAmount);
    }
    let fee = get_config(env)?.feature_fee;
    let required = amount
        .checked_add(fee)
        .ok_or(KucoError::ArithmeticOverflow)?;
    if get_balance(env, from) < required {
        return Err(KucoError::InsufficientFunds);
    }

    move_balance(env, from, to, amount)?;
    burn(env, from, fee)?;

    env.events().publish(
        (Symbol::new(env, "trans_act"), from.clone(), to.clone()),
        (amount, fee),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: u64 = 86_400;

    #[test]
    fn test_next_period_empty() {
        assert_eq!(next_period(0, 0, 0), None);
    }

    #[test]
    fn test_next_period_single_entry() {
        assert_eq!(next_period(1, 1_000, 1_000), Some(1_000 + DEFAULT_CYCLE_LENGTH));
    }

    #[test]
    fn test_next_period_average_gap() {
        // 0, 26 and 56 days: gaps of 26 and 30 average to 28
        assert_eq!(next_period(3, 0, 56 * DAY), Some(84 * DAY));
    }

    #[test]
    fn test_next_period_floors_average() {
        // 10, 20, 31: (31 - 10) / 2 = 10
        assert_eq!(next_period(3, 10, 31), Some(41));
    }

    #[test]
    fn test_next_period_same_timestamp() {
        // Reports within one ledger give a zero gap
        assert_eq!(next_period(2, 500, 500), Some(500));
    }
}
