use crate::calendar::require_open_day_for_investing;
use crate::phase::require_phase;
use crate::pool::transfer_native;
use crate::storage::{get_config, get_invested, get_reserves, set_invested, set_reserves};
use crate::token::mint;
use kuco_math::{retracted_from_invested, reward_from_invested};
use kuco_types::{KucoError, Phase};
use soroban_sdk::{Address, Env, Symbol};

/// Deposit native currency during the investment phase.
///
/// The deposit joins the native reserve immediately; the token reserve and
/// every balance stay untouched until the record is claimed.
pub fn invest(
    env: &Env,
    investor: &Address,
    receiver: &Address,
    amount: i128,
) -> Result<(), KucoError> {
    let config = get_config(env)?;
    require_phase(env, Phase::Investment)?;
    require_open_day_for_investing(env, &config)?;
    if amount <= 0 {
        return Err(KucoError::InvalidAmount);
    }

    let invested = get_invested(env, receiver)
        .checked_add(amount)
        .ok_or(KucoError::ArithmeticOverflow)?;
    let mut reserves = get_reserves(env)?;
    reserves.reserve_native = reserves
        .reserve_native
        .checked_add(amount)
        .ok_or(KucoError::ArithmeticOverflow)?;

    set_invested(env, receiver, invested);
    set_reserves(env, &reserves);

    env.events().publish(
        (Symbol::new(env, "invest"), investor.clone(), receiver.clone()),
        amount,
    );

    transfer_native(env, investor, &env.current_contract_address(), amount)
}

/// Reward `account` would receive if it claimed at the current reserves
pub fn quote_claim(env: &Env, account: &Address) -> Result<i128, KucoError> {
    let invested = get_invested(env, account);
    if invested == 0 {
        return Ok(0);
    }
    let config = get_config(env)?;
    let reserves = get_reserves(env)?;
    reward_from_invested(
        env,
        invested,
        reserves.reserve_token,
        reserves.reserve_native,
        config.investment_factor_bips,
    )
}

/// Convert an investment into freshly minted tokens once trading is final.
///
/// # Returns
/// Tokens minted to `receiver`
pub fn claim(env: &Env, investor: &Address, receiver: &Address) -> Result<i128, KucoError> {
    let invested = get_invested(env, investor);
    if invested == 0 {
        return Err(KucoError::NothingToClaim);
    }
    require_phase(env, Phase::Trading)?;

    let reward = quote_claim(env, investor)?;

    set_invested(env, investor, 0);
    mint(env, receiver, reward)?;

    env.events().publish(
        (Symbol::new(env, "claim"), investor.clone(), receiver.clone()),
        (invested, reward),
    );
    Ok(reward)
}

/// Undo an investment inside the retract window, less the retract fee.
///
/// # Returns
/// Native currency refunded to `receiver`
pub fn retract(env: &Env, investor: &Address, receiver: &Address) -> Result<i128, KucoError> {
    let invested = get_invested(env, investor);
    if invested == 0 {
        return Err(KucoError::NothingToClaim);
    }
    let config = get_config(env)?;
    require_phase(env, Phase::Retract)?;
    require_open_day_for_investing(env, &config)?;

    let refund = retracted_from_invested(invested, config.retract_fee_bips)?;
    let mut reserves = get_reserves(env)?;
    if refund > reserves.reserve_native {
        return Err(KucoError::InsufficientLiquidity);
    }
    reserves.reserve_native -= refund;

    set_invested(env, investor, 0);
    set_reserves(env, &reserves);

    env.events().publish(
        (Symbol::new(env, "retract"), investor.clone(), receiver.clone()),
        (invested, refund),
    );

    transfer_native(env, &env.current_contract_address(), receiver, refund)?;
    Ok(refund)
}
