use crate::calendar::require_open_day;
use crate::storage::{
    get_allowance, get_balance, get_total_supply, set_allowance, set_balance, set_total_supply,
};
use kuco_types::KucoError;
use soroban_sdk::{Address, Env, Symbol};

fn check_amount(amount: i128) -> Result<(), KucoError> {
    if amount < 0 {
        return Err(KucoError::InvalidAmount);
    }
    Ok(())
}

/// Credit `amount` new tokens to `to`
pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), KucoError> {
    check_amount(amount)?;
    if amount == 0 {
        return Ok(());
    }
    let balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(KucoError::ArithmeticOverflow)?;
    let supply = get_total_supply(env)
        .checked_add(amount)
        .ok_or(KucoError::ArithmeticOverflow)?;
    set_balance(env, to, balance);
    set_total_supply(env, supply);
    Ok(())
}

/// Destroy `amount` tokens held by `from`
pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), KucoError> {
    check_amount(amount)?;
    if amount == 0 {
        return Ok(());
    }
    let balance = get_balance(env, from);
    if balance < amount {
        return Err(KucoError::InsufficientFunds);
    }
    set_balance(env, from, balance - amount);
    set_total_supply(env, get_total_supply(env) - amount);
    Ok(())
}

/// Move tokens between two balances; total supply is unchanged
pub fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), KucoError> {
    check_amount(amount)?;
    let from_balance = get_balance(env, from);
    if from_balance < amount {
        return Err(KucoError::InsufficientFunds);
    }
    if from == to || amount == 0 {
        return Ok(());
    }
    let to_balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(KucoError::ArithmeticOverflow)?;
    set_balance(env, from, from_balance - amount);
    set_balance(env, to, to_balance);
    Ok(())
}

/// User-initiated transfer, blocked on the restricted weekday
pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), KucoError> {
    require_open_day(env)?;
    move_balance(env, from, to, amount)?;

    env.events().publish(
        (Symbol::new(env, "transfer"), from.clone(), to.clone()),
        amount,
    );
    Ok(())
}

pub fn approve(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), KucoError> {
    check_amount(amount)?;
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(KucoError::InvalidAmount);
    }
    set_allowance(env, from, spender, amount, expiration_ledger);

    env.events().publish(
        (Symbol::new(env, "approve"), from.clone(), spender.clone()),
        (amount, expiration_ledger),
    );
    Ok(())
}

/// Remaining allowance; expired approvals read as zero
pub fn allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    get_allowance(env, from, spender).amount
}

/// Spend `amount` of `from`'s tokens on behalf of `spender`
pub fn transfer_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), KucoError> {
    check_amount(amount)?;
    require_open_day(env)?;

    let allowance = get_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(KucoError::InsufficientAllowance);
    }

    move_balance(env, from, to, amount)?;
    if amount > 0 {
        set_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        );
    }

    env.events().publish(
        (Symbol::new(env, "transfer"), from.clone(), to.clone()),
        amount,
    );
    Ok(())
}
