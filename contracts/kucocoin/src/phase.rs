use crate::storage::{get_config, has_reserves};
use kuco_types::{KucoConfig, KucoError, Phase};
use soroban_sdk::Env;

/// Phase of the contract at `now`.
///
/// Uninitialized until the pool is seeded, then purely a function of time:
///   now <  trading_phase_start                      -> Investment
///   trading_phase_start <= now < retract_phase_end  -> Retract
///   now >= retract_phase_end                        -> Trading
pub fn phase_at(now: u64, initialized: bool, config: &KucoConfig) -> Phase {
    if !initialized {
        Phase::Uninitialized
    } else if now < config.trading_phase_start {
        Phase::Investment
    } else if now < config.retract_phase_end {
        Phase::Retract
    } else {
        Phase::Trading
    }
}

pub fn current_phase(env: &Env) -> Result<Phase, KucoError> {
    let config = get_config(env)?;
    Ok(phase_at(env.ledger().timestamp(), has_reserves(env), &config))
}

/// Fails with `PhaseViolation` unless the contract is in `expected`
pub fn require_phase(env: &Env, expected: Phase) -> Result<(), KucoError> {
    if current_phase(env)? != expected {
        return Err(KucoError::PhaseViolation);
    }
    Ok(())
}

/// Pool operations: reserves must exist and trading must have begun
pub fn require_trading_started(env: &Env) -> Result<(), KucoError> {
    let phase = current_phase(env)?;
    if phase == Phase::Uninitialized {
        return Err(KucoError::NotInitialized);
    }
    if !phase.trading_started() {
        return Err(KucoError::PhaseViolation);
    }
    Ok(())
}
