use kuco_types::{KucoConfig, KucoError, RESTRICTED_DAY_ANCHOR, SECONDS_PER_DAY, SECONDS_PER_WEEK};
use soroban_sdk::Env;

/// True when `now` falls on the restricted weekday (UTC).
///
/// Property:
///   (now - RESTRICTED_DAY_ANCHOR) mod SECONDS_PER_WEEK < SECONDS_PER_DAY
///
/// Euclidean remainder, so timestamps before the anchor fold onto the same week.
pub fn is_restricted_day(now: u64) -> bool {
    let offset =
        (now as i128 - RESTRICTED_DAY_ANCHOR as i128).rem_euclid(SECONDS_PER_WEEK as i128);
    offset < SECONDS_PER_DAY as i128
}

/// Gate for token movements and swaps
pub fn require_open_day(env: &Env) -> Result<(), KucoError> {
    if is_restricted_day(env.ledger().timestamp()) {
        return Err(KucoError::WeekdayRestricted);
    }
    Ok(())
}

/// Gate for invest, retract and report_period; only enforced when the
/// deployment opted into the stricter calendar
pub fn require_open_day_for_investing(env: &Env, config: &KucoConfig) -> Result<(), KucoError> {
    if config.restrict_investing_on_weekday {
        require_open_day(env)?;
    }
    Ok(())
}
