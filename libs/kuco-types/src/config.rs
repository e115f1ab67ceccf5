use soroban_sdk::contracttype;

use crate::BIPS;

/// Construction parameters - immutable once the contract is deployed
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KucoConfig {
    /// Investment return in bips applied on claim (11000 = 110%)
    pub investment_factor_bips: u32,
    /// Fee in bips kept by the pool when an investment is retracted
    pub retract_fee_bips: u32,
    /// End of the investment phase, start of trading
    pub trading_phase_start: u64,
    /// End of the retract window
    pub retract_phase_end: u64,
    /// Token amount consumed by metered features
    pub feature_fee: i128,
    /// Also block invest/retract/report_period on the restricted weekday
    pub restrict_investing_on_weekday: bool,
}

impl KucoConfig {
    pub fn is_valid(&self) -> bool {
        self.investment_factor_bips > 0
            && self.retract_fee_bips <= BIPS
            && self.trading_phase_start < self.retract_phase_end
            && self.feature_fee >= 0
    }
}
