use soroban_sdk::contracttype;

/// Time-derived mode of the contract.
///
/// Never stored: recomputed from the ledger timestamp on every call.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Phase {
    /// Reserves have not been seeded yet
    Uninitialized = 0,
    /// Before `trading_phase_start`: investing is open
    Investment = 1,
    /// Trading has started and investors may still retract
    Retract = 2,
    /// Retract window has elapsed (terminal)
    Trading = 3,
}

impl Phase {
    /// True once `trading_phase_start` has passed
    pub fn trading_started(&self) -> bool {
        matches!(self, Phase::Retract | Phase::Trading)
    }
}
