// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Rules for the KucoCoin pool and investment ledger.
//
// - math_specs.rs       : swap / share / reward arithmetic
// - investment_specs.rs : invest, claim and retract state transitions
// - pool_specs.rs       : reserve invariants around swaps
//
// USAGE:
// - Unit tests: cargo test -p kucocoin
// - Certora build: cargo build --features certora -p kucocoin
//
// ============================================================================

pub mod investment_specs;
pub mod math_specs;
pub mod pool_specs;
