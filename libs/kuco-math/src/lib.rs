#![no_std]

pub mod amm_math;
pub mod bips_math;
pub mod full_math;

pub use amm_math::*;
pub use bips_math::*;
pub use full_math::*;
