//! # Calc Fee Library
//!
//! A stateless Soroban contract that computes percentage fees on integer
//! amounts with deterministic, floor-rounded fixed-point arithmetic.
//!
//! ## Overview
//!
//! Callers pass an `amount`, a `fee_rate` and, optionally, a `precision`. The
//! fee rate is a percentage scaled by `10^precision`:
//!
//! | fee_rate | precision | meaning |
//! |----------|-----------|---------|
//! | `5`      | `0`       | 5%      |
//! | `10`     | `1`       | 1%      |
//! | `1`      | `2`       | 0.01%   |
//!
//! Every entry point rejects rates above 100% with
//! [`Error::RateExceedsMaximum`] (`Error(Contract, #1)` on the host) and
//! never returns a clamped or partial value.
//!
//! ```text
//! amount ──┬──────────────► calc_fee   = floor(amount * fee_rate / 10^(2+p))
//!          └──────────────► calc_final = amount - calc_fee
//! ```
//!
//! ## Library Use
//!
//! The arithmetic lives in [`fee_math`] and takes an `&Env` for host 256-bit
//! integers. Contracts that want the helpers without exporting this
//! contract's entry points depend on the crate with
//! `default-features = false`.
//!
//! ## Example
//!
//! ```rust
//! let client = CalcFeeLibraryClient::new(&env, &contract_id);
//!
//! // 5% of 1_000_000
//! assert_eq!(client.calc_fee(&1_000_000, &5), 50_000);
//! assert_eq!(client.calc_final(&1_000_000, &5), 950_000);
//!
//! // 0.01% of 1_000_000
//! assert_eq!(client.calc_fee_with_precision(&1_000_000, &1, &2), 100);
//!
//! // 101% reverts
//! assert!(client.try_calc_fee(&100, &101).is_err());
//! ```

#![no_std]

mod error;
pub mod fee_math;

pub use error::Error;
pub use fee_math::FeeSplit;

#[cfg(feature = "contract")]
use soroban_sdk::{contract, contractimpl, Env};

/// Contract interface version.
pub const VERSION: u32 = 1;

#[cfg(feature = "contract")]
#[contract]
pub struct CalcFeeLibrary;

#[cfg(feature = "contract")]
#[contractimpl]
impl CalcFeeLibrary {
    /// Fee for `amount` at a whole-percent `fee_rate`.
    pub fn calc_fee(env: Env, amount: u128, fee_rate: u128) -> Result<u128, Error> {
        fee_math::calc_fee(&env, amount, fee_rate)
    }

    /// Fee for `amount` at `fee_rate` scaled by `10^precision`.
    pub fn calc_fee_with_precision(
        env: Env,
        amount: u128,
        fee_rate: u128,
        precision: u32,
    ) -> Result<u128, Error> {
        fee_math::calc_fee_with_precision(&env, amount, fee_rate, precision)
    }

    /// `amount` minus its fee at a whole-percent `fee_rate`.
    pub fn calc_final(env: Env, amount: u128, fee_rate: u128) -> Result<u128, Error> {
        fee_math::calc_final(&env, amount, fee_rate)
    }

    /// `amount` minus its fee at `fee_rate` scaled by `10^precision`.
    pub fn calc_final_with_precision(
        env: Env,
        amount: u128,
        fee_rate: u128,
        precision: u32,
    ) -> Result<u128, Error> {
        fee_math::calc_final_with_precision(&env, amount, fee_rate, precision)
    }

    /// Fee and final amount in one call, whole-percent `fee_rate`.
    pub fn split(env: Env, amount: u128, fee_rate: u128) -> Result<FeeSplit, Error> {
        fee_math::split(&env, amount, fee_rate)
    }

    pub fn split_with_precision(
        env: Env,
        amount: u128,
        fee_rate: u128,
        precision: u32,
    ) -> Result<FeeSplit, Error> {
        fee_math::split_with_precision(&env, amount, fee_rate, precision)
    }

    /// Largest accepted `fee_rate` at `precision`, `None` past `u128::MAX`.
    pub fn max_fee_rate(env: Env, precision: u32) -> Option<u128> {
        fee_math::max_fee_rate(&env, precision)
    }

    pub fn version(_env: Env) -> u32 {
        VERSION
    }
}



#[cfg(all(test, feature = "contract"))]
mod test_gas;
