//! Percentage fee helpers with scaled-integer fee rates.
//!
//! ## Fee Rates
//!
//! A fee rate is a percentage scaled by `10^precision`. At precision 0 a rate
//! of `5` is 5%; at precision 2 a rate of `1` is 0.01%. The fee is
//!
//! `fee = floor(amount * fee_rate / 10^(2 + precision))`
//!
//! and the largest valid rate is `100 * 10^precision` (100%). Both numbers are
//! the same power of ten, called the *scale* below.
//!
//! ## Rounding Policy
//!
//! All fee calculations use **floor (round-down)** rounding. Any remainder of
//! the division stays with the payer, so small amounts or small rates may
//! produce a fee of exactly zero. The invariant `fee + final == amount` holds
//! for every split.
//!
//! ## Overflow
//!
//! `amount * fee_rate` is formed in a host `U256`, which holds the product of
//! any two `u128` values. The quotient is at most `amount` and narrows back to
//! `u128`. Scales past `10^77` do not fit in 256 bits; they are also larger
//! than every possible product, so the rate is valid and the fee is zero.

use crate::Error;
use soroban_sdk::{contracttype, log, Env, U256};

/// Decimal digits of the percent denominator (100 = 10^2).
pub const PERCENT_DECIMALS: u32 = 2;

/// Largest `n` with `10^n < 2^256`.
pub const MAX_SCALE_EXPONENT: u32 = 77;

/// An amount split into its fee and what remains after the fee.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeSplit {
    pub fee: u128,
    pub final_amount: u128,
}

/// `10^(2 + precision)`, or `None` when it does not fit in 256 bits.
fn scale(env: &Env, precision: u32) -> Option<U256> {
    let exponent = precision.checked_add(PERCENT_DECIMALS)?;
    if exponent > MAX_SCALE_EXPONENT {
        return None;
    }
    Some(U256::from_u32(env, 10).pow(exponent))
}

fn ensure_rate_within(
    env: &Env,
    fee_rate: u128,
    precision: u32,
    scale: &U256,
) -> Result<(), Error> {
    if U256::from_u128(env, fee_rate) > *scale {
        log!(env, "fee rate exceeds maximum", fee_rate, precision);
        return Err(Error::RateExceedsMaximum);
    }
    Ok(())
}

/// Largest valid fee rate at `precision` (`100 * 10^precision`).
///
/// Returns `None` when the ceiling is past `u128::MAX`; every representable
/// rate is valid then.
pub fn max_fee_rate(env: &Env, precision: u32) -> Option<u128> {
    scale(env, precision)?.to_u128()
}

/// Fee for `amount` at `fee_rate` scaled by `10^precision`, floored.
///
/// # Errors
///
/// [`Error::RateExceedsMaximum`] when `fee_rate > 100 * 10^precision`.
pub fn calc_fee_with_precision(
    env: &Env,
    amount: u128,
    fee_rate: u128,
    precision: u32,
) -> Result<u128, Error> {
    let scale = match scale(env, precision) {
        Some(scale) => scale,
        // Scale exceeds any u128 product: every rate is valid, fee floors to 0.
        None => return Ok(0),
    };
    ensure_rate_within(env, fee_rate, precision, &scale)?;

    let product = U256::from_u128(env, amount).mul(&U256::from_u128(env, fee_rate));
    match product.div(&scale).to_u128() {
        Some(fee) => Ok(fee),
        None => panic!("Invariant violated: fee must fit in u128"),
    }
}

/// `amount` minus its fee at `fee_rate` scaled by `10^precision`.
///
/// # Errors
///
/// [`Error::RateExceedsMaximum`] when `fee_rate > 100 * 10^precision`.
pub fn calc_final_with_precision(
    env: &Env,
    amount: u128,
    fee_rate: u128,
    precision: u32,
) -> Result<u128, Error> {
    split_with_precision(env, amount, fee_rate, precision).map(|split| split.final_amount)
}

/// Fee for `amount` at a whole-percent `fee_rate`.
pub fn calc_fee(env: &Env, amount: u128, fee_rate: u128) -> Result<u128, Error> {
    calc_fee_with_precision(env, amount, fee_rate, 0)
}

/// `amount` minus its fee at a whole-percent `fee_rate`.
pub fn calc_final(env: &Env, amount: u128, fee_rate: u128) -> Result<u128, Error> {
    calc_final_with_precision(env, amount, fee_rate, 0)
}

/// Split `amount` into `(fee, final_amount)` with a single validity check.
pub fn split_with_precision(
    env: &Env,
    amount: u128,
    fee_rate: u128,
    precision: u32,
) -> Result<FeeSplit, Error> {
    let fee = calc_fee_with_precision(env, amount, fee_rate, precision)?;
    let final_amount = match amount.checked_sub(fee) {
        Some(final_amount) => final_amount,
        None => panic!("Invariant violated: fee cannot exceed amount"),
    };
    Ok(FeeSplit { fee, final_amount })
}

pub fn split(env: &Env, amount: u128, fee_rate: u128) -> Result<FeeSplit, Error> {
    split_with_precision(env, amount, fee_rate, 0)
}
