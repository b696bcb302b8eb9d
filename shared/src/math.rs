use crate::errors::Error;
use crate::types::{Amount, Timestamp};
use soroban_sdk::{Env, I256};

/// Compute `floor(a * b / c)` for non-negative operands.
///
/// Products that do not fit in an `i128` are carried through the host's
/// 256-bit integers; only a quotient above `i128::MAX` is an overflow.
pub fn mul_div_floor(env: &Env, a: Amount, b: Amount, c: Amount) -> Result<Amount, Error> {
    if a < 0 || b < 0 || c <= 0 {
        return Err(Error::InvalidAmount);
    }

    if let Some(product) = a.checked_mul(b) {
        return Ok(product / c);
    }

    I256::from_i128(env, a)
        .mul(&I256::from_i128(env, b))
        .div(&I256::from_i128(env, c))
        .to_i128()
        .ok_or(Error::Overflow)
}

/// Dividend share of a holder: `balance * dividend / supply_at_dividend`.
/// Returns zero when no supply was recorded for the round.
pub fn proportional_share(
    env: &Env,
    balance: Amount,
    dividend: Amount,
    supply_at_dividend: Amount,
) -> Result<Amount, Error> {
    if supply_at_dividend <= 0 || balance <= 0 || dividend <= 0 {
        return Ok(0);
    }
    mul_div_floor(env, balance, dividend, supply_at_dividend)
}

/// Linear vesting schedule gated by a cliff.
///
/// * `0` before `start + cliff`
/// * `total` from `start + duration` on
/// * `total * (now - start) / duration` in between
pub fn vested_amount(
    env: &Env,
    total: Amount,
    start: Timestamp,
    cliff: Timestamp,
    duration: Timestamp,
    now: Timestamp,
) -> Result<Amount, Error> {
    if total <= 0 {
        return Ok(0);
    }

    let end = start.checked_add(duration).ok_or(Error::Overflow)?;
    if now >= end {
        return Ok(total);
    }

    let cliff_end = start.checked_add(cliff).ok_or(Error::Overflow)?;
    if now < cliff_end || now < start {
        return Ok(0);
    }

    // duration > 0 here, otherwise `now >= end` above
    let elapsed = (now - start) as Amount;
    mul_div_floor(env, total, elapsed, duration as Amount)
}
