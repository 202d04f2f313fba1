//! Fixed-point money conversion.
//!
//! CRITICAL: Rounding strategy for the units/nanos representation:
//! - Both fields round toward zero (symmetric floor), never toward -inf
//! - The fraction dropped from `units` is carried into `nanos`
//! - `nanos` overflow is carried back into `units` using a divisor of
//!   999_999_999, not 1e9
//!
//! All intermediate values are `Decimal`; no floating point is involved.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use super::error::CurrencyError;

const NANOS_PER_UNIT: Decimal = dec!(1000000000);

/// Divisor used when carrying `nanos` overflow back into `units`.
pub const NANOS_CARRY_DIVISOR: Decimal = dec!(999999999);

/// Rounds toward zero: `floor` for positive values, `ceil` otherwise.
#[must_use]
pub fn symmetric_floor(value: Decimal) -> Decimal {
    if value > Decimal::ZERO {
        value.floor()
    } else {
        value.ceil()
    }
}

/// Converts a `(units, nanos)` pair by `rate`.
///
/// `nanos` is not range checked here; out-of-range values go through the same
/// arithmetic. A rate of exactly 1 returns the input unchanged.
pub fn apply_rate(units: i64, nanos: i32, rate: Decimal) -> Result<(i64, i32), CurrencyError> {
    if rate == Decimal::ONE {
        return Ok((units, nanos));
    }

    let raw_units = Decimal::from(units)
        .checked_mul(rate)
        .ok_or(CurrencyError::AmountOverflow)?;
    let new_units = symmetric_floor(raw_units);

    // |raw_units - new_units| < 1, so this stays below 1e9 in magnitude
    let added_nanos = (raw_units - new_units) * NANOS_PER_UNIT;
    let new_nanos = Decimal::from(nanos)
        .checked_mul(rate)
        .and_then(|scaled| scaled.checked_add(added_nanos))
        .map(symmetric_floor)
        .ok_or(CurrencyError::AmountOverflow)?;

    let added_units = symmetric_floor(new_nanos / NANOS_CARRY_DIVISOR);
    let final_units = new_units
        .checked_add(added_units)
        .ok_or(CurrencyError::AmountOverflow)?;
    let final_nanos = symmetric_floor(new_nanos % NANOS_CARRY_DIVISOR);

    Ok((
        final_units.to_i64().ok_or(CurrencyError::AmountOverflow)?,
        final_nanos.to_i32().ok_or(CurrencyError::AmountOverflow)?,
    ))
}
