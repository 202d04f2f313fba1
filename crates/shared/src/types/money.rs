//! Money type split into whole units and nanos.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are two exact integers; `to_decimal` gives the combined
//! `rust_decimal::Decimal` value when one is needed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of nanos in one whole currency unit.
pub const NANOS_PER_UNIT: i32 = 1_000_000_000;

/// Represents a monetary amount with currency.
///
/// `units` holds the signed whole-unit component and `nanos` the sub-unit
/// component scaled by 10^9. A normalized amount keeps `nanos` within
/// `(-1e9, 1e9)` and with the same sign as `units`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Whole currency units.
    pub units: i64,
    /// Sub-unit amount in billionths of a unit.
    #[serde(default)]
    pub nanos: i32,
    /// ISO 4217 currency code (e.g., "USD", "EUR").
    pub currency_code: String,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub fn new(units: i64, nanos: i32, currency_code: impl Into<String>) -> Self {
        Self {
            units,
            nanos,
            currency_code: currency_code.into(),
        }
    }

    /// Returns true if `nanos` is below one unit in magnitude and does not
    /// disagree in sign with `units`.
    #[must_use]
    pub const fn is_normalized(&self) -> bool {
        if self.nanos.unsigned_abs() >= NANOS_PER_UNIT.unsigned_abs() {
            return false;
        }
        !((self.units > 0 && self.nanos < 0) || (self.units < 0 && self.nanos > 0))
    }

    /// Returns the exact amount as a decimal (`units + nanos / 10^9`).
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from(self.units) + Decimal::new(i64::from(self.nanos), 9)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Unnormalized pairs still render their exact value
        write!(f, "{:.9} {}", self.to_decimal(), self.currency_code)
    }
}

/// A request to convert `from` into the currency named by `to_code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    /// Amount to convert.
    pub from: Money,
    /// Target currency code.
    pub to_code: String,
}

impl ConversionRequest {
    /// Creates a new conversion request.
    #[must_use]
    pub fn new(from: Money, to_code: impl Into<String>) -> Self {
        Self {
            from,
            to_code: to_code.into(),
        }
    }
}
