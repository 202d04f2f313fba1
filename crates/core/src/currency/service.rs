//! Money converter service.
//!
//! This module provides the main service interface for currency operations:
//! rate lookup against a `RateTable` and conversion of `Money` values.

use fxconv_shared::{ConversionConfig, ConversionRequest, Money, types::NANOS_PER_UNIT};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::conversion::apply_rate;
use super::error::CurrencyError;
use super::rates::RateTable;

/// Converts money between currencies known to a rate table.
///
/// Holds only a shared reference to the table, so it is cheap to copy and
/// safe to use from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct MoneyConverter<'a> {
    rates: &'a RateTable,
    config: ConversionConfig,
}

impl Default for MoneyConverter<'static> {
    fn default() -> Self {
        Self::new(RateTable::snapshot(), ConversionConfig::default())
    }
}

impl<'a> MoneyConverter<'a> {
    /// Creates a converter over `rates`.
    #[must_use]
    pub const fn new(rates: &'a RateTable, config: ConversionConfig) -> Self {
        Self { rates, config }
    }

    /// Rate table used by this converter.
    #[must_use]
    pub const fn rates(&self) -> &'a RateTable {
        self.rates
    }

    /// Returns how many units of `to` equal one unit of `from`.
    pub fn rate(&self, from: &str, to: &str) -> Result<Decimal, CurrencyError> {
        self.rates.rate(from, to)
    }

    /// Converts `from` into `to_code`.
    ///
    /// Both currency codes are resolved before any arithmetic happens, so an
    /// unknown code never produces a partial result.
    ///
    /// # Example
    ///
    /// ```
    /// use fxconv_core::currency::MoneyConverter;
    /// use fxconv_shared::Money;
    ///
    /// let converter = MoneyConverter::default();
    /// let usd = converter.convert(&Money::new(10, 500_000_000, "EUR"), "USD").unwrap();
    /// assert_eq!(usd, Money::new(11, 337_900_001, "USD"));
    /// ```
    pub fn convert(&self, from: &Money, to_code: &str) -> Result<Money, CurrencyError> {
        let rate = self
            .rates
            .rate(&from.currency_code, to_code)
            .inspect_err(|err| {
                warn!(
                    error = %err,
                    from = %from.currency_code,
                    to = %to_code,
                    "Rate lookup failed"
                );
            })?;

        if self.config.strict_amounts {
            check_amount(from).inspect_err(|err| warn!(error = %err, "Rejected amount"))?;
        }

        let (units, nanos) = apply_rate(from.units, from.nanos, rate)?;
        let converted = Money::new(units, nanos, to_code);

        debug!(from = %from, to = %converted, %rate, "Converted amount");

        Ok(converted)
    }

    /// Converts the amount described by `request`.
    pub fn convert_request(&self, request: &ConversionRequest) -> Result<Money, CurrencyError> {
        self.convert(&request.from, &request.to_code)
    }
}

fn check_amount(money: &Money) -> Result<(), CurrencyError> {
    if money.is_normalized() {
        return Ok(());
    }

    let reason = if money.nanos.unsigned_abs() >= NANOS_PER_UNIT.unsigned_abs() {
        "nanos magnitude must be below 1_000_000_000"
    } else {
        "nanos sign disagrees with units"
    };

    Err(CurrencyError::InvalidAmount {
        units: money.units,
        nanos: money.nanos,
        reason,
    })
}
