//! Exchange rate table anchored to a reference currency.
//!
//! Every entry says how many units of that currency equal one unit of the
//! reference currency. Pairwise rates are derived by division, so the table
//! only needs one column.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::CurrencyError;

/// Reference currency of the built-in snapshot.
pub const SNAPSHOT_REFERENCE: &str = "EUR";

/// Version tag of the built-in snapshot.
pub const SNAPSHOT_VERSION: &str = "eur-2020.1";

/// Built-in EUR-anchored rates.
const EUR_RATES: [(&str, Decimal); 33] = [
    ("EUR", dec!(1.0)),
    ("CAD", dec!(1.5231)),
    ("HKD", dec!(8.3693)),
    ("ISK", dec!(157.5)),
    ("PHP", dec!(54.778)),
    ("DKK", dec!(7.4576)),
    ("HUF", dec!(354.7)),
    ("CZK", dec!(27.589)),
    ("AUD", dec!(1.6805)),
    ("RON", dec!(4.84)),
    ("SEK", dec!(10.6695)),
    ("IDR", dec!(16127.82)),
    ("INR", dec!(81.9885)),
    ("BRL", dec!(6.3172)),
    ("RUB", dec!(79.6208)),
    ("HRK", dec!(7.5693)),
    ("JPY", dec!(115.53)),
    ("THB", dec!(34.656)),
    ("CHF", dec!(1.0513)),
    ("SGD", dec!(1.5397)),
    ("PLN", dec!(4.565)),
    ("BGN", dec!(1.9558)),
    ("TRY", dec!(7.4689)),
    ("CNY", dec!(7.6759)),
    ("NOK", dec!(11.0568)),
    ("NZD", dec!(1.8145)),
    ("ZAR", dec!(20.0761)),
    ("USD", dec!(1.0798)),
    ("MXN", dec!(25.8966)),
    ("ILS", dec!(3.8178)),
    ("GBP", dec!(0.88738)),
    ("KRW", dec!(1332.6)),
    ("MYR", dec!(4.6982)),
];

static SNAPSHOT: Lazy<RateTable> = Lazy::new(|| RateTable {
    reference: SNAPSHOT_REFERENCE.to_string(),
    version: SNAPSHOT_VERSION.to_string(),
    rates: EUR_RATES
        .iter()
        .map(|(code, rate)| ((*code).to_string(), *rate))
        .collect(),
});

/// Immutable mapping from currency code to its value relative to the
/// reference currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    reference: String,
    version: String,
    rates: BTreeMap<String, Decimal>,
}

impl RateTable {
    /// Returns the built-in snapshot, initialized on first use.
    #[must_use]
    pub fn snapshot() -> &'static Self {
        &SNAPSHOT
    }

    /// Builds a table from explicit entries.
    ///
    /// The reference currency must be present with a rate of exactly 1 and
    /// every rate must be positive.
    pub fn new<I, S>(
        reference: impl Into<String>,
        version: impl Into<String>,
        entries: I,
    ) -> Result<Self, CurrencyError>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        let reference = reference.into();
        let mut rates = BTreeMap::new();

        for (code, rate) in entries {
            let code = code.into();
            if rate <= Decimal::ZERO {
                return Err(CurrencyError::InvalidRateTable(format!(
                    "rate for {code} must be positive, got {rate}"
                )));
            }
            if rates.insert(code.clone(), rate).is_some() {
                return Err(CurrencyError::InvalidRateTable(format!(
                    "duplicate entry for {code}"
                )));
            }
        }

        match rates.get(&reference) {
            Some(rate) if *rate == Decimal::ONE => {}
            Some(rate) => {
                return Err(CurrencyError::InvalidRateTable(format!(
                    "reference currency {reference} must have rate 1, got {rate}"
                )));
            }
            None => {
                return Err(CurrencyError::InvalidRateTable(format!(
                    "reference currency {reference} missing"
                )));
            }
        }

        Ok(Self {
            reference,
            version: version.into(),
            rates,
        })
    }

    /// Returns how many units of `to` equal one unit of `from`.
    pub fn rate(&self, from: &str, to: &str) -> Result<Decimal, CurrencyError> {
        let from_rate = self.lookup(from)?;
        let to_rate = self.lookup(to)?;
        to_rate
            .checked_div(from_rate)
            .ok_or(CurrencyError::AmountOverflow)
    }

    /// Returns the rate of `code` relative to the reference currency.
    pub fn lookup(&self, code: &str) -> Result<Decimal, CurrencyError> {
        self.rates
            .get(code)
            .copied()
            .ok_or_else(|| CurrencyError::CurrencyNotFound(code.to_string()))
    }

    /// Reference currency code.
    #[must_use]
    pub fn reference_currency(&self) -> &str {
        &self.reference
    }

    /// Version tag of this table.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns true if `code` has an entry.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    /// Supported currency codes in ascending order.
    pub fn supported_currencies(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    /// Number of currencies in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
