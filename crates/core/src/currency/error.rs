//! Currency error types.

use fxconv_shared::AppError;
use thiserror::Error;

/// Currency-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// Currency code is not present in the rate table.
    #[error("Currency not found: {0}")]
    CurrencyNotFound(String),

    /// Amount rejected before conversion.
    #[error("Invalid amount {units} units {nanos} nanos: {reason}")]
    InvalidAmount {
        /// Whole units of the rejected amount.
        units: i64,
        /// Nanos of the rejected amount.
        nanos: i32,
        /// Why the amount was rejected.
        reason: &'static str,
    },

    /// Converted amount does not fit the units/nanos fields.
    #[error("Converted amount overflows the money representation")]
    AmountOverflow,

    /// Rate table entries are inconsistent.
    #[error("Invalid rate table: {0}")]
    InvalidRateTable(String),
}

impl From<CurrencyError> for AppError {
    fn from(err: CurrencyError) -> Self {
        match err {
            CurrencyError::CurrencyNotFound(_) => Self::NotFound(err.to_string()),
            CurrencyError::InvalidAmount { .. }
            | CurrencyError::AmountOverflow
            | CurrencyError::InvalidRateTable(_) => Self::Validation(err.to_string()),
        }
    }
}
