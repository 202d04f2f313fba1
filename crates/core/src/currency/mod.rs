//! Currency rate lookup and fixed-point money conversion.

pub mod conversion;
pub mod error;
pub mod rates;
pub mod service;

#[cfg(test)]
mod props;

pub use conversion::{apply_rate, symmetric_floor};
pub use error::CurrencyError;
pub use rates::RateTable;
pub use service::MoneyConverter;
