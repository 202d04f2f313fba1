//! Common types used across the application.

pub mod money;


pub use money::{ConversionRequest, Money, NANOS_PER_UNIT};
