//! Shared types, errors, and configuration for fxconv.
//!
//! This crate provides common types used across all other crates:
//! - Money type split into whole units and nanos
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, ConversionConfig, LoggingConfig};
pub use error::{AppError, AppResult};
pub use types::{ConversionRequest, Money};
