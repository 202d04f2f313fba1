//! Core conversion logic for fxconv.
//!
//! This crate contains pure conversion logic with ZERO network or storage dependencies.
//!
//! # Modules
//!
//! - `currency` - Rate table snapshot, fixed-point conversion, and the converter service

pub mod currency;
