//! Monetary operations for Coinage.
//!
//! This crate holds the behaviour built on the value types of
//! `coinage-shared`. It has no I/O beyond reading an optional rates file.
//!
//! # Modules
//!
//! - `currency` - Roundings, operators, reductions, exchange rates and conversion
//! - `format` - Locale-aware formatting and parsing of amounts
//! - `monetary` - Single entry point for currencies, factories and roundings

pub mod currency;
pub mod format;
pub mod monetary;

pub use monetary::Monetary;
