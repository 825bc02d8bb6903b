//! Shared value types, errors, and configuration for Coinage.
//!
//! This crate provides the vocabulary used across all other crates:
//! - Currency units and locales
//! - Monetary amounts in two families, `Money` and `FastMoney`
//! - The `MonetaryOperator` transform seam
//! - Error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{MonetaryError, MonetaryResult};
