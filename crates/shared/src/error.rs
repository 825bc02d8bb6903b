//! Monetary error types.

use thiserror::Error;

/// Result type alias using `MonetaryError`.
pub type MonetaryResult<T> = Result<T, MonetaryError>;

/// Errors raised by currency lookup, amount arithmetic, conversion and formatting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MonetaryError {
    /// Binary operation on amounts of different currencies.
    #[error("Currency mismatch: {base}/{other}")]
    CurrencyMismatch {
        /// Currency of the receiving amount.
        base: String,
        /// Currency of the argument.
        other: String,
    },

    /// No currency with this code is known.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// No locale with this tag is supported.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// No exchange rate provider is registered under this name.
    #[error("Unknown exchange rate provider: {0}")]
    UnknownProvider(String),

    /// No provider could supply a rate for the pair.
    #[error("No exchange rate available: {base}/{term}")]
    RateNotAvailable {
        /// Base currency code.
        base: String,
        /// Term currency code.
        term: String,
    },

    /// Overflow, division by zero, or a value a representation cannot hold.
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),

    /// Text could not be parsed into an amount.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Format pattern is malformed.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Incomplete or inconsistent input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MonetaryError {
    /// Creates a currency mismatch error from two currency codes.
    pub fn mismatch(base: impl Into<String>, other: impl Into<String>) -> Self {
        Self::CurrencyMismatch {
            base: base.into(),
            other: other.into(),
        }
    }

    /// Returns true for recoverable errors of the monetary domain itself.
    ///
    /// Only these are expected to be caught by callers; everything else
    /// reflects missing data or bad input.
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::CurrencyMismatch { .. })
    }

    /// Returns a stable machine-readable code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::UnknownLocale(_) => "UNKNOWN_LOCALE",
            Self::UnknownProvider(_) => "UNKNOWN_PROVIDER",
            Self::RateNotAvailable { .. } => "RATE_NOT_AVAILABLE",
            Self::Arithmetic(_) => "ARITHMETIC_ERROR",
            Self::Parse(_) => "PARSE_ERROR",
            Self::InvalidPattern(_) => "INVALID_PATTERN",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl From<config::ConfigError> for MonetaryError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
