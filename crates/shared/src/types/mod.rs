//! Monetary value types.

pub mod amount;
pub mod currency;
pub mod factory;
pub mod fast_money;
pub mod locale;
pub mod money;
pub mod number;
pub mod operator;

pub use amount::{AmountFamily, AmountNumber, IntoCurrency, MonetaryAmount};
pub use currency::CurrencyUnit;
pub use factory::{AmountFactory, default_amount_factory};
pub use fast_money::FastMoney;
pub use locale::Locale;
pub use money::Money;
pub use number::NumberValue;
pub use operator::MonetaryOperator;

#[cfg(test)]
mod props;
