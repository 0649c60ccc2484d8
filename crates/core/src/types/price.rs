//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative: {amount}")]
    Negative {
        /// The rejected amount.
        amount: Decimal,
    },
}

/// A unit price in euros.
///
/// Amounts are exact decimals, never floats, so totals stay exact no matter
/// how many line items are summed. Serializes as a decimal string
/// (`"24.99"`); deserializes from either a string or a bare number, so
/// hand-edited catalog files may use both forms.
///
/// ## Examples
///
/// ```
/// use mercadito_core::Price;
/// use rust_decimal::Decimal;
///
/// // Valid prices
/// assert!(Price::new(Decimal::new(2499, 2)).is_ok()); // 24.99
/// assert!(Price::new(Decimal::ZERO).is_ok());
///
/// // Negative amounts are rejected
/// assert!(Price::new(Decimal::new(-1, 2)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a `Price` from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is negative.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount < Decimal::ZERO {
            return Err(PriceError::Negative { amount });
        }

        Ok(Self(amount))
    }

    /// Returns the inner decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "€{:.2}", self.0)
    }
}
