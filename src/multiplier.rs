use crate::error::{Error, Result};
use serde::Deserialize;

/// How [`Multiplier::multiply_with`] treats a product outside the `i64` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Two's complement wraparound, same as the native fixed-width multiply.
    #[default]
    Wrap,
    /// Reject the product and keep the previously stored one.
    Check,
}

impl std::fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wrap => write!(f, "wrap"),
            Self::Check => write!(f, "check"),
        }
    }
}

/// Multiplies two integers and keeps the product until the next call.
///
/// A fresh multiplier reports a product of zero. Each multiply overwrites the
/// stored value; nothing accumulates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Multiplier {
    product: i64,
}

impl Multiplier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `a * b`, wrapping on overflow.
    pub fn multiply(&mut self, a: i64, b: i64) {
        self.product = a.wrapping_mul(b);
    }

    /// Stores and returns `a * b`, or fails without touching the stored product.
    pub fn checked_multiply(&mut self, a: i64, b: i64) -> Result<i64> {
        let product = a.checked_mul(b).ok_or_else(|| Error::overflow(a, b))?;
        self.product = product;
        Ok(product)
    }

    pub fn multiply_with(&mut self, a: i64, b: i64, policy: OverflowPolicy) -> Result<i64> {
        match policy {
            OverflowPolicy::Wrap => {
                self.multiply(a, b);
                Ok(self.product)
            }
            OverflowPolicy::Check => self.checked_multiply(a, b),
        }
    }

    #[must_use]
    pub fn result(&self) -> i64 {
        self.product
    }
}
