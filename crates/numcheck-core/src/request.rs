//! Conversion request and its precondition check.

use serde::Serialize;

use crate::error::ConversionError;

/// A fraction `numerator / denominator` to expand in `base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ConversionRequest {
    pub numerator: i64,
    pub denominator: i64,
    pub base: i64,
}

impl ConversionRequest {
    #[must_use]
    pub fn new(numerator: i64, denominator: i64, base: i64) -> Self {
        Self {
            numerator,
            denominator,
            base,
        }
    }

    /// Check `0 <= numerator`, `0 < denominator` and `2 <= base`.
    pub fn validate(&self) -> Result<(), ConversionError> {
        if self.numerator < 0 {
            return Err(ConversionError::InvalidRequest(format!(
                "numerator must be non-negative, got {}",
                self.numerator
            )));
        }
        if self.denominator <= 0 {
            return Err(ConversionError::InvalidRequest(format!(
                "denominator must be positive, got {}",
                self.denominator
            )));
        }
        if self.base < 2 {
            return Err(ConversionError::InvalidRequest(format!(
                "base must be at least 2, got {}",
                self.base
            )));
        }
        Ok(())
    }

    /// Whole-number part of the fraction.
    #[must_use]
    pub fn integer_part(&self) -> i64 {
        self.numerator / self.denominator
    }

    /// Numerator of the fractional part, in `[0, denominator)`.
    #[must_use]
    pub fn fractional_numerator(&self) -> i64 {
        self.numerator % self.denominator
    }
}
