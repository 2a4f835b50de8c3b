//! Exact rational value of an expansion.
//!
//! For integer digits `I`, prefix `P` (`p` digits) and period `C`
//! (`l` digits) in base `B`:
//!
//! ```text
//! I.P(C) = (I * B^p * (B^l - 1) + P * (B^l - 1) + C) / (B^p * (B^l - 1))
//! ```

use std::fmt;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Pow, Zero};
use serde::Serialize;

use crate::driver::{Expansion, Outcome};

/// A non-negative fraction in lowest terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fraction {
    #[serde(serialize_with = "as_decimal")]
    pub numerator: BigUint,
    #[serde(serialize_with = "as_decimal")]
    pub denominator: BigUint,
}

fn as_decimal<S: serde::Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

impl Fraction {
    /// Build and reduce. The denominator must be non-zero.
    #[must_use]
    pub fn new(numerator: BigUint, denominator: BigUint) -> Self {
        debug_assert!(!denominator.is_zero());
        let g = numerator.gcd(&denominator);
        if g.is_one() || g.is_zero() {
            return Self {
                numerator,
                denominator,
            };
        }
        Self {
            numerator: numerator / &g,
            denominator: denominator / &g,
        }
    }

    /// Reduced `numerator / denominator` from machine integers.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(
            BigUint::from(numerator.unsigned_abs()),
            BigUint::from(denominator.unsigned_abs()),
        )
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Horner evaluation of non-negative digits.
fn digits_value(digits: &[i64], base: &BigUint) -> BigUint {
    digits.iter().fold(BigUint::zero(), |acc, &d| {
        acc * base + BigUint::from(d.unsigned_abs())
    })
}

impl Expansion {
    /// The exact value represented by the expansion, or `None` when the
    /// outcome is inconclusive.
    #[must_use]
    pub fn to_fraction(&self) -> Option<Fraction> {
        let base = BigUint::from(self.request.base.unsigned_abs());
        let whole = digits_value(&self.integer_digits, &base);

        match self.outcome {
            Outcome::Inconclusive => None,
            Outcome::Terminating => Some(self.truncated_value()),
            Outcome::Periodic(window) => {
                let digits = self.trace.digits();
                let prefix = &digits[..window.start];
                let period = &digits[window.start..=window.end];

                let shift = Pow::pow(&base, prefix.len());
                let repeat = Pow::pow(&base, period.len()) - BigUint::one();

                let numerator = (whole * &shift + digits_value(prefix, &base)) * &repeat
                    + digits_value(period, &base);
                Some(Fraction::new(numerator, shift * repeat))
            }
        }
    }

    /// Value of the integer part plus every computed fractional digit.
    ///
    /// For an inconclusive expansion of `n` digits the true value lies in
    /// `[v, v + base^-n)`.
    #[must_use]
    pub fn truncated_value(&self) -> Fraction {
        let base = BigUint::from(self.request.base.unsigned_abs());
        let digits = self.trace.digits();
        let whole = digits_value(&self.integer_digits, &base);
        let scale = Pow::pow(&base, digits.len());
        Fraction::new(whole * &scale + digits_value(digits, &base), scale)
    }
}
