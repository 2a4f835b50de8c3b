//! One step of long division in an arbitrary base.
//!
//! Given the remainder `r` of the fractional part `r / d`, multiplying by the
//! base shifts one digit left of the radix point:
//! `r * base = digit * d + next`.

use serde::Serialize;

/// Fault raised by a single long-division step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StepFault {
    /// `remainder * base` does not fit in `i64`.
    #[error("{remainder} * {base} overflows a 64-bit integer")]
    Overflow { remainder: i64, base: i64 },

    /// A negative digit or remainder was produced. Valid preconditions make
    /// this impossible, so it means an earlier value was already corrupt.
    #[error("negative state produced (digit {digit}, remainder {remainder})")]
    NegativeState { digit: i64, remainder: i64 },
}

/// Result of one long-division step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Digit produced, in `[0, base)`.
    pub digit: i64,
    /// Remainder carried into the next step, in `[0, denominator)`.
    pub remainder: i64,
}

/// Perform one long-division step.
///
/// Requires `0 <= remainder < denominator` and `base >= 2`.
#[inline]
pub fn step(remainder: i64, denominator: i64, base: i64) -> Result<Step, StepFault> {
    let product = remainder
        .checked_mul(base)
        .ok_or(StepFault::Overflow { remainder, base })?;
    let digit = product / denominator;
    let next = product % denominator;

    if digit < 0 || next < 0 {
        return Err(StepFault::NegativeState {
            digit,
            remainder: next,
        });
    }

    Ok(Step {
        digit,
        remainder: next,
    })
}
