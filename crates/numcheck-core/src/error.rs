//! Error type for fractional base conversion.

use crate::stepper::StepFault;

/// Error returned when a conversion cannot produce a trustworthy result.
///
/// Running out of iteration budget is not an error; it is reported as
/// [`Outcome::Inconclusive`](crate::driver::Outcome::Inconclusive).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The request violates `0 <= numerator`, `0 < denominator`, `2 <= base`.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A long-division step faulted. The partial trace is discarded.
    #[error("arithmetic fault at step {step}: {source}")]
    Arithmetic {
        step: usize,
        #[source]
        source: StepFault,
    },

    /// Configuration error (unknown strategy name and similar).
    #[error("configuration error: {0}")]
    Config(String),

    /// Two strategies classified the same request differently.
    #[error("periodicity strategies disagree")]
    Mismatch,
}

impl ConversionError {
    /// Whether this error is an integer overflow.
    #[must_use]
    pub fn is_overflow(&self) -> bool {
        matches!(
            self,
            Self::Arithmetic {
                source: StepFault::Overflow { .. },
                ..
            }
        )
    }
}
