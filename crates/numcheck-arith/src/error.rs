//! Error type for the exercise calculators.

/// Error returned by the calculators in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithError {
    /// Input outside the accepted range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An intermediate value does not fit in a 64-bit integer.
    #[error("integer overflow: {0}")]
    Overflow(String),

    /// The problem is well formed but has no solution.
    #[error("no solution: {0}")]
    NoSolution(String),
}

impl ArithError {
    pub(crate) fn overflow(context: &str) -> Self {
        Self::Overflow(format!("{context} exceeds the 64-bit range"))
    }
}
