//! # numcheck-core
//!
//! Fractional base conversion with periodicity detection. A long-division
//! stepper produces the digits of `numerator / denominator` in any base, and
//! one of two interchangeable cycle finders decides whether the expansion
//! terminates, repeats, or could not be classified within the iteration
//! budget. Also hosts integer radix conversion.

pub mod constants;
pub mod driver;
pub mod error;
pub mod exact;
pub mod floyd;
pub mod options;
pub mod radix;
pub mod reconstruct;
pub mod registry;
pub mod request;
pub mod stepper;
pub mod strategy;
pub mod trace;

// Re-exports
pub use constants::{exit_codes, DEFAULT_EXACT_THRESHOLD, DEFAULT_ITERATION_BUDGET, MAX_BASE};
pub use driver::{convert, convert_with, Expansion, Outcome};
pub use error::ConversionError;
pub use options::ConversionOptions;
pub use reconstruct::Fraction;
pub use registry::{DefaultFactory, StrategyFactory};
pub use request::ConversionRequest;
pub use stepper::StepFault;
pub use strategy::{select_strategy, PeriodicityStrategy, StrategyChoice, StrategyKind};
pub use trace::{ConversionTrace, PeriodWindow, TraceLayout};

/// Expand `numerator / denominator` in `base` with default options.
///
/// This is a convenience function for simple use cases. For a custom budget,
/// threshold or strategy, call [`convert`] with [`ConversionOptions`].
///
/// # Example
/// ```
/// let exp = numcheck_core::expand(1, 7, 10).unwrap();
/// assert_eq!(exp.period(), &[1, 4, 2, 8, 5, 7]);
/// assert_eq!(exp.outcome.window(), Some(numcheck_core::PeriodWindow::new(0, 5)));
/// ```
pub fn expand(numerator: i64, denominator: i64, base: i64) -> Result<Expansion, ConversionError> {
    convert(
        &ConversionRequest::new(numerator, denominator, base),
        &ConversionOptions::default(),
    )
}
