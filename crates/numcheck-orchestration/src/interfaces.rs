//! Orchestration interfaces.

use std::time::Duration;

use numcheck_core::driver::Expansion;
use numcheck_core::error::ConversionError;
use numcheck_core::strategy::StrategyKind;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present one conversion.
    fn present_result(&self, report: &ConversionReport, details: bool);

    /// Present a side-by-side comparison of several strategies.
    fn present_comparison(&self, reports: &[ConversionReport]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of running one strategy over one request.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub strategy: StrategyKind,
    /// The expansion or a structured error.
    pub outcome: Result<Expansion, ConversionError>,
    pub duration: Duration,
}

impl ConversionReport {
    /// Strategy name for display.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.strategy.name()
    }
}
