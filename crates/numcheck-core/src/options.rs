//! Conversion options and configuration.

use crate::constants::{DEFAULT_EXACT_THRESHOLD, DEFAULT_ITERATION_BUDGET};
use crate::strategy::StrategyChoice;
use crate::trace::TraceLayout;

/// Options for fractional base conversion, passed to the driver per call.
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    /// Maximum number of fractional digits computed.
    pub iteration_budget: usize,
    /// Denominators below this use the exact strategy under `Auto`.
    pub exact_threshold: i64,
    /// Strategy choice.
    pub strategy: StrategyChoice,
    /// Whether per-step denominators are recorded.
    pub layout: TraceLayout,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            iteration_budget: DEFAULT_ITERATION_BUDGET,
            exact_threshold: DEFAULT_EXACT_THRESHOLD,
            strategy: StrategyChoice::Auto,
            layout: TraceLayout::Compact,
        }
    }
}

impl ConversionOptions {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.iteration_budget == 0 {
            self.iteration_budget = DEFAULT_ITERATION_BUDGET;
        }
        if self.exact_threshold <= 0 {
            self.exact_threshold = DEFAULT_EXACT_THRESHOLD;
        }
        self
    }

    /// Same options with a different budget.
    #[must_use]
    pub fn with_budget(mut self, iteration_budget: usize) -> Self {
        self.iteration_budget = iteration_budget;
        self
    }

    /// Same options with a different strategy choice.
    #[must_use]
    pub fn with_strategy(mut self, strategy: StrategyChoice) -> Self {
        self.strategy = strategy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::StrategyKind;

    #[test]
    fn default_options() {
        let opts = ConversionOptions::default();
        assert_eq!(opts.iteration_budget, DEFAULT_ITERATION_BUDGET);
        assert_eq!(opts.exact_threshold, DEFAULT_EXACT_THRESHOLD);
        assert_eq!(opts.strategy, StrategyChoice::Auto);
        assert_eq!(opts.layout, TraceLayout::Compact);
    }

    #[test]
    fn normalize_zero_values() {
        let opts = ConversionOptions {
            iteration_budget: 0,
            exact_threshold: 0,
            ..Default::default()
        };
        let normalized = opts.normalize();
        assert_eq!(normalized.iteration_budget, DEFAULT_ITERATION_BUDGET);
        assert_eq!(normalized.exact_threshold, DEFAULT_EXACT_THRESHOLD);
    }

    #[test]
    fn builders() {
        let opts = ConversionOptions::default()
            .with_budget(10)
            .with_strategy(StrategyChoice::Fixed(StrategyKind::TortoiseHare));
        assert_eq!(opts.iteration_budget, 10);
        assert_eq!(
            opts.strategy,
            StrategyChoice::Fixed(StrategyKind::TortoiseHare)
        );
    }
}
