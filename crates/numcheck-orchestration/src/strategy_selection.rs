//! Strategy selection logic.

use std::sync::Arc;

use numcheck_core::error::ConversionError;
use numcheck_core::registry::StrategyFactory;
use numcheck_core::strategy::{select_strategy, PeriodicityStrategy};

/// Get strategies to run for a `--strategy` value.
///
/// `auto` applies the denominator threshold, `all` returns every registered
/// strategy, anything else is looked up by name.
pub fn get_strategies_to_run(
    choice: &str,
    factory: &dyn StrategyFactory,
    denominator: i64,
    exact_threshold: i64,
) -> Result<Vec<Arc<dyn PeriodicityStrategy>>, ConversionError> {
    match choice {
        "auto" => {
            let kind = select_strategy(denominator, exact_threshold);
            Ok(vec![factory.get(kind.name())?])
        }
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}
