//! Core orchestration: sequential execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use tracing::warn;

use numcheck_core::driver::{convert_with, Outcome};
use numcheck_core::error::ConversionError;
use numcheck_core::options::ConversionOptions;
use numcheck_core::request::ConversionRequest;
use numcheck_core::strategy::PeriodicityStrategy;

use crate::interfaces::ConversionReport;

/// Run every strategy over the same request, one after another.
pub fn execute_conversions(
    strategies: &[Arc<dyn PeriodicityStrategy>],
    request: &ConversionRequest,
    opts: &ConversionOptions,
) -> Vec<ConversionReport> {
    strategies
        .iter()
        .map(|strategy| {
            let start = Instant::now();
            let outcome = convert_with(strategy.as_ref(), request, opts);
            ConversionReport {
                strategy: strategy.kind(),
                outcome,
                duration: start.elapsed(),
            }
        })
        .collect()
}

/// Whether two outcomes of the same request are compatible.
///
/// Terminating and periodic results must match exactly. An inconclusive
/// result next to a periodic one is the expected divergence of a bounded
/// strategy on a short trace.
fn outcomes_agree(a: Outcome, b: Outcome) -> bool {
    match (a, b) {
        (Outcome::Inconclusive, Outcome::Periodic(_))
        | (Outcome::Periodic(_), Outcome::Inconclusive) => true,
        _ => a == b,
    }
}

/// Analyze comparison results for mismatches.
///
/// A failed run fails the comparison with its error: validation and
/// overflow faults do not depend on the strategy.
pub fn analyze_comparison_results(reports: &[ConversionReport]) -> Result<(), ConversionError> {
    if reports.is_empty() {
        return Err(ConversionError::Config("no strategies were run".into()));
    }

    let mut expansions = Vec::with_capacity(reports.len());
    for report in reports {
        match &report.outcome {
            Ok(expansion) => expansions.push((report.name(), expansion)),
            Err(e) => return Err(e.clone()),
        }
    }

    let (first_name, first) = expansions[0];
    for &(name, other) in &expansions[1..] {
        if !outcomes_agree(first.outcome, other.outcome) {
            return Err(ConversionError::Mismatch);
        }
        if first.outcome != other.outcome {
            warn!(
                first = first_name,
                first_outcome = first.outcome.label(),
                other = name,
                other_outcome = other.outcome.label(),
                "strategies diverge on a truncated trace"
            );
        }
    }

    Ok(())
}
