//! Conversion driver.
//!
//! Splits off the integer part, runs the long-division loop under the
//! iteration budget, then classifies the trace:
//!
//! 1. the remainder reaches zero: [`Outcome::Terminating`];
//! 2. a cycle is found, either by an incremental tracker while the loop
//!    runs or by the strategy over the finished trace: [`Outcome::Periodic`];
//! 3. the budget runs out with no cycle found: [`Outcome::Inconclusive`].

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ConversionError;
use crate::options::ConversionOptions;
use crate::radix::whole_digits;
use crate::registry::create_strategy;
use crate::request::ConversionRequest;
use crate::stepper::step;
use crate::strategy::{PeriodicityStrategy, StrategyKind};
use crate::trace::{ConversionTrace, PeriodWindow};

/// Terminal classification of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// The remainder reached zero; the trace is the whole expansion.
    Terminating,
    /// The digits in the window repeat forever.
    Periodic(PeriodWindow),
    /// The budget ran out before the expansion ended or repeated.
    Inconclusive,
}

impl Outcome {
    /// Short lowercase label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Terminating => "terminating",
            Self::Periodic(_) => "periodic",
            Self::Inconclusive => "inconclusive",
        }
    }

    #[must_use]
    pub fn window(&self) -> Option<PeriodWindow> {
        match self {
            Self::Periodic(window) => Some(*window),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_periodic(&self) -> bool {
        matches!(self, Self::Periodic(_))
    }
}

/// Result of converting one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expansion {
    pub request: ConversionRequest,
    /// Digits of the whole-number part, most significant first.
    pub integer_digits: Vec<i64>,
    pub trace: ConversionTrace,
    pub outcome: Outcome,
    /// Strategy that classified the trace.
    pub strategy: StrategyKind,
}

impl Expansion {
    /// Every computed fractional digit.
    #[must_use]
    pub fn fraction_digits(&self) -> &[i64] {
        self.trace.digits()
    }

    /// Digits before the period. For non-periodic outcomes this is every
    /// computed digit.
    #[must_use]
    pub fn prefix(&self) -> &[i64] {
        let digits = self.trace.digits();
        match self.outcome {
            Outcome::Periodic(window) => &digits[..window.start],
            _ => digits,
        }
    }

    /// Digits of one period, empty unless periodic.
    #[must_use]
    pub fn period(&self) -> &[i64] {
        match self.outcome {
            Outcome::Periodic(window) => &self.trace.digits()[window.start..=window.end],
            _ => &[],
        }
    }
}

/// Convert a request, choosing the strategy from `options.strategy`.
pub fn convert(
    request: &ConversionRequest,
    options: &ConversionOptions,
) -> Result<Expansion, ConversionError> {
    request.validate()?;
    let kind = options
        .strategy
        .resolve(request.denominator, options.exact_threshold);
    let strategy = create_strategy(kind);
    convert_with(strategy.as_ref(), request, options)
}

/// Convert a request with an explicit strategy.
pub fn convert_with(
    strategy: &dyn PeriodicityStrategy,
    request: &ConversionRequest,
    options: &ConversionOptions,
) -> Result<Expansion, ConversionError> {
    request.validate()?;
    let ConversionRequest {
        denominator, base, ..
    } = *request;
    let budget = options.iteration_budget;

    debug!(
        numerator = request.numerator,
        denominator,
        base,
        budget,
        strategy = strategy.name(),
        "starting conversion"
    );

    let integer_digits = whole_digits(request.integer_part(), base);

    // At most `denominator` distinct remainders exist, so a repeat shows up
    // within `denominator + 1` steps.
    let capacity = usize::try_from(denominator)
        .map_or(budget, |d| budget.min(d.saturating_add(1)));
    let mut trace = ConversionTrace::with_capacity(options.layout, capacity);
    let mut tracker = strategy.tracker(capacity);
    let mut remainder = request.fractional_numerator();

    let outcome = loop {
        if remainder == 0 {
            break Outcome::Terminating;
        }
        if trace.len() >= budget {
            let window = if tracker.is_some() {
                // The tracker already saw every state.
                None
            } else {
                strategy.detect(trace.remainders())
            };
            break window.map_or(Outcome::Inconclusive, Outcome::Periodic);
        }

        let next = step(remainder, denominator, base).map_err(|source| {
            warn!(
                step = trace.len(),
                remainder,
                base,
                error = %source,
                "conversion aborted"
            );
            ConversionError::Arithmetic {
                step: trace.len(),
                source,
            }
        })?;
        trace.push(remainder, next.digit, denominator);

        if let Some(window) = tracker
            .as_mut()
            .and_then(|t| t.observe(trace.remainders()))
        {
            break Outcome::Periodic(window);
        }
        remainder = next.remainder;
    };

    if outcome == Outcome::Inconclusive {
        info!(
            numerator = request.numerator,
            denominator,
            base,
            digits = trace.len(),
            "no termination or cycle within the iteration budget"
        );
    }
    debug!(
        trace_len = trace.len(),
        outcome = outcome.label(),
        "conversion finished"
    );

    Ok(Expansion {
        request: *request,
        integer_digits,
        trace,
        outcome,
        strategy: strategy.kind(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::ExactMembership;
    use crate::floyd::TortoiseHare;
    use crate::stepper::StepFault;
    use crate::strategy::StrategyChoice;
    use crate::trace::TraceLayout;

    fn opts(budget: usize, kind: StrategyKind) -> ConversionOptions {
        ConversionOptions::default()
            .with_budget(budget)
            .with_strategy(StrategyChoice::Fixed(kind))
    }

    const BOTH: [StrategyKind; 2] = [StrategyKind::TortoiseHare, StrategyKind::ExactMembership];

    #[test]
    fn one_third() {
        for kind in BOTH {
            let exp = convert(&ConversionRequest::new(1, 3, 10), &opts(100, kind)).unwrap();
            assert_eq!(exp.outcome, Outcome::Periodic(PeriodWindow::new(0, 0)));
            assert_eq!(exp.period(), &[3]);
            assert!(exp.prefix().is_empty());
            assert!(exp.fraction_digits().iter().all(|&d| d == 3));
            assert_eq!(exp.strategy, kind);
        }
    }

    #[test]
    fn one_quarter_terminates() {
        for kind in BOTH {
            let exp = convert(&ConversionRequest::new(1, 4, 10), &opts(100, kind)).unwrap();
            assert_eq!(exp.outcome, Outcome::Terminating);
            assert_eq!(exp.fraction_digits(), &[2, 5]);
            assert_eq!(exp.outcome.window(), None);
        }
    }

    #[test]
    fn one_seventh() {
        for kind in BOTH {
            let exp = convert(&ConversionRequest::new(1, 7, 10), &opts(100, kind)).unwrap();
            assert_eq!(exp.outcome, Outcome::Periodic(PeriodWindow::new(0, 5)));
            assert_eq!(exp.period(), &[1, 4, 2, 8, 5, 7]);
        }
    }

    #[test]
    fn zero_numerator() {
        for kind in BOTH {
            let exp = convert(&ConversionRequest::new(0, 9, 10), &opts(100, kind)).unwrap();
            assert_eq!(exp.outcome, Outcome::Terminating);
            assert!(exp.trace.is_empty());
            assert_eq!(exp.integer_digits, vec![0]);
        }
    }

    #[test]
    fn integer_part_is_separate() {
        let exp = convert(
            &ConversionRequest::new(22, 7, 10),
            &opts(100, StrategyKind::ExactMembership),
        )
        .unwrap();
        assert_eq!(exp.integer_digits, vec![3]);
        assert_eq!(exp.period(), &[1, 4, 2, 8, 5, 7]);

        // 13/4 in base 2 = 11.01
        let exp = convert(
            &ConversionRequest::new(13, 4, 2),
            &opts(100, StrategyKind::TortoiseHare),
        )
        .unwrap();
        assert_eq!(exp.integer_digits, vec![1, 1]);
        assert_eq!(exp.fraction_digits(), &[0, 1]);
        assert_eq!(exp.outcome, Outcome::Terminating);
    }

    #[test]
    fn prefix_and_period() {
        // 1/6 = 0.1(6)
        for kind in BOTH {
            let exp = convert(&ConversionRequest::new(1, 6, 10), &opts(100, kind)).unwrap();
            assert_eq!(exp.prefix(), &[1]);
            assert_eq!(exp.period(), &[6]);
        }
    }

    #[test]
    fn other_base() {
        // 5/7 in base 2 = 0.(101)
        for kind in BOTH {
            let exp = convert(&ConversionRequest::new(5, 7, 2), &opts(100, kind)).unwrap();
            assert_eq!(exp.outcome, Outcome::Periodic(PeriodWindow::new(0, 2)));
            assert_eq!(exp.period(), &[1, 0, 1]);
        }
    }

    #[test]
    fn exact_stops_early() {
        let exp = convert(
            &ConversionRequest::new(1, 7, 10),
            &opts(1000, StrategyKind::ExactMembership),
        )
        .unwrap();
        // Six distinct states plus the repeat.
        assert_eq!(exp.trace.len(), 7);
    }

    #[test]
    fn floyd_runs_to_budget() {
        let exp = convert(
            &ConversionRequest::new(1, 7, 10),
            &opts(50, StrategyKind::TortoiseHare),
        )
        .unwrap();
        assert_eq!(exp.trace.len(), 50);
        assert!(exp.outcome.is_periodic());
    }

    #[test]
    fn budget_exhausted_is_inconclusive() {
        // 1/97 has period 96.
        for kind in BOTH {
            let exp = convert(&ConversionRequest::new(1, 97, 10), &opts(20, kind)).unwrap();
            assert_eq!(exp.outcome, Outcome::Inconclusive);
            assert_eq!(exp.trace.len(), 20);
            assert_eq!(exp.period(), &[] as &[i64]);
            assert_eq!(exp.prefix().len(), 20);
        }
    }

    #[test]
    fn zero_budget() {
        let exp = convert(
            &ConversionRequest::new(1, 3, 10),
            &opts(0, StrategyKind::ExactMembership),
        )
        .unwrap();
        assert_eq!(exp.outcome, Outcome::Inconclusive);
        assert!(exp.trace.is_empty());
    }

    #[test]
    fn strategies_diverge_on_short_trace() {
        // 1/7 within 10 digits: the exact strategy sees the repeat at
        // index 6, the hare wraps before meeting the tortoise.
        let req = ConversionRequest::new(1, 7, 10);
        let floyd = convert(&req, &opts(10, StrategyKind::TortoiseHare)).unwrap();
        let exact = convert(&req, &opts(10, StrategyKind::ExactMembership)).unwrap();
        assert_eq!(floyd.outcome, Outcome::Inconclusive);
        assert_eq!(exact.outcome, Outcome::Periodic(PeriodWindow::new(0, 5)));
    }

    #[test]
    fn auto_uses_threshold() {
        let req = ConversionRequest::new(1, 41, 10);
        let mut options = ConversionOptions::default().with_budget(10);
        options.exact_threshold = 10;
        let exp = convert(&req, &options).unwrap();
        assert_eq!(exp.strategy, StrategyKind::TortoiseHare);
        // The hare wraps and still lands on the 5-digit cycle.
        assert_eq!(exp.outcome, Outcome::Periodic(PeriodWindow::new(0, 4)));

        options.exact_threshold = 1000;
        let exp = convert(&req, &options).unwrap();
        assert_eq!(exp.strategy, StrategyKind::ExactMembership);
        assert_eq!(exp.outcome, Outcome::Periodic(PeriodWindow::new(0, 4)));
    }

    #[test]
    fn overflow_aborts() {
        // Remainders run through powers of 4 until 4^31 * 4 overflows.
        let req = ConversionRequest::new(1, (1i64 << 62) + 1, 4);
        for kind in BOTH {
            let err = convert(&req, &opts(100, kind)).unwrap_err();
            assert_eq!(
                err,
                ConversionError::Arithmetic {
                    step: 31,
                    source: StepFault::Overflow {
                        remainder: 1 << 62,
                        base: 4
                    }
                }
            );
            assert!(err.is_overflow());
        }
    }

    #[test]
    fn invalid_requests() {
        let options = ConversionOptions::default();
        for req in [
            ConversionRequest::new(1, 0, 10),
            ConversionRequest::new(-1, 3, 10),
            ConversionRequest::new(1, 3, 1),
        ] {
            assert!(matches!(
                convert(&req, &options),
                Err(ConversionError::InvalidRequest(_))
            ));
        }
    }

    #[test]
    fn large_base_allowed() {
        // 1/3 in base 100 = 0.(33)
        let exp = convert_with(
            &ExactMembership::new(),
            &ConversionRequest::new(1, 3, 100),
            &ConversionOptions::default(),
        )
        .unwrap();
        assert_eq!(exp.period(), &[33]);
    }

    #[test]
    fn paired_layout_records_denominator() {
        let mut options = opts(100, StrategyKind::ExactMembership);
        options.layout = TraceLayout::Paired;
        let exp = convert(&ConversionRequest::new(1, 6, 10), &options).unwrap();
        let denominators = exp.trace.denominators().unwrap();
        assert_eq!(denominators.len(), exp.trace.len());
        assert!(denominators.iter().all(|&d| d == 6));
        assert_eq!(exp.outcome, Outcome::Periodic(PeriodWindow::new(1, 1)));
    }

    #[test]
    fn idempotent() {
        let req = ConversionRequest::new(123, 4567, 3);
        for kind in BOTH {
            let first = convert(&req, &opts(10_000, kind)).unwrap();
            let second = convert(&req, &opts(10_000, kind)).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn convert_with_explicit_strategy() {
        let exp = convert_with(
            &TortoiseHare::new(),
            &ConversionRequest::new(1, 12, 10),
            &ConversionOptions::default().with_budget(30),
        )
        .unwrap();
        assert_eq!(exp.strategy, StrategyKind::TortoiseHare);
        assert_eq!(exp.outcome, Outcome::Periodic(PeriodWindow::new(2, 2)));
    }

    #[test]
    fn outcome_json() {
        let json = serde_json::to_string(&Outcome::Periodic(PeriodWindow::new(0, 5))).unwrap();
        assert_eq!(json, r#"{"kind":"periodic","start":0,"end":5}"#);
        let json = serde_json::to_string(&Outcome::Inconclusive).unwrap();
        assert_eq!(json, r#"{"kind":"inconclusive"}"#);
    }
}
