//! Periodicity strategy traits and selection policy.
//!
//! `PeriodicityStrategy` is the single interface both cycle finders implement.
//! `PeriodTracker` is the optional incremental side, fed while the trace
//! grows so the driver can stop as soon as a cycle is known.

use serde::Serialize;

use crate::trace::PeriodWindow;

/// Identifies one of the two strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Constant-memory two-cursor scan over the materialized trace.
    TortoiseHare,
    /// Linear-memory set of seen remainders, checked as the trace grows.
    ExactMembership,
}

impl StrategyKind {
    /// Registry name of this strategy.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::TortoiseHare => "floyd",
            Self::ExactMembership => "exact",
        }
    }
}

/// Which strategy the driver should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyChoice {
    /// Pick by denominator threshold (see [`select_strategy`]).
    #[default]
    Auto,
    /// Always use the given strategy.
    Fixed(StrategyKind),
}

impl StrategyChoice {
    /// Resolve to a concrete strategy for `denominator`.
    #[must_use]
    pub fn resolve(self, denominator: i64, exact_threshold: i64) -> StrategyKind {
        match self {
            Self::Auto => select_strategy(denominator, exact_threshold),
            Self::Fixed(kind) => kind,
        }
    }
}

/// Threshold policy: the exact strategy for denominators below
/// `exact_threshold` (bounded state space, cheap to hold), tortoise-and-hare
/// otherwise.
#[must_use]
pub fn select_strategy(denominator: i64, exact_threshold: i64) -> StrategyKind {
    if denominator < exact_threshold {
        StrategyKind::ExactMembership
    } else {
        StrategyKind::TortoiseHare
    }
}

/// A cycle finder over remainder states.
///
/// Contract shared by every implementation: a returned window
/// `[start, end]` satisfies `remainders[start] == remainders[end + 1]` and
/// `remainders[start]` does not occur in `remainders[start + 1..=end]`.
pub trait PeriodicityStrategy: Send + Sync {
    /// Find the first cycle in a materialized trace of remainders.
    fn detect(&self, remainders: &[i64]) -> Option<PeriodWindow>;

    /// Incremental tracker, if this strategy can run while the trace grows.
    fn tracker(&self, _capacity: usize) -> Option<Box<dyn PeriodTracker>> {
        None
    }

    /// Which strategy this is.
    fn kind(&self) -> StrategyKind;

    /// Get the name of this strategy.
    fn name(&self) -> &str {
        self.kind().name()
    }
}

/// Incremental cycle finder.
pub trait PeriodTracker {
    /// Observe the newest remainder, which is the last element of
    /// `remainders`. Returns the window once a repeat is seen.
    fn observe(&mut self, remainders: &[i64]) -> Option<PeriodWindow>;
}

/// Index of the second occurrence of `value` in `remainders`, or
/// `remainders.len()` if it occurs fewer than two times.
pub(crate) fn second_occurrence(value: i64, remainders: &[i64]) -> usize {
    remainders
        .iter()
        .enumerate()
        .filter(|&(_, &r)| r == value)
        .nth(1)
        .map_or(remainders.len(), |(i, _)| i)
}
