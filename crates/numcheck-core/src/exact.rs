//! Exact membership cycle detection.
//!
//! Keeps every remainder seen so far in a hash set. The first remainder that
//! is already present closes the first cycle, so the result is always exact,
//! at the cost of memory linear in the trace length.

use std::collections::HashSet;

use crate::strategy::{PeriodTracker, PeriodicityStrategy, StrategyKind};
use crate::trace::PeriodWindow;

/// Linear-memory strategy.
pub struct ExactMembership;

impl ExactMembership {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExactMembership {
    fn default() -> Self {
        Self::new()
    }
}

impl PeriodicityStrategy for ExactMembership {
    fn detect(&self, remainders: &[i64]) -> Option<PeriodWindow> {
        let mut tracker = MembershipTracker::with_capacity(remainders.len());
        (1..=remainders.len()).find_map(|end| tracker.observe(&remainders[..end]))
    }

    fn tracker(&self, capacity: usize) -> Option<Box<dyn PeriodTracker>> {
        Some(Box::new(MembershipTracker::with_capacity(capacity)))
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::ExactMembership
    }
}

/// Incremental side of [`ExactMembership`].
pub struct MembershipTracker {
    seen: HashSet<i64>,
}

impl MembershipTracker {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
        }
    }
}

impl PeriodTracker for MembershipTracker {
    fn observe(&mut self, remainders: &[i64]) -> Option<PeriodWindow> {
        let (&newest, _) = remainders.split_last()?;
        if self.seen.insert(newest) {
            return None;
        }

        // Repeat: locate both occurrences with a forward scan. The newest
        // entry is the second occurrence.
        let mut occurrences = remainders
            .iter()
            .enumerate()
            .filter(|&(_, &r)| r == newest)
            .map(|(i, _)| i);
        let first = occurrences.next()?;
        let second = occurrences.next()?;
        Some(PeriodWindow::new(first, second - 1))
    }
}
