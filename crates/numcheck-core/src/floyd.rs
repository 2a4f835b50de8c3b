//! Tortoise-and-hare cycle detection over a finished trace.
//!
//! The trace is finite, so the hare cannot run forever: when it would step
//! past the end it wraps modulo the trace length. Until the first wrap this
//! is plain Floyd (`hare == 2 * tortoise`) and finds the exact first cycle.
//! After a wrap the cursors no longer keep that relation and the scan may end
//! without a match even though the trace does repeat; the result is then
//! `None`. Whenever a window *is* reported it is the first cycle, because the
//! second pass only matches at the true cycle start.

use crate::strategy::{second_occurrence, PeriodicityStrategy, StrategyKind};
use crate::trace::PeriodWindow;

/// Constant-memory strategy.
pub struct TortoiseHare;

impl TortoiseHare {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// First pass: advance the tortoise by one and the hare by two (wrapping)
    /// until both see the same remainder. Returns the hare position.
    fn meet(remainders: &[i64]) -> Option<usize> {
        let len = remainders.len();
        let mut tortoise = 1;
        let mut hare = 2;

        while tortoise < len && remainders[tortoise] != remainders[hare] {
            tortoise += 1;
            hare += 2;
            if hare >= len {
                hare %= len;
            }
        }

        (tortoise < len).then_some(hare)
    }

    /// Second pass: restart one cursor at 0 and move both at equal speed.
    /// Returns the index where they first coincide.
    fn cycle_start(remainders: &[i64], hare: usize) -> Option<usize> {
        let len = remainders.len();
        let mut tortoise = 0;
        let mut hare = hare;

        while hare < len && remainders[tortoise] != remainders[hare] {
            tortoise += 1;
            hare += 1;
        }

        (hare < len).then_some(tortoise)
    }
}

impl Default for TortoiseHare {
    fn default() -> Self {
        Self::new()
    }
}

impl PeriodicityStrategy for TortoiseHare {
    fn detect(&self, remainders: &[i64]) -> Option<PeriodWindow> {
        // Cursors start at 1 and 2.
        if remainders.len() < 3 {
            return None;
        }

        let hare = Self::meet(remainders)?;
        let start = Self::cycle_start(remainders, hare)?;
        let second = second_occurrence(remainders[start], remainders);
        if second <= start || second >= remainders.len() {
            return None;
        }

        Some(PeriodWindow::new(start, second - 1))
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::TortoiseHare
    }
}
