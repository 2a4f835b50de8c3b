//! Conversion trace and period window.
//!
//! Entry `i` of a trace is the remainder state that produced fractional
//! digit `i`, together with that digit. Entries are appended strictly in step
//! order; both periodicity strategies rely on it to find the *first*
//! repeated state.

use serde::Serialize;

/// Inclusive digit range `[start, end]` of the first identified cycle.
///
/// Digits before `start` form the non-repeating prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PeriodWindow {
    pub start: usize,
    pub end: usize,
}

impl PeriodWindow {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "empty period window");
        Self { start, end }
    }

    /// Number of digits in one period.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// A window always covers at least one digit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// How much state a trace records per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceLayout {
    /// Remainders and digits only.
    #[default]
    Compact,
    /// Also records the denominator at every step (legacy two-vector
    /// layout). Cycle identity still uses the remainder alone.
    Paired,
}

/// Ordered `(remainder, digit)` pairs of a fractional expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionTrace {
    #[serde(skip)]
    remainders: Vec<i64>,
    digits: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    denominators: Option<Vec<i64>>,
}

impl ConversionTrace {
    /// Create an empty trace with room for `capacity` steps.
    #[must_use]
    pub fn with_capacity(layout: TraceLayout, capacity: usize) -> Self {
        Self {
            remainders: Vec::with_capacity(capacity),
            digits: Vec::with_capacity(capacity),
            denominators: match layout {
                TraceLayout::Compact => None,
                TraceLayout::Paired => Some(Vec::with_capacity(capacity)),
            },
        }
    }

    /// Append one step.
    pub fn push(&mut self, remainder: i64, digit: i64, denominator: i64) {
        self.remainders.push(remainder);
        self.digits.push(digit);
        if let Some(denominators) = &mut self.denominators {
            denominators.push(denominator);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Remainder states in step order.
    #[must_use]
    pub fn remainders(&self) -> &[i64] {
        &self.remainders
    }

    /// Fractional digits in step order.
    #[must_use]
    pub fn digits(&self) -> &[i64] {
        &self.digits
    }

    /// Per-step denominators, if recorded.
    #[must_use]
    pub fn denominators(&self) -> Option<&[i64]> {
        self.denominators.as_deref()
    }

    #[must_use]
    pub fn layout(&self) -> TraceLayout {
        if self.denominators.is_some() {
            TraceLayout::Paired
        } else {
            TraceLayout::Compact
        }
    }
}
