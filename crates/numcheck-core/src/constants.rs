//! Limits and defaults shared by the conversion engine and the calculators.

/// Default maximum trace length before a conversion is declared inconclusive.
pub const DEFAULT_ITERATION_BUDGET: usize = 2_500_000;

/// Budget used by the old quadratic scanner. Kept as a convenient small
/// budget for callers that want a fast, bounded answer.
pub const LEGACY_ITERATION_BUDGET: usize = 25_000;

/// Denominators below this use the exact membership strategy; larger ones
/// use tortoise-and-hare.
///
/// The exact strategy holds at most `min(budget, denominator)` remainders,
/// so this bounds its set at roughly 1M entries.
pub const DEFAULT_EXACT_THRESHOLD: i64 = 1_000_000;

/// Largest base that can be rendered with the `0-9A-Z` alphabet.
pub const MAX_BASE: i64 = 36;

/// Largest numerator/denominator accepted at the CLI boundary (10^9).
///
/// With `base <= 36` this keeps `remainder * base` far below `i64::MAX`.
pub const MAX_INPUT: i64 = 1_000_000_000;

/// Longest digit string accepted by integer base conversion.
pub const MAX_DIGIT_STRING_LEN: usize = 12;

/// Largest input to continued fraction conversion (10^8).
pub const MAX_CONTINUED_FRACTION_INPUT: i64 = 100_000_000;

/// Largest lcm searched when CRT moduli are not pairwise coprime (10^7).
pub const MAX_BRUTE_FORCE: i64 = 10_000_000;

/// Largest product of CRT moduli (10^18).
pub const MAX_MODULI_PRODUCT: i64 = 1_000_000_000_000_000_000;

/// Sieve sizes above this are slow and memory hungry; logged as a warning.
pub const LARGE_SIEVE_INPUT: usize = 20_000_000;

/// Largest sieve limit accepted (2 * 10^8, one byte per entry).
pub const MAX_SIEVE_INPUT: usize = 200_000_000;

/// Exit codes for the `numcheck` binary.
pub mod exit_codes {
    /// Successful execution (including inconclusive expansions).
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A long-division step overflowed `i64`.
    pub const ERROR_OVERFLOW: i32 = 2;
    /// Periodicity strategies disagreed on a classification.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid input or configuration.
    pub const ERROR_INVALID: i32 = 4;
}
