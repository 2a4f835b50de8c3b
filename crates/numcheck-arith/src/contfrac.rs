//! Simple continued fractions and their convergents, read off the extended
//! Euclidean table.

use std::fmt;

use serde::Serialize;

use numcheck_core::constants::MAX_CONTINUED_FRACTION_INPUT;

use crate::error::ArithError;
use crate::extended::EeaTable;

fn table_for(numerator: i64, denominator: i64) -> Result<EeaTable, ArithError> {
    if !(0..=MAX_CONTINUED_FRACTION_INPUT).contains(&numerator) {
        return Err(ArithError::InvalidInput(format!(
            "numerator must be between 0 and {MAX_CONTINUED_FRACTION_INPUT}, got {numerator}"
        )));
    }
    if !(1..=MAX_CONTINUED_FRACTION_INPUT).contains(&denominator) {
        return Err(ArithError::InvalidInput(format!(
            "denominator must be between 1 and {MAX_CONTINUED_FRACTION_INPUT}, got {denominator}"
        )));
    }
    EeaTable::build(numerator, denominator)
}

/// Quotients `[a0; a1, ..., ak]` of `numerator / denominator`.
pub fn continued_fraction(numerator: i64, denominator: i64) -> Result<Vec<i64>, ArithError> {
    Ok(table_for(numerator, denominator)?.quotients)
}

/// Render quotients as `[a0; a1, a2]`.
#[must_use]
pub fn format_continued_fraction(quotients: &[i64]) -> String {
    match quotients.split_first() {
        None => "[]".to_string(),
        Some((first, [])) => format!("[{first}]"),
        Some((first, rest)) => {
            let rest: Vec<String> = rest.iter().map(ToString::to_string).collect();
            format!("[{first}; {}]", rest.join(", "))
        }
    }
}

/// The `index`-th convergent `numerator / denominator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Convergent {
    pub index: usize,
    pub numerator: i64,
    pub denominator: i64,
    /// `b` such that the convergent is within `1 / b` of the fraction.
    /// Absent for the last convergent, which is exact.
    pub error_bound: Option<i64>,
}

impl fmt::Display for Convergent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Convergent {}: {} / {}",
            self.index, self.numerator, self.denominator
        )?;
        if let Some(bound) = self.error_bound {
            write!(f, " (error bound 1 / {bound})")?;
        }
        Ok(())
    }
}

/// Every convergent of `numerator / denominator`.
///
/// Convergent `k` is `|y_{k+2}| / |x_{k+2}|` from the table, and its error
/// bound is `a_{k+1} * x_{k+2}^2`.
pub fn convergents(numerator: i64, denominator: i64) -> Result<Vec<Convergent>, ArithError> {
    let table = table_for(numerator, denominator)?;
    let count = table.quotients.len();

    (0..count)
        .map(|k| {
            let x = table.x[k + 2].abs();
            let y = table.y[k + 2].abs();
            let error_bound = match table.quotients.get(k + 1) {
                Some(&next) => Some(
                    x.checked_mul(x)
                        .and_then(|sq| sq.checked_mul(next))
                        .ok_or_else(|| ArithError::overflow("error bound"))?,
                ),
                None => None,
            };
            Ok(Convergent {
                index: k,
                numerator: y,
                denominator: x,
                error_bound,
            })
        })
        .collect()
}
