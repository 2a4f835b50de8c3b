//! Linear Diophantine equations `a*x + b*y = c`.

use std::fmt;

use serde::Serialize;

use numcheck_core::constants::MAX_INPUT;

use crate::error::ArithError;
use crate::extended::extended_euclid;

/// General solution `x = x0 + x_step*k`, `y = y0 - y_step*k` for integer `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiophantineSolution {
    pub x0: i64,
    pub y0: i64,
    pub x_step: i64,
    pub y_step: i64,
}

impl DiophantineSolution {
    /// The particular solution for parameter `k`.
    pub fn at(&self, k: i64) -> Result<(i64, i64), ArithError> {
        let x = self
            .x_step
            .checked_mul(k)
            .and_then(|s| self.x0.checked_add(s));
        let y = self
            .y_step
            .checked_mul(k)
            .and_then(|s| self.y0.checked_sub(s));
        x.zip(y).ok_or_else(|| ArithError::overflow("solution"))
    }
}

impl fmt::Display for DiophantineSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x = {} + {}k, y = {} - {}k",
            self.x0, self.x_step, self.y0, self.y_step
        )
    }
}

/// Solve `a*x + b*y = c` for `0 < a, b <= 10^9` and `|c| <= 10^9`.
pub fn solve_linear_diophantine(a: i64, b: i64, c: i64) -> Result<DiophantineSolution, ArithError> {
    if c.unsigned_abs() > MAX_INPUT.unsigned_abs() {
        return Err(ArithError::InvalidInput(format!(
            "constant must be at most {MAX_INPUT} in magnitude, got {c}"
        )));
    }
    let table = extended_euclid(a, b)?;
    let g = table.gcd();
    if c % g != 0 {
        return Err(ArithError::NoSolution(format!(
            "gcd({a}, {b}) = {g} does not divide {c}"
        )));
    }

    let (x, y) = table.bezout();
    let (x_last, y_last) = table.null_coefficients();
    let scale = c / g;
    let x0 = scale
        .checked_mul(x)
        .ok_or_else(|| ArithError::overflow("particular x"))?;
    let y0 = scale
        .checked_mul(y)
        .ok_or_else(|| ArithError::overflow("particular y"))?;

    Ok(DiophantineSolution {
        x0,
        y0,
        x_step: x_last.abs(),
        y_step: y_last.abs(),
    })
}
