//! Systems of congruences `x ≡ c_i (mod m_i)`.
//!
//! Pairwise coprime moduli are solved constructively. Otherwise the system
//! may or may not be solvable, and the least solution is searched for in
//! `[0, lcm)` as long as the lcm is small enough.

use std::fmt;
use std::str::FromStr;

use num_integer::Integer;
use serde::Serialize;
use tracing::debug;

use numcheck_core::constants::{MAX_BRUTE_FORCE, MAX_MODULI_PRODUCT};

use crate::error::ArithError;

/// A single congruence `x ≡ constant (mod modulus)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Congruence {
    pub constant: i64,
    pub modulus: i64,
}

impl Congruence {
    #[must_use]
    pub fn new(constant: i64, modulus: i64) -> Self {
        Self { constant, modulus }
    }

    /// Whether `value` satisfies this congruence.
    #[must_use]
    pub fn holds(&self, value: i64) -> bool {
        (i128::from(value) - i128::from(self.constant)).rem_euclid(i128::from(self.modulus)) == 0
    }
}

impl FromStr for Congruence {
    type Err = ArithError;

    /// Parse `C:M`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ArithError::InvalidInput(format!("expected CONSTANT:MODULUS, got '{s}'"));
        let (c, m) = s.split_once(':').ok_or_else(invalid)?;
        let constant = c.trim().parse().map_err(|_| invalid())?;
        let modulus = m.trim().parse().map_err(|_| invalid())?;
        Ok(Self { constant, modulus })
    }
}

/// How a solution was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrtMethod {
    /// Pairwise coprime moduli, solved with modular inverses.
    Constructive,
    /// Search over `[0, lcm)`.
    Search,
}

/// Least non-negative solution, unique modulo `modulus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrtSolution {
    pub value: i64,
    pub modulus: i64,
    pub method: CrtMethod,
}

impl fmt::Display for CrtSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x ≡ {} (mod {})", self.value, self.modulus)
    }
}

fn moduli_product(congruences: &[Congruence]) -> Result<i64, ArithError> {
    let product = congruences.iter().try_fold(1i64, |acc, c| acc.checked_mul(c.modulus));
    match product {
        Some(p) if p <= MAX_MODULI_PRODUCT => Ok(p),
        _ => Err(ArithError::Overflow(format!(
            "product of moduli exceeds {MAX_MODULI_PRODUCT}"
        ))),
    }
}

/// Solve a system of congruences with moduli `>= 1`.
pub fn solve_congruences(congruences: &[Congruence]) -> Result<CrtSolution, ArithError> {
    if congruences.is_empty() {
        return Err(ArithError::InvalidInput("no congruences given".into()));
    }
    if let Some(bad) = congruences.iter().find(|c| c.modulus < 1) {
        return Err(ArithError::InvalidInput(format!(
            "modulus must be at least 1, got {}",
            bad.modulus
        )));
    }

    let product = moduli_product(congruences)?;
    // lcm divides the product, so it cannot overflow.
    let lcm = congruences.iter().fold(1i64, |acc, c| acc.lcm(&c.modulus));

    if lcm == product {
        debug!(count = congruences.len(), product, "moduli are pairwise coprime");
        Ok(constructive(congruences, product))
    } else {
        debug!(count = congruences.len(), lcm, "moduli share factors, searching");
        search(congruences, lcm)
    }
}

fn constructive(congruences: &[Congruence], product: i64) -> CrtSolution {
    let big_m = i128::from(product);
    let sum = congruences.iter().fold(0i128, |acc, c| {
        let m = i128::from(c.modulus);
        let partial = big_m / m;
        // partial and m are coprime, so x is an inverse of partial mod m.
        let inverse = partial.extended_gcd(&m).x.rem_euclid(m);
        let term = partial * inverse % big_m * i128::from(c.constant).rem_euclid(m) % big_m;
        (acc + term) % big_m
    });

    CrtSolution {
        // The sum was reduced modulo `product`, which fits in `i64`.
        value: i64::try_from(sum).unwrap_or_default(),
        modulus: product,
        method: CrtMethod::Constructive,
    }
}

fn search(congruences: &[Congruence], lcm: i64) -> Result<CrtSolution, ArithError> {
    if lcm > MAX_BRUTE_FORCE {
        return Err(ArithError::InvalidInput(format!(
            "moduli are not pairwise coprime and their lcm {lcm} exceeds the search limit {MAX_BRUTE_FORCE}"
        )));
    }
    (0..lcm)
        .find(|&x| congruences.iter().all(|c| c.holds(x)))
        .map(|value| CrtSolution {
            value,
            modulus: lcm,
            method: CrtMethod::Search,
        })
        .ok_or_else(|| ArithError::NoSolution("the congruences are inconsistent".into()))
}
