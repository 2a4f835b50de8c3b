//! Extended Euclidean algorithm as a table of quotients, remainders and
//! Bézout coefficients.
//!
//! Rows are seeded with `r = [a, b]`, `x = [1, 0]`, `y = [0, 1]`; each
//! division adds `q_k = r_k / r_{k+1}`, `r_{k+2} = r_k mod r_{k+1}` and
//! `x_{k+2} = x_k - q_k * x_{k+1}` (likewise `y`). The table ends with a
//! zero remainder, so the gcd and its coefficients sit in the penultimate
//! column.

use serde::Serialize;

use numcheck_core::constants::MAX_INPUT;

use crate::error::ArithError;

/// Completed extended Euclidean table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EeaTable {
    pub quotients: Vec<i64>,
    pub remainders: Vec<i64>,
    pub x: Vec<i64>,
    pub y: Vec<i64>,
}

impl EeaTable {
    /// Build the table without range checks. Requires `a >= 0`, `b > 0`.
    pub(crate) fn build(a: i64, b: i64) -> Result<Self, ArithError> {
        let mut table = Self {
            quotients: Vec::new(),
            remainders: vec![a, b],
            x: vec![1, 0],
            y: vec![0, 1],
        };

        loop {
            let n = table.remainders.len();
            let (prev, last) = (table.remainders[n - 2], table.remainders[n - 1]);
            if last == 0 {
                break;
            }
            let q = prev / last;
            table.quotients.push(q);
            table.remainders.push(prev % last);
            table.x.push(next_coefficient(&table.x, q)?);
            table.y.push(next_coefficient(&table.y, q)?);
        }

        Ok(table)
    }

    /// Inputs `(a, b)`.
    #[must_use]
    pub fn inputs(&self) -> (i64, i64) {
        (self.remainders[0], self.remainders[1])
    }

    #[must_use]
    pub fn gcd(&self) -> i64 {
        self.remainders[self.remainders.len() - 2]
    }

    /// Coefficients `(x, y)` with `x * a + y * b == gcd`.
    #[must_use]
    pub fn bezout(&self) -> (i64, i64) {
        (self.x[self.x.len() - 2], self.y[self.y.len() - 2])
    }

    /// Coefficients of the final column, with `x * a + y * b == 0`.
    #[must_use]
    pub fn null_coefficients(&self) -> (i64, i64) {
        (self.x[self.x.len() - 1], self.y[self.y.len() - 1])
    }

    /// Check the Bézout identity.
    #[must_use]
    pub fn verify(&self) -> bool {
        let (a, b) = self.inputs();
        let (x, y) = self.bezout();
        i128::from(x) * i128::from(a) + i128::from(y) * i128::from(b) == i128::from(self.gcd())
    }

    /// Number of division steps.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.quotients.len()
    }
}

fn next_coefficient(column: &[i64], q: i64) -> Result<i64, ArithError> {
    let n = column.len();
    q.checked_mul(column[n - 1])
        .and_then(|p| column[n - 2].checked_sub(p))
        .ok_or_else(|| ArithError::overflow("Bézout coefficient"))
}

/// Run the extended Euclidean algorithm on `0 < a, b <= 10^9`.
pub fn extended_euclid(a: i64, b: i64) -> Result<EeaTable, ArithError> {
    if a <= 0 || b <= 0 {
        return Err(ArithError::InvalidInput(format!(
            "both numbers must be positive, got {a} and {b}"
        )));
    }
    if a > MAX_INPUT || b > MAX_INPUT {
        return Err(ArithError::InvalidInput(format!(
            "inputs above {MAX_INPUT} can overflow"
        )));
    }
    EeaTable::build(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_240_46() {
        let table = extended_euclid(240, 46).unwrap();
        assert_eq!(table.quotients, vec![5, 4, 1, 1, 2]);
        assert_eq!(table.remainders, vec![240, 46, 10, 6, 4, 2, 0]);
        assert_eq!(table.x, vec![1, 0, 1, -4, 5, -9, 23]);
        assert_eq!(table.y, vec![0, 1, -5, 21, -26, 47, -120]);
        assert_eq!(table.gcd(), 2);
        assert_eq!(table.bezout(), (-9, 47));
        assert_eq!(table.null_coefficients(), (23, -120));
        assert!(table.verify());
        assert_eq!(table.iterations(), 5);
    }

    #[test]
    fn smaller_first() {
        let table = extended_euclid(3, 7).unwrap();
        assert_eq!(table.quotients[0], 0);
        assert_eq!(table.gcd(), 1);
        assert!(table.verify());
    }

    #[test]
    fn equal_inputs() {
        let table = extended_euclid(9, 9).unwrap();
        assert_eq!(table.gcd(), 9);
        assert_eq!(table.bezout(), (0, 1));
        assert!(table.verify());
    }

    #[test]
    fn limits() {
        assert!(extended_euclid(MAX_INPUT, MAX_INPUT - 1).unwrap().verify());
        assert!(matches!(
            extended_euclid(MAX_INPUT + 1, 2),
            Err(ArithError::InvalidInput(_))
        ));
        assert!(matches!(
            extended_euclid(0, 2),
            Err(ArithError::InvalidInput(_))
        ));
    }

    #[test]
    fn build_accepts_zero_numerator() {
        let table = EeaTable::build(0, 5).unwrap();
        assert_eq!(table.quotients, vec![0]);
        assert_eq!(table.gcd(), 5);
    }
}
