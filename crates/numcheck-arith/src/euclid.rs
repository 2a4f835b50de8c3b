//! Euclidean algorithm with every division step recorded.

use std::fmt;

use serde::Serialize;

use crate::error::ArithError;

/// One line `dividend = quotient * divisor + remainder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DivisionStep {
    pub dividend: i64,
    pub quotient: i64,
    pub divisor: i64,
    pub remainder: i64,
}

impl fmt::Display for DivisionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(0);
        write!(
            f,
            "{:>width$} = {:>width$} * {:>width$} + {:>width$}",
            self.dividend, self.quotient, self.divisor, self.remainder
        )
    }
}

fn check_positive(a: i64, b: i64) -> Result<(), ArithError> {
    if a <= 0 || b <= 0 {
        return Err(ArithError::InvalidInput(format!(
            "both numbers must be positive, got {a} and {b}"
        )));
    }
    Ok(())
}

/// Division steps of the Euclidean algorithm, larger input first, down to
/// remainder zero. The last step's divisor is the gcd.
pub fn euclid_steps(a: i64, b: i64) -> Result<Vec<DivisionStep>, ArithError> {
    check_positive(a, b)?;
    let (mut dividend, mut divisor) = if a >= b { (a, b) } else { (b, a) };

    let mut steps = Vec::new();
    loop {
        let step = DivisionStep {
            dividend,
            quotient: dividend / divisor,
            divisor,
            remainder: dividend % divisor,
        };
        steps.push(step);
        if step.remainder == 0 {
            return Ok(steps);
        }
        dividend = divisor;
        divisor = step.remainder;
    }
}

/// Greatest common divisor of two positive integers.
pub fn gcd(a: i64, b: i64) -> Result<i64, ArithError> {
    check_positive(a, b)?;
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    Ok(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_for_textbook_example() {
        let steps = euclid_steps(1071, 462).unwrap();
        let lines: Vec<String> = steps.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "1071 = 2 * 462 + 147",
                "462 = 3 * 147 + 21",
                "147 = 7 * 21 + 0"
            ]
        );
        assert_eq!(steps.last().unwrap().divisor, 21);
    }

    #[test]
    fn orders_inputs() {
        assert_eq!(euclid_steps(462, 1071).unwrap(), euclid_steps(1071, 462).unwrap());
    }

    #[test]
    fn equal_inputs() {
        let steps = euclid_steps(7, 7).unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].remainder, 0);
    }

    #[test]
    fn padded_display() {
        let step = DivisionStep {
            dividend: 147,
            quotient: 7,
            divisor: 21,
            remainder: 0,
        };
        assert_eq!(format!("{step:4}"), " 147 =    7 *   21 +    0");
    }

    #[test]
    fn gcd_values() {
        assert_eq!(gcd(1071, 462), Ok(21));
        assert_eq!(gcd(17, 5), Ok(1));
        assert_eq!(gcd(1, i64::MAX), Ok(1));
    }

    #[test]
    fn rejects_non_positive() {
        assert!(matches!(gcd(0, 5), Err(ArithError::InvalidInput(_))));
        assert!(matches!(euclid_steps(5, -1), Err(ArithError::InvalidInput(_))));
    }
}
