//! Integer base conversion with the `0-9A-Z` digit alphabet.

use crate::constants::{MAX_BASE, MAX_DIGIT_STRING_LEN};

/// Error type for integer base conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RadixError {
    /// Base outside `2..=36`.
    #[error("invalid base {0}: must be between 2 and 36")]
    InvalidBase(i64),

    /// Character that is not a digit in any supported base.
    #[error("invalid digit '{0}'")]
    InvalidCharacter(char),

    /// Digit too large for the base.
    #[error("digit '{ch}' = {value} is not valid in base {base}")]
    DigitOutOfRange { ch: char, value: u32, base: i64 },

    /// Empty input string.
    #[error("empty number")]
    Empty,

    /// Input longer than the accepted maximum.
    #[error("{0} characters is too long: at most 12 are accepted")]
    TooLong(usize),

    /// Value does not fit in a 64-bit integer.
    #[error("value overflows a 64-bit integer")]
    Overflow,

    /// Negative value or remainder.
    #[error("negative value {0}")]
    Negative(i64),
}

fn check_base(base: i64) -> Result<(), RadixError> {
    if (2..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(RadixError::InvalidBase(base))
    }
}

/// Value of a single digit character in `base`.
pub fn digit_value(ch: char, base: i64) -> Result<u32, RadixError> {
    let value = ch.to_digit(36).ok_or(RadixError::InvalidCharacter(ch))?;
    if i64::from(value) >= base {
        return Err(RadixError::DigitOutOfRange { ch, value, base });
    }
    Ok(value)
}

/// Character for a digit value, `0-9` then `A-Z`.
#[must_use]
pub fn digit_char(value: u32) -> Option<char> {
    char::from_digit(value, 36).map(|c| c.to_ascii_uppercase())
}

/// Split a digit string into digit values.
pub fn parse_digits(input: &str, base: i64) -> Result<Vec<u32>, RadixError> {
    check_base(base)?;
    let input = input.trim();
    if input.is_empty() {
        return Err(RadixError::Empty);
    }
    let len = input.chars().count();
    if len > MAX_DIGIT_STRING_LEN {
        return Err(RadixError::TooLong(len));
    }
    input.chars().map(|ch| digit_value(ch, base)).collect()
}

/// Evaluate digits (most significant first) in `base`.
pub fn to_value(digits: &[u32], base: i64) -> Result<i64, RadixError> {
    check_base(base)?;
    digits.iter().try_fold(0i64, |acc, &d| {
        acc.checked_mul(base)
            .and_then(|v| v.checked_add(i64::from(d)))
            .ok_or(RadixError::Overflow)
    })
}

/// Digits of `value` in `base`, most significant first. Zero is `[0]`.
pub fn to_base_digits(value: i64, base: i64) -> Result<Vec<u32>, RadixError> {
    check_base(base)?;
    if value < 0 {
        return Err(RadixError::Negative(value));
    }
    whole_digits(value, base)
        .into_iter()
        .map(|d| u32::try_from(d).map_err(|_| RadixError::Negative(d)))
        .collect()
}

/// Repeated division without the `2..=36` bound, for the conversion driver.
/// Expects `value >= 0` and `base >= 2`.
pub(crate) fn whole_digits(value: i64, base: i64) -> Vec<i64> {
    debug_assert!(value >= 0 && base >= 2);
    let mut digits = Vec::new();
    let mut number = value;
    loop {
        digits.push(number % base);
        number /= base;
        if number == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Render digits (most significant first) in `base`.
pub fn digits_to_string(digits: &[u32], base: i64) -> Result<String, RadixError> {
    check_base(base)?;
    digits
        .iter()
        .map(|&d| {
            if i64::from(d) >= base {
                return Err(RadixError::DigitOutOfRange {
                    ch: '?',
                    value: d,
                    base,
                });
            }
            digit_char(d).ok_or(RadixError::DigitOutOfRange {
                ch: '?',
                value: d,
                base,
            })
        })
        .collect()
}

/// Convert a digit string from one base to another.
///
/// ```
/// use numcheck_core::radix::convert_integer;
/// assert_eq!(convert_integer("ff", 16, 2).unwrap(), "11111111");
/// assert_eq!(convert_integer("0", 10, 36).unwrap(), "0");
/// ```
pub fn convert_integer(input: &str, from_base: i64, to_base: i64) -> Result<String, RadixError> {
    let digits = parse_digits(input, from_base)?;
    let value = to_value(&digits, from_base)?;
    digits_to_string(&to_base_digits(value, to_base)?, to_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_values() {
        assert_eq!(digit_value('7', 10), Ok(7));
        assert_eq!(digit_value('a', 16), Ok(10));
        assert_eq!(digit_value('Z', 36), Ok(35));
        assert_eq!(
            digit_value('9', 8),
            Err(RadixError::DigitOutOfRange {
                ch: '9',
                value: 9,
                base: 8
            })
        );
        assert_eq!(digit_value('-', 10), Err(RadixError::InvalidCharacter('-')));
    }

    #[test]
    fn digit_chars() {
        assert_eq!(digit_char(0), Some('0'));
        assert_eq!(digit_char(10), Some('A'));
        assert_eq!(digit_char(35), Some('Z'));
        assert_eq!(digit_char(36), None);
    }

    #[test]
    fn parse_rejects_long_and_empty() {
        assert_eq!(parse_digits("", 10), Err(RadixError::Empty));
        assert_eq!(
            parse_digits("1234567890123", 10),
            Err(RadixError::TooLong(13))
        );
        assert_eq!(parse_digits("10", 37), Err(RadixError::InvalidBase(37)));
        assert_eq!(parse_digits("10", 1), Err(RadixError::InvalidBase(1)));
    }

    #[test]
    fn value_round_trip() {
        let digits = parse_digits("ZZZZZZZZZZZZ", 36).unwrap();
        let value = to_value(&digits, 36).unwrap();
        assert_eq!(value, 36i64.pow(12) - 1);
        assert_eq!(to_base_digits(value, 36).unwrap(), digits);
    }

    #[test]
    fn base_digits() {
        assert_eq!(to_base_digits(0, 2).unwrap(), vec![0]);
        assert_eq!(to_base_digits(10, 2).unwrap(), vec![1, 0, 1, 0]);
        assert_eq!(to_base_digits(255, 16).unwrap(), vec![15, 15]);
        assert_eq!(to_base_digits(-5, 10), Err(RadixError::Negative(-5)));
    }

    #[test]
    fn whole_digits_any_base() {
        assert_eq!(whole_digits(0, 1000), vec![0]);
        assert_eq!(whole_digits(3, 10), vec![3]);
        assert_eq!(whole_digits(123_456, 1000), vec![123, 456]);
    }

    #[test]
    fn render_digits() {
        assert_eq!(digits_to_string(&[15, 15], 16).unwrap(), "FF");
        assert!(digits_to_string(&[2], 2).is_err());
    }

    #[test]
    fn convert() {
        assert_eq!(convert_integer("ZZZZZZZZZZZZ", 36, 2).unwrap().len(), 63);
        assert_eq!(convert_integer("777", 8, 10).unwrap(), "511");
        assert_eq!(convert_integer("511", 10, 8).unwrap(), "777");
        assert_eq!(convert_integer(" 42 ", 10, 10).unwrap(), "42");
    }
}
