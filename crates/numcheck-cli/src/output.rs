//! CLI output formatting.
//!
//! Expansions are written as `I.P(C)`: integer digits, the non-repeating
//! prefix, and the period in parentheses. The three outcomes always render
//! differently: a terminating expansion has no parentheses, a periodic one
//! has them, and an inconclusive one ends in `…` with a truncation notice.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use console::style;

use numcheck_core::driver::{Expansion, Outcome};
use numcheck_core::radix::digit_char;

/// Digit strings longer than this are abbreviated unless verbose.
const ABBREVIATE_ABOVE: usize = 100;
/// Digits kept on each side of an abbreviation.
const ABBREVIATED_EDGE: usize = 40;

/// Render digits with the `0-9A-Z` alphabet. Digits beyond `Z` (bases
/// above 36) are written as `[d]`.
#[must_use]
pub fn render_digits(digits: &[i64]) -> String {
    digits
        .iter()
        .map(|&d| {
            u32::try_from(d)
                .ok()
                .and_then(digit_char)
                .map_or_else(|| format!("[{d}]"), String::from)
        })
        .collect()
}

/// Shorten a long digit string to its two ends.
#[must_use]
pub fn abbreviate(digits: &str, verbose: bool) -> String {
    if verbose || digits.len() <= ABBREVIATE_ABOVE || !digits.is_ascii() {
        return digits.to_string();
    }
    format!(
        "{}...{} ({} digits)",
        &digits[..ABBREVIATED_EDGE],
        &digits[digits.len() - ABBREVIATED_EDGE..],
        digits.len()
    )
}

/// Format an expansion in `I.P(C)` notation.
#[must_use]
pub fn format_expansion(exp: &Expansion, verbose: bool) -> String {
    let integer = render_digits(&exp.integer_digits);

    match exp.outcome {
        Outcome::Terminating if exp.trace.is_empty() => integer,
        Outcome::Terminating => {
            let fraction = abbreviate(&render_digits(exp.fraction_digits()), verbose);
            format!("{integer}.{fraction}")
        }
        Outcome::Periodic(_) => {
            let prefix = abbreviate(&render_digits(exp.prefix()), verbose);
            let period = abbreviate(&render_digits(exp.period()), verbose);
            format!("{integer}.{prefix}({})", style(period).cyan())
        }
        Outcome::Inconclusive => {
            let fraction = abbreviate(&render_digits(exp.fraction_digits()), verbose);
            let notice = format!(
                "truncated after {} digits",
                format_number(exp.trace.len() as u64)
            );
            format!("{integer}.{fraction}… {}", style(notice).red())
        }
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        format!("{mins}m{:.1}s", secs - mins as f64 * 60.0)
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Write one item per line to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_lines_to_file<T: Display>(path: &Path, items: &[T]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for item in items {
        writeln!(out, "{item}")?;
    }
    out.flush()
}
