//! Sieve of Eratosthenes.

use tracing::warn;

use numcheck_core::constants::{LARGE_SIEVE_INPUT, MAX_SIEVE_INPUT};

use crate::error::ArithError;

/// Primality table for `0..=n`: `table[i]` is true iff `i` is prime.
///
/// `n` must lie in `2..=MAX_SIEVE_INPUT`.
pub fn sieve(n: usize) -> Result<Vec<bool>, ArithError> {
    if !(2..=MAX_SIEVE_INPUT).contains(&n) {
        return Err(ArithError::InvalidInput(format!(
            "limit must be between 2 and {MAX_SIEVE_INPUT}, got {n}"
        )));
    }
    if n > LARGE_SIEVE_INPUT {
        warn!(n, "large sieve, this may take a while and use a lot of memory");
    }

    let size = n
        .checked_add(1)
        .ok_or_else(|| ArithError::overflow("sieve size"))?;
    let mut table = vec![true; size];
    table[0] = false;
    table[1] = false;

    let mut i = 2;
    while i <= n / i {
        if table[i] {
            for multiple in (i * i..=n).step_by(i) {
                table[multiple] = false;
            }
        }
        i += 1;
    }
    Ok(table)
}

/// All primes `<= n`.
pub fn primes_up_to(n: usize) -> Result<Vec<usize>, ArithError> {
    Ok(sieve(n)?
        .into_iter()
        .enumerate()
        .filter_map(|(i, prime)| prime.then_some(i))
        .collect())
}
