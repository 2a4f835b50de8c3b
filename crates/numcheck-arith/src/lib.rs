//! # numcheck-arith
//!
//! Checkers for hand-worked number theory exercises: the Euclidean
//! algorithm, the extended Euclidean table, continued fractions and
//! convergents, linear Diophantine equations, the Chinese Remainder Theorem
//! and the sieve of Eratosthenes. Every function returns data; none print.

pub mod contfrac;
pub mod crt;
pub mod diophantine;
pub mod error;
pub mod euclid;
pub mod extended;
pub mod sieve;

pub use contfrac::{continued_fraction, convergents, Convergent};
pub use crt::{solve_congruences, Congruence, CrtMethod, CrtSolution};
pub use diophantine::{solve_linear_diophantine, DiophantineSolution};
pub use error::ArithError;
pub use euclid::{euclid_steps, gcd, DivisionStep};
pub use extended::{extended_euclid, EeaTable};
pub use sieve::{primes_up_to, sieve};
