//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use numcheck_core::constants::{DEFAULT_EXACT_THRESHOLD, DEFAULT_ITERATION_BUDGET};

/// numcheck: verify hand-worked number theory exercises.
#[derive(Parser, Debug)]
#[command(name = "numcheck", version, about)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbose output: full digit strings and debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long, global = true)]
    pub details: bool,

    /// Quiet mode (only output the result).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Calculators.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Expand a fraction in a base and find its repeating part.
    #[command(allow_negative_numbers = true)]
    Frac(FracArgs),

    /// Convert an integer between bases 2 to 36.
    Int {
        /// Digits in the source base (0-9, A-Z).
        digits: String,
        /// Source base.
        #[arg(long)]
        from: i64,
        /// Target base.
        #[arg(long)]
        to: i64,
    },

    /// Greatest common divisor with every division step.
    Gcd { a: i64, b: i64 },

    /// Extended Euclidean algorithm table.
    Eea { a: i64, b: i64 },

    /// Continued fraction of numerator / denominator.
    Cf {
        numerator: i64,
        denominator: i64,
        /// Also list the convergents and their error bounds.
        #[arg(long)]
        convergents: bool,
    },

    /// Solve the linear Diophantine equation a*x + b*y = c.
    #[command(allow_negative_numbers = true)]
    Lde { a: i64, b: i64, c: i64 },

    /// Solve a system of congruences given as CONSTANT:MODULUS.
    Crt {
        #[arg(required = true, allow_hyphen_values = true)]
        congruences: Vec<String>,
    },

    /// List primes up to N.
    Sieve {
        n: usize,
        /// Write primes to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Options of the `frac` subcommand.
#[derive(Args, Debug)]
pub struct FracArgs {
    pub numerator: i64,

    pub denominator: i64,

    /// Target base (2 to 36).
    #[arg(short, long, default_value_t = 10)]
    pub base: i64,

    /// Periodicity strategy: auto, floyd, exact, or all.
    #[arg(long, default_value = "auto")]
    pub strategy: String,

    /// Maximum number of fractional digits to compute.
    #[arg(long, env = "NUMCHECK_BUDGET", default_value_t = DEFAULT_ITERATION_BUDGET)]
    pub budget: usize,

    /// Denominators below this use the exact strategy under `auto`.
    #[arg(long, env = "NUMCHECK_THRESHOLD", default_value_t = DEFAULT_EXACT_THRESHOLD)]
    pub threshold: i64,

    /// Record the denominator at every step.
    #[arg(long)]
    pub paired: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    pub fn try_parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}
