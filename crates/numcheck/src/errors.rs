//! Error handling and exit codes.

use numcheck_arith::ArithError;
use numcheck_core::constants::exit_codes;
use numcheck_core::error::ConversionError;
use numcheck_core::radix::RadixError;

/// Input rejected at the command-line boundary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A flag or argument is out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Exit code for a conversion error.
pub fn conversion_exit_code(err: &ConversionError) -> i32 {
    match err {
        ConversionError::InvalidRequest(_) | ConversionError::Config(_) => {
            exit_codes::ERROR_INVALID
        }
        ConversionError::Arithmetic { .. } if err.is_overflow() => exit_codes::ERROR_OVERFLOW,
        ConversionError::Arithmetic { .. } => exit_codes::ERROR_GENERIC,
        ConversionError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Handle an application error and return the appropriate exit code.
pub fn handle_error(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<ConversionError>() {
        return conversion_exit_code(e);
    }
    if let Some(e) = err.downcast_ref::<ArithError>() {
        return match e {
            ArithError::InvalidInput(_) => exit_codes::ERROR_INVALID,
            ArithError::Overflow(_) => exit_codes::ERROR_OVERFLOW,
            ArithError::NoSolution(_) => exit_codes::ERROR_GENERIC,
        };
    }
    if let Some(e) = err.downcast_ref::<RadixError>() {
        return match e {
            RadixError::Overflow => exit_codes::ERROR_OVERFLOW,
            _ => exit_codes::ERROR_INVALID,
        };
    }
    if err.downcast_ref::<CliError>().is_some() {
        return exit_codes::ERROR_INVALID;
    }
    exit_codes::ERROR_GENERIC
}

/// Exit code for a command-line parse failure. Help and version requests
/// also arrive as parse errors and exit successfully.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        exit_codes::ERROR_INVALID
    } else {
        exit_codes::SUCCESS
    }
}
