//! numcheck: number theory exercise checker.

use std::process::ExitCode;

use numcheck_core::constants::exit_codes;
use numcheck_lib::{app, config, errors};

fn main() -> ExitCode {
    let config = match config::AppConfig::try_parse() {
        Ok(config) => config,
        Err(e) => {
            let code = match e.print() {
                Ok(()) => errors::usage_exit_code(&e),
                // Nowhere left to report to.
                Err(_) => exit_codes::ERROR_GENERIC,
            };
            return exit_code(code);
        }
    };

    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_code(errors::handle_error(&err))
        }
    }
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
