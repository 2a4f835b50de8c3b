//! Application entry point and dispatch.

use anyhow::{bail, Result};
use clap::CommandFactory;
use serde_json::json;

use numcheck_arith::contfrac::{continued_fraction, convergents, format_continued_fraction};
use numcheck_arith::crt::{solve_congruences, Congruence};
use numcheck_arith::diophantine::solve_linear_diophantine;
use numcheck_arith::euclid::euclid_steps;
use numcheck_arith::extended::{extended_euclid, EeaTable};
use numcheck_arith::sieve::primes_up_to;
use numcheck_cli::output::{format_number, write_lines_to_file};
use numcheck_cli::presenter::CLIResultPresenter;
use numcheck_core::constants::{MAX_BASE, MAX_INPUT};
use numcheck_core::driver::Outcome;
use numcheck_core::options::ConversionOptions;
use numcheck_core::radix::convert_integer;
use numcheck_core::registry::DefaultFactory;
use numcheck_core::request::ConversionRequest;
use numcheck_core::trace::TraceLayout;
use numcheck_orchestration::interfaces::{ConversionReport, ResultPresenter};
use numcheck_orchestration::orchestrator::{analyze_comparison_results, execute_conversions};
use numcheck_orchestration::strategy_selection::get_strategies_to_run;

use crate::config::{AppConfig, Command, FracArgs};
use crate::errors::CliError;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = AppConfig::command();
        numcheck_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let Some(command) = &config.command else {
        AppConfig::command().print_help()?;
        return Ok(());
    };

    match command {
        Command::Frac(args) => run_frac(config, args),
        Command::Int { digits, from, to } => run_int(config, digits, *from, *to),
        Command::Gcd { a, b } => run_gcd(config, *a, *b),
        Command::Eea { a, b } => run_eea(config, *a, *b),
        Command::Cf {
            numerator,
            denominator,
            convergents,
        } => run_cf(config, *numerator, *denominator, *convergents),
        Command::Lde { a, b, c } => run_lde(config, *a, *b, *c),
        Command::Crt { congruences } => run_crt(config, congruences),
        Command::Sieve { n, output } => run_sieve(config, *n, output.as_deref()),
    }
}

fn validate_frac(args: &FracArgs) -> Result<(), CliError> {
    if !(2..=MAX_BASE).contains(&args.base) {
        return Err(CliError::InvalidInput(format!(
            "base must be between 2 and {MAX_BASE}, got {}",
            args.base
        )));
    }
    for (name, value) in [("numerator", args.numerator), ("denominator", args.denominator)] {
        if value.unsigned_abs() > MAX_INPUT.unsigned_abs() {
            return Err(CliError::InvalidInput(format!(
                "{name} must be at most {MAX_INPUT} in magnitude, got {value}"
            )));
        }
    }
    Ok(())
}

/// JSON summary of one run. Digits are limited to the prefix and period of
/// a periodic expansion; an inconclusive trace is only included when
/// `verbose` is set.
fn report_json(report: &ConversionReport, verbose: bool) -> serde_json::Value {
    let mut value = json!({
        "strategy": report.name(),
        "duration_ms": report.duration.as_secs_f64() * 1000.0,
    });
    let exp = match &report.outcome {
        Ok(exp) => exp,
        Err(e) => {
            value["error"] = json!(e.to_string());
            return value;
        }
    };

    value["request"] = json!(exp.request);
    value["outcome"] = json!(exp.outcome);
    value["integer_digits"] = json!(exp.integer_digits);
    value["digits_computed"] = json!(exp.trace.len());
    match exp.outcome {
        Outcome::Terminating => value["digits"] = json!(exp.fraction_digits()),
        Outcome::Periodic(_) => {
            value["prefix"] = json!(exp.prefix());
            value["period"] = json!(exp.period());
        }
        Outcome::Inconclusive => {
            if verbose {
                value["digits"] = json!(exp.fraction_digits());
            }
        }
    }
    value["value"] = json!(exp.to_fraction().map(|f| f.to_string()));
    value
}

fn run_frac(config: &AppConfig, args: &FracArgs) -> Result<()> {
    validate_frac(args)?;

    let opts = ConversionOptions {
        iteration_budget: args.budget,
        exact_threshold: args.threshold,
        layout: if args.paired {
            TraceLayout::Paired
        } else {
            TraceLayout::Compact
        },
        ..Default::default()
    }
    .normalize();

    let request = ConversionRequest::new(args.numerator, args.denominator, args.base);
    request.validate()?;

    let factory = DefaultFactory::new();
    let strategies =
        get_strategies_to_run(&args.strategy, &factory, request.denominator, opts.exact_threshold)?;
    let reports = execute_conversions(&strategies, &request, &opts);

    for report in &reports {
        if let Err(e) = &report.outcome {
            return Err(e.clone().into());
        }
    }

    if args.json {
        let value = match reports.as_slice() {
            [single] => report_json(single, config.verbose),
            many => serde_json::Value::Array(
                many.iter().map(|r| report_json(r, config.verbose)).collect(),
            ),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
        for report in &reports {
            presenter.present_result(report, config.details);
        }
        if reports.len() > 1 {
            presenter.present_comparison(&reports);
        }
    }

    if reports.len() > 1 {
        analyze_comparison_results(&reports)?;
    }
    Ok(())
}

fn run_int(config: &AppConfig, digits: &str, from: i64, to: i64) -> Result<()> {
    let converted = convert_integer(digits, from, to)?;
    if config.quiet {
        println!("{converted}");
    } else {
        println!("{} (base {from}) = {converted} (base {to})", digits.trim().to_uppercase());
    }
    Ok(())
}

fn run_gcd(config: &AppConfig, a: i64, b: i64) -> Result<()> {
    let steps = euclid_steps(a, b)?;
    let gcd = steps.last().map_or(0, |s| s.divisor);
    if !config.quiet {
        let width = a.max(b).to_string().len();
        for step in &steps {
            println!("{step:width$}");
        }
        if config.details {
            println!("\nNumber of iterations: {}", steps.len());
        }
        println!();
    }
    println!("GCD is: {gcd}");
    Ok(())
}

fn print_table(table: &EeaTable) {
    let width = table
        .remainders
        .iter()
        .chain(&table.x)
        .chain(&table.y)
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);
    let row = |label: &str, padding: usize, values: &[i64]| {
        let cells: String = values.iter().map(|v| format!("{v:>width$} | ")).collect();
        let blank = format!("{:>width$} | ", "").repeat(padding);
        println!("{label}: || {blank}{cells}");
    };
    row("q", 2, &table.quotients);
    row("r", 0, &table.remainders);
    row("x", 0, &table.x);
    row("y", 0, &table.y);
}

fn run_eea(config: &AppConfig, a: i64, b: i64) -> Result<()> {
    let table = extended_euclid(a, b)?;
    if !table.verify() {
        bail!("extended Euclidean table does not satisfy the Bézout identity");
    }
    let (x, y) = table.bezout();
    let gcd = table.gcd();

    if config.quiet {
        println!("{gcd} {x} {y}");
        return Ok(());
    }
    if config.details {
        print_table(&table);
        println!();
    }
    println!("GCD = {gcd}");
    println!("  x = {x}");
    println!("  y = {y}");
    println!("\nGCD = {x} * {a} + {y} * {b}");
    Ok(())
}

fn run_cf(config: &AppConfig, numerator: i64, denominator: i64, with_convergents: bool) -> Result<()> {
    let quotients = format_continued_fraction(&continued_fraction(numerator, denominator)?);
    if config.quiet {
        println!("{quotients}");
    } else {
        println!("{numerator} / {denominator} = {quotients}");
    }
    if with_convergents {
        for convergent in convergents(numerator, denominator)? {
            println!("{convergent}");
        }
    }
    Ok(())
}

fn run_lde(config: &AppConfig, a: i64, b: i64, c: i64) -> Result<()> {
    let solution = solve_linear_diophantine(a, b, c)?;
    if !config.quiet {
        println!("{a}x + {b}y = {c}");
    }
    println!("{solution}");
    if config.details {
        for k in -1..=1 {
            let (x, y) = solution.at(k)?;
            println!("  k = {k:>2}: x = {x}, y = {y}");
        }
    }
    Ok(())
}

fn run_crt(config: &AppConfig, raw: &[String]) -> Result<()> {
    let congruences = raw
        .iter()
        .map(|s| s.parse::<Congruence>())
        .collect::<Result<Vec<_>, _>>()?;
    let solution = solve_congruences(&congruences)?;
    if !config.quiet {
        for c in &congruences {
            println!("x ≡ {} (mod {})", c.constant, c.modulus);
        }
        println!();
    }
    println!("{solution}");
    if config.details {
        println!("Method: {:?}", solution.method);
    }
    Ok(())
}

fn run_sieve(config: &AppConfig, n: usize, output: Option<&std::path::Path>) -> Result<()> {
    let primes = primes_up_to(n)?;
    match output {
        Some(path) => {
            write_lines_to_file(path, &primes)?;
            if !config.quiet {
                println!(
                    "Wrote {} primes up to {} to {}",
                    format_number(primes.len() as u64),
                    format_number(n as u64),
                    path.display()
                );
            }
        }
        None => {
            for p in &primes {
                println!("{p}");
            }
        }
    }
    Ok(())
}
