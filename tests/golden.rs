//! Golden file integration tests.
//!
//! Reads tests/testdata/expansions_golden.json and checks the outcome, period
//! window and computed digits of each recorded expansion, then cross-checks
//! the exact value and the orchestrated comparison.

use std::path::Path;

use num_bigint::BigUint;

use numcheck_core::driver::{convert, convert_with, Expansion, Outcome};
use numcheck_core::options::ConversionOptions;
use numcheck_core::reconstruct::Fraction;
use numcheck_core::registry::{parse_kind, DefaultFactory, StrategyFactory};
use numcheck_core::request::ConversionRequest;
use numcheck_core::strategy::StrategyChoice;
use numcheck_orchestration::orchestrator::{analyze_comparison_results, execute_conversions};
use numcheck_orchestration::strategy_selection::get_strategies_to_run;
use numcheck_tests::{load_golden, GoldenData, GoldenEntry};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn golden() -> GoldenData {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/testdata/expansions_golden.json");
    load_golden(&path).expect("failed to load golden file")
}

fn request(entry: &GoldenEntry) -> ConversionRequest {
    ConversionRequest::new(entry.numerator, entry.denominator, entry.base)
}

fn expand_entry(entry: &GoldenEntry) -> Expansion {
    let kind = parse_kind(&entry.strategy).unwrap();
    let opts = ConversionOptions::default()
        .with_budget(entry.budget)
        .with_strategy(StrategyChoice::Fixed(kind));
    convert(&request(entry), &opts).unwrap()
}

fn describe(entry: &GoldenEntry) -> String {
    format!(
        "{}/{} base {} budget {} via {}",
        entry.numerator, entry.denominator, entry.base, entry.budget, entry.strategy
    )
}

// ---------------------------------------------------------------------------
// Golden: outcome, window and digits
// ---------------------------------------------------------------------------

#[test]
fn golden_file_is_populated() {
    let data = golden();
    assert!(!data.description.is_empty());
    assert!(data.values.len() >= 20);
    for outcome in ["terminating", "periodic", "inconclusive"] {
        assert!(
            data.values.iter().any(|e| e.outcome == outcome),
            "no {outcome} entry"
        );
    }
}

#[test]
fn golden_outcomes() {
    for entry in &golden().values {
        let exp = expand_entry(entry);
        assert_eq!(exp.outcome.label(), entry.outcome, "{}", describe(entry));
        assert_eq!(
            exp.outcome.window().map(|w| (w.start, w.end)),
            entry.window(),
            "{}",
            describe(entry)
        );
    }
}

#[test]
fn golden_digits() {
    for entry in &golden().values {
        let exp = expand_entry(entry);
        assert_eq!(exp.integer_digits, entry.integer_digits, "{}", describe(entry));
        assert_eq!(exp.fraction_digits(), entry.digits.as_slice(), "{}", describe(entry));
    }
}

#[test]
fn golden_through_factory() {
    let factory = DefaultFactory::new();
    for entry in &golden().values {
        let strategy = factory.get(&entry.strategy).unwrap();
        let opts = ConversionOptions::default().with_budget(entry.budget);
        let exp = convert_with(strategy.as_ref(), &request(entry), &opts).unwrap();
        assert_eq!(exp.outcome.label(), entry.outcome, "{}", describe(entry));
        assert_eq!(exp.trace.len(), entry.digits.len(), "{}", describe(entry));
    }
}

// ---------------------------------------------------------------------------
// Golden: exact value
// ---------------------------------------------------------------------------

#[test]
fn golden_reconstruction() {
    for entry in &golden().values {
        let exp = expand_entry(entry);
        match exp.outcome {
            Outcome::Inconclusive => assert!(exp.to_fraction().is_none()),
            _ => assert_eq!(
                exp.to_fraction(),
                Some(Fraction::from_i64(entry.numerator, entry.denominator)),
                "{}",
                describe(entry)
            ),
        }
    }
}

#[test]
fn golden_truncation_is_a_lower_bound() {
    for entry in golden().values.iter().filter(|e| e.outcome == "inconclusive") {
        let exp = expand_entry(entry);
        let lower = exp.truncated_value();
        let num = BigUint::from(entry.numerator.unsigned_abs());
        let den = BigUint::from(entry.denominator.unsigned_abs());
        assert!(
            &lower.numerator * &den < num * &lower.denominator,
            "{}",
            describe(entry)
        );
    }
}

// ---------------------------------------------------------------------------
// Golden: cross-strategy comparison
// ---------------------------------------------------------------------------

#[test]
fn golden_strategies_never_mismatch() {
    let factory = DefaultFactory::new();
    for entry in &golden().values {
        let strategies =
            get_strategies_to_run("all", &factory, entry.denominator, i64::MAX).unwrap();
        let opts = ConversionOptions::default().with_budget(entry.budget);
        let reports = execute_conversions(&strategies, &request(entry), &opts);
        assert_eq!(reports.len(), 2);
        analyze_comparison_results(&reports).unwrap();
    }
}
