//! CLI result presenter.

use console::style;

use numcheck_core::driver::Outcome;
use numcheck_orchestration::interfaces::{ConversionReport, ResultPresenter};

use crate::output::{format_duration, format_expansion, format_number};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, report: &ConversionReport, details: bool) {
        let exp = match &report.outcome {
            Ok(exp) => exp,
            Err(e) => {
                self.present_error(&e.to_string());
                return;
            }
        };

        if self.quiet {
            println!("{}", format_expansion(exp, self.verbose));
            return;
        }

        let req = &exp.request;
        println!("Fraction: {}/{} in base {}", req.numerator, req.denominator, req.base);
        println!("Strategy: {}", report.name());
        println!("Duration: {}", format_duration(report.duration));

        if details {
            println!("Outcome: {}", exp.outcome.label());
            println!("Digits computed: {}", format_number(exp.trace.len() as u64));
            if let Outcome::Periodic(window) = exp.outcome {
                println!("Prefix length: {}", window.start);
                println!("Period length: {}", window.len());
                println!("Period window: [{}, {}]", window.start, window.end);
            }
            match exp.to_fraction() {
                Some(value) => println!("Exact value: {value}"),
                None => println!("Lower bound: {}", exp.truncated_value()),
            }
        }

        println!("Result: {}", format_expansion(exp, self.verbose));
    }

    fn present_comparison(&self, reports: &[ConversionReport]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for report in reports {
            let status = match &report.outcome {
                Ok(exp) => exp.outcome.label().to_string(),
                Err(_) => style("ERROR").red().to_string(),
            };
            println!(
                "  {:<20} {:>10} [{}]",
                report.name(),
                format_duration(report.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("{} {error}", style("Error:").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use numcheck_core::error::ConversionError;
    use numcheck_core::expand;
    use numcheck_core::strategy::StrategyKind;

    fn report(num: i64, den: i64) -> ConversionReport {
        ConversionReport {
            strategy: StrategyKind::ExactMembership,
            outcome: expand(num, den, 10),
            duration: Duration::from_millis(5),
        }
    }

    #[test]
    fn presenter_modes() {
        let presenter = CLIResultPresenter::new(true, false);
        assert!(presenter.verbose);
        assert!(!presenter.quiet);
        let presenter = CLIResultPresenter::new(false, true);
        assert!(presenter.quiet);
    }

    #[test]
    fn present_result_quiet() {
        let presenter = CLIResultPresenter::new(false, true);
        presenter.present_result(&report(1, 7), false);
    }

    #[test]
    fn present_result_with_details() {
        let presenter = CLIResultPresenter::new(false, false);
        presenter.present_result(&report(1, 6), true);
        presenter.present_result(&report(1, 4), true);
    }

    #[test]
    fn present_result_error() {
        let presenter = CLIResultPresenter::new(false, false);
        let failed = ConversionReport {
            strategy: StrategyKind::TortoiseHare,
            outcome: Err(ConversionError::InvalidRequest("denominator must be positive".into())),
            duration: Duration::ZERO,
        };
        presenter.present_result(&failed, false);
    }

    #[test]
    fn present_comparison() {
        let presenter = CLIResultPresenter::new(false, false);
        presenter.present_comparison(&[report(1, 7), report(1, 3)]);
        CLIResultPresenter::new(false, true).present_comparison(&[report(1, 7)]);
    }
}
