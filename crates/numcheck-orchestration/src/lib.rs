//! # numcheck-orchestration
//!
//! Strategy selection, timed sequential execution, and result analysis.

pub mod interfaces;
pub mod orchestrator;
pub mod strategy_selection;

pub use interfaces::{ConversionReport, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_conversions};
pub use strategy_selection::get_strategies_to_run;
