//! Shared fixtures for the workspace-level integration tests.

use std::path::Path;

use serde::Deserialize;

/// Contents of `tests/testdata/expansions_golden.json`.
#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub values: Vec<GoldenEntry>,
}

/// One expected expansion.
#[derive(Debug, Deserialize)]
pub struct GoldenEntry {
    pub numerator: i64,
    pub denominator: i64,
    pub base: i64,
    pub budget: usize,
    /// Registry name of the strategy that produced the trace.
    pub strategy: String,
    /// `terminating`, `periodic` or `inconclusive`.
    pub outcome: String,
    #[serde(default)]
    pub start: Option<usize>,
    #[serde(default)]
    pub end: Option<usize>,
    pub integer_digits: Vec<i64>,
    /// Every fractional digit the strategy computed.
    pub digits: Vec<i64>,
}

impl GoldenEntry {
    /// Expected period window, if any.
    pub fn window(&self) -> Option<(usize, usize)> {
        self.start.zip(self.end)
    }
}

/// Load golden data from a JSON file.
pub fn load_golden(path: &Path) -> Result<GoldenData, Box<dyn std::error::Error>> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
