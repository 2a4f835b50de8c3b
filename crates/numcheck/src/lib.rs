//! numcheck library: application logic for the exercise checker.

pub mod app;
pub mod config;
pub mod errors;
