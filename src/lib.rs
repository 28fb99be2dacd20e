pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod output;
pub mod pattern;
pub mod rules;

pub use analyzer::{AnalysisReport, Analyzer, Violation, analyze};
pub use error::{Result, StyleGuardError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
