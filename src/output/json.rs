use std::path::Path;

use serde::Serialize;

use crate::analyzer::{AnalysisReport, Violation};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    path: String,
    passed: bool,
    summary: Summary,
    violations: Vec<JsonViolation>,
}

#[derive(Serialize)]
struct Summary {
    violations: usize,
}

#[derive(Serialize)]
struct JsonViolation {
    rule: u8,
    name: &'static str,
    message: String,
    line: Option<usize>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, path: &Path, report: &AnalysisReport) -> Result<String> {
        let output = JsonOutput {
            path: path.display().to_string(),
            passed: report.is_success(),
            summary: Summary {
                violations: report.len(),
            },
            violations: report.violations().iter().map(convert_violation).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_violation(violation: &Violation) -> JsonViolation {
    JsonViolation {
        rule: violation.rule.number(),
        name: violation.rule.name(),
        message: violation.message.clone(),
        line: violation.line,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
