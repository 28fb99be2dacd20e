use std::fmt::Write;
use std::path::Path;

use crate::analyzer::{AnalysisReport, Violation};
use crate::error::Result;

use super::{ColorMode, OutputFormatter, ansi};

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_violation(&self, violation: &Violation, output: &mut String) {
        let status = self.colorize("[Failed]", ansi::RED);
        let _ = write!(output, "- {status} {}", violation.message);
        if self.verbose >= 1 {
            let rule = self.colorize(&format!("[rule {}]", violation.rule), ansi::CYAN);
            let _ = write!(output, " {rule}");
        }
        output.push('\n');
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, path: &Path, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();
        let _ = writeln!(output, "Checked: {}", path.display());

        if report.is_success() {
            let _ = writeln!(output, "{}", self.colorize("✓ All checks passed", ansi::GREEN));
            return Ok(output);
        }

        for violation in report {
            self.format_violation(violation, &mut output);
        }

        let count = report.len();
        let noun = if count == 1 { "violation" } else { "violations" };
        output.push('\n');
        let _ = writeln!(
            output,
            "Summary: {} {noun} found",
            self.colorize(&count.to_string(), ansi::RED)
        );

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
