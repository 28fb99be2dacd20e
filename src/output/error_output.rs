//! Colored error and warning output on stderr.
//!
//! Format: `✖ Type: message` / `  × detail` / `  help: suggestion`

use std::io::{IsTerminal, Write};

use crate::error::StyleGuardError;

use super::{ColorMode, ansi};

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        };
        Self { use_colors }
    }

    /// Auto-detect color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn stderr_supports_color() -> bool {
        // Presence of NO_COLOR (any value) disables color, per https://no-color.org
        std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
    }

    fn paint(&self, text: &str, codes: &[&str]) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{}{text}{}", codes.concat(), ansi::RESET)
    }

    /// Print a crate error with its detail and suggestion.
    pub fn print(&self, error: &StyleGuardError) {
        let detail = error.detail();
        let mut stderr = std::io::stderr().lock();
        self.write_error(
            &mut stderr,
            error.error_type(),
            &error.message(),
            detail.as_deref(),
            error.suggestion(),
        );
    }

    pub fn print_warning(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, None, None);
    }

    /// Write an error to any writer.
    ///
    /// Write failures are discarded: there is nowhere left to report them.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let headline = self.paint(&format!("✖ {error_type}:"), &[ansi::BOLD, ansi::RED]);
        let _ = writeln!(w, "{headline} {message}");
        self.write_context(w, detail, suggestion);
    }

    /// Write a warning to any writer.
    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let headline = self.paint("⚠ Warning:", &[ansi::BOLD, ansi::YELLOW]);
        let _ = writeln!(w, "{headline} {message}");
        self.write_context(w, detail, suggestion);
    }

    fn write_context<W: Write>(&self, w: &mut W, detail: Option<&str>, suggestion: Option<&str>) {
        if let Some(d) = detail {
            let _ = writeln!(w, "  {}", self.paint(&format!("× {d}"), &[ansi::DIM]));
        }
        if let Some(s) = suggestion {
            let _ = writeln!(w, "  {} {s}", self.paint("help:", &[ansi::CYAN]));
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Print a crate error to stderr with auto-detected colors.
pub fn print_error(error: &StyleGuardError) {
    ErrorOutput::stderr().print(error);
}

/// Print a warning to stderr with auto-detected colors.
pub fn print_warning(message: &str) {
    ErrorOutput::stderr().print_warning(message);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
