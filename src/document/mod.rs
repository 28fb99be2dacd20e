use std::path::Path;

use tracing::debug;

use crate::error::{Result, StyleGuardError};

/// A single line of the analyzed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// Line number (1-indexed)
    pub number: usize,
    /// Line text exactly as it appears in the file
    pub raw: String,
    /// Line text without leading and trailing whitespace
    pub trimmed: String,
}

impl SourceLine {
    #[must_use]
    pub fn new(number: usize, raw: &str) -> Self {
        Self {
            number,
            raw: raw.to_string(),
            trimmed: raw.trim().to_string(),
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.trimmed.is_empty()
    }
}

/// The analyzed file: its lines in file order plus the full text.
///
/// Built once per analysis run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    lines: Vec<SourceLine>,
    text: String,
}

impl SourceDocument {
    /// Build a document from already-read file content.
    ///
    /// Any text is accepted. Line terminators (`\n` or `\r\n`) are stripped,
    /// everything else on each line is kept as-is.
    #[must_use]
    pub fn load(content: &str) -> Self {
        let lines: Vec<SourceLine> = content
            .lines()
            .enumerate()
            .map(|(i, line)| SourceLine::new(i + 1, line))
            .collect();

        debug!(lines = lines.len(), bytes = content.len(), "loaded source document");

        Self {
            lines,
            text: content.to_string(),
        }
    }

    /// Read a file from disk and build a document from it.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read as UTF-8 text.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| StyleGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::load(&content))
    }

    #[must_use]
    pub fn lines(&self) -> &[SourceLine] {
        &self.lines
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line at a 0-based index.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&SourceLine> {
        self.lines.get(index)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
