mod report;

pub use report::{AnalysisReport, Violation};

use tracing::debug;

use crate::document::SourceDocument;
use crate::pattern::SignaturePattern;
use crate::rules::{self, Rule, RuleContext};

/// Runs the rule catalog over one document.
pub struct Analyzer {
    document: SourceDocument,
    signatures: SignaturePattern,
    rules: Vec<Box<dyn Rule>>,
}

impl Analyzer {
    #[must_use]
    pub fn new(document: SourceDocument) -> Self {
        Self {
            document,
            signatures: SignaturePattern::new(),
            rules: rules::catalog(),
        }
    }

    /// Run every rule in catalog order and collect their violations.
    ///
    /// Rules never short-circuit each other. The report is empty exactly
    /// when no rule fired.
    #[must_use]
    pub fn analyze(&self) -> AnalysisReport {
        let ctx = RuleContext::new(&self.document, &self.signatures);

        let violations = self
            .rules
            .iter()
            .flat_map(|rule| {
                let found = rule.check(&ctx);
                debug!(rule = %rule.id(), violations = found.len(), "rule finished");
                found
            })
            .collect();

        AnalysisReport::new(violations)
    }
}

/// Analyze already-read file content.
#[must_use]
pub fn analyze(content: &str) -> AnalysisReport {
    Analyzer::new(SourceDocument::load(content)).analyze()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
