use crate::rules::RuleId;

/// A single failure of one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub rule: RuleId,
    pub message: String,
    /// Line number (1-indexed), absent for whole-file findings
    pub line: Option<usize>,
}

impl Violation {
    #[must_use]
    pub fn at_line(rule: RuleId, line: usize, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
            line: Some(line),
        }
    }

    #[must_use]
    pub fn whole_file(rule: RuleId, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
            line: None,
        }
    }
}

/// Violations of one analysis run, ordered by rule then by line.
///
/// An empty report means every rule passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisReport {
    violations: Vec<Violation>,
}

impl AnalysisReport {
    #[must_use]
    pub const fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations raised by one rule.
    pub fn for_rule(&self, rule: RuleId) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.rule == rule)
    }
}

impl<'a> IntoIterator for &'a AnalysisReport {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
