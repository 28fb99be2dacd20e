use std::collections::HashMap;

use tracing::trace;

use crate::analyzer::Violation;
use crate::pattern::is_brace_only;

use super::{Rule, RuleContext, RuleId};

/// Number of consecutive lines compared as one block.
const WINDOW: usize = 3;

/// Blocks shorter than this are too trivial to count as duplication.
const MIN_BLOCK_CHARS: usize = 10;

/// Repeated three-line blocks.
///
/// Stops at the first duplicate in the file so one copy-paste does not flood
/// the report.
pub struct DuplicateBlockRule;

impl DuplicateBlockRule {
    /// Normalized text of the window starting at `start`.
    fn block_text(lines: &[crate::document::SourceLine], start: usize) -> String {
        lines[start..start + WINDOW]
            .iter()
            .map(|line| line.trimmed.as_str())
            .collect()
    }
}

impl Rule for DuplicateBlockRule {
    fn id(&self) -> RuleId {
        RuleId::DuplicateBlock
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation> {
        let lines = ctx.document.lines();
        if lines.len() < WINDOW {
            return Vec::new();
        }

        // Block text -> line number where it was first seen
        let mut seen: HashMap<String, usize> = HashMap::new();

        for start in 0..=lines.len() - WINDOW {
            let block = Self::block_text(lines, start);
            if block.chars().count() < MIN_BLOCK_CHARS || is_brace_only(&block) {
                continue;
            }

            let line_number = lines[start].number;
            if let Some(&first_seen) = seen.get(&block) {
                trace!(line = line_number, first_seen, "duplicate block found");
                return vec![Violation::at_line(
                    self.id(),
                    line_number,
                    format!(
                        "Duplicate code block on line {line_number} repeats the block starting on line {first_seen}"
                    ),
                )];
            }
            seen.insert(block, line_number);
        }

        Vec::new()
    }
}

#[cfg(test)]
#[path = "duplication_tests.rs"]
mod tests;
