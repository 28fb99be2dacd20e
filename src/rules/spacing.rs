use crate::analyzer::Violation;
use crate::document::SourceLine;
use crate::pattern::find_block_end;

use super::{Rule, RuleContext, RuleId};

/// Methods are separated by two blank lines.
///
/// A body directly followed by the enclosing scope's `}` is exempt. Bodies
/// that never close, or close too near the end of file to judge, are skipped.
pub struct MethodSpacingRule;

impl MethodSpacingRule {
    /// Whether the lines after a body ending at `end` break the spacing rule.
    fn is_poorly_spaced(lines: &[SourceLine], end: usize) -> Option<bool> {
        let next = lines.get(end + 1)?;
        if next.trimmed == "}" {
            return Some(false);
        }
        if !next.is_blank() {
            return Some(true);
        }
        let after = lines.get(end + 2)?;
        Some(!after.is_blank())
    }
}

impl Rule for MethodSpacingRule {
    fn id(&self) -> RuleId {
        RuleId::MethodSpacing
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation> {
        let lines = ctx.document.lines();

        let mut violations: Vec<Violation> = ctx
            .signatures
            .subroutines(ctx.document)
            .filter_map(|(start, _, sig)| {
                let end = find_block_end(lines, start)?;
                if !Self::is_poorly_spaced(lines, end)? {
                    return None;
                }
                let line_number = lines[end].number;
                Some(Violation::at_line(
                    self.id(),
                    line_number,
                    format!(
                        "Method '{}' ending on line {line_number} should be followed by two blank lines",
                        sig.name
                    ),
                ))
            })
            .collect();

        // A body-less signature resolves to the next body's end. Report each
        // line once, under the signature nearest to it.
        violations.reverse();
        violations.sort_by_key(|v| v.line);
        violations.dedup_by_key(|v| v.line);
        violations
    }
}

#[cfg(test)]
#[path = "spacing_tests.rs"]
mod tests;
