use crate::analyzer::Violation;
use crate::document::SourceLine;
use crate::pattern::is_comment_lead_in;

use super::{Rule, RuleContext, RuleId};

/// Classes and methods carry a comment on the line above.
///
/// Only the immediately preceding line is inspected.
pub struct DeclarationCommentRule;

impl DeclarationCommentRule {
    fn is_documented(lines: &[SourceLine], index: usize) -> bool {
        index
            .checked_sub(1)
            .and_then(|prev| lines.get(prev))
            .is_some_and(|prev| is_comment_lead_in(&prev.trimmed))
    }
}

impl Rule for DeclarationCommentRule {
    fn id(&self) -> RuleId {
        RuleId::DeclarationComment
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation> {
        let lines = ctx.document.lines();

        lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| {
                let declaration = ctx
                    .signatures
                    .class_name(&line.raw)
                    .map(|name| ("Class", name))
                    .or_else(|| {
                        ctx.signatures
                            .subroutine(&line.raw)
                            .map(|sig| ("Method", sig.name))
                    })?;
                if Self::is_documented(lines, i) {
                    return None;
                }
                let (kind, name) = declaration;
                Some(Violation::at_line(
                    self.id(),
                    line.number,
                    format!(
                        "{kind} '{name}' on line {} should have a comment on the line above",
                        line.number
                    ),
                ))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "comments_tests.rs"]
mod tests;
