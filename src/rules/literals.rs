use crate::analyzer::Violation;
use crate::pattern::{
    has_assignment_or_comparison, integer_literals, is_comment_line, is_const_declaration,
    is_trivial_integer,
};

use super::{Rule, RuleContext, RuleId};

/// Unnamed integer constants in assignments and comparisons.
///
/// Purely textual: array indices and loop bounds are flagged like any other
/// literal. At most one literal is reported per line.
pub struct MagicNumberRule;

impl MagicNumberRule {
    fn first_magic_number(text: &str) -> Option<&str> {
        if is_const_declaration(text) || !has_assignment_or_comparison(text) {
            return None;
        }
        integer_literals(text)
            .into_iter()
            .find(|literal| !is_trivial_integer(literal))
    }
}

impl Rule for MagicNumberRule {
    fn id(&self) -> RuleId {
        RuleId::MagicNumber
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation> {
        ctx.document
            .lines()
            .iter()
            .filter(|line| !is_comment_line(&line.trimmed))
            .filter_map(|line| {
                Self::first_magic_number(&line.trimmed).map(|literal| {
                    Violation::at_line(
                        self.id(),
                        line.number,
                        format!(
                            "Magic number {literal} on line {} should be a named constant",
                            line.number
                        ),
                    )
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "literals_tests.rs"]
mod tests;
