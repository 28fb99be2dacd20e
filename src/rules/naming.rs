use crate::analyzer::Violation;

use super::{Rule, RuleContext, RuleId};

/// Methods are named in PascalCase.
pub struct MethodNamingRule;

impl Rule for MethodNamingRule {
    fn id(&self) -> RuleId {
        RuleId::MethodNaming
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation> {
        ctx.signatures
            .subroutines(ctx.document)
            .filter(|(_, _, sig)| !sig.is_entry_point())
            .filter(|(_, _, sig)| sig.name.starts_with(|c: char| c.is_lowercase()))
            .map(|(_, line, sig)| {
                Violation::at_line(
                    self.id(),
                    line.number,
                    format!(
                        "Method '{}' on line {} should start with an uppercase letter (PascalCase)",
                        sig.name, line.number
                    ),
                )
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
