use regex::Regex;

use crate::analyzer::Violation;

use super::{Rule, RuleContext, RuleId};

/// Markers that show an array or list is in use.
const COLLECTION_MARKERS: [&str; 3] = ["[]", "List<", "Array"];

/// The file stores related data in a collection.
pub struct CollectionUsageRule;

impl Rule for CollectionUsageRule {
    fn id(&self) -> RuleId {
        RuleId::CollectionUsage
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation> {
        let text = ctx.document.text();
        if COLLECTION_MARKERS.iter().any(|marker| text.contains(marker)) {
            return Vec::new();
        }
        vec![Violation::whole_file(
            self.id(),
            "No arrays or lists found; store related data in a collection",
        )]
    }
}

/// The file repeats work with a loop.
pub struct LoopUsageRule {
    loop_pattern: Regex,
}

impl Default for LoopUsageRule {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopUsageRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            loop_pattern: Regex::new(r"\b(?:for|foreach|while|do)\s*\(").expect("Invalid regex"),
        }
    }
}

impl Rule for LoopUsageRule {
    fn id(&self) -> RuleId {
        RuleId::LoopUsage
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation> {
        if self.loop_pattern.is_match(ctx.document.text()) {
            return Vec::new();
        }
        vec![Violation::whole_file(
            self.id(),
            "No loops found; use for, foreach, while or do to repeat work",
        )]
    }
}

/// The file splits its logic into methods.
pub struct MethodPresenceRule;

impl Rule for MethodPresenceRule {
    fn id(&self) -> RuleId {
        RuleId::MethodPresence
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation> {
        if ctx.signatures.subroutines(ctx.document).next().is_some() {
            return Vec::new();
        }
        vec![Violation::whole_file(
            self.id(),
            "No methods found; split the logic into methods",
        )]
    }
}

#[cfg(test)]
#[path = "usage_tests.rs"]
mod tests;
