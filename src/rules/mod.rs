//! The rule catalog.
//!
//! Every rule is stateless and independent: it reads the document and
//! returns its violations in line order. Rules never see each other's output.

mod comments;
mod duplication;
mod fields;
mod id;
mod literals;
mod naming;
mod spacing;
mod usage;

pub use comments::DeclarationCommentRule;
pub use duplication::DuplicateBlockRule;
pub use fields::{PublicStaticFieldRule, StaticReadonlyMediaRule};
pub use id::RuleId;
pub use literals::MagicNumberRule;
pub use naming::MethodNamingRule;
pub use spacing::MethodSpacingRule;
pub use usage::{CollectionUsageRule, LoopUsageRule, MethodPresenceRule};

use crate::analyzer::Violation;
use crate::document::SourceDocument;
use crate::pattern::SignaturePattern;

/// Read-only inputs handed to every rule.
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    pub document: &'a SourceDocument,
    pub signatures: &'a SignaturePattern,
}

impl<'a> RuleContext<'a> {
    #[must_use]
    pub const fn new(document: &'a SourceDocument, signatures: &'a SignaturePattern) -> Self {
        Self {
            document,
            signatures,
        }
    }
}

/// A single heuristic check over a source document.
pub trait Rule {
    fn id(&self) -> RuleId;

    /// Run the check. Must be total over any text.
    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation>;
}

/// All rules, in execution order.
#[must_use]
pub fn catalog() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(MethodNamingRule),
        Box::new(PublicStaticFieldRule),
        Box::new(StaticReadonlyMediaRule::new()),
        Box::new(DuplicateBlockRule),
        Box::new(CollectionUsageRule),
        Box::new(LoopUsageRule::new()),
        Box::new(MagicNumberRule),
        Box::new(MethodSpacingRule),
        Box::new(DeclarationCommentRule),
        Box::new(MethodPresenceRule),
    ]
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
