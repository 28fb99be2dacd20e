use regex::Regex;

use crate::analyzer::Violation;
use crate::pattern::{contains_word, is_comment_line, is_statement};

use super::{Rule, RuleContext, RuleId};

/// Public static state must be immutable.
///
/// A line mentioning both `public` and `static` is treated as a field unless
/// it has a parameter list, and passes only when it is `const` or `readonly`.
pub struct PublicStaticFieldRule;

impl PublicStaticFieldRule {
    fn is_mutable_public_static(text: &str) -> bool {
        contains_word(text, "public")
            && contains_word(text, "static")
            && !text.contains("const")
            && !text.contains("readonly")
            && !text.contains('(')
    }
}

impl Rule for PublicStaticFieldRule {
    fn id(&self) -> RuleId {
        RuleId::PublicStaticField
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation> {
        ctx.document
            .lines()
            .iter()
            .filter(|line| !is_comment_line(&line.trimmed))
            .filter(|line| Self::is_mutable_public_static(&line.trimmed))
            .map(|line| {
                let subject = ctx
                    .signatures
                    .field(&line.raw)
                    .map_or_else(|| "Public static field".to_string(), |field| {
                        format!("Public static field '{}'", field.name)
                    });
                Violation::at_line(
                    self.id(),
                    line.number,
                    format!(
                        "{subject} on line {} should be const, readonly or non-public",
                        line.number
                    ),
                )
            })
            .collect()
    }
}

/// Media resources are loaded once and shared.
pub struct StaticReadonlyMediaRule {
    media_pattern: Regex,
}

impl Default for StaticReadonlyMediaRule {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticReadonlyMediaRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            media_pattern: Regex::new(
                r"\b(?:Image|Sprite|Bitmap|Icon|Texture\w*|Sound\w*|Audio\w*|Video\w*|Animation\w*|Song\w*)\b",
            )
            .expect("Invalid regex"),
        }
    }
}

impl Rule for StaticReadonlyMediaRule {
    fn id(&self) -> RuleId {
        RuleId::StaticReadonlyMedia
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation> {
        ctx.document
            .lines()
            .iter()
            .filter(|line| is_statement(&line.trimmed))
            .filter(|line| self.media_pattern.is_match(&line.trimmed))
            .filter(|line| !line.trimmed.contains("static readonly"))
            .map(|line| {
                let subject = ctx
                    .signatures
                    .field(&line.raw)
                    .map_or_else(|| "Media field".to_string(), |field| {
                        format!("Media field '{}'", field.name)
                    });
                Violation::at_line(
                    self.id(),
                    line.number,
                    format!(
                        "{subject} on line {} should be declared 'static readonly'",
                        line.number
                    ),
                )
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
