use std::fmt::Write;
use std::str::FromStr;

use serde::Serialize;

use crate::cli::{Cli, ExplainArgs, ExplainFormat};
use crate::error::StyleGuardError;
use crate::output::print_error;
use crate::rules::RuleId;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[derive(Debug, Serialize)]
struct RuleExplanation {
    rule: u8,
    name: &'static str,
    description: &'static str,
}

impl From<RuleId> for RuleExplanation {
    fn from(id: RuleId) -> Self {
        Self {
            rule: id.number(),
            name: id.name(),
            description: id.description(),
        }
    }
}

#[must_use]
pub fn run_explain(args: &ExplainArgs, cli: &Cli) -> i32 {
    match run_explain_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_explain_impl(args: &ExplainArgs, cli: &Cli) -> crate::Result<()> {
    let rules = select_rules(args.rule.as_deref())?;
    let output = format_explanation(&rules, args.format)?;
    if !cli.quiet {
        print!("{output}");
    }
    Ok(())
}

/// Resolve the requested rule, or the whole catalog when none is given.
///
/// # Errors
/// Returns `UnknownRule` if the selector matches no rule number or name.
pub fn select_rules(selector: Option<&str>) -> crate::Result<Vec<RuleId>> {
    match selector {
        None => Ok(RuleId::ALL.to_vec()),
        Some(s) => RuleId::from_str(s)
            .map(|id| vec![id])
            .map_err(|_| StyleGuardError::UnknownRule(s.to_string())),
    }
}

fn format_explanation(rules: &[RuleId], format: ExplainFormat) -> crate::Result<String> {
    match format {
        ExplainFormat::Text => Ok(format_text(rules)),
        ExplainFormat::Json => {
            let entries: Vec<RuleExplanation> = rules.iter().copied().map(Into::into).collect();
            let mut json = serde_json::to_string_pretty(&entries)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn format_text(rules: &[RuleId]) -> String {
    let mut out = String::new();
    for (i, id) in rules.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "Rule {}: {}", id.number(), id.name());
        let _ = writeln!(out, "  {}", id.description());
    }
    out
}

#[cfg(test)]
#[path = "explain_tests.rs"]
mod tests;
