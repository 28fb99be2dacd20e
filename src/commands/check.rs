use tracing::info;

use crate::analyzer::Analyzer;
use crate::cli::{CheckArgs, Cli};
use crate::config::Config;
use crate::document::SourceDocument;
use crate::output::{ColorMode, formatter_for, print_error};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND};

use super::{load_config, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args, cli);

    // 2. Acquire the source file
    let document = SourceDocument::from_path(&args.path)?;
    info!(path = %args.path.display(), lines = document.line_count(), "analyzing");

    // 3. Run the rule catalog
    let report = Analyzer::new(document).analyze();
    info!(violations = report.len(), "analysis complete");

    // 4. Render and write the report
    let formatter = formatter_for(config.output.format, config.output.color, cli.verbose);
    let output = formatter.format(&args.path, &report)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(exit_code(report.is_success(), config.check.warn_only))
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs, cli: &Cli) {
    if let Some(format) = args.format {
        config.output.format = format;
    }

    if let Some(color) = cli.color {
        config.output.color = color.into();
    } else if args.output.is_some() && config.output.color == ColorMode::Auto {
        // Files never want escape codes unless asked for explicitly
        config.output.color = ColorMode::Never;
    }

    if args.warn_only {
        config.check.warn_only = true;
    }
}

const fn exit_code(success: bool, warn_only: bool) -> i32 {
    if success || warn_only {
        EXIT_SUCCESS
    } else {
        EXIT_VIOLATIONS_FOUND
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
