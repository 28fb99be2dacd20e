use std::fs;

use tracing::info;

use crate::cli::InitArgs;
use crate::output::print_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, StyleGuardError};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a fresh configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(StyleGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    info!(path = %output_path.display(), "wrote configuration template");

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# style-guard configuration file

[output]
# Report format: "text" or "json" (default: "text")
format = "text"

# Color mode: "auto", "always" or "never" (default: "auto")
# NO_COLOR in the environment disables color in auto mode
color = "auto"

[check]
# Report violations but exit with status 0 (default: false)
warn_only = false
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
