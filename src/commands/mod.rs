pub mod check;
pub mod explain;
pub mod init;

pub use check::run_check;
pub use explain::run_explain;
pub use init::{generate_config_template, run_init};

use std::path::Path;

use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::output::print_warning;

/// Load configuration honoring `--config` and `--no-config`.
///
/// # Errors
/// Returns an error if a config file exists but cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<Config> {
    if no_config {
        if let Some(path) = config_path {
            print_warning(&format!(
                "--no-config is set; ignoring {}",
                path.display()
            ));
        }
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Write rendered output to a file (creating parent directories), or to stdout unless quiet.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
