use serde::{Deserialize, Serialize};

use crate::output::{ColorMode, OutputFormat};

/// Report rendering options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Report format (default: text).
    #[serde(default)]
    pub format: OutputFormat,

    /// Color mode for terminal output (default: auto).
    #[serde(default)]
    pub color: ColorMode,
}

/// Check behavior options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Report violations but always exit successfully.
    #[serde(default)]
    pub warn_only: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub check: CheckConfig,
}
