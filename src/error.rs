use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Unknown rule: {0}")]
    UnknownRule(String),
}

impl StyleGuardError {
    /// Short category name used as the headline of printed errors.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
            Self::UnknownRule(_) => "Rule",
        }
    }

    /// Main message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileRead { path, .. } => format!("Failed to read {}", path.display()),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::JsonSerialize(e) => e.to_string(),
            Self::UnknownRule(rule) => format!("Unknown rule '{rule}'"),
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::TomlParse(e) => e.span().map(|span| format!("at byte {}..{}", span.start, span.end)),
            Self::Config(_) | Self::Io(_) | Self::JsonSerialize(_) | Self::UnknownRule(_) => None,
        }
    }

    /// Actionable hint for the user.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::FileRead { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                Some("Check that the path exists and points to a source file")
            }
            Self::TomlParse(_) => Some("Run `style-guard init --force` to regenerate a valid config"),
            Self::UnknownRule(_) => Some("Run `style-guard explain` to list all rules"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StyleGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
