use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = StyleGuardError::Config("unknown format".to_string());
    assert_eq!(err.to_string(), "Configuration error: unknown format");
}

#[test]
fn error_display_file_read() {
    let err = StyleGuardError::FileRead {
        path: PathBuf::from("Program.cs"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("Program.cs"));
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(
        StyleGuardError::Config("test".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        StyleGuardError::FileRead {
            path: PathBuf::from("a.cs"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        }
        .error_type(),
        "FileRead"
    );
    assert_eq!(
        StyleGuardError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
}

#[test]
fn file_read_not_found_has_detail_and_suggestion() {
    let err = StyleGuardError::FileRead {
        path: PathBuf::from("missing.cs"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };
    assert_eq!(err.message(), "Failed to read missing.cs");
    assert_eq!(err.detail().as_deref(), Some("no such file"));
    assert!(err.suggestion().is_some());
}

#[test]
fn file_read_permission_denied_has_no_suggestion() {
    let err = StyleGuardError::FileRead {
        path: PathBuf::from("locked.cs"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.suggestion().is_none());
}

#[test]
fn toml_parse_error_is_config_category() {
    let parse_err = toml::from_str::<toml::Value>("output = [").unwrap_err();
    let err = StyleGuardError::from(parse_err);
    assert_eq!(err.error_type(), "Config");
    assert!(err.suggestion().is_some());
}

#[test]
fn io_error_converts_via_from() {
    fn fails() -> Result<()> {
        Err(std::io::Error::other("disk full"))?
    }
    let err = fails().unwrap_err();
    assert!(matches!(err, StyleGuardError::Io(_)));
    assert_eq!(err.message(), "disk full");
}

#[test]
fn unknown_rule_error() {
    let err = StyleGuardError::UnknownRule("42".to_string());
    assert_eq!(err.to_string(), "Unknown rule: 42");
    assert_eq!(err.error_type(), "Rule");
    assert_eq!(err.message(), "Unknown rule '42'");
    assert!(err.suggestion().unwrap().contains("explain"));
}
