use std::path::PathBuf;

use super::*;
use crate::analyzer::Violation;
use crate::rules::RuleId;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert!("sarif".parse::<OutputFormat>().is_err());
}

#[test]
fn output_format_deserializes_lowercase() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        format: OutputFormat,
        color: ColorMode,
    }
    let w: Wrapper = toml::from_str("format = \"json\"\ncolor = \"never\"").unwrap();
    assert_eq!(w.format, OutputFormat::Json);
    assert_eq!(w.color, ColorMode::Never);
}

#[test]
fn formatter_for_each_format() {
    let report = AnalysisReport::new(vec![Violation::whole_file(
        RuleId::LoopUsage,
        "No loops found",
    )]);
    let path = PathBuf::from("Program.cs");

    let text = formatter_for(OutputFormat::Text, ColorMode::Never, 0)
        .format(&path, &report)
        .unwrap();
    assert!(text.contains("- [Failed] No loops found"));

    let json = formatter_for(OutputFormat::Json, ColorMode::Never, 0)
        .format(&path, &report)
        .unwrap();
    assert!(json.contains("\"loop-usage\""));
}
