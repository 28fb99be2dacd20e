use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn load_preserves_order_and_raw_text() {
    let doc = SourceDocument::load("class Foo\n{\n    int x = 0;\n}\n");

    assert_eq!(doc.line_count(), 4);
    assert_eq!(doc.lines()[0].number, 1);
    assert_eq!(doc.lines()[2].raw, "    int x = 0;");
    assert_eq!(doc.lines()[2].trimmed, "int x = 0;");
    assert_eq!(doc.lines()[3].number, 4);
}

#[test]
fn load_keeps_full_text() {
    let content = "a\r\nb\n";
    let doc = SourceDocument::load(content);

    assert_eq!(doc.text(), content);
    assert_eq!(doc.lines()[0].raw, "a");
    assert_eq!(doc.lines()[1].raw, "b");
}

#[test]
fn load_empty_content() {
    let doc = SourceDocument::load("");
    assert_eq!(doc.line_count(), 0);
    assert!(doc.line(0).is_none());
}

#[test]
fn blank_line_detection() {
    let doc = SourceDocument::load("x\n   \n\t\n");
    assert!(!doc.lines()[0].is_blank());
    assert!(doc.lines()[1].is_blank());
    assert!(doc.lines()[2].is_blank());
}

#[test]
fn from_path_reads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Program.cs");
    fs::write(&path, "line one\nline two\n").unwrap();

    let doc = SourceDocument::from_path(&path).unwrap();
    assert_eq!(doc.line_count(), 2);
    assert_eq!(doc.line(1).unwrap().trimmed, "line two");
}

#[test]
fn from_path_missing_file_is_file_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.cs");

    let err = SourceDocument::from_path(&path).unwrap_err();
    assert!(matches!(err, StyleGuardError::FileRead { .. }));
}
