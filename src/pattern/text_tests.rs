use super::*;

#[test]
fn comment_lines() {
    assert!(is_comment_line("// note"));
    assert!(is_comment_line("/// <summary>"));
    assert!(is_comment_line("/* block"));
    assert!(!is_comment_line("int x = 1; // trailing"));
    assert!(!is_comment_line("* continuation"));
}

#[test]
fn comment_lead_in() {
    assert!(is_comment_lead_in("// Computes the score"));
    assert!(is_comment_lead_in("/** Computes the score */"));
    assert!(is_comment_lead_in("*/"));
    assert!(!is_comment_lead_in(""));
    assert!(!is_comment_lead_in("[Test]"));
}

#[test]
fn statement_terminator() {
    assert!(is_statement("int x = 0;"));
    assert!(!is_statement("public void Run()"));
}

#[test]
fn brace_only_text() {
    assert!(is_brace_only("}}}"));
    assert!(is_brace_only("{ }"));
    assert!(is_brace_only(""));
    assert!(!is_brace_only("}return;}"));
}

#[test]
fn word_matching_respects_boundaries() {
    assert!(contains_word("public static int Score;", "static"));
    assert!(contains_word("static", "static"));
    assert!(!contains_word("int staticCount;", "static"));
    assert!(!contains_word("int constant = 4;", "const"));
    assert!(contains_word("private const int Max = 4;", "const"));
    assert!(!contains_word("anything", ""));
}

#[test]
fn assignment_or_comparison_operators() {
    assert!(has_assignment_or_comparison("x = 5;"));
    assert!(has_assignment_or_comparison("if (x == 5)"));
    assert!(has_assignment_or_comparison("while (i < 10)"));
    assert!(has_assignment_or_comparison("if (i >= 3)"));
    assert!(!has_assignment_or_comparison("Console.WriteLine(42);"));
}

#[test]
fn integer_literals_basic() {
    assert_eq!(integer_literals("int x = 42;"), vec!["42"]);
    assert_eq!(integer_literals("Foo(3, 7)"), vec!["3", "7"]);
    assert!(integer_literals("no digits").is_empty());
}

#[test]
fn integer_literals_skip_identifiers_and_floats() {
    assert!(integer_literals("var player2 = x;").is_empty());
    assert!(integer_literals("double d = 3.14;").is_empty());
    assert!(integer_literals("int h = 0x1F;").is_empty());
    assert!(integer_literals("Vector2 v;").is_empty());
}

#[test]
fn integer_literals_sign_handling() {
    assert_eq!(integer_literals("int x = -1;"), vec!["-1"]);
    assert_eq!(integer_literals("int x = -25;"), vec!["-25"]);
    assert_eq!(integer_literals("int y = n-2;"), vec!["2"]);
    assert_eq!(integer_literals("-7"), vec!["-7"]);
}

#[test]
fn trivial_integers() {
    assert!(is_trivial_integer("0"));
    assert!(is_trivial_integer("1"));
    assert!(is_trivial_integer("-1"));
    assert!(is_trivial_integer("00"));
    assert!(is_trivial_integer("-0"));
    assert!(!is_trivial_integer("2"));
    assert!(!is_trivial_integer("-2"));
    assert!(!is_trivial_integer("10"));
    assert!(!is_trivial_integer("100000000000000000000000"));
}
