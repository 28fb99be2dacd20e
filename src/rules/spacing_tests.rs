use super::*;
use crate::rules::test_support::{lines, run};

#[test]
fn body_followed_by_scope_close_passes() {
    let content = "\
public void Run()
{
    Step();
}
}
";
    assert!(run(&MethodSpacingRule, content).is_empty());
}

#[test]
fn body_followed_by_statement_fails_at_closing_brace() {
    let content = "\
public void Run()
{
    Step();
}
Other();
";
    let violations = run(&MethodSpacingRule, content);

    assert_eq!(lines(&violations), vec![Some(4)]);
    assert!(violations[0].message.contains("'Walk'"));
}

#[test]
fn one_line_body_resolves_to_next_closing_body() {
    let content = "\
public int Run() { return 1; }
// Walks.
public void Walk()
{
}
}
";
    assert!(run(&MethodSpacingRule, content).is_empty());
}

#[test]
fn one_line_body_shares_next_body_violation() {
    let content = "\
public int Run() { return 1; }
public void Walk()
{
}
Other();
";
    let violations = run(&MethodSpacingRule, content);

    assert_eq!(lines(&violations), vec![Some(4)]);
    assert!(violations[0].message.contains("'Walk'"));
}

#[test]
fn two_blank_lines_pass() {
    let content = "\
public void Run()
{
}


public void Walk()
{
}
}
";
    assert!(run(&MethodSpacingRule, content).is_empty());
}

#[test]
fn single_blank_line_fails() {
    let content = "\
public void Run()
{
}

public void Walk()
{
}
}
";
    let violations = run(&MethodSpacingRule, content);
    assert_eq!(lines(&violations), vec![Some(3)]);
}

#[test]
fn blank_then_scope_close_fails() {
    let content = "\
public void Run()
{
}

}
";
    let violations = run(&MethodSpacingRule, content);
    assert_eq!(lines(&violations), vec![Some(3)]);
}

#[test]
fn body_at_end_of_file_is_skipped() {
    let content = "public void Run()\n{\n}\n";
    assert!(run(&MethodSpacingRule, content).is_empty());

    let content = "public void Run()\n{\n}\n\n";
    assert!(run(&MethodSpacingRule, content).is_empty());
}

#[test]
fn unterminated_body_is_skipped() {
    let content = "public void Run()\n{\n    Step();\nOther();\n";
    assert!(run(&MethodSpacingRule, content).is_empty());
}

#[test]
fn indented_scope_close_is_exempt() {
    let content = "\
class Game
{
    public void Run()
    {
        Step();
    }
}
";
    assert!(run(&MethodSpacingRule, content).is_empty());
}

#[test]
fn bodyless_signature_defers_to_nearest_method() {
    let content = "\
public abstract void Run();
public void Walk()
{
}
Other();
";
    let violations = run(&MethodSpacingRule, content);

    assert_eq!(lines(&violations), vec![Some(4)]);
    assert!(violations[0].message.contains("'Walk'"));
}

#[test]
fn one_line_body_resolves_to_next_closing_body_dup() {
    let content = "\
public int Run() { return 1; }
// Walks.
public void Walk()
{
}
}
";
    assert!(run(&MethodSpacingRule, content).is_empty());
}

#[test]
fn one_line_body_shares_next_body_violation_dup() {
    let content = "\
public int Run() { return 1; }
public void Walk()
{
}
Other();
";
    let violations = run(&MethodSpacingRule, content);

    assert_eq!(lines(&violations), vec![Some(4)]);
    assert!(violations[0].message.contains("'Walk'"));
}

#[test]
fn violations_in_line_order() {
    let content = "\
public void A()
{
}
public void B()
{
}
Other();
";
    let violations = run(&MethodSpacingRule, content);
    assert_eq!(lines(&violations), vec![Some(3), Some(6)]);
}
