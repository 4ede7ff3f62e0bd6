mod common;
use basic::lang::ErrorCode;
use common::*;
use pretty_assertions::assert_eq;

#[test]
fn test_if_then() {
    let program = r#"
10 LET A = 10
20 IF A > 5 THEN PRINT "A is greater than 5"
30 IF A < 5 THEN PRINT "A is less than 5"
40 PRINT "Done""#;
    assert_eq!(exec(program), "A is greater than 5\nDone\n");
}

#[test]
fn test_if_equal() {
    assert_eq!(exec("10 LET A = 3\n20 IF A = 3 THEN PRINT \"THREE\""), "THREE\n");
    assert_eq!(exec("10 LET A = 3\n20 IF A = 4 THEN PRINT \"FOUR\""), "");
}

#[test]
fn test_if_then_goto() {
    let program = r#"
10 LET A = 1
20 IF A = 1 THEN GOTO 40
30 PRINT "SKIPPED"
40 PRINT "LANDED""#;
    assert_eq!(exec(program), "LANDED\n");
}

#[test]
fn test_if_then_end_continues() {
    let program = r#"
10 IF 1 = 1 THEN END
20 PRINT "AFTER""#;
    assert_eq!(exec(program), "AFTER\n");
}

#[test]
fn test_if_then_next_loops() {
    let program = r#"
10 FOR I = 1 TO 3
20 PRINT I
30 IF 1 = 1 THEN NEXT I
40 PRINT "DONE""#;
    assert_eq!(exec(program), "1\n2\n3\nDONE\n");
}

#[test]
fn test_if_then_let() {
    assert_eq!(
        exec("10 LET A = 1\n20 IF A > 0 THEN LET A = A * 100\n30 PRINT A"),
        "100\n"
    );
}

#[test]
fn test_second_then_is_rejected() {
    let program = r#"
10 LET A = 2
20 IF A > 1 THEN IF A < 3 THEN PRINT "BETWEEN""#;
    let e = run(program).unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.line_number(), Some(20));
}

#[test]
fn test_condition_without_operator() {
    assert_eq!(exec("10 IF 1 THEN PRINT \"NEVER\""), "");
}

#[test]
fn test_missing_then() {
    let e = run("10 IF A > 1 PRINT \"X\"").unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.to_string(), "error at line 10: invalid IF syntax");
}

#[test]
fn test_then_statement_error_reports_if_line() {
    let e = run("10 IF 1 = 1 THEN GOTO 50").unwrap_err();
    assert_eq!(e.code(), ErrorCode::UndefinedLine);
    assert_eq!(e.line_number(), Some(10));
}

#[test]
fn test_greater_or_equal_is_not_an_operator() {
    let e = run("10 LET A = 5\n20 IF A >= 5 THEN PRINT \"X\"").unwrap_err();
    assert_eq!(e.code(), ErrorCode::CannotEvaluate);
}
