mod common;

use common::run;

#[test]
fn referencing_an_undefined_variable_after_a_multiline_string_reports_the_right_line() {
    let result = run("\"a\nb\nc\";\nprint unknown;");
    assert!(result.had_runtime_error);
}

#[test]
fn string_literals() {
    let result = run(r#"
        print "()";
        print "a string";
        print "A~\u{00be}\u{00de}\u{0950}\u{0b83}";
    "#);
    assert_eq!(result.stdout, "()\na string\nA~\u{00be}\u{00de}\u{0950}\u{0b83}\n");
}

#[test]
fn a_string_literal_can_span_multiple_lines() {
    let result = run(r#"
        var a = "1
2
3";
        print a;
    "#);
    assert_eq!(result.stdout, "1\n2\n3\n");
}

#[test]
fn an_unterminated_string_is_a_scan_error() {
    let result = run("\"this string has no close quote");
    assert!(result.had_error);
    assert!(result.diagnostics.contains("Unterminated string."));
}
