mod common;

use common::run;

#[test]
fn a_line_comment_at_end_of_file_is_ignored() {
    let result = run("print \"ok\";\n// comment");
    assert_eq!(result.stdout, "ok\n");
}

#[test]
fn a_file_containing_only_a_line_comment_produces_no_output() {
    let result = run("// comment only");
    assert_eq!(result.stdout, "");
    assert!(!result.had_error);
}

#[test]
fn a_block_comment_spanning_multiple_lines_is_skipped() {
    let result = run("/* this is\na block comment\nspanning lines */ print \"ok\";");
    assert_eq!(result.stdout, "ok\n");
}

#[test]
fn a_line_comment_may_contain_non_ascii_text() {
    let result = run("// héllo wörld\nprint \"ok\";");
    assert_eq!(result.stdout, "ok\n");
}
