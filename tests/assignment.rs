mod common;

use common::run;

#[test]
fn associativity_assigns_right_to_left() {
    let result = run(r#"
        var a = "a";
        var b = "b";
        var c = "c";
        a = b = c;
        print a;
        print b;
        print c;
    "#);
    assert_eq!(result.stdout, "c\nc\nc\n");
}

#[test]
fn assignment_is_an_expression_that_evaluates_to_the_value() {
    let result = run(r#"
        var a = "before";
        print a = "after";
    "#);
    assert_eq!(result.stdout, "after\n");
}

#[test]
fn cannot_assign_to_a_grouping() {
    let result = run("var a = \"a\"; (a) = \"value\";");
    assert!(result.had_error);
    assert!(result.diagnostics.contains("Invalid assignment target."));
}

#[test]
fn cannot_assign_to_a_binary_expression() {
    let result = run("var a = \"a\"; a + \"b\" = \"value\";");
    assert!(result.had_error);
    assert!(result.diagnostics.contains("Invalid assignment target."));
}

#[test]
fn cannot_assign_to_this() {
    let result = run(r#"
        class Foo {
            method() {
                this = "value";
            }
        }
    "#);
    assert!(result.had_error);
    assert!(result.diagnostics.contains("Invalid assignment target."));
}

#[test]
fn assigning_to_an_undefined_variable_is_a_runtime_error() {
    let result = run("unknown = \"value\";");
    assert!(result.had_runtime_error);
}
