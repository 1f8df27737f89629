mod common;

use common::run;

#[test]
fn equality_between_booleans() {
    let result = run(r#"
        print true == true;
        print true == false;
        print false == true;
        print false == false;
        print true != false;
        print true != true;
    "#);
    assert_eq!(result.stdout, "true\nfalse\nfalse\ntrue\ntrue\nfalse\n");
}

#[test]
fn comparing_a_bool_against_a_number_is_a_runtime_error() {
    let result = run("print true == 1;");
    assert!(result.had_runtime_error);
}

#[test]
fn not_negates_truthiness() {
    let result = run(r#"
        print !true;
        print !false;
        print !!true;
    "#);
    assert_eq!(result.stdout, "false\ntrue\ntrue\n");
}
