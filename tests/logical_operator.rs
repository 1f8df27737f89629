mod common;

use common::run;

#[test]
fn and_short_circuits_on_a_falsey_left_operand() {
    let result = run(r#"
        print false and "bad";
        print true and 1;
        print 1 and false;
        print 1 and true;
        print 1 and 2 and 3;
        var a = 1;
        a and (a = 2);
        print a;
    "#);
    assert_eq!(result.stdout, "false\n1\nfalse\ntrue\n3\n2\n");
}

#[test]
fn and_returns_one_of_its_operands_not_necessarily_a_bool() {
    let result = run(r#"
        print false and "bad";
        print nil and "bad";
        print 0 and "ok";
        print "" and "ok";
    "#);
    assert_eq!(result.stdout, "false\nnil\nok\nok\n");
}

#[test]
fn or_short_circuits_on_a_truthy_left_operand() {
    let result = run(r#"
        print 1 or true;
        print false or 1;
        print false or false or true;
        print false or false or false;
        var a = false;
        var b = a or (a = true);
        print a;
    "#);
    assert_eq!(result.stdout, "1\n1\ntrue\nfalse\ntrue\n");
}

#[test]
fn or_returns_one_of_its_operands_not_necessarily_a_bool() {
    let result = run(r#"
        print 1 or true;
        print false or 1;
        print nil or "s";
    "#);
    assert_eq!(result.stdout, "1\n1\ns\n");
}
