mod common;

use common::run;

#[test]
fn a_class_declaration_cannot_appear_in_a_for_body() {
    let result = run("for (;;) class Foo {}");
    assert!(result.had_error);
}

#[test]
fn a_fun_declaration_cannot_appear_in_a_for_body() {
    let result = run("for (;;) fun foo() {}");
    assert!(result.had_error);
}

#[test]
fn each_iteration_of_a_for_loop_gets_its_own_loop_variable_binding() {
    let result = run(r#"
        fun makeCounter() {
            var result;
            for (var i = 1; i < 4; i = i + 1) {
                var j = i;
                fun show() { print j; }
                if (i == 1) { result = show; }
            }
            return result;
        }
        var show = makeCounter();
        show();
    "#);
    assert_eq!(result.stdout, "1\n");
}

#[test]
fn returning_from_inside_a_for_loop_stops_iteration() {
    let result = run(r#"
        fun f() {
            for (var i = 0; ; i = i + 1) {
                print i;
                if (i >= 2) return;
            }
        }
        f();
    "#);
    assert_eq!(result.stdout, "0\n1\n2\n");
}
