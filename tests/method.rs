mod common;

use common::run;

#[test]
fn methods_accept_arguments_by_arity() {
    let result = run(r#"
        class Foo {
            f0() { return "no args"; }
            f2(a, b) { return a + b; }
        }
        var foo = Foo();
        print foo.f0();
        print foo.f2(1, 2);
    "#);
    assert_eq!(result.stdout, "no args\n3\n");
}

#[test]
fn a_method_with_an_empty_block_body_returns_nil() {
    let result = run(r#"
        class Foo {
            bar() {}
        }
        print Foo().bar();
    "#);
    assert_eq!(result.stdout, "nil\n");
}

#[test]
fn calling_a_method_with_too_many_arguments_is_a_runtime_error() {
    let result = run(r#"
        class Foo {
            method(a, b) {}
        }
        Foo().method(1, 2, 3, 4);
    "#);
    assert!(result.had_runtime_error);
}

#[test]
fn calling_a_method_with_too_few_arguments_is_a_runtime_error() {
    let result = run(r#"
        class Foo {
            method(a, b) {}
        }
        Foo().method(1);
    "#);
    assert!(result.had_runtime_error);
}

#[test]
fn calling_an_undefined_method_is_a_runtime_error() {
    let result = run(r#"
        class Foo {}
        Foo().unknown();
    "#);
    assert!(result.had_runtime_error);
}

#[test]
fn printing_a_bound_method() {
    let result = run(r#"
        class Foo {
            method() {}
        }
        print Foo().method;
    "#);
    assert_eq!(result.stdout, "<fn method>\n");
}

#[test]
fn referring_to_a_method_name_without_a_receiver_is_a_runtime_error() {
    let result = run(r#"
        class Foo {
            method() {
                print method;
            }
        }
        Foo().method();
    "#);
    assert!(result.had_runtime_error);
}
