mod common;

use common::run;

#[test]
fn calling_a_function_stored_in_a_field() {
    let result = run(r#"
        class Foo {}
        fun bar(a, b) {
            print "bar";
            print a;
            print b;
        }
        var foo = Foo();
        foo.bar = bar;
        foo.bar(1, 2);
    "#);
    assert_eq!(result.stdout, "bar\n1\n2\n");
}

#[test]
fn calling_a_non_function_field_is_a_runtime_error() {
    let result = run(r#"
        class Foo {}
        var foo = Foo();
        foo.bar = "not fn";
        foo.bar();
    "#);
    assert!(result.had_runtime_error);
    assert!(result.diagnostics.contains("Can only call functions and classes."));
}

#[test]
fn methods_can_be_reassigned_as_fields() {
    let result = run(r#"
        class Foo {
            bar(arg) {
                print "bar";
                print arg;
            }
        }
        var foo = Foo();
        var bar = foo.bar;
        foo.bar = "other";
        print foo.bar;
        bar("arg");
    "#);
    assert_eq!(result.stdout, "other\nbar\narg\n");
}

#[test]
fn getting_a_property_on_a_bool_is_a_runtime_error() {
    let result = run("true.foo;");
    assert!(result.had_runtime_error);
    assert!(result.diagnostics.contains("Only instances have properties."));
}

#[test]
fn getting_a_property_on_a_class_is_a_runtime_error() {
    let result = run(r#"
        class Foo {}
        Foo.bar;
    "#);
    assert!(result.had_runtime_error);
    assert!(result.diagnostics.contains("Only instances have properties."));
}

#[test]
fn getting_a_property_on_nil_is_a_runtime_error() {
    let result = run("nil.foo;");
    assert!(result.had_runtime_error);
    assert!(result.diagnostics.contains("Only instances have properties."));
}

#[test]
fn getting_a_property_on_a_string_is_a_runtime_error() {
    let result = run(r#""str".foo;"#);
    assert!(result.had_runtime_error);
    assert!(result.diagnostics.contains("Only instances have properties."));
}

#[test]
fn an_instance_can_hold_many_fields() {
    let result = run(r#"
        class Foo {}
        var foo = Foo();
        foo.apple = "apple";
        foo.banana = "banana";
        foo.cherry = "cherry";
        print foo.apple;
        print foo.banana;
        print foo.cherry;
    "#);
    assert_eq!(result.stdout, "apple\nbanana\ncherry\n");
}

#[test]
fn a_method_can_be_called_with_arguments() {
    let result = run(r#"
        class Foo {
            method(arg) {
                print "got method";
                print arg;
            }
        }
        Foo().method("arg");
    "#);
    assert_eq!(result.stdout, "got method\narg\n");
}

#[test]
fn a_method_binds_this_to_the_instance_it_was_looked_up_on() {
    let result = run(r#"
        class Foo {
            init(value) {
                this.value = value;
            }
            show() {
                print this.value;
            }
        }
        var a = Foo("1");
        var b = Foo("2");
        b.show = a.show;
        b.show();
    "#);
    assert_eq!(result.stdout, "1\n");
}

#[test]
fn setting_and_getting_fields_on_an_instance() {
    let result = run(r#"
        class Foo {}
        var foo = Foo();
        foo.bar = "bar value";
        foo.baz = "baz value";
        print foo.bar;
        print foo.baz;
    "#);
    assert_eq!(result.stdout, "bar value\nbaz value\n");
}

#[test]
fn evaluation_order_of_a_set_expression_evaluates_the_target_first() {
    let result = run("undefined1.bar = undefined2;");
    assert!(result.had_runtime_error);
    assert!(result.diagnostics.contains("Undefined variable 'undefined1'."));
}

#[test]
fn setting_a_field_on_a_bool_is_a_runtime_error() {
    let result = run(r#"true.foo = "value";"#);
    assert!(result.had_runtime_error);
    assert!(result.diagnostics.contains("Only instances have fields."));
}

#[test]
fn setting_a_field_on_a_class_is_a_runtime_error() {
    let result = run(r#"
        class Foo {}
        Foo.bar = "value";
    "#);
    assert!(result.had_runtime_error);
    assert!(result.diagnostics.contains("Only instances have fields."));
}

#[test]
fn setting_a_field_on_nil_is_a_runtime_error() {
    let result = run(r#"nil.foo = "value";"#);
    assert!(result.had_runtime_error);
    assert!(result.diagnostics.contains("Only instances have fields."));
}

#[test]
fn setting_a_field_on_a_string_is_a_runtime_error() {
    let result = run(r#""str".foo = "value";"#);
    assert!(result.had_runtime_error);
    assert!(result.diagnostics.contains("Only instances have fields."));
}

#[test]
fn reading_an_undefined_property_is_a_runtime_error() {
    let result = run(r#"
        class Foo {}
        var foo = Foo();
        foo.bar;
    "#);
    assert!(result.had_runtime_error);
    assert!(result.diagnostics.contains("Undefined property 'bar'."));
}
