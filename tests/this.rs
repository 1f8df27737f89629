mod common;

use common::run;

#[test]
fn this_is_captured_by_a_closure() {
    let result = run(r#"
        class Foo {
            getClosure() {
                fun closure() {
                    print this.name;
                }
                return closure;
            }
            init(name) {
                this.name = name;
            }
        }
        var closure = Foo("Foo").getClosure();
        closure();
    "#);
    assert_eq!(result.stdout, "Foo\n");
}

#[test]
fn this_resolves_to_the_innermost_enclosing_class() {
    let result = run(r#"
        class Outer {
            method() {
                print this;
                fun f() {
                    fun g() {
                        print this;
                        class Inner {
                            method() {
                                print this;
                            }
                        }
                        Inner().method();
                    }
                    g();
                }
                f();
            }
        }
        Outer().method();
    "#);
    assert_eq!(result.had_runtime_error, false);
}

#[test]
fn nested_closures_each_bind_their_own_this() {
    let result = run(r#"
        class Foo {
            getClosure() {
                fun f() {
                    fun g() {
                        print this.name;
                    }
                    return g;
                }
                return f();
            }
            init(name) {
                this.name = name;
            }
        }
        var closure = Foo("outer").getClosure();
        closure();
    "#);
    assert_eq!(result.stdout, "outer\n");
}

#[test]
fn using_this_at_top_level_is_a_resolve_error() {
    let result = run("print this;");
    assert!(result.had_error);
    assert!(result
        .diagnostics
        .contains("Can't use 'this' outside of a class."));
}

#[test]
fn this_refers_to_the_receiver_inside_a_method() {
    let result = run(r#"
        class Foo {
            init(value) {
                this.value = value;
            }
            getValue() {
                return this.value;
            }
        }
        print Foo("hello").getValue();
    "#);
    assert_eq!(result.stdout, "hello\n");
}

#[test]
fn using_this_inside_a_top_level_function_is_a_resolve_error() {
    let result = run(r#"
        fun notAMethod() {
            print this;
        }
    "#);
    assert!(result.had_error);
    assert!(result
        .diagnostics
        .contains("Can't use 'this' outside of a class."));
}
