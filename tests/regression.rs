mod common;

use common::run;

#[test]
fn printing_a_class_value_shows_its_name() {
    let result = run(r#"
        class B {}
        print B;
    "#);
    assert_eq!(result.stdout, "<class B>\n");
}

#[test]
fn printing_a_function_value_before_it_is_called() {
    let result = run(r#"
        fun f() {}
        print f;
    "#);
    assert_eq!(result.stdout, "<fn f>\n");
}
