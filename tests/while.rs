#[macro_use]
mod common;

#[test]
fn while_loop_runs_until_the_condition_is_false() {
    assert_stdout!("syntax", "var i = 0; while (i < 3) { print i; i = i + 1; }", "0\n1\n2\n");
}

#[test]
fn a_closure_created_inside_a_loop_body_captures_its_own_iteration() {
    assert_stdout!(
        "closure_in_body",
        r#"var i = 1;
           while (i < 4) {
               fun show() { print i; }
               show();
               i = i + 1;
           }"#,
        "1\n2\n3\n"
    );
}

#[test]
fn class_keyword_in_loop_body_is_a_parse_error() {
    assert_failure!(
        "class_in_body",
        "while (true) class;",
        65,
        "[line 1] Error at 'class': Expect expression.\n"
    );
}

#[test]
fn a_return_inside_a_while_body_exits_the_enclosing_function() {
    assert_stdout!(
        "return_inside",
        "fun f() { var i = 0; while (true) { if (i == 1) return i; i = i + 1; } } print f();",
        "1\n"
    );
}
