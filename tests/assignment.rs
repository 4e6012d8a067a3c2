#[macro_use]
mod common;

#[test]
fn assignment_is_an_expression_that_yields_the_value() {
    assert_stdout!("assign_returns_value", "var a = 1; print a = 2;", "2\n");
}

#[test]
fn global_assignment() {
    assert_stdout!(
        "global",
        "var a = \"before\"; print a; a = \"after\"; print a;",
        "before\nafter\n"
    );
}

#[test]
fn local_assignment() {
    assert_stdout!(
        "local",
        "{ var a = \"before\"; print a; a = \"after\"; print a; }",
        "before\nafter\n"
    );
}

#[test]
fn chained_assignment_is_right_associative() {
    assert_stdout!(
        "chained",
        "var a = 1; var b = 2; a = b = 3; print a; print b;",
        "3\n3\n"
    );
}

#[test]
fn assigning_to_an_undefined_global_is_a_runtime_error() {
    assert_failure!(
        "undefined",
        "a = 1;",
        70,
        "Undefined variable 'a'.\n[line 1]\n"
    );
}

#[test]
fn assigning_to_a_literal_is_a_static_error() {
    assert_failure!(
        "literal_target",
        "1 = 2;",
        65,
        "[line 1] Error at '=': Invalid assignment target.\n"
    );
}
