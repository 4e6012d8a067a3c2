#[macro_use]
mod common;

#[test]
fn calling_a_number_is_a_runtime_error() {
    assert_failure!(
        "num",
        "var a = 1; a();",
        70,
        "Can only call functions and classes.\n[line 1]\n"
    );
}

#[test]
fn calling_a_string_is_a_runtime_error() {
    assert_failure!(
        "string",
        "var a = \"str\"; a();",
        70,
        "Can only call functions and classes.\n[line 1]\n"
    );
}

#[test]
fn calling_a_bool_is_a_runtime_error() {
    assert_failure!(
        "bool",
        "var a = true; a();",
        70,
        "Can only call functions and classes.\n[line 1]\n"
    );
}

#[test]
fn calling_nil_is_a_runtime_error() {
    assert_failure!(
        "nil",
        "var a = nil; a();",
        70,
        "Can only call functions and classes.\n[line 1]\n"
    );
}
