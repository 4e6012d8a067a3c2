#[macro_use]
mod common;

#[test]
fn empty_block_is_a_no_op() {
    assert_stdout!("empty", "{} print \"ok\";", "ok\n");
}

#[test]
fn block_scope_shadows_the_enclosing_scope() {
    assert_stdout!(
        "scope",
        "var a = \"outer\"; { var a = \"inner\"; print a; } print a;",
        "inner\nouter\n"
    );
}
