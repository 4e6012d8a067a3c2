#[macro_use]
mod common;

#[test]
fn equality() {
    assert_stdout!(
        "equality",
        r#"print true == true; print true == false; print false == true;
           print false == false; print true == 1; print false == 0;
           print true == "true"; print false == "false";"#,
        "true\nfalse\nfalse\ntrue\nfalse\nfalse\nfalse\nfalse\n"
    );
}

#[test]
fn not() {
    assert_stdout!("not", "print !true; print !false; print !!true;", "false\ntrue\ntrue\n");
}
