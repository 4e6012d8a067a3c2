#[macro_use]
mod common;

#[test]
fn and_short_circuits_and_returns_an_operand() {
    assert_stdout!(
        "and",
        r#"print false and 1; print true and 1; print 1 and false;
           print 1 and true; print 1 and 2 and 3;"#,
        "false\n1\nfalse\ntrue\n3\n"
    );
}

#[test]
fn and_uses_truthiness_not_booleans() {
    assert_stdout!(
        "and_truth",
        r#"print false and "bad"; print nil and "bad"; print 0 and "ok";
           print "s" and "ok";"#,
        "false\nnil\nok\nok\n"
    );
}

#[test]
fn or_short_circuits_and_returns_an_operand() {
    assert_stdout!(
        "or",
        "print false or 1; print true or 1; print false or false or true;",
        "1\ntrue\ntrue\n"
    );
}

#[test]
fn or_uses_truthiness_not_booleans() {
    assert_stdout!(
        "or_truth",
        r#"print false or "ok"; print nil or "ok"; print true or 1; print 0 or "bad";"#,
        "ok\nok\ntrue\n0\n"
    );
}
