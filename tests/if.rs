#[macro_use]
mod common;

#[test]
fn dangling_else_binds_to_the_nearest_if() {
    assert_stdout!(
        "dangling_else",
        "if (true) if (false) print \"bad\"; else print \"good\";",
        "good\n"
    );
}

#[test]
fn else_branch_runs_when_condition_is_false() {
    assert_stdout!("else_flow", "if (false) print \"bad\"; else print \"good\";", "good\n");
}

#[test]
fn then_branch_runs_when_condition_is_true() {
    assert_stdout!("if_flow", "if (true) print \"good\"; else print \"bad\";", "good\n");
}

#[test]
fn only_false_and_nil_are_falsey() {
    assert_stdout!(
        "truth",
        r#"if (false) print "bad"; else print "false is falsey";
           if (nil) print "bad"; else print "nil is falsey";
           if (0) print "zero is truthy"; else print "bad";
           if ("") print "empty string is truthy"; else print "bad";"#,
        "false is falsey\nnil is falsey\nzero is truthy\nempty string is truthy\n"
    );
}

#[test]
fn class_keyword_in_the_then_branch_is_a_parse_error() {
    assert_failure!(
        "class_in_then",
        "if (true) class;",
        65,
        "[line 1] Error at 'class': Expect expression.\n"
    );
}

#[test]
fn class_keyword_in_the_else_branch_is_a_parse_error() {
    assert_failure!(
        "class_in_else",
        "if (true) 1; else class;",
        65,
        "[line 1] Error at 'class': Expect expression.\n"
    );
}
