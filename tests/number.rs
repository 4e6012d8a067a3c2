#[macro_use]
mod common;

#[test]
fn a_trailing_dot_not_followed_by_a_digit_stops_before_the_dot() {
    assert_failure!(
        "trailing_dot",
        "123.\nfoo;",
        70,
        "Undefined variable 'foo'.\n[line 2]\n"
    );
}

#[test]
fn a_leading_dot_is_not_a_valid_expression_start() {
    assert_failure!(
        "leading_dot",
        ".5;",
        65,
        "[line 1] Error at '.': Expect expression.\n"
    );
}

#[test]
fn integer_and_fractional_literals() {
    assert_stdout!(
        "literals",
        "print 123; print 987654; print 0; print 123.456;",
        "123\n987654\n0\n123.456\n"
    );
}

#[test]
fn nan_does_not_equal_itself() {
    assert_stdout!(
        "nan_equality",
        "var nan = 0 / 0.0; print nan == nan; print nan != nan;",
        "false\ntrue\n"
    );
}
