#[macro_use]
mod common;

#[test]
fn a_reference_after_a_multiline_string_resumes_on_the_right_line() {
    assert_failure!(
        "error_after_multiline",
        "var a = \"1\n2\n3\";\nprint a;\nerr;",
        70,
        "Undefined variable 'err'.\n[line 4]\n"
    );
}

#[test]
fn string_literals() {
    assert_stdout!(
        "literals",
        "print \"()\"; print \"a string\"; print \"A~\u{00be}\u{00de}\u{0950}\u{0b83}\";",
        "()\na string\nA~¾Þॐஃ\n"
    );
}

#[test]
fn a_string_literal_may_span_multiple_lines() {
    assert_stdout!("multiline", "print \"1\n2\n3\";", "1\n2\n3\n");
}

#[test]
fn an_unterminated_string_is_a_scan_error() {
    assert_failure!(
        "unterminated",
        "\"unterminated",
        65,
        "[line 1] Error: Unterminated string.\n"
    );
}
