#[macro_use]
mod common;

#[test]
fn empty_file_produces_no_output() {
    assert_stdout!("empty_file", "", "");
}

#[test]
fn operator_precedence_matches_arithmetic_convention() {
    assert_stdout!(
        "precedence",
        r#"print 2 + 3 * 4; print (2 + 3) * 4; print 1 < 2 == true;
           print -1 + 2; print !true == false;"#,
        "14\n20\ntrue\n1\ntrue\n"
    );
}

#[test]
fn unexpected_character_is_a_scan_error() {
    assert_failure!(
        "unexpected_character",
        "var a = 1;\nvar b = 2;\n@\n",
        65,
        "[line 3] Error: Unexpected character.\n"
    );
}
