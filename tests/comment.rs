#[macro_use]
mod common;

#[test]
fn line_comment_at_eof_is_skipped() {
    assert_stdout!("line_at_eof", "print \"ok\"; // comment", "ok\n");
}

#[test]
fn file_of_only_comments_produces_no_output() {
    assert_stdout!("only_comment", "// this is a whole file of nothing", "");
}

#[test]
fn comment_does_not_swallow_the_next_line() {
    assert_stdout!("not_swallowed", "// comment\nprint \"ok\";", "ok\n");
}

#[test]
fn unicode_inside_a_comment_does_not_break_scanning() {
    assert_stdout!("unicode", "// unicode: \u{00bd}\u{2603}\u{1f4a9}\nprint \"ok\";", "ok\n");
}
