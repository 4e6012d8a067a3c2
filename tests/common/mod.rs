use std::fs;
use std::path::PathBuf;

/// Writes `source` to a uniquely named temp file and returns its path. Tests
/// are self-contained: the Pebble source lives in the test file itself
/// rather than an external fixture.
pub fn write_source(name: &str, source: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("pebble-test-{name}-{}.pebble", std::process::id()));
    fs::write(&path, source).expect("temp dir to be writable");
    path
}

pub fn remove_source(path: &PathBuf) {
    fs::remove_file(path).ok();
}

/// Asserts that running `source` as a script exits 0 and writes exactly
/// `expected` (already newline-terminated) to stdout.
#[macro_export]
macro_rules! assert_stdout {
    ($name:expr, $source:expr, $expected:expr) => {{
        let path = common::write_source($name, $source);
        assert_cmd::Command::cargo_bin("pebble")
            .unwrap()
            .arg(&path)
            .assert()
            .success()
            .stdout($expected);
        common::remove_source(&path);
    }};
}

/// Asserts that running `source` as a script exits with `$code` and writes
/// exactly `$stderr` (already newline-terminated) to stderr.
#[macro_export]
macro_rules! assert_failure {
    ($name:expr, $source:expr, $code:expr, $stderr:expr) => {{
        let path = common::write_source($name, $source);
        assert_cmd::Command::cargo_bin("pebble")
            .unwrap()
            .arg(&path)
            .assert()
            .code($code)
            .stderr($stderr);
        common::remove_source(&path);
    }};
}
