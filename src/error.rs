use crate::token::{Token, Type};

static mut HAD_ERROR: bool = false;
static mut HAD_RUNTIME_ERROR: bool = false;

/// True if any static error (scan, parse, resolve) has been reported for the
/// current run.
pub fn had_error() -> bool {
    unsafe { HAD_ERROR }
}

/// True if the runtime has aborted the current `interpret` call.
pub fn had_runtime_error() -> bool {
    unsafe { HAD_RUNTIME_ERROR }
}

/// Resets both status flags. Used by the REPL between lines so that one
/// line's mistake doesn't poison the rest of the session.
pub fn reset_error() {
    unsafe {
        HAD_ERROR = false;
        HAD_RUNTIME_ERROR = false;
    }
}

/// Every diagnostic type implements this: format itself to stderr and flip
/// the status flag its phase owns.
pub trait Throw {
    fn throw(&self);
}

/// A lexical error: unterminated string, unexpected character.
#[derive(Debug)]
pub struct ScanError {
    pub line: usize,
    pub message: String,
}

impl Throw for ScanError {
    fn throw(&self) {
        log::debug!("scan error at line {}: {}", self.line, self.message);
        eprintln!("[line {}] Error: {}", self.line, self.message);

        unsafe {
            HAD_ERROR = true;
        }
    }
}

/// A syntactic error, or a semantic-at-parse-time error such as an invalid
/// assignment target or an over-long parameter list.
#[derive(Debug)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl Throw for ParseError {
    fn throw(&self) {
        log::debug!("parse error near {}: {}", self.token, self.message);
        report_at_token(&self.token, &self.message);

        unsafe {
            HAD_ERROR = true;
        }
    }
}

/// A static-resolution error: self-referencing initializer, duplicate local,
/// top-level `return`.
#[derive(Debug)]
pub struct ResolveError {
    pub token: Token,
    pub message: String,
}

impl Throw for ResolveError {
    fn throw(&self) {
        log::debug!("resolve error near {}: {}", self.token, self.message);
        report_at_token(&self.token, &self.message);

        unsafe {
            HAD_ERROR = true;
        }
    }
}

fn report_at_token(token: &Token, message: &str) {
    if token.kind == Type::EOF {
        eprintln!("[line {}] Error at end: {}", token.line, message);
    } else {
        eprintln!("[line {}] Error at '{}': {}", token.line, token.lexeme, message);
    }
}

/// A runtime error: it aborts the current top-level `interpret` call.
#[derive(Debug, PartialEq)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl Throw for RuntimeError {
    fn throw(&self) {
        log::debug!("runtime error near {}: {}", self.token, self.message);
        eprintln!("{}\n[line {}]", self.message, self.token.line);

        unsafe {
            HAD_RUNTIME_ERROR = true;
        }
    }
}

