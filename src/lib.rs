//! Pebble is a small dynamically typed scripting language: numbers, strings,
//! booleans, `nil`, lexically scoped variables, arithmetic/comparison/
//! short-circuit logical operators, `if`/`while`/`for`, `print`, first-class
//! closures, recursion, `return`, and the native function `clock`. Pebble is
//! a tree-walking interpreter with a hand-written recursive-descent parser.
//! This project is inspired by the [Crafting Interpreters](https://craftinginterpreters.com/)
//! book by Bob Nystrom.
//!
//! ## Scanning
//! The first step is scanning: converting the source string into a flat
//! sequence of tokens. The scanner is implemented in [`scanner`] as a
//! single left-to-right pass over the characters of the source. It reports
//! lexical errors ([`error::ScanError`]) as soon as it encounters them and
//! continues scanning, so a run can surface more than one lexical mistake.
//!
//! ## Parsing
//! The second step is parsing: converting tokens into a typed syntax tree.
//! The parser is implemented in [`parser`] as a recursive-descent parser
//! over the grammar documented in that module. [`Expressions`](expr::Expr) produce a
//! value ([`object::Object`]); [`Statements`](stmt::Stmt) run for their side
//! effect. Syntax errors ([`error::ParseError`]) trigger panic-mode
//! synchronization so parsing can resume at the next statement boundary.
//!
//! ## Resolving
//! The third step is resolving: a static pass over the tree that tags every
//! local variable use with the number of scopes between it and its
//! declaration. The resolver is implemented in [`resolver`] and runs after
//! parsing, since it needs the whole tree. Its findings feed the evaluator's
//! side table; a mismatch between the two would silently corrupt variable
//! lookups, so the resolver and the evaluator must agree on every node.
//!
//! ## Interpreting
//! The final step is evaluating the tree, implemented in [`interpreter`].
//! The interpreter reads the resolver's side table to resolve locals in
//! O(1) amortized time and falls back to the globals environment
//! ([`environment`]) for anything left untagged. Runtime errors
//! ([`error::RuntimeError`]) abort the current top-level evaluation.

use std::fs;
use std::process;

pub mod environment;
pub mod error;
pub mod expr;
pub mod function;
pub mod interpreter;
pub mod literal;
pub mod object;
pub mod parser;
pub mod repl;
pub mod resolver;
pub mod scanner;
pub mod stmt;
pub mod token;

use error::Throw;
use interpreter::Interpreter;
use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

/// Top-level orchestration: owns the interpreter (so a REPL session's
/// globals and resolver side table persist across lines) and wires the
/// four-stage pipeline together.
pub struct Pebble {
    interpreter: Interpreter,
}

impl Pebble {
    pub fn new() -> Self {
        Pebble { interpreter: Interpreter::new() }
    }

    /// Reads `path` as UTF-8, runs it once, and exits the process with the
    /// status code the run produced: 0 on success, 65 on a static error, 70
    /// on a runtime error.
    pub fn run_file(&mut self, path: &str) {
        let source = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Could not read file '{path}': {e}");
            process::exit(74);
        });

        self.run(&source);

        if error::had_error() {
            process::exit(65);
        }
        if error::had_runtime_error() {
            process::exit(70);
        }
    }

    /// Runs one chunk of source through scan -> parse -> resolve -> evaluate,
    /// short-circuiting at the first stage boundary where `had_error` is set.
    pub fn run(&mut self, source: &str) {
        log::trace!("running {} bytes of source", source.len());

        let tokens = Scanner::new(source).scan_tokens();

        if error::had_error() {
            return;
        }

        let statements = Parser::new(tokens).parse();

        if error::had_error() {
            return;
        }

        let mut resolver = Resolver::new(&mut self.interpreter);
        resolver.resolve(&statements);

        if error::had_error() {
            return;
        }

        if let Err(e) = self.interpreter.interpret(&statements) {
            e.throw();
        }
    }
}

impl Default for Pebble {
    fn default() -> Self {
        Self::new()
    }
}
