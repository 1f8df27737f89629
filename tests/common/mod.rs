use std::rc::Rc;

use rlox::error::Diagnostics;
use rlox::interpreter::Interpreter;
use rlox::parser::Parser;
use rlox::resolver::Resolver;
use rlox::scanner::Scanner;
use rlox::shared_writer::SharedWriter;

/// The observable result of running a program through the full pipeline:
/// what it printed, what diagnostics it reported, and whether any stage
/// reported an error.
pub struct Run {
    pub stdout: String,
    pub diagnostics: String,
    pub had_error: bool,
    pub had_runtime_error: bool,
}

#[allow(dead_code)]
pub fn run(source: &str) -> Run {
    let errors = SharedWriter::new();
    let diagnostics = Diagnostics::new(Box::new(errors.clone()));

    let tokens = Scanner::new(source, Rc::clone(&diagnostics)).scan_tokens();
    let statements = Parser::new(tokens, Rc::clone(&diagnostics)).parse();

    let stdout = SharedWriter::new();
    let mut interpreter = Interpreter::new(Rc::clone(&diagnostics), Box::new(stdout.clone()));

    if !diagnostics.borrow().had_error() {
        Resolver::new(&mut interpreter, Rc::clone(&diagnostics)).resolve(&statements);
    }

    if !diagnostics.borrow().had_error() {
        interpreter.interpret(&statements);
    }

    Run {
        stdout: stdout.contents(),
        diagnostics: errors.contents(),
        had_error: diagnostics.borrow().had_error(),
        had_runtime_error: diagnostics.borrow().had_runtime_error(),
    }
}

#[allow(dead_code)]
pub fn lines(stdout: &str) -> Vec<&str> {
    stdout.lines().collect()
}
