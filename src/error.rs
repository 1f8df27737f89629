use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use thiserror::Error;

use crate::token::{Token, TokenKind};

/// An error raised while scanning a character that doesn't start any
/// valid token, or a malformed string/number literal.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ScanError {
    pub line: usize,
    pub message: String,
}

/// An error raised while parsing a malformed token stream.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

/// An error raised while statically resolving variable scopes.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ResolveError {
    pub token: Token,
    pub message: String,
}

/// An error raised while evaluating the program.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

fn where_clause(token: &Token) -> String {
    if token.kind == TokenKind::Eof {
        " at end".to_string()
    } else {
        format!(" at \"{}\"", token.lexeme)
    }
}

/// Shared error-reporting surface threaded through the scanner, parser,
/// resolver and interpreter. Replaces a pair of global flags with an
/// injectable sink so the pipeline can be driven from tests without
/// touching process-wide state.
pub struct Diagnostics {
    had_error: bool,
    had_runtime_error: bool,
    sink: Box<dyn Write>,
}

impl Diagnostics {
    pub fn new(sink: Box<dyn Write>) -> Rc<RefCell<Diagnostics>> {
        Rc::new(RefCell::new(Diagnostics {
            had_error: false,
            had_runtime_error: false,
            sink,
        }))
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    pub fn reset(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
    }

    fn report(&mut self, line: usize, r#where: &str, message: &str) {
        let _ = writeln!(self.sink, "[line {line}] Error{where}: {message}");
        self.had_error = true;
    }

    pub fn scan_error(&mut self, error: &ScanError) {
        self.report(error.line, "", &error.message);
    }

    pub fn parse_error(&mut self, error: &ParseError) {
        self.report(error.token.line, &where_clause(&error.token), &error.message);
    }

    pub fn resolve_error(&mut self, error: &ResolveError) {
        self.report(error.token.line, &where_clause(&error.token), &error.message);
    }

    pub fn runtime_error(&mut self, error: &RuntimeError) {
        let _ = writeln!(self.sink, "{}\n[line {}]", error.message, error.token.line);
        self.had_runtime_error = true;
    }
}
