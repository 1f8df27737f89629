#![allow(clippy::needless_return)]

//! rlox is a programming language written in Rust. It is a dynamically typed language with
//! lexical scoping, closures, single inheritance and first-class functions. rlox is a tree-walk
//! interpreter with a hand-written recursive descent parser, modeled on the Lox language from
//! Bob Nystrom's [Crafting Interpreters](https://craftinginterpreters.com/).
//!
//! rlox is a dynamically typed language. This means that the type of a variable is determined at
//! runtime. This is in contrast to statically typed languages, where the type of a variable is
//! determined at compile time. Dynamically typed languages are often easier to use, but are
//! generally slower than statically typed languages.
//!
//! rlox is a tree-walk interpreter. This means that the interpreter walks the abstract syntax tree
//! (AST) and evaluates each node. This is in contrast to a compiler, which would convert the AST
//! into bytecode or machine code. Tree-walk interpreters are generally easier to implement than
//! compilers, but are generally slower than compilers.
//!
//! ## Scanning
//! The first step in the interpreter is scanning. Scanning is the process of converting a string of
//! characters into a list of tokens. A token is a single unit of a programming language. For
//! example, the string `1 + 2` would be converted into the following tokens:
//! ```text
//! [Number(1), Plus, Number(2)]
//! ```
//! The scanner is implemented in the [`scanner`](scanner) module as an iterator over the characters
//! in the source code. It reports syntax errors in the source code as a [`ScanError`](error::ScanError).
//! These are trivial problems like an unterminated string literal or an unexpected character. Scan
//! errors are reported as soon as they are encountered, and the scanner keeps going so the user can
//! fix more than one mistake per run.
//!
//! ## Parsing
//! The second step in the interpreter is parsing. Parsing is the process of converting a list of
//! tokens into an abstract syntax tree (AST). The parser is implemented in the [`parser`](parser)
//! module as a recursive descent parser. The parser transforms the list of tokens into expressions
//! and statements. [`Expressions`](expr::Expr) are pieces of code that produce a value, specifically an
//! [`Object`](object::Object). Objects are an umbrella term for all types of values in rlox
//! including literals, functions, classes and instances. [`Statements`](stmt::Stmt) are pieces of code
//! that do not produce a value but instead perform some action.
//!
//! The parser reports syntax errors in the source code as a [`ParseError`](error::ParseError).
//! Unlike the scanner, the parser catches errors that span multiple tokens, and recovers by
//! synchronizing to the next statement boundary so it too can report more than one error per run.
//!
//! ## Resolving
//! The third step in the interpreter is resolving. Resolving is a static pass over the AST that
//! determines, for every variable reference, how many enclosing scopes separate it from its
//! declaration. The resolver is implemented in the [`resolver`](resolver) module and records its
//! answer on the interpreter keyed by each expression's node id, not by source text or token
//! identity. The resolver reports errors as a [`ResolveError`](error::ResolveError) — problems that
//! are syntactically valid but semantically invalid, such as a variable read from its own
//! initializer.
//!
//! ## Interpreting
//! The final step is interpreting: walking the AST and evaluating it. The interpreter is
//! implemented in the [`interpreter`](interpreter) module. It reports errors as a
//! [`RuntimeError`](error::RuntimeError) — most errors can only be caught at runtime, such as
//! calling a value that isn't a function or adding a number to a string. The interpreter manages
//! the environment, a chain of scopes implemented in the [`environment`](environment) module, which
//! gives closures and blocks their lexical scoping.
//!
//! Errors at every stage are funneled through a single [`Diagnostics`](error::Diagnostics) sink so
//! that the pipeline can be driven from tests, a REPL, or a file runner alike.

use std::cell::RefCell;
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;
use std::{fs, process};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, info};

pub mod ast;
pub mod class;
pub mod environment;
pub mod error;
pub mod expr;
pub mod function;
pub mod interpreter;
pub mod literal;
pub mod object;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod shared_writer;
pub mod stmt;
pub mod token;

use error::Diagnostics;
use interpreter::Interpreter;
use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

const HISTORY_FILE: &str = ".rlox_history";

/// Ties the four pipeline stages together and owns the diagnostics sink
/// and interpreter state that persist across REPL lines.
pub struct Rlox {
    interpreter: Interpreter,
    diagnostics: Rc<RefCell<Diagnostics>>,
}

impl Rlox {
    /// `stdout` receives everything a `print` statement writes; parse,
    /// scan, resolve and runtime errors always go to stderr.
    pub fn new(stdout: Box<dyn Write>) -> Self {
        let diagnostics = Diagnostics::new(Box::new(io::stderr()));
        let interpreter = Interpreter::new(Rc::clone(&diagnostics), stdout);

        Rlox { interpreter, diagnostics }
    }

    pub fn run_file(&mut self, path: &str) -> io::Result<()> {
        let contents = fs::read_to_string(path)?;
        self.run(&contents);

        if self.diagnostics.borrow().had_error() {
            process::exit(65);
        }
        if self.diagnostics.borrow().had_runtime_error() {
            process::exit(70);
        }

        Ok(())
    }

    pub fn run_prompt(&mut self) -> rustyline::Result<()> {
        let mut editor = DefaultEditor::new()?;
        let history_path = history_path();

        if let Some(path) = &history_path {
            let _ = editor.load_history(path);
        }

        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    editor.add_history_entry(line.as_str())?;
                    self.run(&line);
                    self.diagnostics.borrow_mut().reset();
                },
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(error) => return Err(error),
            }
        }

        if let Some(path) = &history_path {
            let _ = editor.save_history(path);
        }

        Ok(())
    }

    fn run(&mut self, source: &str) {
        let tokens = Scanner::new(source, Rc::clone(&self.diagnostics)).scan_tokens();
        debug!(count = tokens.len(), "scanned tokens");
        if self.diagnostics.borrow().had_error() {
            return;
        }

        let statements = Parser::new(tokens, Rc::clone(&self.diagnostics)).parse();
        debug!(count = statements.len(), "parsed statements");
        if self.diagnostics.borrow().had_error() {
            return;
        }

        Resolver::new(&mut self.interpreter, Rc::clone(&self.diagnostics)).resolve(&statements);
        if self.diagnostics.borrow().had_error() {
            return;
        }

        info!("running program");
        self.interpreter.interpret(&statements);
    }
}

fn history_path() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(HISTORY_FILE))
}
