use std::rc::Rc;
use std::cell::RefCell;
use std::str::Chars;

use peekmore::{PeekMore, PeekMoreIterator};

use crate::error::Diagnostics;
use crate::literal::Literal;
use crate::token::{Token, TokenKind};

/// Converts source text into a flat list of tokens, reporting scan
/// errors (unterminated strings, unterminated block comments,
/// unexpected characters) into the shared `Diagnostics` sink as it goes.
pub struct Scanner<'a> {
    source: PeekMoreIterator<Chars<'a>>,
    tokens: Vec<Token>,
    lexeme: String,
    line: usize,
    diagnostics: Rc<RefCell<Diagnostics>>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, diagnostics: Rc<RefCell<Diagnostics>>) -> Scanner<'a> {
        Scanner {
            source: source.chars().peekmore(),
            tokens: Vec::new(),
            lexeme: String::new(),
            line: 1,
            diagnostics,
        }
    }

    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.lexeme.clear();
            self.scan_token();
        }

        self.tokens.push(Token::new(TokenKind::Eof, String::new(), None, self.line));
        self.tokens
    }

    fn is_at_end(&mut self) -> bool {
        self.source.peek().is_none()
    }

    fn advance(&mut self) -> char {
        let c = self.source.next().expect("advance past end of source");
        self.lexeme.push(c);
        c
    }

    fn peek(&mut self) -> char {
        self.source.peek().copied().unwrap_or('\0')
    }

    fn peek_next(&mut self) -> char {
        self.source.peek_next().copied().unwrap_or('\0')
    }

    fn match_next(&mut self, expected: char) -> bool {
        if self.peek() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        self.tokens.push(Token::new(kind, self.lexeme.clone(), literal, self.line));
    }

    fn error(&mut self, message: &str) {
        self.diagnostics.borrow_mut().scan_error(&crate::error::ScanError {
            line: self.line,
            message: message.to_string(),
        });
    }

    fn string(&mut self) {
        let start_line = self.line;
        let mut value = String::new();

        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            value.push(self.advance());
        }

        if self.is_at_end() {
            self.line = start_line;
            self.error("Unterminated string.");
            return;
        }

        self.advance(); // closing quote
        self.add_token(TokenKind::String, Some(Literal::String(value)));
    }

    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // the '.'
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let value: f64 = self.lexeme.parse().expect("scanned number to be valid");
        self.add_token(TokenKind::Number, Some(Literal::Number(value)));
    }

    fn identifier(&mut self) {
        while self.peek().is_ascii_alphanumeric() {
            self.advance();
        }

        let kind = match self.lexeme.as_str() {
            "and" => TokenKind::And,
            "class" => TokenKind::Class,
            "else" => TokenKind::Else,
            "false" => TokenKind::False,
            "for" => TokenKind::For,
            "fun" => TokenKind::Fun,
            "if" => TokenKind::If,
            "nil" => TokenKind::Nil,
            "or" => TokenKind::Or,
            "print" => TokenKind::Print,
            "return" => TokenKind::Return,
            "super" => TokenKind::Super,
            "this" => TokenKind::This,
            "true" => TokenKind::True,
            "var" => TokenKind::Var,
            "while" => TokenKind::While,
            _ => TokenKind::Identifier,
        };

        self.add_token(kind, None);
    }

    /// Non-nesting `/* ... */` comment, per the original C-style comment
    /// scanner this language's block comments are grounded on.
    fn block_comment(&mut self) {
        while !(self.peek() == '*' && self.peek_next() == '/') && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.error("Unterminated comment.");
            return;
        }

        self.advance(); // '*'
        self.advance(); // '/'
    }

    fn scan_token(&mut self) {
        let c = self.advance();
        match c {
            '(' => self.add_token(TokenKind::LeftParen, None),
            ')' => self.add_token(TokenKind::RightParen, None),
            '{' => self.add_token(TokenKind::LeftBrace, None),
            '}' => self.add_token(TokenKind::RightBrace, None),
            ',' => self.add_token(TokenKind::Comma, None),
            '.' => self.add_token(TokenKind::Dot, None),
            '-' => self.add_token(TokenKind::Minus, None),
            '+' => self.add_token(TokenKind::Plus, None),
            ';' => self.add_token(TokenKind::Semicolon, None),
            '*' => self.add_token(TokenKind::Star, None),

            '!' => {
                let kind = if self.match_next('=') { TokenKind::BangEqual } else { TokenKind::Bang };
                self.add_token(kind, None);
            },
            '=' => {
                let kind = if self.match_next('=') { TokenKind::EqualEqual } else { TokenKind::Equal };
                self.add_token(kind, None);
            },
            '<' => {
                let kind = if self.match_next('=') { TokenKind::LessEqual } else { TokenKind::Less };
                self.add_token(kind, None);
            },
            '>' => {
                let kind = if self.match_next('=') { TokenKind::GreaterEqual } else { TokenKind::Greater };
                self.add_token(kind, None);
            },
            '/' => {
                if self.match_next('/') {
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else if self.match_next('*') {
                    self.block_comment();
                } else {
                    self.add_token(TokenKind::Slash, None);
                }
            },

            ' ' | '\r' | '\t' => {},

            '\n' => {
                self.line += 1;
            },

            '"' => self.string(),

            c if c.is_ascii_digit() => self.number(),
            c if c.is_ascii_alphabetic() => self.identifier(),

            c => self.error(&format!("Unexpected character '{c}'.")),
        }
    }
}
