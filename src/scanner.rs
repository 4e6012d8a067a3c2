use std::str::Chars;

use peekmore::{PeekMore, PeekMoreIterator};
use substring::Substring;

use crate::error::{ScanError, Throw};
use crate::literal::Literal;
use crate::token::{Token, Type};

/// Hand-written lexer: consumes the source left-to-right, producing a
/// finite token sequence terminated by a single EOF token.
pub struct Scanner<'a> {
    source: &'a str,
    chars: PeekMoreIterator<Chars<'a>>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source,
            chars: source.chars().peekmore(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(Token::new(Type::EOF, String::new(), None, self.line));
        self.tokens
    }

    fn advance(&mut self) -> char {
        let c = self.chars.next().expect("advance called past end of source");
        self.current += 1;
        c
    }

    /// `'\0'` is the exhausted-source sentinel; it never matches a real
    /// source byte so every caller can treat it as "nothing here".
    fn peek(&mut self) -> char {
        *self.chars.peek().unwrap_or(&'\0')
    }

    fn peek_next(&mut self) -> char {
        *self.chars.peek_next().unwrap_or(&'\0')
    }

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn match_next(&mut self, expected: char) -> bool {
        if self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    fn lexeme(&self) -> &'a str {
        self.source.substring(self.start, self.current)
    }

    fn add_token(&mut self, kind: Type, literal: Option<Literal>) {
        let lexeme = self.lexeme().to_string();
        log::trace!("scanned {kind:?} '{lexeme}' at line {}", self.line);
        self.tokens.push(Token::new(kind, lexeme, literal, self.line));
    }

    fn string(&mut self) {
        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            ScanError {
                line: self.line,
                message: "Unterminated string.".to_string(),
            }
            .throw();
            return;
        }

        self.advance(); // the closing quote

        // Literal excludes the surrounding quotes; lexeme includes them.
        let value = self.source.substring(self.start + 1, self.current - 1).to_string();
        self.add_token(Type::String, Some(Literal::String(value)));
    }

    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A trailing '.' with no digit after it is not part of the number:
        // it's simply left for the parser/scanner to tokenize separately.
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let value: f64 = self.lexeme().parse().expect("scanned number lexeme to parse as f64");
        self.add_token(Type::Number, Some(Literal::Number(value)));
    }

    fn identifier(&mut self) {
        while self.peek().is_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let kind = match self.lexeme() {
            "and" => Type::And,
            "class" => Type::Class,
            "else" => Type::Else,
            "false" => Type::False,
            "for" => Type::For,
            "fun" => Type::Fun,
            "if" => Type::If,
            "nil" => Type::Nil,
            "or" => Type::Or,
            "print" => Type::Print,
            "return" => Type::Return,
            "super" => Type::Super,
            "this" => Type::This,
            "true" => Type::True,
            "var" => Type::Var,
            "while" => Type::While,
            _ => Type::Identifier,
        };

        self.add_token(kind, None);
    }

    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            '(' => self.add_token(Type::LeftParen, None),
            ')' => self.add_token(Type::RightParen, None),
            '{' => self.add_token(Type::LeftBrace, None),
            '}' => self.add_token(Type::RightBrace, None),
            ',' => self.add_token(Type::Comma, None),
            '.' => self.add_token(Type::Dot, None),
            '-' => self.add_token(Type::Minus, None),
            '+' => self.add_token(Type::Plus, None),
            ';' => self.add_token(Type::Semicolon, None),
            '*' => self.add_token(Type::Star, None),

            '!' => {
                let kind = if self.match_next('=') { Type::BangEqual } else { Type::Bang };
                self.add_token(kind, None);
            }
            '=' => {
                let kind = if self.match_next('=') { Type::EqualEqual } else { Type::Equal };
                self.add_token(kind, None);
            }
            '<' => {
                let kind = if self.match_next('=') { Type::LessEqual } else { Type::Less };
                self.add_token(kind, None);
            }
            '>' => {
                let kind = if self.match_next('=') { Type::GreaterEqual } else { Type::Greater };
                self.add_token(kind, None);
            }
            '/' => {
                if self.match_next('/') {
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(Type::Slash, None);
                }
            }

            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,

            '"' => self.string(),

            c if c.is_ascii_digit() => self.number(),
            c if c.is_alphabetic() || c == '_' => self.identifier(),

            _ => {
                ScanError {
                    line: self.line,
                    message: "Unexpected character.".to_string(),
                }
                .throw();
            }
        }
    }
}
