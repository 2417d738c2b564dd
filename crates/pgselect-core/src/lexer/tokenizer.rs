//! SQL Tokenizer implementation.

use super::{Span, Token, TokenKind};
use crate::parser::{LexicalError, ParseError};

/// A lexer that tokenizes SQL input.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skips whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) -> Result<(), ParseError> {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            // -- line comment
            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            // /* block comment */
            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                self.start = self.pos;
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        Some(_) => {}
                        None => return Err(self.error(LexicalError::UnterminatedComment)),
                    }
                }
                continue;
            }

            return Ok(());
        }
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token with the current span.
    const fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.make_span())
    }

    /// Creates a lexical error covering the current token.
    fn error(&self, error: LexicalError) -> ParseError {
        ParseError::lexical(error, self.make_span(), self.input)
    }

    /// Scans a bare word. Keyword detection is left to the parser.
    fn scan_identifier(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$')
        {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];
        self.make_token(TokenKind::Identifier(text.to_lowercase()))
    }

    /// Scans a double-quoted identifier (e.g., "column name").
    fn scan_quoted_identifier(&mut self) -> Result<Token, ParseError> {
        self.advance(); // opening quote
        let mut value = String::new();

        loop {
            match self.advance() {
                Some('"') if self.peek() == Some('"') => {
                    value.push('"');
                    self.advance();
                }
                Some('"') => break,
                Some(c) => value.push(c),
                None => return Err(self.error(LexicalError::UnterminatedQuotedIdentifier)),
            }
        }

        if value.is_empty() {
            return Err(self.error(LexicalError::EmptyQuotedIdentifier));
        }
        Ok(self.make_token(TokenKind::QuotedIdentifier(value)))
    }

    /// Scans a number (integer or decimal).
    fn scan_number(&mut self) -> Result<Token, ParseError> {
        let mut is_decimal = false;

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') {
            is_decimal = true;
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        if self.peek().is_some_and(|c| c == 'e' || c == 'E') {
            is_decimal = true;
            self.advance();
            if self.peek().is_some_and(|c| c == '+' || c == '-') {
                self.advance();
            }
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Err(self.invalid_number());
            }
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        // 12abc is not two tokens
        if self.peek().is_some_and(|c| c.is_alphabetic() || c == '_') {
            while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
                self.advance();
            }
            return Err(self.invalid_number());
        }

        let text = &self.input[self.start..self.pos];
        if is_decimal {
            text.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(|n| self.make_token(TokenKind::Numeric(n)))
                .ok_or_else(|| self.invalid_number())
        } else {
            text.parse::<i64>()
                .map(|n| self.make_token(TokenKind::Integer(n)))
                .map_err(|_| self.invalid_number())
        }
    }

    fn invalid_number(&self) -> ParseError {
        let text = &self.input[self.start..self.pos];
        self.error(LexicalError::InvalidNumber(text.to_string()))
    }

    /// Scans a single-quoted string literal.
    fn scan_string(&mut self) -> Result<Token, ParseError> {
        self.advance(); // opening quote
        let mut value = String::new();

        loop {
            match self.advance() {
                Some('\'') if self.peek() == Some('\'') => {
                    value.push('\'');
                    self.advance();
                }
                Some('\'') => break,
                Some(c) => value.push(c),
                None => return Err(self.error(LexicalError::UnterminatedString)),
            }
        }

        Ok(self.make_token(TokenKind::String(value)))
    }

    /// Scans a positional parameter ($1).
    fn scan_parameter(&mut self) -> Token {
        self.advance(); // $
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        let text = &self.input[self.start..self.pos];
        self.make_token(TokenKind::Parameter(text.to_string()))
    }

    /// Scans the next token.
    ///
    /// # Errors
    ///
    /// Returns a lexical `ParseError` for unterminated quotes or comments,
    /// malformed numbers and characters that start no token.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace_and_comments()?;
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return Ok(self.make_token(TokenKind::Eof));
        };

        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '^' => TokenKind::Caret,
            '=' => TokenKind::Eq,

            '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => {
                self.pos = self.start;
                return self.scan_number();
            }
            '.' => TokenKind::Dot,
            ':' if self.peek() == Some(':') => {
                self.advance();
                TokenKind::DoubleColon
            }
            '<' => match self.peek() {
                Some('=') => {
                    self.advance();
                    TokenKind::LtEq
                }
                Some('>') => {
                    self.advance();
                    TokenKind::NotEq
                }
                _ => TokenKind::Lt,
            },
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::GtEq
                } else {
                    TokenKind::Gt
                }
            }
            '!' if self.peek() == Some('=') => {
                self.advance();
                TokenKind::NotEq
            }
            '|' if self.peek() == Some('|') => {
                self.advance();
                TokenKind::Concat
            }

            '\'' => {
                self.pos = self.start;
                return self.scan_string();
            }
            '"' => {
                self.pos = self.start;
                return self.scan_quoted_identifier();
            }
            '$' if self.peek().is_some_and(|c| c.is_ascii_digit()) => {
                self.pos = self.start;
                return Ok(self.scan_parameter());
            }
            c if c.is_ascii_digit() => {
                self.pos = self.start;
                return self.scan_number();
            }
            c if c.is_alphabetic() || c == '_' => {
                self.pos = self.start;
                return Ok(self.scan_identifier());
            }

            other => return Err(self.error(LexicalError::UnexpectedCharacter(other))),
        };

        Ok(self.make_token(kind))
    }

    /// Tokenizes the entire input. The last token is always EOF.
    ///
    /// # Errors
    ///
    /// Returns the first lexical error encountered.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}
