//! SQL Parser implementation.
//!
//! The parser owns the token vector produced by the lexer and walks it
//! with an index. Speculative parses save the index with
//! [`Parser::checkpoint`] and restore it with [`Parser::rewind`].

use tracing::debug;

use super::error::{ParseError, ParseErrorKind, ValidationError};
use crate::ast::{SelectStatement, Statement};
use crate::lexer::{Keyword, Lexer, Span, Token, TokenKind};

/// SQL Parser.
pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    eof: Token,
    /// Set while an attempt may still be rewound; rejections are not logged.
    speculating: bool,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    ///
    /// Tokenization happens on the first `parse_*` call, so lexical errors
    /// are reported from there.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let end = input.len();
        Self {
            source: input,
            tokens: Vec::new(),
            pos: 0,
            eof: Token::new(TokenKind::Eof, Span::new(end, end)),
            speculating: false,
        }
    }

    /// Parses a single SQL statement.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not a valid SQL statement.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        self.parse_select().map(Statement::Select)
    }

    /// Parses the whole input as one SELECT statement, optionally
    /// terminated by `;`.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` on the first lexical, grammar or validation
    /// failure. No partial statement is returned.
    pub fn parse_select(&mut self) -> Result<SelectStatement, ParseError> {
        self.tokens = Lexer::new(self.source).tokenize()?;
        self.pos = 0;

        if !self.check_keyword(Keyword::Select) {
            return Err(self.unexpected("SELECT"));
        }
        let statement = self.select_statement()?;

        self.consume(&TokenKind::Semicolon);
        if !self.current().is_eof() {
            let token = self.current();
            return Err(ParseError::new(
                ParseErrorKind::TrailingInput {
                    found: token.kind.clone(),
                },
                token.span,
                self.source,
            ));
        }

        debug!(
            tokens = self.tokens.len(),
            columns = statement.columns.as_ref().map_or(0, Vec::len),
            from = statement.from.as_ref().map_or(0, Vec::len),
            has_where = statement.where_clause.is_some(),
            has_limit = statement.limit.is_some(),
            "parsed SELECT statement"
        );
        Ok(statement)
    }

    /// Parses a SELECT statement at the current position. Stops at the
    /// first token no clause accepts.
    pub(super) fn select_statement(&mut self) -> Result<SelectStatement, ParseError> {
        self.expect_keyword(Keyword::Select)?;

        // DISTINCT or ALL
        let distinct = if self.consume_keyword(Keyword::Distinct) {
            true
        } else {
            self.consume_keyword(Keyword::All);
            false
        };

        // SELECT columns (optional: a bare SELECT is valid)
        let columns = self.parse_select_columns()?;

        // FROM clause
        let from = if self.consume_keyword(Keyword::From) {
            Some(self.parse_from_list()?)
        } else {
            None
        };

        // WHERE clause
        let where_clause = if self.consume_keyword(Keyword::Where) {
            Some(self.parse_expression(0)?)
        } else {
            None
        };

        // GROUP BY clause
        let group_by = if self.consume_keyword(Keyword::Group) {
            self.expect_keyword(Keyword::By)?;
            Some(self.parse_group_by_list()?)
        } else {
            None
        };

        // HAVING clause
        let having = if self.consume_keyword(Keyword::Having) {
            Some(self.parse_expression(0)?)
        } else {
            None
        };

        // ORDER BY clause
        let order_by = if self.consume_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            Some(self.parse_order_by_list()?)
        } else {
            None
        };

        // LIMIT / OFFSET / FETCH, in any order
        let limit = self.parse_limit_clause()?;

        Ok(SelectStatement {
            distinct,
            columns,
            from,
            where_clause,
            group_by,
            having,
            order_by,
            limit,
        })
    }

    // Cursor

    /// Returns the current token.
    pub(super) fn current(&self) -> &Token {
        self.peek_nth(0)
    }

    /// Returns the token `n` positions ahead, or EOF past the end.
    pub(super) fn peek_nth(&self, n: usize) -> &Token {
        self.tokens.get(self.pos + n).unwrap_or(&self.eof)
    }

    /// Moves to the next token. Never moves past EOF.
    pub(super) fn advance(&mut self) {
        if !self.current().is_eof() {
            self.pos += 1;
        }
    }

    /// Saves the cursor.
    pub(super) const fn checkpoint(&self) -> usize {
        self.pos
    }

    /// Restores a cursor saved by [`Self::checkpoint`].
    pub(super) fn rewind(&mut self, checkpoint: usize) {
        self.pos = checkpoint;
    }

    /// Runs `attempt` without logging the rejections it raises. The caller
    /// rewinds if the attempt is abandoned.
    pub(super) fn speculate<T>(
        &mut self,
        attempt: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let outer = core::mem::replace(&mut self.speculating, true);
        let result = attempt(self);
        self.speculating = outer;
        result
    }

    /// Span of the token before the current one.
    pub(super) fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(self.eof.span, |token| token.span)
    }

    /// Checks if the current token matches the given kind.
    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current().kind) == core::mem::discriminant(kind)
    }

    /// Checks if the current token is the given keyword.
    pub(super) fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current().is_keyword(keyword)
    }

    /// Consumes the current token if it matches the given kind.
    pub(super) fn consume(&mut self, kind: &TokenKind) -> bool {
        let matched = self.check(kind);
        if matched {
            self.advance();
        }
        matched
    }

    /// Consumes the current token if it is the given keyword.
    pub(super) fn consume_keyword(&mut self, keyword: Keyword) -> bool {
        let matched = self.check_keyword(keyword);
        if matched {
            self.advance();
        }
        matched
    }

    /// Expects the current token to be the given kind, returning its span.
    pub(super) fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            let span = self.current().span;
            self.advance();
            Ok(span)
        } else {
            Err(self.unexpected(format!("`{kind}`")))
        }
    }

    /// Expects the current token to be the given keyword.
    pub(super) fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        if self.consume_keyword(keyword) {
            Ok(())
        } else {
            Err(self.unexpected(keyword.as_str()))
        }
    }

    /// Returns true if the current token can be used as a name: a quoted
    /// identifier or a bare word that is not a reserved keyword.
    pub(super) fn at_identifier(&self) -> bool {
        let token = self.current();
        match &token.kind {
            TokenKind::QuotedIdentifier(_) => true,
            TokenKind::Identifier(_) => !token.keyword().is_some_and(|kw| kw.is_reserved()),
            _ => false,
        }
    }

    /// Expects and returns an identifier.
    pub(super) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if !self.at_identifier() {
            return Err(self.unexpected("identifier"));
        }
        match &self.current().kind {
            TokenKind::Identifier(name) | TokenKind::QuotedIdentifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    // Errors

    /// Builds a grammar error at the current token.
    pub(super) fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        let token = self.current();
        ParseError::unexpected(expected, token.kind.clone(), token.span, self.source)
    }

    /// Builds a validation error at `span`.
    pub(super) fn validation_error(&self, rule: ValidationError, span: Span) -> ParseError {
        if !self.speculating {
            debug!(%rule, start = span.start, end = span.end, "rejected statement");
        }
        ParseError::validation(rule, span, self.source)
    }
}
