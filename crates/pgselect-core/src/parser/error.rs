//! Parser error types.

use thiserror::Error;

use crate::lexer::{Span, TokenKind};

/// A failure to parse a statement.
///
/// Every error points at the offending source range and carries the
/// 1-based line and column of its start.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at line {line}, column {column}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// The location of the error.
    pub span: Span,
    /// Line of `span.start` (1-based).
    pub line: usize,
    /// Column of `span.start` in characters (1-based).
    pub column: usize,
}

/// The broad class of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The text could not be split into tokens.
    Lexical,
    /// The tokens do not match the grammar.
    Grammar,
    /// The input parses but breaks a grammar rule.
    Validation,
}

/// The reason a parse failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// Malformed token.
    #[error("lexical error: {0}")]
    Lexical(LexicalError),

    /// A token that no production accepts at this position.
    #[error("unexpected token: expected {expected}, found {found}")]
    Unexpected {
        /// What the grammar would have accepted.
        expected: String,
        /// The token that was found.
        found: TokenKind,
    },

    /// The input ended in the middle of a production.
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof {
        /// What the grammar would have accepted.
        expected: String,
    },

    /// Tokens left over after a complete statement.
    #[error("unexpected {found} after end of statement")]
    TrailingInput {
        /// The first leftover token.
        found: TokenKind,
    },

    /// Syntactically valid input rejected by a grammar rule.
    #[error("invalid statement: {0}")]
    Validation(ValidationError),
}

/// Lexical failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    /// `'...` with no closing quote.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// `"...` with no closing quote.
    #[error("unterminated quoted identifier")]
    UnterminatedQuotedIdentifier,
    /// `/* ...` with no closing `*/`.
    #[error("unterminated block comment")]
    UnterminatedComment,
    /// `""`.
    #[error("zero-length quoted identifier")]
    EmptyQuotedIdentifier,
    /// A number that is malformed or out of range.
    #[error("invalid number literal `{0}`")]
    InvalidNumber(String),
    /// A character no token starts with.
    #[error("unexpected character `{0}`")]
    UnexpectedCharacter(char),
}

/// Rules a syntactically complete statement can still break.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `FROM (SELECT ...)` with no alias.
    #[error("subquery in FROM must have an alias")]
    DerivedTableWithoutAlias,

    /// A join spelling outside INNER/LEFT/RIGHT/FULL.
    #[error("unsupported join type `{0}`")]
    IllegalJoinType(String),

    /// `"*"` used where a column is expected.
    #[error("quoted \"*\" cannot be used as a column reference")]
    QuotedWildcard,

    /// `(*)` or `(t.*)`.
    #[error("wildcard cannot be wrapped in parentheses")]
    ParenthesizedWildcard,

    /// `*` anywhere but a select-list item or a call argument.
    #[error("wildcard is only allowed as a select item or function argument")]
    MisplacedWildcard,

    /// A parenthesized SELECT outside of a FROM entry.
    #[error("subquery is only allowed as a FROM entry")]
    SubqueryNotAllowed,

    /// Both LIMIT and FETCH, or either twice.
    #[error("row limit specified more than once")]
    DuplicateLimit,

    /// OFFSET given twice.
    #[error("OFFSET specified more than once")]
    DuplicateOffset,

    /// A row count that is not a non-negative integer.
    #[error("row count must be a non-negative integer, found {0}")]
    InvalidRowCount(String),
}

impl ParseError {
    /// Creates a parse error, resolving its line and column in `source`.
    #[must_use]
    pub fn new(kind: ParseErrorKind, span: Span, source: &str) -> Self {
        let (line, column) = span.line_column(source);
        Self {
            kind,
            span,
            line,
            column,
        }
    }

    /// Creates a lexical error.
    #[must_use]
    pub fn lexical(error: LexicalError, span: Span, source: &str) -> Self {
        Self::new(ParseErrorKind::Lexical(error), span, source)
    }

    /// Creates an "unexpected token" error, or an "unexpected end of
    /// input" error when `found` is EOF.
    #[must_use]
    pub fn unexpected(
        expected: impl Into<String>,
        found: TokenKind,
        span: Span,
        source: &str,
    ) -> Self {
        let expected = expected.into();
        let kind = if found == TokenKind::Eof {
            ParseErrorKind::UnexpectedEof { expected }
        } else {
            ParseErrorKind::Unexpected { expected, found }
        };
        Self::new(kind, span, source)
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(error: ValidationError, span: Span, source: &str) -> Self {
        Self::new(ParseErrorKind::Validation(error), span, source)
    }

    /// Returns which family of failure this is.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self.kind {
            ParseErrorKind::Lexical(_) => ErrorCategory::Lexical,
            ParseErrorKind::Unexpected { .. }
            | ParseErrorKind::UnexpectedEof { .. }
            | ParseErrorKind::TrailingInput { .. } => ErrorCategory::Grammar,
            ParseErrorKind::Validation(_) => ErrorCategory::Validation,
        }
    }

    /// Returns the broken rule if this is a validation error.
    #[must_use]
    pub const fn validation_error(&self) -> Option<&ValidationError> {
        match &self.kind {
            ParseErrorKind::Validation(rule) => Some(rule),
            _ => None,
        }
    }
}
