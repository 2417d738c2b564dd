//! # pgselect-core
//!
//! A PostgreSQL-flavoured `SELECT` parser producing a typed, serializable
//! AST.
//!
//! This crate provides:
//! - A hand-written lexer that keeps keyword decisions out of tokenization
//! - A recursive descent parser with Pratt expression parsing
//! - Canonical AST shapes: every LIMIT/OFFSET/FETCH spelling becomes one
//!   [`ast::LimitClause`], every join spelling one of four [`ast::JoinType`]s
//! - Structured errors split into lexical, grammar and validation failures
//!
//! ## Parsing
//!
//! ```rust
//! use pgselect_core::ast::{Expr, FromItem, LimitClause};
//!
//! let select = pgselect_core::parse_select("select a.* from db.test a offset 3 rows fetch first 5").unwrap();
//!
//! assert_eq!(select.columns.unwrap()[0].expr, Expr::qualified_wildcard("a"));
//! assert!(matches!(&select.from.unwrap()[0], FromItem::Table(t) if t.schema.as_deref() == Some("db")));
//! assert_eq!(select.limit, Some(LimitClause { limit: Some(5), offset: Some(3) }));
//! ```
//!
//! ## Validation errors
//!
//! Input that parses but breaks a rule fails with the rule that was broken:
//!
//! ```rust
//! use pgselect_core::parser::{ErrorCategory, ValidationError};
//!
//! let err = pgselect_core::parse_select("select * from (select id from test)").unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::Validation);
//! assert_eq!(err.validation_error(), Some(&ValidationError::DerivedTableWithoutAlias));
//! assert_eq!((err.line, err.column), (1, 15));
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{Expr, SelectStatement, Statement};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{ParseError, Parser};

/// Parses `sql` as a single SELECT statement.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first lexical, grammar or
/// validation failure.
pub fn parse_select(sql: &str) -> Result<SelectStatement, ParseError> {
    Parser::new(sql).parse_select()
}
