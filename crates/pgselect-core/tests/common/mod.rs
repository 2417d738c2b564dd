#![allow(dead_code)]

use pgselect_core::ast::{SelectStatement, Statement};
use pgselect_core::parser::{ErrorCategory, ValidationError};
use pgselect_core::{ParseError, Parser};

pub fn parse(sql: &str) -> Statement {
    Parser::new(sql)
        .parse_statement()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    Parser::new(sql)
        .parse_statement()
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> SelectStatement {
    let Statement::Select(s) = parse(sql);
    s
}

/// Parses `sql` and returns the AST as JSON.
pub fn json(sql: &str) -> serde_json::Value {
    serde_json::to_value(parse_select(sql))
        .unwrap_or_else(|e| panic!("Failed to serialize: {sql}\nError: {e:?}"))
}

/// Returns the validation rule `sql` breaks.
pub fn rule(sql: &str) -> ValidationError {
    let err = parse_err(sql);
    match err.validation_error() {
        Some(rule) => rule.clone(),
        None => panic!("Expected validation error for: {sql}\nGot: {err:?}"),
    }
}

/// Asserts that `sql` fails with an error of the given category.
pub fn assert_category(sql: &str, category: ErrorCategory) {
    let err = parse_err(sql);
    assert_eq!(
        err.category(),
        category,
        "Wrong error category for: {sql}\nError: {err}"
    );
}

/// Asserts that two statements parse to the same AST.
pub fn assert_same(a: &str, b: &str) {
    assert_eq!(parse_select(a), parse_select(b), "\n  {a}\n  {b}");
}
