//! Tests for the SELECT column list: wildcards, aliases, DISTINCT and
//! the degenerate empty list.

mod common;
use common::*;

use pgselect_core::ast::{Expr, SelectedColumn};

#[test]
fn columns_absent_for_bare_select() {
    let s = parse_select("select");
    assert!(s.columns.is_none());
    assert!(s.from.is_none());
    assert!(!s.distinct);
}

#[test]
fn columns_absent_before_from() {
    let s = parse_select("select from test");
    assert!(s.columns.is_none());
    assert!(s.from.is_some());
}

#[test]
fn columns_keep_source_order() {
    let s = parse_select("select c, a, b");
    let names: Vec<Expr> = s.columns.unwrap().into_iter().map(|c| c.expr).collect();
    assert_eq!(
        names,
        vec![
            Expr::reference("c"),
            Expr::reference("a"),
            Expr::reference("b")
        ]
    );
}

#[test]
fn star_column() {
    let s = parse_select("SELECT * FROM users");
    assert_eq!(s.columns, Some(vec![SelectedColumn::new(Expr::wildcard())]));
}

#[test]
fn qualified_star_columns() {
    let s = parse_select("select a.*, \"B\".*, c");
    assert_eq!(
        s.columns,
        Some(vec![
            SelectedColumn::new(Expr::qualified_wildcard("a")),
            SelectedColumn::new(Expr::qualified_wildcard("B")),
            SelectedColumn::new(Expr::reference("c")),
        ])
    );
}

#[test]
fn alias_spellings_are_equivalent() {
    assert_same("select a as x from t", "select a x from t");
    assert_same("select a as x from t", "select a \"x\" from t");
    assert_same("select a as x from t", "select a as\"x\"from t");
}

#[test]
fn quoted_alias_keeps_case() {
    let s = parse_select("select a \"MixedCase\"");
    assert_eq!(
        s.columns,
        Some(vec![SelectedColumn::aliased(Expr::reference("a"), "MixedCase")])
    );
}

#[test]
fn unquoted_names_fold_to_lower_case() {
    assert_same("SELECT ID AS Total FROM Users", "select id as total from users");
}

#[test]
fn non_reserved_keyword_as_alias() {
    let s = parse_select("select a rows, b first from t");
    let aliases: Vec<Option<String>> = s.columns.unwrap().into_iter().map(|c| c.alias).collect();
    assert_eq!(aliases, vec![Some("rows".into()), Some("first".into())]);
}

#[test]
fn distinct_and_all() {
    assert!(parse_select("select distinct a from t").distinct);
    assert!(!parse_select("select all a from t").distinct);
    assert_same("select all a from t", "select a from t");
}

#[test]
fn wildcard_as_call_argument() {
    let s = parse_select("select count(*), count(t.*)");
    assert_eq!(
        s.columns,
        Some(vec![
            SelectedColumn::new(Expr::call("count", vec![Expr::wildcard()])),
            SelectedColumn::new(Expr::call("count", vec![Expr::qualified_wildcard("t")])),
        ])
    );
}

#[test]
fn keyword_function_without_parentheses_is_a_reference() {
    let s = parse_select("select current_schema");
    assert_eq!(
        s.columns,
        Some(vec![SelectedColumn::new(Expr::reference("current_schema"))])
    );
}

#[test]
fn quoted_keyword_function_is_a_plain_call() {
    let s = parse_select("select \"current_schema\"()");
    assert_eq!(
        s.columns,
        Some(vec![SelectedColumn::new(Expr::call("current_schema", vec![]))])
    );
}
