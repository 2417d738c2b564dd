//! Abstract Syntax Tree (AST) types for SQL SELECT statements.
//!
//! Every node derives `serde::Serialize` and produces a JSON object
//! discriminated by a `type` field.

mod expression;
mod statement;
mod types;

pub use expression::{BinaryOp, CaseWhen, Expr, FunctionName, KeywordFunction, TernaryOp, UnaryOp};
pub use statement::{
    FromItem, FromStatement, FromTable, Join, JoinType, LimitClause, OrderByClause, OrderDirection,
    SelectStatement, SelectedColumn, Statement,
};
pub use types::DataType;
