//! SQL statement AST types.

use serde::{Serialize, Serializer};

use super::expression::Expr;

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl Serialize for OrderDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// An ORDER BY clause entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderByClause {
    /// The expression to order by.
    pub by: Expr,
    /// The direction (ASC or DESC).
    pub order: OrderDirection,
}

/// Join type.
///
/// Every accepted surface spelling (`JOIN`, `LEFT OUTER JOIN`, ...) is
/// folded into one of these four.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    /// INNER JOIN.
    Inner,
    /// LEFT OUTER JOIN.
    Left,
    /// RIGHT OUTER JOIN.
    Right,
    /// FULL OUTER JOIN.
    Full,
}

impl JoinType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
        }
    }
}

impl Serialize for JoinType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The join that attaches a FROM entry to the entries before it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Join {
    /// The type of join.
    #[serde(rename = "type")]
    pub join_type: JoinType,
    /// The join condition.
    pub on: Expr,
}

/// A named table in FROM.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FromTable {
    /// Table name.
    pub name: String,
    /// Schema name (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Alias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Join to the preceding entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join: Option<Join>,
}

/// A derived table: `(SELECT ...) alias`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FromStatement {
    /// The embedded query.
    pub statement: Box<SelectStatement>,
    /// Alias (always present).
    pub alias: String,
    /// Join to the preceding entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join: Option<Join>,
}

/// One entry of the FROM list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FromItem {
    /// A table.
    Table(FromTable),
    /// A derived table.
    Statement(FromStatement),
}

impl FromItem {
    /// Creates an unqualified, unaliased table entry.
    #[must_use]
    pub fn table(name: impl Into<String>) -> Self {
        Self::Table(FromTable {
            name: name.into(),
            schema: None,
            alias: None,
            join: None,
        })
    }

    /// Returns the alias, if any.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        match self {
            Self::Table(table) => table.alias.as_deref(),
            Self::Statement(stmt) => Some(&stmt.alias),
        }
    }

    /// Returns the join attaching this entry, if any.
    #[must_use]
    pub const fn join(&self) -> Option<&Join> {
        match self {
            Self::Table(table) => table.join.as_ref(),
            Self::Statement(stmt) => stmt.join.as_ref(),
        }
    }

    pub(crate) fn set_join(&mut self, join: Join) {
        match self {
            Self::Table(table) => table.join = Some(join),
            Self::Statement(stmt) => stmt.join = Some(join),
        }
    }
}

/// A column in the SELECT list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedColumn {
    /// The expression.
    pub expr: Expr,
    /// Alias (AS name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl SelectedColumn {
    /// Creates an unaliased column.
    #[must_use]
    pub const fn new(expr: Expr) -> Self {
        Self { expr, alias: None }
    }

    /// Creates an aliased column.
    #[must_use]
    pub fn aliased(expr: Expr, alias: impl Into<String>) -> Self {
        Self {
            expr,
            alias: Some(alias.into()),
        }
    }
}

/// The canonical form of every LIMIT / OFFSET / FETCH spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LimitClause {
    /// Maximum number of rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Number of rows to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

/// A SELECT statement.
///
/// Every clause is optional: a bare `SELECT` is a valid statement with
/// all fields empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename = "select", rename_all = "camelCase")]
pub struct SelectStatement {
    /// DISTINCT flag.
    #[serde(skip_serializing_if = "is_false")]
    pub distinct: bool,
    /// Columns to select.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<SelectedColumn>>,
    /// FROM entries, in source order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Vec<FromItem>>,
    /// WHERE clause.
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<Expr>,
    /// GROUP BY expressions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<Vec<Expr>>,
    /// HAVING clause.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub having: Option<Expr>,
    /// ORDER BY clauses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<Vec<OrderByClause>>,
    /// LIMIT / OFFSET.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<LimitClause>,
}

/// A parsed SQL statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Statement {
    /// SELECT statement.
    Select(SelectStatement),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_select_serializes_to_type_only() {
        let stmt = SelectStatement::default();
        assert_eq!(serde_json::to_value(&stmt).unwrap(), json!({ "type": "select" }));
        assert_eq!(
            serde_json::to_value(Statement::Select(stmt)).unwrap(),
            json!({ "type": "select" })
        );
    }

    #[test]
    fn test_limit_zero_is_kept() {
        let clause = LimitClause {
            limit: Some(0),
            offset: None,
        };
        assert_eq!(serde_json::to_value(clause).unwrap(), json!({ "limit": 0 }));
    }

    #[test]
    fn test_from_item_serialization() {
        let mut item = FromItem::table("tb");
        item.set_join(Join {
            join_type: JoinType::Left,
            on: Expr::qualified("ta", "id").eq(Expr::qualified("tb", "id")),
        });
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({
                "type": "table",
                "name": "tb",
                "join": {
                    "type": "LEFT JOIN",
                    "on": {
                        "type": "binary",
                        "op": "=",
                        "left": { "type": "ref", "table": "ta", "name": "id" },
                        "right": { "type": "ref", "table": "tb", "name": "id" },
                    },
                },
            })
        );
        assert_eq!(item.alias(), None);
        assert!(item.join().is_some());
    }

    #[test]
    fn test_derived_table_serialization() {
        let item = FromItem::Statement(FromStatement {
            statement: Box::new(SelectStatement::default()),
            alias: "d".into(),
            join: None,
        });
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({ "type": "statement", "statement": { "type": "select" }, "alias": "d" })
        );
        assert_eq!(item.alias(), Some("d"));
    }

    #[test]
    fn test_order_by_serialization() {
        let clause = OrderByClause {
            by: Expr::reference("a"),
            order: OrderDirection::default(),
        };
        assert_eq!(
            serde_json::to_value(clause).unwrap(),
            json!({ "by": { "type": "ref", "name": "a" }, "order": "ASC" })
        );
    }
}
