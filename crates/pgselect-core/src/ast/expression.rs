//! Expression AST types.

use serde::{Serialize, Serializer};

use super::DataType;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,

    // String
    Concat,
    Like,
    NotLike,
    Ilike,
    NotIlike,

    // Membership
    In,
    NotIn,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Concat => "||",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::Ilike => "ILIKE",
            Self::NotIlike => "NOT ILIKE",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
        }
    }

}

impl Serialize for BinaryOp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Unary operators, prefix and postfix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Negation (-)
    Neg,
    /// Unary plus (+)
    Plus,
    /// Logical NOT
    Not,
    /// IS NULL
    IsNull,
    /// IS NOT NULL
    IsNotNull,
    /// IS TRUE
    IsTrue,
    /// IS NOT TRUE
    IsNotTrue,
    /// IS FALSE
    IsFalse,
    /// IS NOT FALSE
    IsNotFalse,
}

impl UnaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Plus => "+",
            Self::Not => "NOT",
            Self::IsNull => "IS NULL",
            Self::IsNotNull => "IS NOT NULL",
            Self::IsTrue => "IS TRUE",
            Self::IsNotTrue => "IS NOT TRUE",
            Self::IsFalse => "IS FALSE",
            Self::IsNotFalse => "IS NOT FALSE",
        }
    }
}

impl Serialize for UnaryOp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Three-operand operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TernaryOp {
    #[serde(rename = "BETWEEN")]
    Between,
    #[serde(rename = "NOT BETWEEN")]
    NotBetween,
}

/// The callee of a function call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FunctionName {
    /// An ordinary function name (`now`, `count`).
    Name(String),
    /// A keyword used as a function (`current_schema()`).
    Keyword(KeywordFunction),
}

impl FunctionName {
    /// Returns the callee name regardless of how it was spelled.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Keyword(kw) => &kw.keyword,
        }
    }
}

/// A keyword called as a function. Serializes as
/// `{"type": "keyword", "keyword": "current_schema"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "keyword")]
pub struct KeywordFunction {
    /// Lower-case keyword spelling.
    pub keyword: String,
}

/// One `WHEN ... THEN ...` arm of a CASE expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseWhen {
    /// The condition (or the value compared against the CASE operand).
    pub when: Expr,
    /// The result when the arm matches.
    pub value: Expr,
}

fn is_none_boxed(value: &Option<Box<Expr>>) -> bool {
    value.is_none()
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Expr {
    /// Integer literal.
    Integer {
        /// The value.
        value: i64,
    },

    /// Decimal literal.
    Numeric {
        /// The value.
        value: f64,
    },

    /// String literal.
    String {
        /// The unescaped value.
        value: String,
    },

    /// TRUE or FALSE.
    Boolean {
        /// The value.
        value: bool,
    },

    /// NULL.
    Null,

    /// A column reference, or the `*` wildcard.
    Ref {
        /// Table name or alias (optional).
        #[serde(skip_serializing_if = "Option::is_none")]
        table: Option<String>,
        /// Column name, or [`Expr::WILDCARD`].
        name: String,
    },

    /// Positional parameter (`$1`).
    Parameter {
        /// The parameter as written.
        name: String,
    },

    /// A function call.
    Call {
        /// The callee.
        function: FunctionName,
        /// The arguments, in order.
        args: Vec<Expr>,
    },

    /// A binary expression.
    Binary {
        /// Operator.
        op: BinaryOp,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },

    /// A prefix or postfix unary expression.
    Unary {
        /// Operator.
        op: UnaryOp,
        /// Operand.
        operand: Box<Expr>,
    },

    /// `value [NOT] BETWEEN lo AND hi`.
    Ternary {
        /// Operator.
        op: TernaryOp,
        /// The tested value.
        value: Box<Expr>,
        /// Lower bound.
        lo: Box<Expr>,
        /// Upper bound.
        hi: Box<Expr>,
    },

    /// `operand::type` or `CAST(operand AS type)`.
    Cast {
        /// Expression to cast.
        operand: Box<Expr>,
        /// Target type.
        to: DataType,
    },

    /// CASE expression.
    Case {
        /// The operand of a simple CASE.
        #[serde(skip_serializing_if = "is_none_boxed")]
        value: Option<Box<Expr>>,
        /// WHEN/THEN arms.
        whens: Vec<CaseWhen>,
        /// ELSE result.
        #[serde(rename = "else", skip_serializing_if = "is_none_boxed")]
        else_value: Option<Box<Expr>>,
    },

    /// Parenthesized value list, the right side of IN.
    List {
        /// The items.
        expressions: Vec<Expr>,
    },
}

impl Expr {
    /// The `name` of a wildcard reference.
    pub const WILDCARD: &'static str = "*";

    /// Creates an integer literal.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Integer { value }
    }

    /// Creates a string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::String {
            value: value.into(),
        }
    }

    /// Creates an unqualified column reference.
    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Ref {
            table: None,
            name: name.into(),
        }
    }

    /// Creates a table-qualified column reference.
    #[must_use]
    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Ref {
            table: Some(table.into()),
            name: name.into(),
        }
    }

    /// Creates the bare `*` wildcard.
    #[must_use]
    pub fn wildcard() -> Self {
        Self::reference(Self::WILDCARD)
    }

    /// Creates a `table.*` wildcard.
    #[must_use]
    pub fn qualified_wildcard(table: impl Into<String>) -> Self {
        Self::qualified(table, Self::WILDCARD)
    }

    /// Creates a call to an ordinary function.
    #[must_use]
    pub fn call(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Call {
            function: FunctionName::Name(name.into()),
            args,
        }
    }

    /// Creates a call to a keyword function such as `current_schema`.
    #[must_use]
    pub fn keyword_call(keyword: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Call {
            function: FunctionName::Keyword(KeywordFunction {
                keyword: keyword.into(),
            }),
            args,
        }
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: Self) -> Self {
        Self::Binary {
            left: Box::new(self),
            op,
            right: Box::new(right),
        }
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, right: Self) -> Self {
        self.binary(BinaryOp::Eq, right)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, right: Self) -> Self {
        self.binary(BinaryOp::Gt, right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        self.binary(BinaryOp::And, right)
    }

    /// Creates a unary expression.
    #[must_use]
    pub fn unary(op: UnaryOp, operand: Self) -> Self {
        Self::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Creates a cast of this expression.
    #[must_use]
    pub fn cast(self, to: DataType) -> Self {
        Self::Cast {
            operand: Box::new(self),
            to,
        }
    }

    /// Returns true for `*` and `table.*`.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Ref { name, .. } if name == Self::WILDCARD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wildcard_helpers() {
        assert!(Expr::wildcard().is_wildcard());
        assert!(Expr::qualified_wildcard("a").is_wildcard());
        assert!(!Expr::reference("a").is_wildcard());
        assert!(!Expr::string("*").is_wildcard());
    }

    #[test]
    fn test_serialize_ref_omits_missing_table() {
        let value = serde_json::to_value(Expr::reference("a")).unwrap();
        assert_eq!(value, json!({ "type": "ref", "name": "a" }));
        let value = serde_json::to_value(Expr::qualified("a", "b")).unwrap();
        assert_eq!(value, json!({ "type": "ref", "table": "a", "name": "b" }));
    }

    #[test]
    fn test_serialize_binary() {
        let expr = Expr::qualified("a", "b").gt(Expr::integer(42));
        assert_eq!(
            serde_json::to_value(expr).unwrap(),
            json!({
                "type": "binary",
                "op": ">",
                "left": { "type": "ref", "table": "a", "name": "b" },
                "right": { "type": "integer", "value": 42 },
            })
        );
    }

    #[test]
    fn test_serialize_function_names() {
        assert_eq!(
            serde_json::to_value(Expr::call("now", vec![])).unwrap(),
            json!({ "type": "call", "function": "now", "args": [] })
        );
        assert_eq!(
            serde_json::to_value(Expr::keyword_call("current_schema", vec![])).unwrap(),
            json!({
                "type": "call",
                "function": { "type": "keyword", "keyword": "current_schema" },
                "args": [],
            })
        );
    }

    #[test]
    fn test_serialize_null_and_unary() {
        let expr = Expr::unary(UnaryOp::IsNotNull, Expr::Null);
        assert_eq!(
            serde_json::to_value(expr).unwrap(),
            json!({ "type": "unary", "op": "IS NOT NULL", "operand": { "type": "null" } })
        );
    }
}
