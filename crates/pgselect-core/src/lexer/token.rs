//! Token types for the SQL lexer.

use core::fmt;

use super::Span;

/// SQL keywords known to the grammar.
///
/// The lexer never produces keywords directly: bare words come out as
/// [`TokenKind::Identifier`] and the parser asks [`Token::keyword`] in the
/// positions where a keyword is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    // Query structure
    Select,
    Distinct,
    All,
    From,
    Where,
    Group,
    By,
    Having,
    Order,
    Asc,
    Desc,
    Window,
    With,

    // Limit / offset family
    Limit,
    Offset,
    Fetch,
    First,
    Next,
    Row,
    Rows,
    Only,

    // Joins
    Join,
    Inner,
    Left,
    Right,
    Full,
    Outer,
    Cross,
    Natural,
    On,
    Using,

    // Set operations
    Union,
    Intersect,
    Except,

    // Operators
    And,
    Or,
    Not,
    Is,
    In,
    Like,
    Ilike,
    Between,

    // Literals
    Null,
    True,
    False,

    // Expressions
    As,
    Case,
    When,
    Then,
    Else,
    End,
    Cast,

    // Keyword functions
    CurrentSchema,
    CurrentCatalog,
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,
    CurrentRole,
    CurrentUser,
    SessionUser,
    Localtime,
    Localtimestamp,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Some(Self::Select),
            "DISTINCT" => Some(Self::Distinct),
            "ALL" => Some(Self::All),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "GROUP" => Some(Self::Group),
            "BY" => Some(Self::By),
            "HAVING" => Some(Self::Having),
            "ORDER" => Some(Self::Order),
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            "WINDOW" => Some(Self::Window),
            "WITH" => Some(Self::With),
            "LIMIT" => Some(Self::Limit),
            "OFFSET" => Some(Self::Offset),
            "FETCH" => Some(Self::Fetch),
            "FIRST" => Some(Self::First),
            "NEXT" => Some(Self::Next),
            "ROW" => Some(Self::Row),
            "ROWS" => Some(Self::Rows),
            "ONLY" => Some(Self::Only),
            "JOIN" => Some(Self::Join),
            "INNER" => Some(Self::Inner),
            "LEFT" => Some(Self::Left),
            "RIGHT" => Some(Self::Right),
            "FULL" => Some(Self::Full),
            "OUTER" => Some(Self::Outer),
            "CROSS" => Some(Self::Cross),
            "NATURAL" => Some(Self::Natural),
            "ON" => Some(Self::On),
            "USING" => Some(Self::Using),
            "UNION" => Some(Self::Union),
            "INTERSECT" => Some(Self::Intersect),
            "EXCEPT" => Some(Self::Except),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            "IS" => Some(Self::Is),
            "IN" => Some(Self::In),
            "LIKE" => Some(Self::Like),
            "ILIKE" => Some(Self::Ilike),
            "BETWEEN" => Some(Self::Between),
            "NULL" => Some(Self::Null),
            "TRUE" => Some(Self::True),
            "FALSE" => Some(Self::False),
            "AS" => Some(Self::As),
            "CASE" => Some(Self::Case),
            "WHEN" => Some(Self::When),
            "THEN" => Some(Self::Then),
            "ELSE" => Some(Self::Else),
            "END" => Some(Self::End),
            "CAST" => Some(Self::Cast),
            "CURRENT_SCHEMA" => Some(Self::CurrentSchema),
            "CURRENT_CATALOG" => Some(Self::CurrentCatalog),
            "CURRENT_DATE" => Some(Self::CurrentDate),
            "CURRENT_TIME" => Some(Self::CurrentTime),
            "CURRENT_TIMESTAMP" => Some(Self::CurrentTimestamp),
            "CURRENT_ROLE" => Some(Self::CurrentRole),
            "CURRENT_USER" => Some(Self::CurrentUser),
            "SESSION_USER" => Some(Self::SessionUser),
            "LOCALTIME" => Some(Self::Localtime),
            "LOCALTIMESTAMP" => Some(Self::Localtimestamp),
            _ => None,
        }
    }

    /// Returns the keyword as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Distinct => "DISTINCT",
            Self::All => "ALL",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Group => "GROUP",
            Self::By => "BY",
            Self::Having => "HAVING",
            Self::Order => "ORDER",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::Window => "WINDOW",
            Self::With => "WITH",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
            Self::Fetch => "FETCH",
            Self::First => "FIRST",
            Self::Next => "NEXT",
            Self::Row => "ROW",
            Self::Rows => "ROWS",
            Self::Only => "ONLY",
            Self::Join => "JOIN",
            Self::Inner => "INNER",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Full => "FULL",
            Self::Outer => "OUTER",
            Self::Cross => "CROSS",
            Self::Natural => "NATURAL",
            Self::On => "ON",
            Self::Using => "USING",
            Self::Union => "UNION",
            Self::Intersect => "INTERSECT",
            Self::Except => "EXCEPT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Is => "IS",
            Self::In => "IN",
            Self::Like => "LIKE",
            Self::Ilike => "ILIKE",
            Self::Between => "BETWEEN",
            Self::Null => "NULL",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::As => "AS",
            Self::Case => "CASE",
            Self::When => "WHEN",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::End => "END",
            Self::Cast => "CAST",
            Self::CurrentSchema => "CURRENT_SCHEMA",
            Self::CurrentCatalog => "CURRENT_CATALOG",
            Self::CurrentDate => "CURRENT_DATE",
            Self::CurrentTime => "CURRENT_TIME",
            Self::CurrentTimestamp => "CURRENT_TIMESTAMP",
            Self::CurrentRole => "CURRENT_ROLE",
            Self::CurrentUser => "CURRENT_USER",
            Self::SessionUser => "SESSION_USER",
            Self::Localtime => "LOCALTIME",
            Self::Localtimestamp => "LOCALTIMESTAMP",
        }
    }

    /// Returns true if the keyword can never be used as a bare column
    /// name, table name or alias.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        matches!(
            self,
            Self::Select
                | Self::Distinct
                | Self::All
                | Self::From
                | Self::Where
                | Self::Group
                | Self::Having
                | Self::Order
                | Self::Asc
                | Self::Desc
                | Self::Window
                | Self::With
                | Self::Limit
                | Self::Offset
                | Self::Fetch
                | Self::Join
                | Self::Inner
                | Self::Left
                | Self::Right
                | Self::Full
                | Self::Outer
                | Self::Cross
                | Self::Natural
                | Self::On
                | Self::Using
                | Self::Union
                | Self::Intersect
                | Self::Except
                | Self::And
                | Self::Or
                | Self::Not
                | Self::Is
                | Self::In
                | Self::Like
                | Self::Ilike
                | Self::Between
                | Self::Null
                | Self::True
                | Self::False
                | Self::As
                | Self::Case
                | Self::When
                | Self::Then
                | Self::Else
                | Self::End
                | Self::Cast
        )
    }

    /// Returns true if the keyword may be called like a function
    /// (`current_schema()`).
    #[must_use]
    pub const fn is_function_keyword(&self) -> bool {
        matches!(
            self,
            Self::CurrentSchema
                | Self::CurrentCatalog
                | Self::CurrentDate
                | Self::CurrentTime
                | Self::CurrentTimestamp
                | Self::CurrentRole
                | Self::CurrentUser
                | Self::SessionUser
                | Self::Localtime
                | Self::Localtimestamp
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Integer literal (e.g., 42)
    Integer(i64),
    /// Decimal literal (e.g., 3.14, 1e10)
    Numeric(f64),
    /// String literal (e.g., 'hello')
    String(String),
    /// Positional parameter (e.g., $1)
    Parameter(String),

    // Identifiers
    /// Bare word, folded to lower case. May be a keyword in context.
    Identifier(String),
    /// Double-quoted identifier, exact text. Never a keyword or wildcard.
    QuotedIdentifier(String),

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// ^
    Caret,
    /// =
    Eq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,
    /// ||
    Concat,
    /// ::
    DoubleColon,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,

    /// End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Numeric(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "'{s}'"),
            Self::Parameter(p) => f.write_str(p),
            Self::Identifier(name) => f.write_str(name),
            Self::QuotedIdentifier(name) => write!(f, "\"{name}\""),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Percent => f.write_str("%"),
            Self::Caret => f.write_str("^"),
            Self::Eq => f.write_str("="),
            Self::NotEq => f.write_str("<>"),
            Self::Lt => f.write_str("<"),
            Self::LtEq => f.write_str("<="),
            Self::Gt => f.write_str(">"),
            Self::GtEq => f.write_str(">="),
            Self::Concat => f.write_str("||"),
            Self::DoubleColon => f.write_str("::"),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
            Self::Comma => f.write_str(","),
            Self::Semicolon => f.write_str(";"),
            Self::Dot => f.write_str("."),
            Self::Eof => f.write_str("end of input"),
        }
    }
}

/// A token with its span in the source code.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword spelled by this token, if any.
    ///
    /// Only bare identifiers can spell a keyword; quoting always
    /// suppresses keyword interpretation.
    #[must_use]
    pub fn keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Identifier(word) => Keyword::from_str(word),
            _ => None,
        }
    }

    /// Returns true if this token spells the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.keyword() == Some(keyword)
    }
}
