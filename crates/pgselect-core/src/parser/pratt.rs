//! Pratt expression parser for operator precedence.
//!
//! Binding powers follow the PostgreSQL operator table, loosest first:
//! `OR`, `AND`, prefix `NOT`, `IS`, comparison, `LIKE`/`ILIKE`/`IN`/
//! `BETWEEN`, `||`, `+ -`, `* / %`, `^`, unary sign, `::`.

use crate::ast::{BinaryOp, UnaryOp};
use crate::lexer::{Keyword, Token, TokenKind};

/// An infix operator recognised at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Infix {
    /// A plain binary operator.
    Binary(BinaryOp),
    /// `[NOT] IN ( list )`.
    In {
        /// True for `NOT IN`.
        negated: bool,
    },
    /// `[NOT] BETWEEN lo AND hi`.
    Between {
        /// True for `NOT BETWEEN`.
        negated: bool,
    },
}

impl Infix {
    /// Number of tokens spelling the operator.
    #[must_use]
    pub const fn token_count(&self) -> usize {
        match self {
            Self::Binary(BinaryOp::NotLike | BinaryOp::NotIlike)
            | Self::In { negated: true }
            | Self::Between { negated: true } => 2,
            _ => 1,
        }
    }
}

/// Returns the prefix binding power for a unary operator token.
///
/// Returns `None` if the token is not a prefix operator.
#[must_use]
pub fn prefix_binding_power(token: &Token) -> Option<u8> {
    match &token.kind {
        // Unary sign
        TokenKind::Minus | TokenKind::Plus => Some(21),
        // NOT keyword
        _ if token.is_keyword(Keyword::Not) => Some(5),
        _ => None,
    }
}

/// Converts a token to a prefix unary operator.
#[must_use]
pub fn token_to_unary_op(token: &Token) -> Option<UnaryOp> {
    match &token.kind {
        TokenKind::Minus => Some(UnaryOp::Neg),
        TokenKind::Plus => Some(UnaryOp::Plus),
        _ if token.is_keyword(Keyword::Not) => Some(UnaryOp::Not),
        _ => None,
    }
}

/// Recognises an infix operator starting at `token`.
///
/// `next` is needed to tell `NOT LIKE` / `NOT IN` / `NOT BETWEEN` apart
/// from a prefix `NOT` that cannot follow an operand.
#[must_use]
pub fn infix_operator(token: &Token, next: &Token) -> Option<Infix> {
    let op = match &token.kind {
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::Percent => BinaryOp::Mod,
        TokenKind::Caret => BinaryOp::Pow,
        TokenKind::Eq => BinaryOp::Eq,
        TokenKind::NotEq => BinaryOp::NotEq,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::LtEq => BinaryOp::LtEq,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::GtEq => BinaryOp::GtEq,
        TokenKind::Concat => BinaryOp::Concat,
        TokenKind::Identifier(_) => {
            return match token.keyword()? {
                Keyword::And => Some(Infix::Binary(BinaryOp::And)),
                Keyword::Or => Some(Infix::Binary(BinaryOp::Or)),
                Keyword::Like => Some(Infix::Binary(BinaryOp::Like)),
                Keyword::Ilike => Some(Infix::Binary(BinaryOp::Ilike)),
                Keyword::In => Some(Infix::In { negated: false }),
                Keyword::Between => Some(Infix::Between { negated: false }),
                Keyword::Not => match next.keyword()? {
                    Keyword::Like => Some(Infix::Binary(BinaryOp::NotLike)),
                    Keyword::Ilike => Some(Infix::Binary(BinaryOp::NotIlike)),
                    Keyword::In => Some(Infix::In { negated: true }),
                    Keyword::Between => Some(Infix::Between { negated: true }),
                    _ => None,
                },
                _ => None,
            };
        }
        _ => return None,
    };
    Some(Infix::Binary(op))
}

/// Returns the infix binding power for an operator.
///
/// Returns `(left_bp, right_bp)` where:
/// - Higher binding power = binds tighter
/// - Left associative: left_bp < right_bp
#[must_use]
pub const fn infix_binding_power(op: &Infix) -> (u8, u8) {
    match op {
        // Logical OR (lowest precedence)
        Infix::Binary(BinaryOp::Or) => (1, 2),

        // Logical AND
        Infix::Binary(BinaryOp::And) => (3, 4),

        // Comparison operators
        Infix::Binary(
            BinaryOp::Eq
            | BinaryOp::NotEq
            | BinaryOp::Lt
            | BinaryOp::LtEq
            | BinaryOp::Gt
            | BinaryOp::GtEq,
        ) => (9, 10),

        // LIKE, ILIKE, IN, BETWEEN
        Infix::Binary(
            BinaryOp::Like | BinaryOp::NotLike | BinaryOp::Ilike | BinaryOp::NotIlike,
        )
        | Infix::Binary(BinaryOp::In | BinaryOp::NotIn)
        | Infix::In { .. }
        | Infix::Between { .. } => (11, 12),

        // String concatenation
        Infix::Binary(BinaryOp::Concat) => (13, 14),

        // Additive
        Infix::Binary(BinaryOp::Add | BinaryOp::Sub) => (15, 16),

        // Multiplicative
        Infix::Binary(BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod) => (17, 18),

        // Exponentiation
        Infix::Binary(BinaryOp::Pow) => (19, 20),
    }
}

/// Returns the postfix binding power for a token.
///
/// Returns `None` if the token is not a postfix operator.
#[must_use]
pub fn postfix_binding_power(token: &Token) -> Option<u8> {
    match &token.kind {
        // ::type
        TokenKind::DoubleColon => Some(23),
        // IS [NOT] NULL / TRUE / FALSE
        _ if token.is_keyword(Keyword::Is) => Some(7),
        _ => None,
    }
}
