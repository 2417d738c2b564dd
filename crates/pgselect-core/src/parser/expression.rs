//! Expression grammar: primaries, operators, calls, casts and CASE.

use super::error::{ParseError, ValidationError};
use super::pratt::{
    infix_binding_power, infix_operator, postfix_binding_power, prefix_binding_power,
    token_to_unary_op, Infix,
};
use super::Parser;
use crate::ast::{
    BinaryOp, CaseWhen, DataType, Expr, FunctionName, KeywordFunction, TernaryOp, UnaryOp,
};
use crate::lexer::{Keyword, TokenKind};

impl Parser<'_> {
    /// Parses an expression using Pratt parsing.
    pub(super) fn parse_expression(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        // Parse prefix (primary expression or unary operator)
        let mut lhs = self.parse_prefix()?;

        loop {
            // Postfix operators: IS ..., ::type
            if let Some(bp) = postfix_binding_power(self.current()) {
                if bp < min_bp {
                    break;
                }
                lhs = self.parse_postfix(lhs)?;
                continue;
            }

            let Some(op) = infix_operator(self.current(), self.peek_nth(1)) else {
                break;
            };
            let (l_bp, r_bp) = infix_binding_power(&op);
            if l_bp < min_bp {
                break;
            }
            for _ in 0..op.token_count() {
                self.advance();
            }

            lhs = match op {
                Infix::Binary(op) => {
                    let rhs = self.parse_expression(r_bp)?;
                    lhs.binary(op, rhs)
                }
                Infix::In { negated } => {
                    let list = self.parse_in_list()?;
                    let op = if negated { BinaryOp::NotIn } else { BinaryOp::In };
                    lhs.binary(op, list)
                }
                Infix::Between { negated } => {
                    let lo = self.parse_expression(r_bp)?;
                    self.expect_keyword(Keyword::And)?;
                    let hi = self.parse_expression(r_bp)?;
                    Expr::Ternary {
                        op: if negated {
                            TernaryOp::NotBetween
                        } else {
                            TernaryOp::Between
                        },
                        value: Box::new(lhs),
                        lo: Box::new(lo),
                        hi: Box::new(hi),
                    }
                }
            };
        }

        Ok(lhs)
    }

    /// Parses a select-list item or call argument, where a bare `*` or
    /// `table.*` is allowed as the whole expression.
    pub(super) fn parse_expression_or_wildcard(&mut self) -> Result<Expr, ParseError> {
        let start = self.current().span;
        if let Some(wildcard) = self.try_parse_wildcard() {
            if self.at_operator() {
                let span = start.merge(self.current().span);
                return Err(self.validation_error(ValidationError::MisplacedWildcard, span));
            }
            return Ok(wildcard);
        }
        self.parse_expression(0)
    }

    /// Parses a comma-separated expression list.
    pub(super) fn parse_expression_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = vec![self.parse_expression(0)?];
        while self.consume(&TokenKind::Comma) {
            exprs.push(self.parse_expression(0)?);
        }
        Ok(exprs)
    }

    /// Consumes `*` or `name.*` if present.
    fn try_parse_wildcard(&mut self) -> Option<Expr> {
        if self.consume(&TokenKind::Star) {
            return Some(Expr::wildcard());
        }
        if !self.at_identifier()
            || self.peek_nth(1).kind != TokenKind::Dot
            || self.peek_nth(2).kind != TokenKind::Star
        {
            return None;
        }
        let table = match &self.current().kind {
            TokenKind::Identifier(name) | TokenKind::QuotedIdentifier(name) => name.clone(),
            _ => return None,
        };
        for _ in 0..3 {
            self.advance();
        }
        Some(Expr::qualified_wildcard(table))
    }

    /// Returns true if the current token continues an operand.
    fn at_operator(&self) -> bool {
        postfix_binding_power(self.current()).is_some()
            || infix_operator(self.current(), self.peek_nth(1)).is_some()
    }

    /// Parses a prefix expression.
    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        // Check for unary operators
        let token = self.current();
        if let (Some(op), Some(bp)) = (token_to_unary_op(token), prefix_binding_power(token)) {
            self.advance();
            let operand = self.parse_expression(bp)?;
            return Ok(match (op, operand) {
                // Negative literals
                (UnaryOp::Neg, Expr::Integer { value }) if value != i64::MIN => {
                    Expr::Integer { value: -value }
                }
                (UnaryOp::Neg, Expr::Numeric { value }) => Expr::Numeric { value: -value },
                (op, operand) => Expr::unary(op, operand),
            });
        }

        self.parse_primary()
    }

    /// Parses a postfix operator applied to `lhs`.
    fn parse_postfix(&mut self, lhs: Expr) -> Result<Expr, ParseError> {
        if self.consume(&TokenKind::DoubleColon) {
            let to = self.parse_data_type()?;
            return Ok(lhs.cast(to));
        }

        self.expect_keyword(Keyword::Is)?;
        let negated = self.consume_keyword(Keyword::Not);
        let op = match (self.current().keyword(), negated) {
            (Some(Keyword::Null), false) => UnaryOp::IsNull,
            (Some(Keyword::Null), true) => UnaryOp::IsNotNull,
            (Some(Keyword::True), false) => UnaryOp::IsTrue,
            (Some(Keyword::True), true) => UnaryOp::IsNotTrue,
            (Some(Keyword::False), false) => UnaryOp::IsFalse,
            (Some(Keyword::False), true) => UnaryOp::IsNotFalse,
            _ => return Err(self.unexpected("NULL, TRUE or FALSE")),
        };
        self.advance();
        Ok(Expr::unary(op, lhs))
    }

    /// Parses a primary expression.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current().clone();

        match &token.kind {
            // Literals
            TokenKind::Integer(value) => {
                self.advance();
                Ok(Expr::integer(*value))
            }
            TokenKind::Numeric(value) => {
                self.advance();
                Ok(Expr::Numeric { value: *value })
            }
            TokenKind::String(value) => {
                self.advance();
                Ok(Expr::string(value.clone()))
            }
            TokenKind::Parameter(name) => {
                self.advance();
                Ok(Expr::Parameter { name: name.clone() })
            }

            TokenKind::LeftParen => self.parse_parenthesized(),

            TokenKind::Star => {
                Err(self.validation_error(ValidationError::MisplacedWildcard, token.span))
            }

            TokenKind::QuotedIdentifier(_) => self.parse_reference(),

            TokenKind::Identifier(name) => match token.keyword() {
                Some(Keyword::True) => {
                    self.advance();
                    Ok(Expr::Boolean { value: true })
                }
                Some(Keyword::False) => {
                    self.advance();
                    Ok(Expr::Boolean { value: false })
                }
                Some(Keyword::Null) => {
                    self.advance();
                    Ok(Expr::Null)
                }
                Some(Keyword::Case) => self.parse_case(),
                Some(Keyword::Cast) => self.parse_cast(),
                Some(kw)
                    if kw.is_function_keyword()
                        && self.peek_nth(1).kind == TokenKind::LeftParen =>
                {
                    self.advance();
                    let function = FunctionName::Keyword(KeywordFunction {
                        keyword: name.clone(),
                    });
                    self.parse_call(function)
                }
                Some(kw) if kw.is_reserved() => Err(self.unexpected("expression")),
                _ => self.parse_reference(),
            },

            _ => Err(self.unexpected("expression")),
        }
    }

    /// Parses `( expr )`. The parentheses leave no trace in the AST.
    fn parse_parenthesized(&mut self) -> Result<Expr, ParseError> {
        let open = self.expect(&TokenKind::LeftParen)?;

        if self.check_keyword(Keyword::Select) {
            let span = open.merge(self.current().span);
            return Err(self.validation_error(ValidationError::SubqueryNotAllowed, span));
        }

        if self.try_parse_wildcard().is_some() {
            let rule = if self.check(&TokenKind::RightParen) {
                ValidationError::ParenthesizedWildcard
            } else {
                ValidationError::MisplacedWildcard
            };
            let span = open.merge(self.current().span);
            return Err(self.validation_error(rule, span));
        }

        let inner = self.parse_expression(0)?;
        self.expect(&TokenKind::RightParen)?;
        Ok(inner)
    }

    /// Parses `name`, `table.name` or `name(args)`.
    fn parse_reference(&mut self) -> Result<Expr, ParseError> {
        let name = self.expect_column_name()?;

        if self.check(&TokenKind::LeftParen) {
            return self.parse_call(FunctionName::Name(name));
        }

        if self.check(&TokenKind::Dot) {
            if self.peek_nth(1).kind == TokenKind::Star {
                let span = self.current().span.merge(self.peek_nth(1).span);
                return Err(self.validation_error(ValidationError::MisplacedWildcard, span));
            }
            self.advance();
            let column = self.expect_qualified_part()?;
            return Ok(Expr::qualified(name, column));
        }

        Ok(Expr::reference(name))
    }

    /// Expects a column or table name; a quoted `"*"` is rejected.
    fn expect_column_name(&mut self) -> Result<String, ParseError> {
        self.reject_quoted_wildcard()?;
        self.expect_identifier()
    }

    /// Expects the name after `table.`; any word is allowed there.
    fn expect_qualified_part(&mut self) -> Result<String, ParseError> {
        self.reject_quoted_wildcard()?;
        match &self.current().kind {
            TokenKind::Identifier(name) | TokenKind::QuotedIdentifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected("column name")),
        }
    }

    fn reject_quoted_wildcard(&self) -> Result<(), ParseError> {
        let token = self.current();
        match &token.kind {
            TokenKind::QuotedIdentifier(name) if name == Expr::WILDCARD => {
                Err(self.validation_error(ValidationError::QuotedWildcard, token.span))
            }
            _ => Ok(()),
        }
    }

    /// Parses a parenthesized argument list following a function name.
    fn parse_call(&mut self, function: FunctionName) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let mut args = vec![];
        if !self.check(&TokenKind::RightParen) {
            args.push(self.parse_expression_or_wildcard()?);
            while self.consume(&TokenKind::Comma) {
                args.push(self.parse_expression_or_wildcard()?);
            }
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(Expr::Call { function, args })
    }

    /// Parses the `( a, b, ... )` right side of IN.
    fn parse_in_list(&mut self) -> Result<Expr, ParseError> {
        let open = self.expect(&TokenKind::LeftParen)?;
        if self.check_keyword(Keyword::Select) {
            let span = open.merge(self.current().span);
            return Err(self.validation_error(ValidationError::SubqueryNotAllowed, span));
        }
        let expressions = self.parse_expression_list()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(Expr::List { expressions })
    }

    /// Parses CASE ... END.
    fn parse_case(&mut self) -> Result<Expr, ParseError> {
        self.expect_keyword(Keyword::Case)?;

        let value = if self.check_keyword(Keyword::When) {
            None
        } else {
            Some(Box::new(self.parse_expression(0)?))
        };

        let mut whens = vec![];
        while self.consume_keyword(Keyword::When) {
            let when = self.parse_expression(0)?;
            self.expect_keyword(Keyword::Then)?;
            let value = self.parse_expression(0)?;
            whens.push(CaseWhen { when, value });
        }
        if whens.is_empty() {
            return Err(self.unexpected("WHEN"));
        }

        let else_value = if self.consume_keyword(Keyword::Else) {
            Some(Box::new(self.parse_expression(0)?))
        } else {
            None
        };

        self.expect_keyword(Keyword::End)?;
        Ok(Expr::Case {
            value,
            whens,
            else_value,
        })
    }

    /// Parses CAST(expr AS type).
    fn parse_cast(&mut self) -> Result<Expr, ParseError> {
        self.expect_keyword(Keyword::Cast)?;
        self.expect(&TokenKind::LeftParen)?;
        let operand = self.parse_expression(0)?;
        self.expect_keyword(Keyword::As)?;
        let to = self.parse_data_type()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(operand.cast(to))
    }

    /// Parses a type descriptor, including multi-word names.
    pub(super) fn parse_data_type(&mut self) -> Result<DataType, ParseError> {
        let token = self.current();
        let mut name = match &token.kind {
            TokenKind::Identifier(_) if token.keyword().is_some_and(|kw| kw.is_reserved()) => {
                return Err(self.unexpected("type name"));
            }
            TokenKind::Identifier(name) | TokenKind::QuotedIdentifier(name) => name.clone(),
            _ => return Err(self.unexpected("type name")),
        };
        self.advance();

        let suffix = match name.as_str() {
            "double" => "precision",
            "character" | "char" | "bit" => "varying",
            _ => "",
        };
        if !suffix.is_empty() && self.consume_word(suffix) {
            name.push(' ');
            name.push_str(suffix);
        }

        let config = if self.check(&TokenKind::LeftParen) {
            Some(self.parse_type_config()?)
        } else {
            None
        };

        if matches!(name.as_str(), "time" | "timestamp")
            && (self.check_word(0, "with") || self.check_word(0, "without"))
            && self.check_word(1, "time")
            && self.check_word(2, "zone")
        {
            if self.check_word(0, "with") {
                name.push_str(" with time zone");
            } else {
                name.push_str(" without time zone");
            }
            for _ in 0..3 {
                self.advance();
            }
        }

        Ok(DataType { name, config })
    }

    /// Parses `( n [, n]* )` after a type name.
    fn parse_type_config(&mut self) -> Result<Vec<i64>, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let mut config = vec![];
        loop {
            match self.current().kind {
                TokenKind::Integer(value) => {
                    config.push(value);
                    self.advance();
                }
                _ => return Err(self.unexpected("integer")),
            }
            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(config)
    }

    /// Returns true if the token `n` ahead is the bare word `word`.
    fn check_word(&self, n: usize, word: &str) -> bool {
        matches!(&self.peek_nth(n).kind, TokenKind::Identifier(w) if w == word)
    }

    /// Consumes the bare word `word` if present.
    fn consume_word(&mut self, word: &str) -> bool {
        let matched = self.check_word(0, word);
        if matched {
            self.advance();
        }
        matched
    }
}
