//! Clause grammar: select list, FROM with joins, GROUP BY, ORDER BY and
//! the LIMIT / OFFSET / FETCH family.

use tracing::trace;

use super::error::{ParseError, ValidationError};
use super::{validate, Parser};
use crate::ast::{
    Expr, FromItem, FromStatement, FromTable, Join, JoinType, LimitClause, OrderByClause,
    OrderDirection, SelectedColumn,
};
use crate::lexer::{Keyword, Span, TokenKind};

impl Parser<'_> {
    /// Parses SELECT columns. Returns `None` when the list is empty.
    pub(super) fn parse_select_columns(
        &mut self,
    ) -> Result<Option<Vec<SelectedColumn>>, ParseError> {
        if self.at_clause_end(&[
            Keyword::From,
            Keyword::Where,
            Keyword::Group,
            Keyword::Having,
            Keyword::Order,
            Keyword::Limit,
            Keyword::Offset,
            Keyword::Fetch,
        ]) {
            return Ok(None);
        }

        let mut columns = vec![];
        loop {
            let expr = self.parse_expression_or_wildcard()?;

            // Check for alias (AS name or just name); a wildcard takes none
            let alias = if expr.is_wildcard() {
                None
            } else {
                self.parse_optional_alias()?
            };

            columns.push(SelectedColumn { expr, alias });

            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }

        Ok(Some(columns))
    }

    /// Parses `[AS] alias` with a bare or quoted identifier.
    pub(super) fn parse_optional_alias(&mut self) -> Result<Option<String>, ParseError> {
        if self.consume_keyword(Keyword::As) || self.at_identifier() {
            return self.expect_identifier().map(Some);
        }
        Ok(None)
    }

    /// Parses the FROM list with the joins attached to its entries.
    pub(super) fn parse_from_list(&mut self) -> Result<Vec<FromItem>, ParseError> {
        let mut items = vec![self.parse_from_item()?];

        loop {
            if self.consume(&TokenKind::Comma) {
                items.push(self.parse_from_item()?);
            } else if self.is_join_keyword() {
                let join_type = self.parse_join_type()?;
                let mut item = self.parse_from_item()?;
                self.expect_keyword(Keyword::On)?;
                let on = self.parse_expression(0)?;
                item.set_join(Join { join_type, on });
                items.push(item);
            } else {
                break;
            }
        }

        Ok(items)
    }

    /// Parses one FROM entry: `[schema.]name [alias]` or
    /// `(SELECT ...) alias`.
    fn parse_from_item(&mut self) -> Result<FromItem, ParseError> {
        if self.check(&TokenKind::LeftParen) {
            let open = self.current().span;
            self.advance();
            if !self.check_keyword(Keyword::Select) {
                return Err(self.unexpected("SELECT"));
            }
            let statement = self.select_statement()?;
            let close = self.expect(&TokenKind::RightParen)?;
            let alias = self.parse_optional_alias()?;
            let alias = validate::derived_table_alias(alias)
                .map_err(|rule| self.validation_error(rule, open.merge(close)))?;
            return Ok(FromItem::Statement(FromStatement {
                statement: Box::new(statement),
                alias,
                join: None,
            }));
        }

        let first = self.expect_identifier()?;
        let (schema, name) = if self.consume(&TokenKind::Dot) {
            (Some(first), self.expect_identifier()?)
        } else {
            (None, first)
        };

        // `name()` reads as the table `name`
        if self.check(&TokenKind::LeftParen) && self.peek_nth(1).kind == TokenKind::RightParen {
            self.advance();
            self.advance();
        }

        let alias = self.parse_optional_alias()?;
        Ok(FromItem::Table(FromTable {
            name,
            schema,
            alias,
            join: None,
        }))
    }

    /// Checks if the current token starts a join.
    fn is_join_keyword(&self) -> bool {
        matches!(
            self.current().keyword(),
            Some(
                Keyword::Join
                    | Keyword::Inner
                    | Keyword::Left
                    | Keyword::Right
                    | Keyword::Full
                    | Keyword::Outer
                    | Keyword::Cross
                    | Keyword::Natural
            )
        )
    }

    /// Parses the join keywords up to and including JOIN.
    fn parse_join_type(&mut self) -> Result<JoinType, ParseError> {
        let start = self.current().span;
        let mut words = vec![];
        while let Some(
            kw @ (Keyword::Inner
            | Keyword::Left
            | Keyword::Right
            | Keyword::Full
            | Keyword::Outer
            | Keyword::Cross
            | Keyword::Natural),
        ) = self.current().keyword()
        {
            words.push(kw);
            self.advance();
        }
        self.expect_keyword(Keyword::Join)?;

        let span = start.merge(self.previous_span());
        validate::join_type(&words).map_err(|rule| self.validation_error(rule, span))
    }

    /// Parses the GROUP BY list. One pair of parentheses around the whole
    /// list is dropped: `(a, b)` is the same as `a, b`.
    pub(super) fn parse_group_by_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        if self.check(&TokenKind::LeftParen) {
            let checkpoint = self.checkpoint();
            self.advance();
            if let Ok(list) = self.speculate(Self::parse_expression_list) {
                if self.consume(&TokenKind::RightParen)
                    && self.at_clause_end(&[
                        Keyword::Having,
                        Keyword::Order,
                        Keyword::Limit,
                        Keyword::Offset,
                        Keyword::Fetch,
                    ])
                {
                    return Ok(list);
                }
            }
            trace!(position = checkpoint, "group by list is not wrapped, reparsing");
            self.rewind(checkpoint);
        }
        self.parse_expression_list()
    }

    /// Parses ORDER BY entries.
    pub(super) fn parse_order_by_list(&mut self) -> Result<Vec<OrderByClause>, ParseError> {
        let mut clauses = vec![];

        loop {
            let by = self.parse_expression(0)?;
            let order = if self.consume_keyword(Keyword::Desc) {
                OrderDirection::Desc
            } else {
                self.consume_keyword(Keyword::Asc);
                OrderDirection::Asc
            };
            clauses.push(OrderByClause { by, order });

            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }

        Ok(clauses)
    }

    /// Parses any mix of `LIMIT n|ALL`, `OFFSET n [ROW|ROWS]` and
    /// `FETCH FIRST|NEXT [n] ROW|ROWS [ONLY]` into one clause.
    pub(super) fn parse_limit_clause(&mut self) -> Result<Option<LimitClause>, ParseError> {
        let mut clause = LimitClause::default();
        let mut limit_seen = false;
        let mut offset_seen = false;

        loop {
            let span = self.current().span;
            match self.current().keyword() {
                Some(Keyword::Limit) => {
                    self.first_occurrence(&mut limit_seen, ValidationError::DuplicateLimit, span)?;
                    self.advance();
                    clause.limit = if self.consume_keyword(Keyword::All) {
                        None
                    } else {
                        Some(self.parse_row_count()?)
                    };
                }
                Some(Keyword::Offset) => {
                    self.first_occurrence(
                        &mut offset_seen,
                        ValidationError::DuplicateOffset,
                        span,
                    )?;
                    self.advance();
                    clause.offset = Some(self.parse_row_count()?);
                    self.consume_row_keyword();
                }
                Some(Keyword::Fetch) => {
                    self.first_occurrence(&mut limit_seen, ValidationError::DuplicateLimit, span)?;
                    self.advance();
                    if !self.consume_keyword(Keyword::First) && !self.consume_keyword(Keyword::Next)
                    {
                        return Err(self.unexpected("FIRST or NEXT"));
                    }
                    let count = if self.check_keyword(Keyword::Row) || self.check_keyword(Keyword::Rows)
                    {
                        1
                    } else {
                        self.parse_row_count()?
                    };
                    clause.limit = Some(count);
                    self.consume_row_keyword();
                    self.consume_keyword(Keyword::Only);
                }
                _ => break,
            }
        }

        Ok((clause.limit.is_some() || clause.offset.is_some()).then_some(clause))
    }

    fn first_occurrence(
        &self,
        seen: &mut bool,
        duplicate: ValidationError,
        span: Span,
    ) -> Result<(), ParseError> {
        validate::first_occurrence(seen, duplicate).map_err(|rule| self.validation_error(rule, span))
    }

    fn consume_row_keyword(&mut self) {
        if !self.consume_keyword(Keyword::Rows) {
            self.consume_keyword(Keyword::Row);
        }
    }

    /// Parses a non-negative integer row count.
    fn parse_row_count(&mut self) -> Result<u64, ParseError> {
        let start = self.current().span;
        let negative = self.consume(&TokenKind::Minus);
        let value = match &self.current().kind {
            TokenKind::Integer(value) if negative => -*value,
            TokenKind::Integer(value) => *value,
            TokenKind::Numeric(value) => {
                let text = if negative {
                    format!("-{value}")
                } else {
                    value.to_string()
                };
                let span = start.merge(self.current().span);
                return Err(self.validation_error(ValidationError::InvalidRowCount(text), span));
            }
            _ => return Err(self.unexpected("row count")),
        };
        let span = start.merge(self.current().span);
        self.advance();
        validate::row_count(value).map_err(|rule| self.validation_error(rule, span))
    }

    /// Returns true if nothing more belongs to the current list: end of
    /// input, `;`, `)` or one of the given clause keywords.
    fn at_clause_end(&self, keywords: &[Keyword]) -> bool {
        let token = self.current();
        match &token.kind {
            TokenKind::Eof | TokenKind::Semicolon | TokenKind::RightParen => true,
            TokenKind::Identifier(_) => token.keyword().is_some_and(|kw| keywords.contains(&kw)),
            _ => false,
        }
    }
}
