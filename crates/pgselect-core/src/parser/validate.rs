//! Grammar rules checked once a construct has been read.
//!
//! Each check returns the [`ValidationError`] naming the broken rule; the
//! parser attaches the source position.

use super::error::ValidationError;
use crate::ast::JoinType;
use crate::lexer::Keyword;

/// Folds the keywords written before `JOIN` into a join type.
///
/// Accepted spellings are `JOIN`, `INNER JOIN`, `LEFT [OUTER] JOIN`,
/// `RIGHT [OUTER] JOIN` and `FULL [OUTER] JOIN`.
///
/// # Errors
///
/// Returns [`ValidationError::IllegalJoinType`] for every other
/// combination, e.g. `FULL INNER JOIN` or `NATURAL JOIN`.
pub fn join_type(words: &[Keyword]) -> Result<JoinType, ValidationError> {
    match words {
        [] | [Keyword::Inner] => Ok(JoinType::Inner),
        [Keyword::Left] | [Keyword::Left, Keyword::Outer] => Ok(JoinType::Left),
        [Keyword::Right] | [Keyword::Right, Keyword::Outer] => Ok(JoinType::Right),
        [Keyword::Full] | [Keyword::Full, Keyword::Outer] => Ok(JoinType::Full),
        _ => {
            let mut spelling: Vec<&str> = words.iter().map(Keyword::as_str).collect();
            spelling.push(Keyword::Join.as_str());
            Err(ValidationError::IllegalJoinType(spelling.join(" ")))
        }
    }
}

/// A derived table must be named.
///
/// # Errors
///
/// Returns [`ValidationError::DerivedTableWithoutAlias`] if `alias` is
/// `None`.
pub fn derived_table_alias(alias: Option<String>) -> Result<String, ValidationError> {
    alias.ok_or(ValidationError::DerivedTableWithoutAlias)
}

/// A LIMIT / OFFSET / FETCH count must be a non-negative integer.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidRowCount`] for negative values.
pub fn row_count(value: i64) -> Result<u64, ValidationError> {
    u64::try_from(value).map_err(|_| ValidationError::InvalidRowCount(value.to_string()))
}

/// Records one LIMIT-like clause, rejecting a second one.
///
/// # Errors
///
/// Returns `duplicate` if `seen` is already set.
pub fn first_occurrence(seen: &mut bool, duplicate: ValidationError) -> Result<(), ValidationError> {
    if *seen {
        return Err(duplicate);
    }
    *seen = true;
    Ok(())
}
