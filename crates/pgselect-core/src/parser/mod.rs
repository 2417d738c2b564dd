//! SQL Parser
//!
//! A hand-written recursive descent parser with Pratt expression parsing.
//! The grammar walks an index over the token vector, so speculative
//! parses roll back by restoring the index.

mod clauses;
mod error;
mod expression;
mod parser;
mod pratt;
mod validate;

pub use error::{ErrorCategory, LexicalError, ParseError, ParseErrorKind, ValidationError};
pub use parser::Parser;
