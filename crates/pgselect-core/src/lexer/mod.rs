//! SQL Lexer/Tokenizer
//!
//! A hand-written lexer that turns SQL text into a vector of tokens
//! ending in [`TokenKind::Eof`]. Bare words stay identifiers; whether a
//! word is a keyword is decided by the parser in context.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
