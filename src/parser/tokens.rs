//! Token types for the template lexer.

use crate::ast::Placeholder;

/// A token in a template string.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    /// A run of literal text, borrowed from the input
    Literal(&'a str),
    /// `{symbol}`, `{year}` or `{owner}`
    Placeholder(Placeholder),

    // End of input
    Eof,
}

/// A token with its position in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken<'a> {
    pub token: Token<'a>,
    pub start: usize,
    pub end: usize,
}
