//! Lexer for tokenizing template strings.
//!
//! The lexer splits a template into literal runs and placeholders:
//! - `{symbol}`, `{year}` and `{owner}` become Placeholder tokens
//! - Any other `{` starts a literal run, so unknown tokens survive untouched
//! - Literal runs stop at the next `{` so a placeholder right after one is still seen

use crate::ast::Placeholder;
use crate::parser::tokens::{SpannedToken, Token};

/// A lexer for template strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> SpannedToken<'a> {
        let start = self.position;
        let rest = &self.input[start..];

        if rest.is_empty() {
            return SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            };
        }

        if let Some(placeholder) = match_placeholder(rest) {
            self.position += placeholder.token().len();
            return SpannedToken {
                token: Token::Placeholder(placeholder),
                start,
                end: self.position,
            };
        }

        // Literal run. A leading '{' that did not open a placeholder belongs to it.
        let skip = usize::from(rest.starts_with('{'));
        let len = rest[skip..].find('{').map_or(rest.len(), |i| i + skip);
        self.position += len;

        SpannedToken {
            token: Token::Literal(&self.input[start..self.position]),
            start,
            end: self.position,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = SpannedToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        match token.token {
            Token::Eof => None,
            _ => Some(token),
        }
    }
}

/// Match a placeholder at the start of `input`.
fn match_placeholder(input: &str) -> Option<Placeholder> {
    if !input.starts_with('{') {
        return None;
    }
    Placeholder::ALL
        .into_iter()
        .find(|p| input.starts_with(p.token()))
}
