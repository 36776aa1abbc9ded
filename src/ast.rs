//! AST types for parsed notice templates.

use std::str::FromStr;

/// A placeholder recognized inside a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `{symbol}` - The copyright sign (©)
    Symbol,
    /// `{year}` - A single year or a `start-end` range
    Year,
    /// `{owner}` - The owner name, inserted verbatim
    Owner,
}

impl Placeholder {
    /// All placeholders, in the order they are tried by the lexer.
    pub const ALL: [Placeholder; 3] = [
        Placeholder::Symbol,
        Placeholder::Year,
        Placeholder::Owner,
    ];

    /// Returns the literal token text including braces, e.g. `{year}`.
    pub const fn token(self) -> &'static str {
        match self {
            Placeholder::Symbol => "{symbol}",
            Placeholder::Year => "{year}",
            Placeholder::Owner => "{owner}",
        }
    }
}

impl FromStr for Placeholder {
    type Err = ();

    /// Parses a placeholder name without braces (`"year"`, not `"{year}"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "symbol" => Ok(Placeholder::Symbol),
            "year" => Ok(Placeholder::Year),
            "owner" => Ok(Placeholder::Owner),
            _ => Err(()),
        }
    }
}

/// A single part of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    /// Literal text to copy as-is (includes unknown `{...}` sequences)
    Literal(String),
    /// A placeholder substituted at format time
    Placeholder(Placeholder),
}

/// A parsed template: literal runs interleaved with placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    parts: Vec<TemplatePart>,
}

impl Template {
    /// Parse a template string.
    ///
    /// Parsing never fails: anything that is not one of the three known
    /// placeholders is kept as literal text.
    ///
    /// # Examples
    /// ```
    /// use copyfmt::ast::{Placeholder, Template, TemplatePart};
    ///
    /// let template = Template::parse("Made by {owner}");
    /// assert_eq!(
    ///     template.parts(),
    ///     &[
    ///         TemplatePart::Literal("Made by ".to_string()),
    ///         TemplatePart::Placeholder(Placeholder::Owner),
    ///     ]
    /// );
    /// ```
    pub fn parse(template: &str) -> Template {
        crate::parser::parse(template)
    }

    /// Create a template from pre-built parts.
    pub fn from_parts(parts: Vec<TemplatePart>) -> Self {
        Template { parts }
    }

    /// Get the parts of this template.
    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }

    /// Iterate over the placeholders in source order.
    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.parts.iter().filter_map(|part| match part {
            TemplatePart::Placeholder(p) => Some(*p),
            TemplatePart::Literal(_) => None,
        })
    }

    /// Returns true if the template contains the given placeholder.
    pub fn contains(&self, placeholder: Placeholder) -> bool {
        self.placeholders().any(|p| p == placeholder)
    }
}
