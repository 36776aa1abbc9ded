//! Parser for notice templates.

pub mod lexer;
pub mod tokens;

use crate::ast::{Template, TemplatePart};
use lexer::Lexer;
use tokens::Token;

/// Parse a template string into a Template.
///
/// Adjacent literal runs are merged, so `"{a}{b}"` yields one literal part.
pub fn parse(template: &str) -> Template {
    let mut parts: Vec<TemplatePart> = Vec::new();

    for spanned in Lexer::new(template) {
        match spanned.token {
            Token::Literal(text) => match parts.last_mut() {
                Some(TemplatePart::Literal(prev)) => prev.push_str(text),
                _ => parts.push(TemplatePart::Literal(text.to_string())),
            },
            Token::Placeholder(placeholder) => parts.push(TemplatePart::Placeholder(placeholder)),
            Token::Eof => break,
        }
    }

    Template::from_parts(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Placeholder;

    #[test]
    fn test_parse_empty() {
        assert!(parse("").parts().is_empty());
    }

    #[test]
    fn test_parse_merges_literals() {
        let template = parse("{a}{b} {owner}");
        assert_eq!(
            template.parts(),
            &[
                TemplatePart::Literal("{a}{b} ".to_string()),
                TemplatePart::Placeholder(Placeholder::Owner),
            ]
        );
    }

    #[test]
    fn test_parse_repeated_placeholder() {
        let template = parse("{year}/{year}");
        assert_eq!(
            template.placeholders().collect::<Vec<_>>(),
            vec![Placeholder::Year, Placeholder::Year]
        );
    }
}
