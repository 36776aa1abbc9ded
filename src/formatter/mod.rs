//! Notice formatting engine

mod year;

pub use year::YearToken;

use std::fmt::{self, Write as _};

use crate::ast::{Placeholder, Template, TemplatePart};
use crate::clock::{Clock, SystemClock};
use crate::options::CopyrightOptions;

/// The copyright sign substituted for `{symbol}` (U+00A9).
pub const SYMBOL: char = '\u{00A9}';

impl Template {
    /// Substitute every placeholder in a single pass.
    ///
    /// Substituted text is never scanned again, so an owner such as `"{year}"`
    /// comes out literally.
    pub fn render(&self, year: &YearToken, owner: &str) -> String {
        let mut result = String::new();

        for part in self.parts() {
            match part {
                TemplatePart::Literal(s) => result.push_str(s),
                TemplatePart::Placeholder(Placeholder::Symbol) => result.push(SYMBOL),
                TemplatePart::Placeholder(Placeholder::Year) => {
                    let _ = write!(result, "{}", year);
                }
                TemplatePart::Placeholder(Placeholder::Owner) => result.push_str(owner),
            }
        }

        result
    }
}

/// A copyright notice.
///
/// The end year is read from the clock each time text is computed, so a
/// long-lived notice without an explicit end year follows the calendar.
///
/// # Examples
/// ```
/// use copyfmt::{Copyright, CopyrightOptions, FixedClock, Format};
///
/// let notice = Copyright::new(
///     CopyrightOptions::new("ACME Corp")
///         .with_start_year(2020)
///         .with_format(Format::Standard),
/// );
/// assert_eq!(
///     notice.text_at(&FixedClock::in_year(2026)),
///     "Copyright © 2020-2026 ACME Corp"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Copyright {
    options: CopyrightOptions,
    template: Template,
}

impl Copyright {
    /// Create a notice, parsing the effective template up front.
    pub fn new(options: CopyrightOptions) -> Self {
        let template = Template::parse(options.effective_template());
        Copyright { options, template }
    }

    pub fn options(&self) -> &CopyrightOptions {
        &self.options
    }

    /// The parsed template in effect.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Compute the year token, consulting `clock` only when no end year is set.
    pub fn year_token_at<C: Clock + ?Sized>(&self, clock: &C) -> YearToken {
        let end = self.options.end_year.unwrap_or_else(|| clock.year());
        YearToken::resolve(self.options.start_year, end)
    }

    /// Compute the notice text for the year reported by `clock`.
    pub fn text_at<C: Clock + ?Sized>(&self, clock: &C) -> String {
        let year = self.year_token_at(clock);

        tracing::trace!(
            source = self.template_source(),
            year = %year,
            "formatting copyright notice"
        );

        self.template.render(&year, &self.options.owner)
    }

    /// Compute the notice text for the current year.
    pub fn text(&self) -> String {
        self.text_at(&SystemClock)
    }

    /// Name of the template in effect, for diagnostics.
    fn template_source(&self) -> &'static str {
        match self.options.template {
            Some(_) => "custom",
            None => self.options.format.name(),
        }
    }
}

impl From<CopyrightOptions> for Copyright {
    fn from(options: CopyrightOptions) -> Self {
        Copyright::new(options)
    }
}

impl fmt::Display for Copyright {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
