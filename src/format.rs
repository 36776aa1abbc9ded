//! Preset notice formats and their template strings.
//!
//! The four presets range from the bare `© 2026 Owner` to the full legal
//! wording. Each one is a template built from the `{symbol}`, `{year}` and
//! `{owner}` placeholders, substituted by the formatter.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A named preset controlling how verbose the notice is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    /// `{symbol} {year} {owner}`
    #[default]
    Minimal,
    /// `Copyright {symbol} {year} {owner}`
    Standard,
    /// `Copyright {symbol} {year} {owner}. All rights reserved.`
    Full,
    /// `Copyright {symbol} {year} {owner}. All Rights Reserved.`
    Legal,
}

/// Every preset paired with its template, in declaration order.
pub const FORMAT_TEMPLATES: [(Format, &str); 4] = [
    (Format::Minimal, "{symbol} {year} {owner}"),
    (Format::Standard, "Copyright {symbol} {year} {owner}"),
    (
        Format::Full,
        "Copyright {symbol} {year} {owner}. All rights reserved.",
    ),
    (
        Format::Legal,
        "Copyright {symbol} {year} {owner}. All Rights Reserved.",
    ),
];

impl Format {
    /// All presets in declaration order.
    pub const ALL: [Format; 4] = [
        Format::Minimal,
        Format::Standard,
        Format::Full,
        Format::Legal,
    ];

    /// Returns the template string for this preset.
    ///
    /// # Examples
    /// ```
    /// use copyfmt::Format;
    ///
    /// assert_eq!(Format::Minimal.template(), "{symbol} {year} {owner}");
    /// assert_eq!(Format::Standard.template(), "Copyright {symbol} {year} {owner}");
    /// ```
    pub const fn template(self) -> &'static str {
        FORMAT_TEMPLATES[self as usize].1
    }

    /// Returns the lowercase name used in configuration.
    pub const fn name(self) -> &'static str {
        match self {
            Format::Minimal => "minimal",
            Format::Standard => "standard",
            Format::Full => "full",
            Format::Legal => "legal",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| ParseError::UnknownFormat {
                name: s.to_string(),
            })
    }
}
