//! Notice options and configuration.

use crate::format::Format;

/// Everything needed to build a copyright notice.
///
/// No field is validated: an empty owner or a start year after the end year
/// still produce a notice, just a surprising one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CopyrightOptions {
    /// The display name credited with the copyright.
    pub owner: String,
    /// First year of the range. Equal to the end year means no range.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub start_year: Option<i32>,
    /// Last year of the range. The current year is used when absent.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub end_year: Option<i32>,
    /// The preset used when no custom template is set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub format: Format,
    /// A custom template overriding `format`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub template: Option<String>,
}

impl CopyrightOptions {
    /// Options for `owner` with every other field defaulted.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            ..Self::default()
        }
    }

    pub fn with_start_year(mut self, year: i32) -> Self {
        self.start_year = Some(year);
        self
    }

    pub fn with_end_year(mut self, year: i32) -> Self {
        self.end_year = Some(year);
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// The template string in effect: the custom template if set, else the preset's.
    pub fn effective_template(&self) -> &str {
        self.template
            .as_deref()
            .unwrap_or_else(|| self.format.template())
    }
}
