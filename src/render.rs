//! Rendering a notice into an HTML element.
//!
//! This is the presentation boundary: the formatter produces text, and this
//! module wraps it in an element with a tag, class and inline style. Nothing
//! in the formatter depends on it.

use std::fmt::{self, Write as _};

use crate::clock::{Clock, SystemClock};
use crate::formatter::Copyright;

/// Tag used when neither `as_tag` nor `tag` is given.
pub const DEFAULT_TAG: &str = "span";

/// Presentation-only settings for an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Generic element tag.
    pub tag: Option<String>,
    /// Tag override that wins over `tag`.
    pub as_tag: Option<String>,
    /// Space-separated class names, written as-is.
    pub class_name: Option<String>,
    /// Inline style declarations in insertion order.
    ///
    /// camelCase property names (`fontSize`) are written in CSS form (`font-size`).
    pub style: Vec<(String, String)>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_as(mut self, tag: impl Into<String>) -> Self {
        self.as_tag = Some(tag.into());
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.push((property.into(), value.into()));
        self
    }

    /// The tag this configuration renders to.
    pub fn resolved_tag(&self) -> &str {
        resolve_tag(self.as_tag.as_deref(), self.tag.as_deref())
    }
}

/// Pick the element tag: `as_tag`, then `tag`, then [`DEFAULT_TAG`].
///
/// # Examples
/// ```
/// use copyfmt::render::resolve_tag;
///
/// assert_eq!(resolve_tag(Some("footer"), Some("div")), "footer");
/// assert_eq!(resolve_tag(None, Some("small")), "small");
/// assert_eq!(resolve_tag(None, None), "span");
/// ```
pub fn resolve_tag<'a>(as_tag: Option<&'a str>, tag: Option<&'a str>) -> &'a str {
    as_tag.or(tag).unwrap_or(DEFAULT_TAG)
}

/// An element whose only child is the notice text.
///
/// `Display` writes it as HTML with the text and attribute values escaped.
/// A tag that is not a plain element name (`[A-Za-z][A-Za-z0-9-]*`) is
/// replaced by [`DEFAULT_TAG`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    class_name: Option<String>,
    style: Vec<(String, String)>,
    text: String,
}

impl Element {
    pub fn new(text: impl Into<String>, opts: &RenderOptions) -> Self {
        Element {
            tag: element_tag(opts.resolved_tag()).to_string(),
            class_name: opts.class_name.clone(),
            style: opts.style.clone(),
            text: text.into(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// The unescaped text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the value of the `style` attribute, or `None` without declarations.
    pub fn style_attribute(&self) -> Option<String> {
        if self.style.is_empty() {
            return None;
        }
        let declarations: Vec<String> = self
            .style
            .iter()
            .map(|(property, value)| format!("{}: {}", css_property_name(property), value))
            .collect();
        Some(declarations.join("; "))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if let Some(class_name) = self.class_name.as_deref().filter(|c| !c.is_empty()) {
            f.write_str(" class=\"")?;
            write_escaped(f, class_name)?;
            f.write_str("\"")?;
        }
        if let Some(style) = self.style_attribute() {
            f.write_str(" style=\"")?;
            write_escaped(f, &style)?;
            f.write_str("\"")?;
        }
        f.write_str(">")?;
        write_escaped(f, &self.text)?;
        write!(f, "</{}>", self.tag)
    }
}

impl Copyright {
    /// Render the notice for the year reported by `clock`.
    pub fn render_at<C: Clock + ?Sized>(&self, clock: &C, opts: &RenderOptions) -> Element {
        Element::new(self.text_at(clock), opts)
    }

    /// Render the notice for the current year.
    pub fn render(&self, opts: &RenderOptions) -> Element {
        self.render_at(&SystemClock, opts)
    }
}

fn element_tag(tag: &str) -> &str {
    let mut chars = tag.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        tag
    } else {
        DEFAULT_TAG
    }
}

/// Convert a camelCase property name to its CSS form. Custom properties
/// (`--brand-color`) and names that are already hyphenated are left alone.
/// The `ms` vendor prefix gets its leading hyphen (`msTransition` is
/// `-ms-transition`).
fn css_property_name(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_string();
    }
    let mut name = String::with_capacity(property.len() + 4);
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            name.push('-');
            name.push(ch.to_ascii_lowercase());
        } else {
            name.push(ch);
        }
    }
    if name.starts_with("ms-") {
        name.insert(0, '-');
    }
    name
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for ch in text.chars() {
        match ch {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            '\'' => f.write_str("&#39;")?,
            _ => f.write_char(ch)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_property_name() {
        assert_eq!(css_property_name("fontSize"), "font-size");
        assert_eq!(css_property_name("color"), "color");
        assert_eq!(css_property_name("font-size"), "font-size");
        assert_eq!(css_property_name("--brandColor"), "--brandColor");
    }

    #[test]
    fn test_css_ms_vendor_prefix() {
        assert_eq!(css_property_name("msTransition"), "-ms-transition");
        assert_eq!(css_property_name("WebkitTransition"), "-webkit-transition");
        assert_eq!(css_property_name("msx"), "msx");
    }

    #[test]
    fn test_element_tag() {
        assert_eq!(element_tag("footer"), "footer");
        assert_eq!(element_tag("h1"), "h1");
        assert_eq!(element_tag("my-notice"), "my-notice");
        assert_eq!(element_tag(""), DEFAULT_TAG);
        assert_eq!(element_tag("1p"), DEFAULT_TAG);
        assert_eq!(element_tag("a onclick=x"), DEFAULT_TAG);
        assert_eq!(element_tag("div>"), DEFAULT_TAG);
    }

    #[test]
    fn test_empty_class_is_omitted() {
        let element = Element::new("x", &RenderOptions::new().with_class(""));
        assert_eq!(element.to_string(), "<span>x</span>");
    }
}
