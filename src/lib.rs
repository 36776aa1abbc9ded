//! copyfmt - Copyright notice formatting
//!
//! This crate builds copyright notices such as `© 2020-2026 ACME Corp` from an
//! owner, an optional year range and either a preset [`Format`] or a custom
//! template using the `{symbol}`, `{year}` and `{owner}` placeholders.
//!
//! ```
//! use copyfmt::{Copyright, CopyrightOptions, FixedClock, Format};
//!
//! let notice = Copyright::new(CopyrightOptions::new("ACME Corp").with_format(Format::Full));
//! assert_eq!(
//!     notice.text_at(&FixedClock::in_year(2026)),
//!     "Copyright © 2026 ACME Corp. All rights reserved."
//! );
//! ```

pub mod ast;
pub mod clock;
pub mod error;
pub mod format;
pub mod options;
pub mod parser;
pub mod render;

mod formatter;

pub use ast::{Placeholder, Template, TemplatePart};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::ParseError;
pub use format::{Format, FORMAT_TEMPLATES};
pub use formatter::{Copyright, YearToken, SYMBOL};
pub use options::CopyrightOptions;
pub use render::{Element, RenderOptions};

/// Minimal notice for `owner` in the current year, e.g. `© 2026 ACME Corp`.
pub fn notice(owner: &str) -> String {
    Copyright::new(CopyrightOptions::new(owner)).text()
}
