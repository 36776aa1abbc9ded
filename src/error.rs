//! Error types.

use thiserror::Error;

/// Errors that can occur when parsing a format name from text.
///
/// Formatting itself never fails; this only surfaces when a [`Format`](crate::Format)
/// is read from a string such as a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown format '{name}' (expected one of: minimal, standard, full, legal)")]
    UnknownFormat { name: String },
}
