//! Typed errors for values parsed from text.
//!
//! Defined in core so callers can classify bad field values without
//! string matching.

use thiserror::Error;

/// A field value that does not match any known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidField {
    /// Not one of the four scored categories.
    #[error("unknown category: {0}")]
    Category(String),

    /// Not one of the answer letters A-E.
    #[error("unknown answer choice: {0}")]
    Choice(String),

    /// Not a supported locale code.
    #[error("unknown locale: {0}")]
    Locale(String),
}
