//! Error types for the style engine.

use thiserror::Error;

/// Errors raised when resolving styles or building a registry.
///
/// Transforming text never fails once a style has been resolved; every
/// failure here happens before the first character is mapped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The requested style id is not in the registry.
    #[error("unknown style '{id}'")]
    UnknownStyle { id: String },

    /// Two definitions in one catalog share an id.
    #[error("duplicate style id '{id}'")]
    DuplicateStyle { id: String },

    /// An offset-block override is keyed on a character outside `A-Z`, `a-z`, `0-9`.
    #[error("style '{style}' overrides {key:?}, which is not an ASCII letter or digit")]
    InvalidOverride { style: String, key: char },

    /// A lookup table is not sorted by key, or repeats a key.
    #[error("lookup table of style '{style}' is not strictly sorted by key")]
    UnsortedLookup { style: String },
}

impl StyleError {
    pub(crate) fn unknown(id: impl Into<String>) -> Self {
        StyleError::UnknownStyle { id: id.into() }
    }
}

/// Result type for style operations.
pub type Result<T> = std::result::Result<T, StyleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_style_display() {
        let err = StyleError::unknown("no-such-id");
        assert_eq!(err.to_string(), "unknown style 'no-such-id'");
    }

    #[test]
    fn test_invalid_override_display() {
        let err = StyleError::InvalidOverride {
            style: "broken".to_string(),
            key: '!',
        };
        let msg = err.to_string();
        assert!(msg.contains("broken"));
        assert!(msg.contains("'!'"));
    }
}
