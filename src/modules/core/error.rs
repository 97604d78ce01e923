//! Error types for iniread

use iniread_types::ValueKind;
use thiserror::Error;

/// Error reported by the diagnostic paths.
///
/// The default-returning accessors never surface it.
#[derive(Error, Debug)]
pub enum IniError {
    /// The text source could not be read
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// No section with this name
    #[error("Section not found: [{0}]")]
    SectionNotFound(String),

    /// The section exists but has no such key
    #[error("Key not found: [{section}] {key}")]
    KeyNotFound { section: String, key: String },

    /// The key exists but its raw value does not convert
    #[error("Invalid value for [{section}] {key}: expected {expected}, found '{raw}'")]
    InvalidValue {
        section: String,
        key: String,
        expected: ValueKind,
        raw: String,
    },
}

impl IniError {
    /// Whether the error means the value is absent, as opposed to malformed or unreadable
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            IniError::SectionNotFound(_) | IniError::KeyNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IniError::InvalidValue {
            section: "server".to_string(),
            key: "port".to_string(),
            expected: ValueKind::Integer,
            raw: "80x".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for [server] port: expected integer, found '80x'"
        );
        assert!(!err.is_missing());

        let err = IniError::KeyNotFound {
            section: String::new(),
            key: "name".to_string(),
        };
        assert_eq!(err.to_string(), "Key not found: [] name");
        assert!(err.is_missing());
    }
}
