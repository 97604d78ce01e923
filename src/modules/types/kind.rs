//! Semantic kinds of readable values

use serde::{Deserialize, Serialize};
use std::fmt;

/// The semantic kind a raw value is converted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// `bool`
    Boolean,
    /// `char`
    Character,
    /// Any fixed-width signed or unsigned integer
    Integer,
    /// `f32` or `f64`
    Float,
    /// `String`
    String,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Boolean => write!(f, "boolean"),
            ValueKind::Character => write!(f, "character"),
            ValueKind::Integer => write!(f, "integer"),
            ValueKind::Float => write!(f, "float"),
            ValueKind::String => write!(f, "string"),
        }
    }
}

impl ValueKind {
    /// Returns all supported kinds
    pub fn all() -> &'static [ValueKind] {
        &[
            ValueKind::Boolean,
            ValueKind::Character,
            ValueKind::Integer,
            ValueKind::Float,
            ValueKind::String,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(ValueKind::Boolean.to_string(), "boolean");
        assert_eq!(ValueKind::Character.to_string(), "character");
        assert_eq!(ValueKind::Integer.to_string(), "integer");
        assert_eq!(ValueKind::Float.to_string(), "float");
        assert_eq!(ValueKind::String.to_string(), "string");
    }

    #[test]
    fn test_kind_all() {
        assert_eq!(ValueKind::all().len(), 5);
        assert!(ValueKind::all().contains(&ValueKind::Character));
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&ValueKind::Character).unwrap();
        assert_eq!(json, "\"character\"");

        let kind: ValueKind = serde_json::from_str("\"float\"").unwrap();
        assert_eq!(kind, ValueKind::Float);
    }
}
